use crate::chart::{
    assemble_chart_version, ChartConfigSeed, ChartConfigValidator, ChartType, ChartTypeConfig,
    CreateSavedChartSeed, CreateSavedChartVersion, VisualizationState,
};
use crate::config::Config;
use crate::data_source::QueryData;
use crate::results::{reshape_results, ApiQueryResults};
use crate::semantic_model::{
    classify_fields, synthesize_explore, ClassifiedFields, Explore, Field, FieldId,
};
use crate::utils::memo::{ByAddress, Memo};
use indexmap::IndexMap;
use std::sync::Arc;

type PayloadKey = (
    Option<ByAddress<ApiQueryResults>>,
    ByAddress<ClassifiedFields>,
    String,
    ChartType,
    Option<ChartTypeConfig>,
    Option<Vec<String>>,
);

/// Identifies the column metadata of a snapshot. The same snapshot is equal
/// without looking inside; different snapshots are equal only when they
/// declare the same columns in the same order.
struct ColumnsKey(Option<Arc<QueryData>>);

impl PartialEq for ColumnsKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.fields.iter().eq(b.fields.iter()),
            _ => false,
        }
    }
}

/// Everything the rendering and persistence layers read for one snapshot.
///
/// Derived values are shared `Arc`s; as long as their inputs are unchanged
/// the same allocation is handed out again.
#[derive(Debug, Clone)]
pub struct VisualizationOutputs {
    pub initial_chart_config: Option<ChartConfigSeed>,
    pub initial_pivot_dimensions: Option<Vec<String>>,
    pub explore: Arc<Explore>,
    pub fields_map: Arc<IndexMap<FieldId, Field>>,
    pub results_data: Option<Arc<ApiQueryResults>>,
    pub chart_type: ChartType,
    pub column_order: Arc<Vec<FieldId>>,
    pub create_saved_chart: Option<Arc<CreateSavedChartVersion>>,
}

/// Turns ad-hoc query results into an explore, chart results and a
/// saveable chart, recomputing each stage only when its inputs change.
pub struct SqlQueryVisualization<V> {
    config: Config,
    validator: V,
    seed: Option<CreateSavedChartSeed>,
    state: VisualizationState,
    fields: Memo<ColumnsKey, Arc<ClassifiedFields>>,
    explore: Memo<ByAddress<ClassifiedFields>, Arc<Explore>>,
    fields_map: Memo<ByAddress<ClassifiedFields>, Arc<IndexMap<FieldId, Field>>>,
    column_order: Memo<ByAddress<ClassifiedFields>, Arc<Vec<FieldId>>>,
    results: Memo<
        (Option<ByAddress<QueryData>>, ByAddress<ClassifiedFields>),
        Option<Arc<ApiQueryResults>>,
    >,
    payload: Memo<PayloadKey, Option<Arc<CreateSavedChartVersion>>>,
}

impl<V> SqlQueryVisualization<V>
where
    V: ChartConfigValidator,
{
    pub fn new(config: Config, validator: V, seed: Option<CreateSavedChartSeed>) -> Self {
        let state = VisualizationState::from_seed(seed.as_ref());
        Self {
            config,
            validator,
            seed,
            state,
            fields: Memo::new("fields"),
            explore: Memo::new("explore"),
            fields_map: Memo::new("fields_map"),
            column_order: Memo::new("column_order"),
            results: Memo::new("results"),
            payload: Memo::new("payload"),
        }
    }

    pub fn state(&self) -> &VisualizationState {
        &self.state
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.state.set_chart_type(chart_type);
    }

    pub fn set_chart_config(&mut self, chart_config: Option<ChartTypeConfig>) {
        self.state.set_chart_config(chart_config);
    }

    pub fn set_pivot_fields(&mut self, pivot_fields: Option<Vec<String>>) {
        self.state.set_pivot_fields(pivot_fields);
    }

    /// Runs the pipeline for the current data snapshot.
    ///
    /// `None` data means the query has not produced anything yet: the
    /// explore is empty and there are no results or payload.
    pub fn outputs(&mut self, data: Option<&Arc<QueryData>>) -> VisualizationOutputs {
        let table_name = self.config.table_name.as_str();
        let target_database = self.config.target_database;

        let fields = self
            .fields
            .get_or_compute(ColumnsKey(data.cloned()), || {
                let classified = match data {
                    Some(data) => classify_fields(table_name, &data.fields),
                    None => ClassifiedFields::default(),
                };
                Arc::new(classified)
            });

        let explore = self
            .explore
            .get_or_compute(ByAddress::new(&fields), || {
                Arc::new(synthesize_explore(table_name, target_database, &fields))
            });

        let fields_map = self
            .fields_map
            .get_or_compute(ByAddress::new(&fields), || Arc::new(fields.fields_map()));

        let column_order = self
            .column_order
            .get_or_compute(ByAddress::new(&fields), || Arc::new(fields.column_order()));

        let results = self.results.get_or_compute(
            (data.map(ByAddress::new), ByAddress::new(&fields)),
            || {
                let rows = data.and_then(|data| data.rows.as_deref());
                reshape_results(table_name, rows, fields.dimension_keys(), fields.metric_keys())
                    .map(Arc::new)
            },
        );

        let validator = &self.validator;
        let state = &self.state;
        let payload_key = (
            results.as_ref().map(ByAddress::new),
            ByAddress::new(&fields),
            explore.name.clone(),
            state.chart_type(),
            state.chart_config().cloned(),
            state.pivot_fields().map(<[String]>::to_vec),
        );
        let create_saved_chart = self.payload.get_or_compute(payload_key, || {
            assemble_chart_version(
                &explore.name,
                results.as_deref(),
                state.chart_type(),
                state.chart_config(),
                state.pivot_fields(),
                &column_order,
                validator,
            )
            .map(Arc::new)
        });

        VisualizationOutputs {
            initial_chart_config: self
                .seed
                .as_ref()
                .and_then(|seed| seed.chart_config.clone()),
            initial_pivot_dimensions: self
                .seed
                .as_ref()
                .and_then(|seed| seed.pivot_config.as_ref())
                .map(|pivot| pivot.columns.clone()),
            explore,
            fields_map,
            results_data: results,
            chart_type: self.state.chart_type(),
            column_order,
            create_saved_chart,
        }
    }
}
