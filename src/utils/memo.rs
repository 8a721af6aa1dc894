use log::trace;
use std::fmt;
use std::sync::Arc;

/// Single entry cache for a derived value.
///
/// The value is recomputed only when the key differs from the key of the
/// previous call; otherwise the stored value is cloned out. Storing `Arc`s
/// keeps the returned value pointer-identical between hits.
pub struct Memo<K, V> {
    name: &'static str,
    entry: Option<(K, V)>,
}

impl<K, V> Memo<K, V>
where
    K: PartialEq,
    V: Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self { name, entry: None }
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = &self.entry {
            if *cached_key == key {
                trace!("{}: reusing memoized value", self.name);
                return value.clone();
            }
        }
        let value = compute();
        self.entry = Some((key, value.clone()));
        value
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("name", &self.name)
            .field("cached", &self.entry.is_some())
            .finish()
    }
}

/// Compares the wrapped `Arc` by pointer instead of by value.
pub struct ByAddress<T>(pub Arc<T>);

impl<T> ByAddress<T> {
    pub fn new(value: &Arc<T>) -> Self {
        Self(Arc::clone(value))
    }
}

impl<T> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for ByAddress<T> {}

impl<T> Clone for ByAddress<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
