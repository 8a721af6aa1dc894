use inflector::Inflector;

/// Human readable label for a column name.
///
/// Names written entirely in upper case are lowered first so `TOTAL_SALES`
/// reads as `Total sales` rather than being split letter by letter.
pub fn friendly_name(text: &str) -> String {
    let normalised = if text == text.to_uppercase() {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    normalised.to_sentence_case()
}

#[cfg(test)]
mod tests {
    use super::friendly_name;
    use rstest::rstest;

    #[rstest]
    #[case::snake_case("created_at", "Created at")]
    #[case::single_word("amount", "Amount")]
    #[case::upper_case("TOTAL_SALES", "Total sales")]
    #[case::camel_case("orderId", "Order id")]
    #[case::kebab_case("first-name", "First name")]
    fn test_friendly_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(friendly_name(input), expected);
    }
}
