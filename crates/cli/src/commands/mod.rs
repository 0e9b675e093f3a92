pub mod query;
pub mod table;
pub mod tui;

use domain::{DomainError, LinguisticVariable};

/// Resolve a variable by its (untranslated) title
pub(crate) fn find_variable<'a>(
    variables: &'a [LinguisticVariable],
    title: &str,
) -> Result<&'a LinguisticVariable, DomainError> {
    variables
        .iter()
        .find(|variable| variable.title() == title)
        .ok_or_else(|| DomainError::VariableNotFound(title.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppConfig;

    #[test]
    fn test_find_variable_by_title() {
        let variables = AppConfig::default().build_variables().unwrap();
        assert!(find_variable(&variables, "Street Temperature").is_ok());

        let error = find_variable(&variables, "Air Pressure").unwrap_err();
        assert_eq!(
            error,
            DomainError::VariableNotFound("Air Pressure".to_string())
        );
    }
}
