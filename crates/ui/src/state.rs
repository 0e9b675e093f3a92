use common::{format_membership, Translator};
use domain::LinguisticVariable;

use crate::components::{ChartPanel, QueryInput};

/// Result of evaluating the query box contents
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Nothing typed yet
    Empty,
    /// Unparsable input or a point with no recorded membership value
    NotAvailable,
    Value(f64),
}

pub struct AppState {
    pub panels: Vec<ChartPanel>,
    pub query_input: QueryInput,
    pub should_quit: bool,
    variables: Vec<LinguisticVariable>,
    translator: Translator,
    query_variable: String,
    query_outcome: QueryOutcome,
}

impl AppState {
    /// `query_variable` is the (untranslated) title of the variable the
    /// query box consults
    pub fn new(
        variables: Vec<LinguisticVariable>,
        translator: Translator,
        query_variable: impl Into<String>,
    ) -> Self {
        let panels = variables
            .iter()
            .map(|variable| ChartPanel::new(variable, &translator))
            .collect();

        AppState {
            panels,
            query_input: QueryInput::default(),
            should_quit: false,
            variables,
            translator,
            query_variable: query_variable.into(),
            query_outcome: QueryOutcome::Empty,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn query_outcome(&self) -> &QueryOutcome {
        &self.query_outcome
    }

    /// Re-evaluate the query box; called on submit and on every edit
    pub fn evaluate_query(&mut self) {
        let text = self.query_input.value().trim();

        self.query_outcome = if text.is_empty() {
            QueryOutcome::Empty
        } else {
            match text.parse::<i64>() {
                Ok(point) => match self
                    .query_target()
                    .and_then(|variable| variable.lookup(point as f64))
                {
                    Some(value) => QueryOutcome::Value(value),
                    None => QueryOutcome::NotAvailable,
                },
                Err(_) => QueryOutcome::NotAvailable,
            }
        };
    }

    fn query_target(&self) -> Option<&LinguisticVariable> {
        self.variables
            .iter()
            .find(|variable| variable.title() == self.query_variable)
    }

    /// Text shown in the result label
    pub fn result_text(&self) -> String {
        match &self.query_outcome {
            QueryOutcome::Empty => String::new(),
            QueryOutcome::NotAvailable => self
                .translator
                .translate("Incorrect water temperature value")
                .to_string(),
            QueryOutcome::Value(value) => format_membership(*value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn state() -> AppState {
        let variables = AppConfig::default().build_variables().unwrap();
        AppState::new(variables, Translator::empty(), "Water Temperature")
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state
                .query_input
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        state.evaluate_query();
    }

    #[test]
    fn test_empty_query_yields_empty_outcome() {
        let mut state = state();
        state.evaluate_query();
        assert_eq!(state.query_outcome(), &QueryOutcome::Empty);
        assert_eq!(state.result_text(), "");
    }

    #[test]
    fn test_query_on_plateau() {
        let mut state = state();
        type_text(&mut state, "60");
        assert_eq!(state.query_outcome(), &QueryOutcome::Value(1.0));
        assert_eq!(state.result_text(), "1");
    }

    #[test]
    fn test_query_on_falling_edge() {
        let mut state = state();
        // 63 sits on Low's falling edge and Medium's plateau
        type_text(&mut state, "63");
        assert_eq!(state.query_outcome(), &QueryOutcome::Value(1.0));
    }

    #[test]
    fn test_unparsable_query() {
        let mut state = state();
        type_text(&mut state, "warm");
        assert_eq!(state.query_outcome(), &QueryOutcome::NotAvailable);
        assert_eq!(state.result_text(), "Incorrect water temperature value");
    }

    #[test]
    fn test_query_outside_sampled_support() {
        let mut state = state();
        type_text(&mut state, "200");
        assert_eq!(state.query_outcome(), &QueryOutcome::NotAvailable);
    }

    #[test]
    fn test_backspace_reevaluates_to_empty() {
        let mut state = state();
        type_text(&mut state, "6");
        assert!(matches!(state.query_outcome(), QueryOutcome::NotAvailable));
        state
            .query_input
            .handle_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        state.evaluate_query();
        assert_eq!(state.query_outcome(), &QueryOutcome::Empty);
    }

    #[test]
    fn test_result_message_is_translated() {
        let variables = AppConfig::default().build_variables().unwrap();
        let mut entries = std::collections::HashMap::new();
        entries.insert(
            "Incorrect water temperature value".to_string(),
            "Неверное значение температуры воды".to_string(),
        );
        let mut state = AppState::new(variables, Translator::new(entries), "Water Temperature");
        type_text(&mut state, "nope");
        assert_eq!(state.result_text(), "Неверное значение температуры воды");
    }

    #[test]
    fn test_one_panel_per_variable() {
        let state = state();
        assert_eq!(state.panels.len(), 3);
    }
}
