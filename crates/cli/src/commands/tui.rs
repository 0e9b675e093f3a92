use anyhow::Result;
use common::Translator;
use domain::LinguisticVariable;
use ui::{AppState, TuiApp};

pub fn run(
    variables: Vec<LinguisticVariable>,
    translator: Translator,
    query_variable: &str,
) -> Result<()> {
    let state = AppState::new(variables, translator, query_variable);
    let mut app = TuiApp::new(state)?;
    app.run()?;
    Ok(())
}
