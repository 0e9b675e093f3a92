use anyhow::Result;
use common::{format_membership, Translator};
use console::style;
use domain::LinguisticVariable;

use super::find_variable;

pub fn run(
    variables: &[LinguisticVariable],
    translator: &Translator,
    title: &str,
) -> Result<()> {
    let variable = find_variable(variables, title)?;

    println!(
        "{}",
        style(translator.translate(variable.title())).cyan().bold()
    );
    for row in rows(variable) {
        println!("{row}");
    }
    Ok(())
}

/// Aggregated table rows in ascending point order
fn rows(variable: &LinguisticVariable) -> Vec<String> {
    variable
        .table()
        .iter()
        .map(|(point, value)| format!("{point:>8}  {}", format_membership(*value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppConfig;

    #[test]
    fn test_rows_are_sorted_and_formatted() {
        let variables = AppConfig::default().build_variables().unwrap();
        let water = find_variable(&variables, "Water Temperature").unwrap();

        let rows = rows(water);
        // Sampled support runs from Low's 39 to High's 105
        assert_eq!(rows.first().unwrap().trim(), "39  0");
        assert_eq!(rows.last().unwrap().trim(), "105  1");
        assert_eq!(rows.len(), 105 - 39 + 1);
    }
}
