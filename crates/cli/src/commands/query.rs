use anyhow::{bail, Result};
use common::{format_membership, Translator};
use console::style;
use domain::LinguisticVariable;

use super::find_variable;

pub fn run(
    variables: &[LinguisticVariable],
    translator: &Translator,
    title: &str,
    point: &str,
) -> Result<()> {
    let variable = find_variable(variables, title)?;

    let value = point
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|point| variable.lookup(point as f64));

    match value {
        Some(value) => {
            println!(
                "{}: {}",
                style(translator.translate(variable.title())).cyan(),
                style(format_membership(value)).green().bold()
            );
            Ok(())
        }
        None => bail!(
            "No membership value recorded for '{point}' in {}",
            variable.title()
        ),
    }
}
