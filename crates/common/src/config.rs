//! Variable definitions consumed by the fuzzy core
//!
//! The built-in default is the heating-system configuration; a JSON file
//! with the same shape can replace it.

use std::fs;
use std::path::Path;

use domain::{Breakpoints, LinguisticVariable, MembershipFunction};
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// One trapezoid of a linguistic variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub label: String,
    pub breakpoints: [f64; 4],
}

/// One linguistic variable: title, domain bounds, trapezoids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableConfig {
    pub title: String,
    pub start: f64,
    pub end: f64,
    pub functions: Vec<FunctionConfig>,
}

/// Full application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub variables: Vec<VariableConfig>,
    /// Title of the variable the interactive query consults
    #[serde(default = "default_query_variable")]
    pub query_variable: String,
}

fn default_query_variable() -> String {
    "Water Temperature".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        let variable = |title: &str, start: f64, end: f64, functions: &[(&str, [f64; 4])]| {
            VariableConfig {
                title: title.to_string(),
                start,
                end,
                functions: functions
                    .iter()
                    .map(|(label, breakpoints)| FunctionConfig {
                        label: label.to_string(),
                        breakpoints: *breakpoints,
                    })
                    .collect(),
            }
        };

        Self {
            variables: vec![
                variable(
                    "Square Footage",
                    200.0,
                    1000.0,
                    &[
                        ("Low square", [199.0, 200.0, 450.0, 510.0]),
                        ("Medium square", [450.0, 480.0, 720.0, 780.0]),
                        ("Big square", [710.0, 750.0, 1000.0, 1001.0]),
                    ],
                ),
                variable(
                    "Street Temperature",
                    -30.0,
                    30.0,
                    &[
                        ("Low temperature", [-31.0, -30.0, 2.0, 6.0]),
                        ("Medium temperature", [1.0, 5.0, 18.0, 21.0]),
                        ("High temperature", [20.0, 23.0, 30.0, 32.0]),
                    ],
                ),
                variable(
                    "Water Temperature",
                    40.0,
                    105.0,
                    &[
                        ("Low temperature", [39.0, 40.0, 57.0, 65.0]),
                        ("Medium temperature", [55.0, 60.0, 79.0, 83.0]),
                        ("High temperature", [78.0, 83.0, 105.0, 106.0]),
                    ],
                ),
            ],
            query_variable: default_query_variable(),
        }
    }
}

impl AppConfig {
    /// Load a configuration file (JSON)
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build and aggregate the linguistic variables this config describes.
    /// Malformed breakpoints or domain bounds are rejected here, before
    /// any evaluation happens.
    pub fn build_variables(&self) -> ConfigResult<Vec<LinguisticVariable>> {
        let mut variables = Vec::with_capacity(self.variables.len());

        for config in &self.variables {
            let mut variable = LinguisticVariable::new(&config.title, config.start, config.end)?;
            for function in &config.functions {
                variable.add_function(MembershipFunction::new(
                    &function.label,
                    Breakpoints::try_from(function.breakpoints)?,
                ));
            }
            variable.aggregate();
            variables.push(variable);
        }

        Ok(variables)
    }
}
