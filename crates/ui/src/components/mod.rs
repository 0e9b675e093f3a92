pub mod chart_panel;
pub mod query_input;

pub use chart_panel::ChartPanel;
pub use query_input::QueryInput;
