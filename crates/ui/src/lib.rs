//! Terminal front-end: chart panels for each linguistic variable and an
//! interactive membership query box.

pub mod app;
pub mod components;
pub mod events;
pub mod state;

pub use app::TuiApp;
pub use state::{AppState, QueryOutcome};
