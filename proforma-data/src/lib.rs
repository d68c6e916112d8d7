//! File-facing side of the forecast: property configuration, CSV loaders
//! and statement rendering.

pub mod actuals_loader;
pub mod config;
pub mod inputs_loader;
pub mod project;
pub mod report;

pub use actuals_loader::ActualsLoaderError;
pub use config::{ConfigError, ForecastSettings, PropertyConfig};
pub use inputs_loader::InputsLoaderError;
pub use project::{Project, ProjectError};
pub use report::{ReportOptions, render_json, render_table};
