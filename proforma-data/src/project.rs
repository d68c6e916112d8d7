//! A property loaded from its three files: configuration, historical actuals
//! and forecast inputs.

use std::path::Path;

use proforma_core::actuals::HistoricalActuals;
use proforma_core::calculations::{OperatingStatement, ProjectionContext};
use proforma_core::inputs::LineItemStore;
use proforma_core::models::{PropertyAssumptions, Timeline, TimelineError};
use thiserror::Error;
use tracing::{debug, info};

use crate::actuals_loader::{self, ActualsLoaderError};
use crate::config::{ConfigError, PropertyConfig};
use crate::inputs_loader::{self, InputsLoaderError};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Actuals(#[from] ActualsLoaderError),

    #[error(transparent)]
    Inputs(#[from] InputsLoaderError),
}

pub struct Project {
    pub config: PropertyConfig,
    pub assumptions: PropertyAssumptions,
    pub actuals: HistoricalActuals,
    pub store: LineItemStore,
}

impl Project {
    /// Builds a project from file contents.
    pub fn from_strs(
        config_toml: &str,
        actuals_csv: &str,
        inputs_csv: &str,
    ) -> Result<Self, ProjectError> {
        let config = PropertyConfig::from_toml_str(config_toml)?;
        Self::assemble(
            config,
            |timeline| actuals_loader::load_from_str(actuals_csv, timeline),
            |store| inputs_loader::apply_from_str(inputs_csv, store),
        )
    }

    pub fn from_files(
        config_path: &Path,
        actuals_path: &Path,
        inputs_path: &Path,
    ) -> Result<Self, ProjectError> {
        debug!(
            config = %config_path.display(),
            actuals = %actuals_path.display(),
            inputs = %inputs_path.display(),
            "reading project files"
        );
        let config = PropertyConfig::from_file(config_path)?;
        Self::assemble(
            config,
            |timeline| actuals_loader::load_from_file(actuals_path, timeline),
            |store| inputs_loader::apply_from_file(inputs_path, store),
        )
    }

    /// The `[forecast]` switches are applied before the inputs, so input rows
    /// without a method column land in the configured method's series.
    fn assemble(
        config: PropertyConfig,
        load_actuals: impl FnOnce(&Timeline) -> Result<HistoricalActuals, ActualsLoaderError>,
        apply_inputs: impl FnOnce(&mut LineItemStore) -> Result<usize, InputsLoaderError>,
    ) -> Result<Self, ProjectError> {
        let timeline = config.timeline()?;
        let assumptions = config.assumptions()?;
        let actuals = load_actuals(&timeline)?;

        let mut store = LineItemStore::new(&timeline);
        config.forecast.apply(&mut store)?;
        apply_inputs(&mut store)?;

        info!(
            property = %config.property_name,
            historical = timeline.historical_years().len(),
            forecast = timeline.forecast_years().len(),
            "project loaded"
        );
        Ok(Self {
            config,
            assumptions,
            actuals,
            store,
        })
    }

    pub fn context(&self) -> ProjectionContext<'_> {
        ProjectionContext::new(&self.store, &self.actuals, &self.assumptions)
    }

    pub fn statement(&self) -> Result<OperatingStatement, TimelineError> {
        OperatingStatement::build(self.context())
    }
}
