//! Host-toolkit provider slots.

use std::fmt;
use std::sync::Arc;

use super::Charting;

/// Supplies toolkit-side visual resources for chart entities.
///
/// Implementations live in the host-toolkit integration crates; the
/// registry only stores the active instance for the rendering pipeline to
/// read.
pub trait UiProvider: fmt::Debug + Send + Sync {}

/// Constructs chart points from plotted models.
///
/// Implementations live alongside the series engine; the registry only
/// stores the active instance for the point-construction pipeline to read.
pub trait DataFactory: fmt::Debug + Send + Sync {}

impl Charting {
    /// Install the UI provider. Single slot; the last assignment wins.
    pub fn set_ui_provider(
        &mut self,
        provider: Arc<dyn UiProvider>,
    ) -> &mut Self {
        self.ui_provider = Some(provider);
        self
    }

    /// The active UI provider, if one is installed.
    #[must_use]
    pub fn ui_provider(&self) -> Option<Arc<dyn UiProvider>> {
        self.ui_provider.clone()
    }

    /// Install the data factory. Single slot; the last assignment wins.
    pub fn set_data_factory(
        &mut self,
        factory: Arc<dyn DataFactory>,
    ) -> &mut Self {
        self.data_factory = Some(factory);
        self
    }

    /// The active data factory, if one is installed.
    #[must_use]
    pub fn data_factory(&self) -> Option<Arc<dyn DataFactory>> {
        self.data_factory.clone()
    }
}
