//! Model-to-coordinate mapper registration and lookup.

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use super::Charting;
use crate::coordinates::{Coordinate, PointCoordinate};
use crate::error::ChartaError;

/// Maps one model-domain data point to a chart coordinate.
///
/// A mapper is a shared, immutable function handle: the registry owns the
/// registration, series cache clones for their lifetime, and any number of
/// concurrent plot operations may call [`map`](Self::map).
pub struct ModelMapper<M, C> {
    map: Arc<dyn Fn(&M, usize) -> C + Send + Sync>,
}

impl<M, C> ModelMapper<M, C> {
    /// Wrap a mapping function.
    #[must_use]
    pub fn new(map: impl Fn(&M, usize) -> C + Send + Sync + 'static) -> Self {
        Self { map: Arc::new(map) }
    }

    /// Map a model instance at its positional index in the series.
    #[must_use]
    pub fn map(&self, model: &M, index: usize) -> C {
        (self.map)(model, index)
    }
}

// Manual impl: deriving would bound M and C themselves.
impl<M, C> Clone for ModelMapper<M, C> {
    fn clone(&self) -> Self {
        Self {
            map: Arc::clone(&self.map),
        }
    }
}

impl<M, C> fmt::Debug for ModelMapper<M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelMapper")
            .field("model", &type_name::<M>())
            .field("coordinate", &type_name::<C>())
            .finish_non_exhaustive()
    }
}

impl Charting {
    /// Register how a model type plots into a coordinate system.
    ///
    /// Overwrites any previous registration for the same pair and returns
    /// the typed handle so callers can use it directly.
    pub fn plot_as<M, C>(
        &mut self,
        map: impl Fn(&M, usize) -> C + Send + Sync + 'static,
    ) -> ModelMapper<M, C>
    where
        M: 'static,
        C: Coordinate,
    {
        let key = (TypeId::of::<M>(), TypeId::of::<C>());
        let mapper = ModelMapper::new(map);
        log::debug!(
            "registered mapper: {} -> {}",
            type_name::<M>(),
            type_name::<C>()
        );
        let _ = self.mappers.insert(key, Box::new(mapper.clone()));
        mapper
    }

    /// Register how a model type plots as a plain 2-D point.
    ///
    /// Shorthand for [`plot_as`](Self::plot_as) with [`PointCoordinate`].
    pub fn learn_type<M>(
        &mut self,
        map: impl Fn(&M, usize) -> PointCoordinate + Send + Sync + 'static,
    ) -> ModelMapper<M, PointCoordinate>
    where
        M: 'static,
    {
        self.plot_as(map)
    }

    /// The mapper registered for the (model, coordinate) pair.
    ///
    /// The plotting pipeline resolves this once per series configuration
    /// and caches the returned handle.
    ///
    /// # Errors
    ///
    /// [`ChartaError::UnmappedPlotType`] (code 100) when no mapper is
    /// registered for the exact pair.
    pub fn mapper_for<M, C>(&self) -> Result<ModelMapper<M, C>, ChartaError>
    where
        M: 'static,
        C: Coordinate,
    {
        let key = (TypeId::of::<M>(), TypeId::of::<C>());
        self.mappers
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<ModelMapper<M, C>>())
            .cloned()
            .ok_or_else(|| ChartaError::UnmappedPlotType {
                model: type_name::<M>(),
                coordinate: type_name::<C>(),
            })
    }
}
