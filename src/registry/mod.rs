//! Charting configuration registry.
//!
//! [`Charting`] is the explicit configuration object collaborators share:
//! it owns the model-to-coordinate mapper table, per-type style builders,
//! the series palette, animation options, and the host-toolkit provider
//! slots. Construct one during application start-up and pass it (or an
//! `Arc` of it) to every subsystem that resolves plot configuration.
//!
//! Registration is expected to happen during a single-threaded
//! configuration phase; afterwards the registry can be shared freely for
//! concurrent read-only lookups, since every stored function is
//! `Send + Sync` and handles are cheap `Arc` clones.

mod defaults;
mod mapper;
mod provider;
mod style;

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

pub use mapper::ModelMapper;
pub use provider::{DataFactory, UiProvider};
use rustc_hash::FxHashMap;

use crate::animation::AnimationBuilder;
use crate::options::{AnimationOptions, ChartOptions, Color, Palette};

/// Key for one mapper registration: (model type, coordinate type).
type TypePair = (TypeId, TypeId);

/// Charting configuration registry.
///
/// Lookup tables are keyed by runtime type so heterogeneous model types
/// can register against heterogeneous coordinate systems; re-registration
/// overwrites (last write wins) and entries live as long as the registry.
pub struct Charting {
    /// Mapper table keyed by (model, coordinate) type pair.
    mappers: FxHashMap<TypePair, Box<dyn Any + Send + Sync>>,
    /// Style-builder table keyed by the styled type.
    builders: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
    /// Series color palette.
    palette: Palette,
    /// Animation options handed to frame builders.
    animation: AnimationOptions,
    /// Host-toolkit resource provider slot.
    ui_provider: Option<Arc<dyn UiProvider>>,
    /// Chart point factory slot.
    data_factory: Option<Arc<dyn DataFactory>>,
}

impl Charting {
    /// Create an empty registry: no mappers, no style builders, an empty
    /// palette, default animation options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mappers: FxHashMap::default(),
            builders: FxHashMap::default(),
            palette: Palette::new(),
            animation: AnimationOptions::default(),
            ui_provider: None,
            data_factory: None,
        }
    }

    /// Build a registry through a configuration closure.
    ///
    /// The closure receives a fresh registry; this is the start-up entry
    /// point for applications that configure everything in one place.
    #[must_use]
    pub fn configure(options: impl FnOnce(&mut Self)) -> Self {
        let mut charting = Self::new();
        options(&mut charting);
        charting
    }

    /// Replace the series palette.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> &mut Self {
        self.palette = Palette { colors };
        self
    }

    /// The series palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the animation options.
    pub fn set_animation(&mut self, options: AnimationOptions) -> &mut Self {
        self.animation = options;
        self
    }

    /// The active animation options.
    #[must_use]
    pub fn animation(&self) -> &AnimationOptions {
        &self.animation
    }

    /// A frame builder honoring the active animation options.
    #[must_use]
    pub fn animation_builder<P>(&self) -> AnimationBuilder<P> {
        AnimationBuilder::from_options(&self.animation)
    }

    /// Push a loaded preset (palette + animation options) into the
    /// registry.
    pub fn apply_options(&mut self, options: &ChartOptions) -> &mut Self {
        log::info!(
            "applying chart options: {} palette colors, animation {}",
            options.palette.len(),
            if options.animation.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        self.palette = options.palette.clone();
        self.animation = options.animation.clone();
        self
    }
}

impl Default for Charting {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Charting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Charting")
            .field("mappers", &self.mappers.len())
            .field("builders", &self.builders.len())
            .field("palette", &self.palette.len())
            .field("animation", &self.animation)
            .field("ui_provider", &self.ui_provider)
            .field("data_factory", &self.data_factory)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let charting = Charting::new();
        assert!(charting.palette().is_empty());
        assert!(charting.ui_provider().is_none());
        assert!(charting.data_factory().is_none());
    }

    #[test]
    fn configure_runs_closure_on_fresh_registry() {
        let charting = Charting::configure(|c| {
            let _ = c.set_colors(vec![Color::from_rgb(1, 2, 3)]);
        });
        assert_eq!(charting.palette().len(), 1);
    }

    #[test]
    fn apply_options_replaces_palette_and_animation() {
        let options = ChartOptions {
            animation: AnimationOptions {
                enabled: false,
                ..AnimationOptions::default()
            },
            palette: Palette::material_design(),
        };

        let mut charting = Charting::new();
        let _ = charting.apply_options(&options);

        assert_eq!(charting.palette().len(), 15);
        assert!(!charting.animation().enabled);
    }

    #[test]
    fn animation_builder_honors_registry_options() {
        let mut charting = Charting::new();
        let _ = charting.set_animation(AnimationOptions {
            enabled: false,
            ..AnimationOptions::default()
        });

        let builder: AnimationBuilder<&str> = charting.animation_builder();
        let b = builder.bounce("height", 10.0, None);
        assert_eq!(b.tracks()[0].frames.len(), 1);
    }
}
