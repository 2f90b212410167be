//! Default style builders.

use std::any::{type_name, TypeId};
use std::sync::Arc;

use super::Charting;

/// Stored form of a style builder for `T`.
type StyleFn<T> = Arc<dyn Fn(&mut T) + Send + Sync>;

impl Charting {
    /// Register the default style builder for a chart entity type.
    ///
    /// The builder mutates a freshly constructed instance in place to
    /// apply default visual properties. At most one builder per type;
    /// re-registration overwrites.
    pub fn set_default<T: 'static>(
        &mut self,
        builder: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> &mut Self {
        let builder: StyleFn<T> = Arc::new(builder);
        log::debug!("registered style builder for {}", type_name::<T>());
        let _ = self.builders.insert(TypeId::of::<T>(), Box::new(builder));
        self
    }

    /// Apply the registered default style to a chart entity.
    ///
    /// Chart entities call this right after construction, before first
    /// render. A type with no registered builder is left untouched; a
    /// missing style builder means the engine defaults apply, not an
    /// error.
    pub fn apply_defaults<T: 'static>(&self, instance: &mut T) {
        let Some(builder) = self
            .builders
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<StyleFn<T>>())
        else {
            return;
        };
        builder(instance);
    }
}
