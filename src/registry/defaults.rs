//! Start-up default registrations.

use super::Charting;
use crate::coordinates::{PointCoordinate, WeightedCoordinate};
use crate::options::Palette;

/// Registers `(index, value)` point mappers for numeric primitive models.
macro_rules! register_primitives {
    ($charting:expr, $($ty:ty),+ $(,)?) => {$(
        let _ = $charting.plot_as::<$ty, PointCoordinate>(|value, index| {
            PointCoordinate::new(index as f64, *value as f64)
        });
    )+};
}

impl Charting {
    /// Registry pre-configured like a typical application start-up block:
    /// primitive plot types, default plot objects, material palette.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::configure(|c| {
            let _ = c
                .add_primitive_plot_types()
                .add_default_plot_objects()
                .use_material_design_colors();
        })
    }

    /// Register point mappers for numeric primitive models.
    ///
    /// Primitives plot their series index on x and their value on y.
    pub fn add_primitive_plot_types(&mut self) -> &mut Self {
        register_primitives!(self, f32, i16, i32, i64, u16, u32, u64);
        let _ = self.plot_as::<f64, PointCoordinate>(|value, index| {
            PointCoordinate::new(index as f64, *value)
        });
        self
    }

    /// Register mappers for plain plot objects that already carry their
    /// coordinates: `(x, y)` tuples, `[x, y]` arrays, and `(x, y, weight)`
    /// triples for weighted series.
    pub fn add_default_plot_objects(&mut self) -> &mut Self {
        let _ = self.plot_as::<(f64, f64), PointCoordinate>(|pair, _| {
            PointCoordinate::new(pair.0, pair.1)
        });
        let _ = self.plot_as::<[f64; 2], PointCoordinate>(|pair, _| {
            PointCoordinate::new(pair[0], pair[1])
        });
        let _ = self.plot_as::<(f64, f64, f64), WeightedCoordinate>(
            |triple, _| WeightedCoordinate::new(triple.0, triple.1, triple.2),
        );
        self
    }

    /// Install the material design palette.
    pub fn use_material_design_colors(&mut self) -> &mut Self {
        self.palette = Palette::material_design();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_numeric_primitives() {
        let charting = Charting::with_defaults();

        let f64_mapper = charting.mapper_for::<f64, PointCoordinate>().unwrap();
        assert_eq!(f64_mapper.map(&1.5, 2), PointCoordinate::new(2.0, 1.5));

        let i32_mapper = charting.mapper_for::<i32, PointCoordinate>().unwrap();
        assert_eq!(i32_mapper.map(&-4, 0), PointCoordinate::new(0.0, -4.0));

        let u64_mapper = charting.mapper_for::<u64, PointCoordinate>().unwrap();
        assert_eq!(u64_mapper.map(&7, 5), PointCoordinate::new(5.0, 7.0));
    }

    #[test]
    fn defaults_cover_plain_plot_objects() {
        let charting = Charting::with_defaults();

        let pair = charting
            .mapper_for::<(f64, f64), PointCoordinate>()
            .unwrap();
        assert_eq!(pair.map(&(3.0, 4.0), 9), PointCoordinate::new(3.0, 4.0));

        let array = charting
            .mapper_for::<[f64; 2], PointCoordinate>()
            .unwrap();
        assert_eq!(array.map(&[1.0, 2.0], 0), PointCoordinate::new(1.0, 2.0));

        let weighted = charting
            .mapper_for::<(f64, f64, f64), WeightedCoordinate>()
            .unwrap();
        assert_eq!(
            weighted.map(&(1.0, 2.0, 3.0), 0),
            WeightedCoordinate::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn defaults_install_material_palette() {
        let charting = Charting::with_defaults();
        assert_eq!(charting.palette().len(), 15);
    }

    #[test]
    fn fresh_registry_has_no_default_registrations() {
        let charting = Charting::new();
        assert!(charting.mapper_for::<f64, PointCoordinate>().is_err());
    }
}
