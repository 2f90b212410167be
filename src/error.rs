//! Crate-level error types.

use std::fmt;

/// Errors produced by the charta crate.
///
/// Every variant carries a stable numeric code (see [`ChartaError::code`])
/// so host applications can cross-reference the documentation without
/// parsing messages.
#[derive(Debug)]
pub enum ChartaError {
    /// No mapper is registered for a (model, coordinate) type pair.
    ///
    /// Plotting an unconfigured type is a programmer error; it always
    /// surfaces to the caller and is never retried.
    UnmappedPlotType {
        /// Name of the model type the series tried to plot.
        model: &'static str,
        /// Name of the coordinate type the series maps into.
        coordinate: &'static str,
    },
    /// TOML preset parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure while reading or writing a preset file.
    Io(std::io::Error),
}

impl ChartaError {
    /// Stable numeric code identifying the error kind.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::UnmappedPlotType { .. } => 100,
            Self::OptionsParse(_) => 200,
            Self::Io(_) => 201,
        }
    }
}

impl fmt::Display for ChartaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedPlotType { model, coordinate } => write!(
                f,
                "error 100: no mapper registered from '{model}' to \
                 '{coordinate}'; configure the plotted type before \
                 building a series"
            ),
            Self::OptionsParse(msg) => {
                write!(f, "error 200: options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "error 201: I/O error: {e}"),
        }
    }
}

impl std::error::Error for ChartaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChartaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
