// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Chart math allowances: index/value casts and exact frame comparisons
// are intentional
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
// Pedantic allowances
#![allow(clippy::doc_markdown)]

//! Charting configuration and animation core for data-visualization
//! front-ends.
//!
//! Charta is the headless half of a charting stack: it resolves how
//! application models plot into chart coordinates, applies default styling
//! to chart entities, owns the series palette, and computes the keyframe
//! sequences a host toolkit's animation engine plays back. Rendering,
//! layout, hit-testing, and playback belong to the host toolkit.
//!
//! # Key entry points
//!
//! - [`registry::Charting`] - the configuration registry (mappers, style
//!   builders, palette, provider slots)
//! - [`animation::AnimationBuilder`] - fluent keyframe construction
//!   (bounce transitions)
//! - [`options::ChartOptions`] - TOML preset support (palette, animation
//!   timing)
//!
//! # Architecture
//!
//! Applications build one [`registry::Charting`] during start-up
//! (typically via [`registry::Charting::configure`] or
//! [`registry::Charting::with_defaults`]) and share it with the series
//! engine. Series resolve their mapper once
//! ([`registry::Charting::mapper_for`]) and cache the returned handle;
//! chart entities apply registered style defaults right after
//! construction. All lookups are synchronous in-memory hash probes.

pub mod animation;
pub mod coordinates;
pub mod error;
pub mod options;
pub mod registry;
