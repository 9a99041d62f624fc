//! Class-string composition.
//!
//! - [`class_names`]: Joins class fragments into one `class` attribute value
//!
//! Components build their class lists from a fixed base, a variant-dependent
//! part, and caller-supplied extras; this module flattens those into a single
//! string. It is also exposed to component templates as the `cn` filter.

mod class;

pub use class::class_names;
