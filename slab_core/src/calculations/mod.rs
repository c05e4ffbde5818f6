//! # Slab Design Calculations
//!
//! The design chain, one module per stage. Each stage takes the previous
//! stage's output; only the first looks at raw user input.
//!
//! - [`spans`] - validated span sequence and span roles
//! - [`validation`] - span compatibility and live/dead ratio checks
//! - [`thickness`] - minimum thickness, self-weight and factored load
//! - [`moment_coefficients`] - ACI coefficient tables and per-span moments
//! - [`reinforcement`] - main bar and shrinkage bar design
//! - [`one_way_slab`] - the `SlabInput -> SlabDesign` entry point
//!
//! All types are JSON-serializable so the full result bundle can be handed to
//! any presentation layer.

pub mod moment_coefficients;
pub mod one_way_slab;
pub mod reinforcement;
pub mod spans;
pub mod thickness;
pub mod validation;

// Re-export commonly used types
pub use moment_coefficients::{MomentLocation, MomentSet, SpanMoments};
pub use one_way_slab::{calculate, SlabDesign, SlabInput};
pub use reinforcement::{BarSpacing, LocationReinforcement, SpanReinforcement};
pub use spans::{SpanRole, SpanSequence};
pub use thickness::ThicknessResult;
