//! # slab_core - One-Way Continuous Slab Design Engine
//!
//! `slab_core` computes a preliminary design for a one-way concrete slab that
//! is continuous over two or more spans, using the ACI 318-19 moment
//! coefficients and strength design. All inputs and outputs are
//! JSON-serializable so a form, CLI or LLM tool can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate` is a pure function of its inputs and settings
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the rule and values
//! - **Exact numbers**: Results are rounded numerically, formatting is left to
//!   the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::{calculate, DesignSettings, LoadSet, MaterialSet, RebarSize, SlabInput};
//!
//! let input = SlabInput {
//!     label: "S-1".to_string(),
//!     spans_ft: vec![15.0, 15.0, 15.0],
//!     loads: LoadSet::new(20.0, 40.0),
//!     materials: MaterialSet::new(4.0, 60.0, RebarSize(4)),
//! };
//!
//! let design = calculate(&input, &DesignSettings::default()).unwrap();
//! let json = serde_json::to_string_pretty(&design).unwrap();
//! assert!(json.contains("thickness_in"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The design stages and the entry point
//! - [`loads`] - Load set and strength load combination
//! - [`materials`] - Concrete/steel strengths and rebar sizes
//! - [`settings`] - Code constants (ACI 318-19 defaults)
//! - [`rounding`] - Significant-figure rounding
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod rounding;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, SlabDesign, SlabInput};
pub use errors::{CalcError, CalcResult, ErrorCategory};
pub use loads::LoadSet;
pub use materials::{MaterialSet, RebarSize};
pub use settings::DesignSettings;
