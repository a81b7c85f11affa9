//! # tyscript Codegen
//!
//! TypeScript definition emission.
//!
//! This crate provides:
//! - Interface and enum generators over the resolved output model
//! - JSDoc formatting fed by an injected documentation provider
//! - The `Printer` for stdout, arbitrary writers, and guarded file output

pub mod error;
pub mod printer;
pub mod typescript;

pub use error::EmitError;
pub use printer::{Printer, HEADER};
pub use typescript::{EnumGenerator, InterfaceGenerator};

use tyscript_core::{NoDocs, Output};

/// Renders an output model to TypeScript definition text without
/// documentation lookups.
///
/// # Errors
/// Returns `EmitError::EmptyOutput` if the model holds no records.
pub fn emit_to_string(output: &Output) -> Result<String, EmitError> {
    Printer::new(output, &NoDocs).render_to_string()
}
