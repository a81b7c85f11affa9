//! # tyscript Core
//!
//! Shared output model and boundary capabilities for tyscript.
//!
//! This crate provides:
//! - The generated output model (`Record`, `Member`, `EnumElement`, `Output`)
//! - Scalar enum values with canonical literal encoding
//! - The documentation capability trait (`DocProvider`) with no-op and
//!   map-backed implementations

pub mod docs;
pub mod record;
pub mod value;

pub use docs::{DocProvider, NoDocs, StaticDocs};
pub use record::{EnumElement, Member, MemberSource, Output, Record, RecordKind};
pub use value::{EnumValue, ScalarValue, ValueEncodeError};
