//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use tyscript::prelude::*;
//! ```

// Core types
pub use tyscript_core::{
    DocProvider, EnumElement, EnumValue, Member, MemberSource, NoDocs, Output, Record, RecordKind,
    ScalarValue, StaticDocs, ValueEncodeError,
};

// Schema types
pub use tyscript_schema::{
    BuildError, Builder, Config, FieldDescriptor, NamespacePolicy, Override, Overrides,
    ScalarKind, TypeDescriptor, TypeGraph, TypeId, TypeKind, UnsupportedKind,
};

// Codegen types
pub use tyscript_codegen::{EmitError, EnumGenerator, InterfaceGenerator, Printer, HEADER};
