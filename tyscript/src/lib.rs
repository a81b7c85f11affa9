//! # tyscript
//!
//! TypeScript interface and enum generation from host type descriptions.
//!
//! tyscript walks a caller-built graph of type descriptors and emits
//! matching TypeScript definitions, so client code can consume typed stubs
//! that mirror server-side data types.
//!
//! ## Features
//!
//! - **Recursive type mapping** - Records, pointers, sequences, maps, and
//!   enums resolve into a deduplicated, ordered output model
//! - **Deterministic naming** - Namespace-prefix policies, custom naming
//!   hooks, sanitization, and integer-suffix disambiguation
//! - **Embedding flattening** - Anonymously embedded records splice their
//!   members into the parent and surface as `extends` references
//! - **Override policy** - Per-type or global control of names, forced
//!   type literals, optionality, and visibility
//! - **Injected documentation** - A capability interface feeds JSDoc
//!   blocks; the no-op provider is the default
//!
//! ## Quick Start
//!
//! ```
//! use tyscript::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let string = graph.scalar(ScalarKind::String);
//! let server = graph.record(
//!     "app",
//!     "Server",
//!     vec![FieldDescriptor::new("Host", string).with_annotation("json:\"host\"")],
//! );
//!
//! let mut builder = Builder::new(&graph, Config::new());
//! builder.resolve(server).expect("server is a record");
//!
//! let output = builder.finish();
//! let text = tyscript::codegen::emit_to_string(&output).expect("records were resolved");
//! assert!(text.contains("export interface Server"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Output model, enum value literals, doc providers
//! - [`schema`] - Descriptor graph, override policy, resolution engine
//! - [`codegen`] - TypeScript rendering and file emission

pub mod prelude;

/// Output model, enum value literals, and doc providers.
pub mod core {
    pub use tyscript_core::*;
}

/// Descriptor graph, override policy, and the resolution engine.
pub mod schema {
    pub use tyscript_schema::*;
}

/// TypeScript rendering and file emission.
pub mod codegen {
    pub use tyscript_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tyscript_core::{
    DocProvider, EnumElement, EnumValue, Member, NoDocs, Output, Record, RecordKind, ScalarValue,
    StaticDocs,
};

pub use tyscript_schema::{
    Builder, BuildError, Config, FieldDescriptor, NamespacePolicy, Override, ScalarKind,
    TypeDescriptor, TypeGraph, TypeId, TypeKind,
};

pub use tyscript_codegen::{EmitError, Printer, HEADER};
