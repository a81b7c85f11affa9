//! # tyscript Schema
//!
//! Type descriptor graph and resolution engine.
//!
//! This crate provides:
//! - The descriptor model for host types (`TypeGraph`, `TypeDescriptor`)
//! - Per-type and global override policy (`Config`, `Override`)
//! - The `Builder` that resolves descriptor graphs into generated records
//! - Error types for resolution failures

pub mod builder;
pub mod config;
pub mod error;
mod tag;
pub mod types;

pub use builder::Builder;
pub use config::{Config, NamerFn, NamespacePolicy, Override, Overrides, DEFAULT_TAG};
pub use error::{BuildError, Result};
pub use types::{
    FieldDescriptor, ScalarKind, TypeDescriptor, TypeGraph, TypeId, TypeKind, UnsupportedKind,
};
