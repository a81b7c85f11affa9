//! Override policy configuration.
//!
//! Policy is resolved per type: an exact identity match in the override map
//! wins, otherwise the single global override applies. Type-specific fields
//! of the global override are cleared during setup so one type's literal
//! cannot leak onto every member.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{TypeDescriptor, TypeId};

/// Default annotation key used to derive member names.
pub const DEFAULT_TAG: &str = "json";

/// Naming hook applied to candidate record names.
pub type NamerFn = fn(&TypeDescriptor, String) -> String;

/// Map of type identities to their override values.
pub type Overrides = HashMap<TypeId, Override>;

/// Namespace-prefixing policy for generated record names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamespacePolicy {
    /// Prefix the record name with the namespace tail only when the bare
    /// name is already taken. This is the default.
    #[default]
    OnConflict,
    /// Never prefix; conflicts get an integer suffix.
    Never,
    /// Always prefix with the namespace tail.
    Always,
}

/// Naming, typing, and visibility policy for one type or for all types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Override {
    /// Custom naming hook. Applied to the capitalized candidate name; use
    /// it to add prefixes, suffixes, or case changes.
    #[serde(skip)]
    pub namer: Option<NamerFn>,
    /// Forced output type literal. Type specific; cleared on the global
    /// override.
    #[serde(rename = "type")]
    pub type_: String,
    /// Forced record name. Type specific; cleared on the global override.
    pub name: String,
    /// Annotation key used to derive member names. Defaults to `json`.
    pub tag: String,
    /// Extra documentation text added to the rendered definition.
    pub comment: String,
    /// Forces members of this type to be optional.
    pub optional: bool,
    /// Keeps punctuation characters that are otherwise stripped from names.
    pub keep_bad_chars: bool,
    /// Keeps underscores, which are valid but stripped by default.
    pub keep_underscores: bool,
    /// Namespace-prefixing policy for the record name.
    pub namespace_policy: NamespacePolicy,
    /// Suppresses the export marker on the rendered definition.
    pub no_export: bool,
    /// Wraps optional sequence elements in an explicit nullable union.
    pub null_slice_pointers: bool,
}

impl Override {
    /// Applies defaults. Called once per override value during builder
    /// construction.
    pub(crate) fn setup(&mut self) {
        if self.tag.is_empty() {
            self.tag = DEFAULT_TAG.to_string();
        }
    }

    /// Runs the naming hook, or returns the candidate unchanged when no
    /// hook is configured.
    #[must_use]
    pub fn apply_namer(&self, descriptor: &TypeDescriptor, candidate: String) -> String {
        match self.namer {
            Some(namer) => namer(descriptor, candidate),
            None => candidate,
        }
    }
}

/// Input configuration for the builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Per-type overrides, keyed by identity. These win over the global
    /// override.
    pub overrides: Overrides,
    /// Override applied to every type without a specific entry.
    pub global: Override,
}

impl Config {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes the configuration: defaults are applied to every override
    /// and the global override's type-specific fields are cleared.
    pub(crate) fn setup(&mut self) {
        self.global.setup();
        self.global.type_.clear();
        self.global.name.clear();

        for override_ in self.overrides.values_mut() {
            override_.setup();
        }
    }

    /// Returns the override for a type: the exact match if present,
    /// otherwise the global override.
    #[must_use]
    pub fn effective(&self, ty: TypeId) -> &Override {
        self.overrides.get(&ty).unwrap_or(&self.global)
    }
}
