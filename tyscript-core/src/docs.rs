//! Documentation capability.
//!
//! Documentation lookup is an injected boundary capability: the resolution
//! engine records source references, and the renderer asks a `DocProvider`
//! for text when emitting. The default `NoDocs` implementation returns
//! empty strings and must be fully supported.

use std::collections::HashMap;

/// Supplies documentation text for generated records and members.
///
/// Types are keyed by their fully qualified origin, e.g.
/// `app::config::Server`; members by the origin of the declaring type and
/// the declared field name.
pub trait DocProvider {
    /// Retrieves documentation for a type.
    fn type_doc(&self, origin: &str) -> String;

    /// Retrieves documentation for a member of a type.
    fn member_doc(&self, origin: &str, member: &str) -> String;
}

/// Doc provider that returns empty strings for all lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocs;

impl DocProvider for NoDocs {
    fn type_doc(&self, _origin: &str) -> String {
        String::new()
    }

    fn member_doc(&self, _origin: &str, _member: &str) -> String {
        String::new()
    }
}

/// Map-backed doc provider populated up front.
#[derive(Debug, Clone, Default)]
pub struct StaticDocs {
    types: HashMap<String, String>,
    members: HashMap<(String, String), String>,
}

impl StaticDocs {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records documentation for a type.
    pub fn insert_type(&mut self, origin: impl Into<String>, doc: impl Into<String>) {
        self.types.insert(origin.into(), doc.into());
    }

    /// Records documentation for a member of a type.
    pub fn insert_member(
        &mut self,
        origin: impl Into<String>,
        member: impl Into<String>,
        doc: impl Into<String>,
    ) {
        self.members
            .insert((origin.into(), member.into()), doc.into());
    }
}

impl DocProvider for StaticDocs {
    fn type_doc(&self, origin: &str) -> String {
        self.types.get(origin).cloned().unwrap_or_default()
    }

    fn member_doc(&self, origin: &str, member: &str) -> String {
        self.members
            .get(&(origin.to_string(), member.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}
