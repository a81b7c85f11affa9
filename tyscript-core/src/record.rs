//! Generated output model.
//!
//! This module contains the data structures the resolution engine produces
//! and the renderer consumes: records (interfaces or enums), their members,
//! and the build-wide output bundle.

/// Distinguishes the two shapes a generated record can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Interface-like record carrying members.
    Interface,
    /// Enum-like record carrying name/value elements.
    Enum,
}

/// One generated named output unit.
///
/// A record is created once per source type identity, registered before its
/// members are resolved, then filled in place. Records with members never
/// carry elements and vice versa.
#[derive(Debug, Clone)]
pub struct Record {
    /// Generated name, globally unique per build. Empty for records that
    /// exist only to be flattened into their parent.
    pub name: String,
    /// Fully qualified source identity, e.g. `app::config::Server`.
    pub origin: String,
    /// Whether this renders as an interface or an enum.
    pub kind: RecordKind,
    /// Ordered members. Mutually exclusive with `elements`.
    pub members: Vec<Member>,
    /// Ordered enum name/value pairs. Mutually exclusive with `members`.
    pub elements: Vec<EnumElement>,
    /// Names of records flattened-by-reference via embedding.
    pub extends: Vec<String>,
    /// Extra documentation text supplied by override policy.
    pub comment: String,
    /// Whether the rendered definition carries an export marker.
    pub export: bool,
}

impl Record {
    /// Creates an empty interface record.
    #[must_use]
    pub fn interface(name: String, origin: String) -> Self {
        Self {
            name,
            origin,
            kind: RecordKind::Interface,
            members: Vec::new(),
            elements: Vec::new(),
            extends: Vec::new(),
            comment: String::new(),
            export: true,
        }
    }

    /// Creates an empty enum record.
    #[must_use]
    pub fn enumeration(name: String, origin: String) -> Self {
        Self {
            name,
            origin,
            kind: RecordKind::Enum,
            members: Vec::new(),
            elements: Vec::new(),
            extends: Vec::new(),
            comment: String::new(),
            export: true,
        }
    }

    /// Returns true if this record renders as an enum.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.kind, RecordKind::Enum)
    }
}

/// One member of an interface record.
#[derive(Debug, Clone)]
pub struct Member {
    /// Output member name, derived from the field annotation or field name.
    pub name: String,
    /// Output type expression. Empty when the member owns nested `members`
    /// and renders as an inline anonymous object instead.
    pub ty: String,
    /// Whether the member renders with an optional marker.
    pub optional: bool,
    /// Nested members for inline anonymous objects.
    pub members: Vec<Member>,
    /// Extra documentation text supplied by override policy.
    pub comment: String,
    /// Source field reference for documentation lookup.
    pub source: MemberSource,
}

impl Member {
    /// Creates a member with no resolved type yet.
    #[must_use]
    pub fn new(name: String, source: MemberSource) -> Self {
        Self {
            name,
            ty: String::new(),
            optional: false,
            members: Vec::new(),
            comment: String::new(),
            source,
        }
    }

    /// Returns true if this member renders as an inline anonymous object.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Source reference of a member, used to look up documentation.
#[derive(Debug, Clone, Default)]
pub struct MemberSource {
    /// Qualified origin of the record the field was declared on.
    pub type_origin: String,
    /// Declared field name on the source type.
    pub field: String,
}

impl MemberSource {
    /// Creates a source reference.
    #[must_use]
    pub fn new(type_origin: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            type_origin: type_origin.into(),
            field: field.into(),
        }
    }
}

/// One element of an enum record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumElement {
    /// Element name.
    pub name: String,
    /// Canonical literal text of the element value.
    pub value: String,
}

/// Finalized build output consumed by the renderer.
#[derive(Debug, Clone, Default)]
pub struct Output {
    /// Generated records in discovery order.
    pub records: Vec<Record>,
    /// Sorted namespace paths touched during resolution.
    pub namespaces: Vec<String>,
}

impl Output {
    /// Returns true if no records were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
