//! Descriptor model for host types.
//!
//! Callers describe their types as a graph of `TypeDescriptor` nodes owned
//! by a `TypeGraph` arena and addressed by `TypeId` handles. Fields
//! reference types by id rather than by ownership, so self-referential and
//! mutually-referential shapes are expressible directly.

use serde::{Deserialize, Serialize};

/// Handle of one descriptor inside a `TypeGraph`.
///
/// Two fields carrying the same `TypeId` describe the same type identity;
/// the resolution engine deduplicates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Arena of type descriptors.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: Vec<TypeDescriptor>,
}

impl TypeGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor and returns its handle.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(descriptor);
        id
    }

    /// Returns the descriptor for a handle.
    #[must_use]
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.0]
    }

    /// Returns the number of descriptors in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the graph holds no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Inserts a builtin scalar descriptor (empty name and namespace hold
    /// the host's own spelling of the type).
    pub fn scalar(&mut self, kind: ScalarKind) -> TypeId {
        self.insert(TypeDescriptor {
            name: kind.host_name().to_string(),
            namespace: String::new(),
            kind: TypeKind::Scalar(kind),
        })
    }

    /// Inserts a named scalar descriptor, such as an enum's underlying type.
    pub fn named_scalar(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        kind: ScalarKind,
    ) -> TypeId {
        self.insert(TypeDescriptor {
            name: name.into(),
            namespace: namespace.into(),
            kind: TypeKind::Scalar(kind),
        })
    }

    /// Inserts a named record descriptor with its fields.
    pub fn record(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> TypeId {
        self.insert(TypeDescriptor {
            name: name.into(),
            namespace: namespace.into(),
            kind: TypeKind::Record { fields },
        })
    }

    /// Inserts an anonymous record descriptor.
    pub fn anonymous_record(&mut self, fields: Vec<FieldDescriptor>) -> TypeId {
        self.insert(TypeDescriptor {
            name: String::new(),
            namespace: String::new(),
            kind: TypeKind::Record { fields },
        })
    }

    /// Appends a field to an existing record descriptor.
    ///
    /// This is how cyclic graphs are built: insert the record first, then
    /// add fields that reference it.
    ///
    /// # Panics
    /// Panics if the handle does not name a record descriptor.
    pub fn add_field(&mut self, record: TypeId, field: FieldDescriptor) {
        match &mut self.types[record.0].kind {
            TypeKind::Record { fields } => fields.push(field),
            _ => panic!("add_field target is not a record descriptor"),
        }
    }

    /// Inserts a pointer/optional descriptor.
    pub fn pointer(&mut self, target: TypeId) -> TypeId {
        self.insert(TypeDescriptor {
            name: String::new(),
            namespace: String::new(),
            kind: TypeKind::Pointer { target },
        })
    }

    /// Inserts a sequence descriptor.
    pub fn sequence(&mut self, element: TypeId) -> TypeId {
        self.insert(TypeDescriptor {
            name: String::new(),
            namespace: String::new(),
            kind: TypeKind::Sequence { element },
        })
    }

    /// Inserts a map descriptor.
    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.insert(TypeDescriptor {
            name: String::new(),
            namespace: String::new(),
            kind: TypeKind::Map { key, value },
        })
    }

    /// Inserts a descriptor for a kind the output language cannot express.
    pub fn unsupported(&mut self, kind: UnsupportedKind) -> TypeId {
        self.insert(TypeDescriptor {
            name: String::new(),
            namespace: String::new(),
            kind: TypeKind::Unsupported(kind),
        })
    }
}

/// Structural description of one host type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Bare type name. Empty for anonymous and synthesized types.
    pub name: String,
    /// Namespace path, `::`-separated. Empty for builtins.
    pub namespace: String,
    /// Shape of the type.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Returns the fully qualified source identity.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }

    /// Returns the last segment of the namespace path.
    #[must_use]
    pub fn namespace_tail(&self) -> &str {
        self.namespace.rsplit("::").next().unwrap_or_default()
    }

    /// Returns true if this descriptor is a record.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self.kind, TypeKind::Record { .. })
    }
}

/// Shape of a host type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Primitive scalar.
    Scalar(ScalarKind),
    /// Record with ordered fields.
    Record {
        /// Ordered field descriptors.
        fields: Vec<FieldDescriptor>,
    },
    /// Pointer or optional wrapper.
    Pointer {
        /// Pointee type.
        target: TypeId,
    },
    /// Homogeneous sequence.
    Sequence {
        /// Element type.
        element: TypeId,
    },
    /// Keyed collection.
    Map {
        /// Key type.
        key: TypeId,
        /// Value type.
        value: TypeId,
    },
    /// Kind the output language cannot express.
    Unsupported(UnsupportedKind),
}

impl TypeKind {
    /// Returns a short name for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Record { .. } => "record",
            Self::Pointer { .. } => "pointer",
            Self::Sequence { .. } => "sequence",
            Self::Map { .. } => "map",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

/// Primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Text string.
    String,
}

impl ScalarKind {
    /// Returns the TypeScript type this scalar maps to.
    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::String => "string",
            Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64
            | Self::Float32
            | Self::Float64 => "number",
        }
    }

    /// Returns the host spelling of the scalar.
    #[must_use]
    pub const fn host_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Uint8 => "u8",
            Self::Uint16 => "u16",
            Self::Uint32 => "u32",
            Self::Uint64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::String => "String",
        }
    }
}

/// Host kinds with no output-language representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedKind {
    /// Function or closure.
    Function,
    /// Channel endpoint.
    Channel,
    /// Dynamic/interface value of unknown shape.
    Dynamic,
    /// Complex number.
    Complex,
    /// Invalid or unreadable type information.
    Invalid,
}

/// One field of a record descriptor.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Declared field name.
    pub name: String,
    /// Field type.
    pub ty: TypeId,
    /// Raw annotation string in `key:"value,flags"` form.
    pub annotation: String,
    /// True when the field is an anonymous embedding.
    pub embedded: bool,
}

impl FieldDescriptor {
    /// Creates a plain field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            annotation: String::new(),
            embedded: false,
        }
    }

    /// Sets the raw annotation string.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    /// Marks the field as an anonymous embedding.
    #[must_use]
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}
