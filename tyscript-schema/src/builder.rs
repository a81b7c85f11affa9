//! Graph resolution engine.
//!
//! The `Builder` walks descriptor graphs depth-first and accumulates an
//! ordered output model. Shared mutable state (the identity cache, the
//! taken-names set, the discovery-ordered output) is owned by one builder
//! instance and threaded by `&mut self` through the recursion; resolving a
//! root type fully completes before returning.
//!
//! A record is registered by identity before its fields are resolved. A
//! field pointing back at an in-progress record finds it in the cache, so
//! self-referential and mutually-referential graphs resolve without
//! unbounded recursion.

use std::collections::{BTreeSet, HashMap, HashSet};

use tyscript_core::{EnumElement, EnumValue, Member, MemberSource, Output, Record};

use crate::config::{Config, NamespacePolicy, Override};
use crate::error::{BuildError, Result};
use crate::tag;
use crate::types::{ScalarKind, TypeGraph, TypeId, TypeKind};

/// Disambiguation attempt bound before naming is declared failed.
const NAME_ATTEMPTS: usize = 1000;

/// Characters stripped from generated names unless `keep_bad_chars` is set.
const BAD_CHARS: &str = "-:./\\(*&^%$#@)~\"'[]{}<>,;+=|`";

/// Annotation flag that forces a member optional.
const OMIT_EMPTY: &str = "omitempty";

/// Resolves descriptor graphs into generated records.
pub struct Builder<'g> {
    /// Descriptor graph being resolved.
    graph: &'g TypeGraph,
    /// Normalized override configuration.
    config: Config,
    /// Names already handed out, to keep record names unique per build.
    taken_names: HashSet<String>,
    /// Identity cache: each type identity maps to at most one record.
    by_identity: HashMap<TypeId, usize>,
    /// All records, including identity-only anonymous ones.
    records: Vec<Record>,
    /// Indices of named records in discovery order.
    emitted: Vec<usize>,
    /// Namespace paths touched during resolution.
    namespaces: BTreeSet<String>,
}

impl<'g> Builder<'g> {
    /// Creates a builder over a descriptor graph.
    #[must_use]
    pub fn new(graph: &'g TypeGraph, mut config: Config) -> Self {
        config.setup();
        Self {
            graph,
            config,
            taken_names: HashSet::new(),
            by_identity: HashMap::new(),
            records: Vec::new(),
            emitted: Vec::new(),
            namespaces: BTreeSet::new(),
        }
    }

    /// Registers an enum for the given underlying type.
    ///
    /// Registration must happen before resolving any record whose fields
    /// would otherwise resolve the underlying type as a plain scalar; the
    /// ordering is not enforced at runtime. Empty input yields a vacuous
    /// but structurally valid enum.
    ///
    /// # Errors
    /// Returns `BuildError::NamingExhausted` if no unique name can be
    /// found, or `BuildError::ValueEncoding` if an element value has no
    /// canonical literal form.
    pub fn enums(
        &mut self,
        ty: TypeId,
        values: impl IntoIterator<Item = EnumValue>,
    ) -> Result<()> {
        let descriptor = self.graph.get(ty);
        let origin = descriptor.qualified();
        let name = self.allocate_name(ty)?;
        let override_ = self.config.effective(ty);

        let mut record = Record::enumeration(name, origin.clone());
        record.comment = override_.comment.clone();
        record.export = !override_.no_export;

        // Element values are printed with the wire encoding so that the
        // generated literals match what a deserializer expects.
        for value in values {
            let literal =
                value
                    .value
                    .canonical_literal()
                    .map_err(|source| BuildError::ValueEncoding {
                        origin: origin.clone(),
                        element: value.name.clone(),
                        source,
                    })?;
            record.elements.push(EnumElement {
                name: value.name,
                value: literal,
            });
        }

        tracing::debug!(
            "registered enum '{}' for {} ({} elements)",
            record.name,
            origin,
            record.elements.len()
        );

        let index = self.records.len();
        self.records.push(record);
        self.by_identity.insert(ty, index);
        self.emitted.push(index);

        Ok(())
    }

    /// Resolves a root type into the output model.
    ///
    /// One pointer indirection is followed; anything that is not a record
    /// after that is rejected.
    ///
    /// # Errors
    /// Returns `BuildError::UnsupportedRoot` for non-record roots, and
    /// propagates naming failures from the recursive resolution.
    pub fn resolve(&mut self, root: TypeId) -> Result<()> {
        let mut ty = root;
        if let TypeKind::Pointer { target } = &self.graph.get(ty).kind {
            ty = *target;
        }

        let descriptor = self.graph.get(ty);
        if !descriptor.is_record() {
            return Err(BuildError::UnsupportedRoot {
                origin: descriptor.qualified(),
                kind: descriptor.kind.kind_name(),
            });
        }

        tracing::debug!("resolving root type {}", descriptor.qualified());
        self.resolve_record(ty)?;

        Ok(())
    }

    /// Returns the generated records in discovery order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.emitted.iter().map(|&index| &self.records[index])
    }

    /// Returns the sorted namespace paths touched during resolution.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        self.namespaces.iter().cloned().collect()
    }

    /// Finalizes the build into an output bundle for the renderer.
    #[must_use]
    pub fn finish(self) -> Output {
        let records = self
            .emitted
            .iter()
            .map(|&index| self.records[index].clone())
            .collect();

        Output {
            records,
            namespaces: self.namespaces.into_iter().collect(),
        }
    }

    /// Returns the cached record for a type identity, or creates, names,
    /// and registers a new one before resolving its fields.
    fn resolve_record(&mut self, ty: TypeId) -> Result<usize> {
        if let Some(&index) = self.by_identity.get(&ty) {
            return Ok(index);
        }

        let descriptor = self.graph.get(ty);
        let name = self.allocate_name(ty)?;
        let override_ = self.config.effective(ty);

        let mut record = Record::interface(name, descriptor.qualified());
        record.comment = override_.comment.clone();
        record.export = !override_.no_export;

        // Register by identity before recursing into fields; this is what
        // lets a field pointing back discover the in-progress record.
        let index = self.records.len();
        self.records.push(record);
        self.by_identity.insert(ty, index);

        // An empty name is the embedding-flatten sentinel: the record is
        // cached by identity only and never reaches the output.
        if !self.records[index].name.is_empty() {
            tracing::debug!(
                "registered record '{}' for {}",
                self.records[index].name,
                self.records[index].origin
            );
            self.emitted.push(index);
            if !descriptor.namespace.is_empty() {
                self.namespaces.insert(descriptor.namespace.clone());
            }
        }

        let (members, extends) = self.resolve_fields(ty)?;
        let record = &mut self.records[index];
        record.members = members;
        record.extends = extends;

        Ok(index)
    }

    /// Walks the fields of a record descriptor and produces its members
    /// and extends list.
    fn resolve_fields(&mut self, ty: TypeId) -> Result<(Vec<Member>, Vec<String>)> {
        let descriptor = self.graph.get(ty);
        let origin = descriptor.qualified();
        let TypeKind::Record { fields } = &descriptor.kind else {
            return Ok((Vec::new(), Vec::new()));
        };

        let mut members = Vec::new();
        let mut extends = Vec::new();

        for field in fields {
            let override_ = self.config.effective(field.ty).clone();
            let tag_value = tag::lookup(&field.annotation, &override_.tag).unwrap_or_default();
            let (tag_name, flags) = tag::split_value(&tag_value);

            if tag_name == "-" {
                continue;
            }

            let name = if tag_name.is_empty() {
                field.name.clone()
            } else {
                tag_name
            };

            let mut member = Member::new(
                sanitize_name(&name, &override_),
                MemberSource::new(origin.clone(), field.name.clone()),
            );
            member.comment = override_.comment.clone();
            member.ty = override_.type_.clone();

            // A forced type literal bypasses resolution entirely.
            if member.ty.is_empty() {
                let (expr, optional) = self.member_type(field.ty, &mut member)?;
                member.ty = expr;
                member.optional = optional;
            }

            if override_.optional {
                member.optional = true;
            }

            if flags.iter().any(|flag| flag == OMIT_EMPTY) {
                member.optional = true;
            }

            if field.embedded && self.embeds_record(field.ty) {
                self.flatten_embedded(field.ty, &member, &mut members, &mut extends);
            } else {
                members.push(member);
            }
        }

        Ok((members, extends))
    }

    /// Maps a field type to its output type expression and optionality.
    ///
    /// Fully recursive over the descriptor kinds.
    fn member_type(&mut self, ty: TypeId, member: &mut Member) -> Result<(String, bool)> {
        // A registered identity short-circuits: enums registered ahead of
        // resolution, previously resolved records, and records still in
        // progress all land here.
        if let Some(&index) = self.by_identity.get(&ty) {
            let record = &self.records[index];
            if record.name.is_empty() {
                let spliced: Vec<Member> = record.members.clone();
                member.members.extend(spliced);
                return Ok((String::new(), false));
            }
            return Ok((record.name.clone(), false));
        }

        match &self.graph.get(ty).kind {
            TypeKind::Pointer { target } => {
                // Pointees are always optional, irrespective of their own
                // optionality.
                let (expr, _) = self.member_type(*target, member)?;
                Ok((expr, true))
            }
            TypeKind::Record { .. } => Ok((self.record_type(ty, member)?, false)),
            TypeKind::Sequence { element } => {
                Ok((self.sequence_type(ty, *element, member)?, true))
            }
            TypeKind::Map { key, value } => Ok((self.map_type(*key, *value, member)?, false)),
            TypeKind::Scalar(kind) => Ok((kind.ts_type().to_string(), false)),
            TypeKind::Unsupported(_) => Ok(("any".to_string(), true)),
        }
    }

    /// Maps a record field type, handling the well-known time types and
    /// the embedding-flatten sentinel.
    fn record_type(&mut self, ty: TypeId, member: &mut Member) -> Result<String> {
        match self.graph.get(ty).qualified().as_str() {
            "std::time::SystemTime" => return Ok("Date".to_string()),
            "std::time::Duration" => return Ok("number".to_string()),
            _ => {}
        }

        let index = self.resolve_record(ty)?;
        let record = &self.records[index];
        if record.name.is_empty() {
            // Anonymous record: its members splice into this member and
            // the empty expression marks an inline object.
            let spliced: Vec<Member> = record.members.clone();
            member.members.extend(spliced);
            return Ok(String::new());
        }

        Ok(record.name.clone())
    }

    /// Maps a sequence type to its output expression.
    fn sequence_type(
        &mut self,
        sequence: TypeId,
        element: TypeId,
        member: &mut Member,
    ) -> Result<String> {
        // Byte sequences serialize as text on the wire.
        let element_descriptor = self.graph.get(element);
        if self.graph.get(sequence).name.is_empty()
            && element_descriptor.namespace.is_empty()
            && matches!(element_descriptor.kind, TypeKind::Scalar(ScalarKind::Uint8))
        {
            return Ok("string".to_string());
        }

        let (mut expr, optional) = self.member_type(element, member)?;
        if optional && self.config.effective(sequence).null_slice_pointers {
            expr = format!("(null | {expr})");
        }

        Ok(format!("{expr}[]"))
    }

    /// Maps a map type to its output expression, wrapping optional sides
    /// in nullable unions.
    fn map_type(&mut self, key: TypeId, value: TypeId, member: &mut Member) -> Result<String> {
        let (mut key_expr, key_optional) = self.member_type(key, member)?;
        let (mut value_expr, value_optional) = self.member_type(value, member)?;

        if key_optional {
            key_expr = format!("null | {key_expr}");
        }

        if value_optional {
            value_expr = format!("null | {value_expr}");
        }

        Ok(format!("Record<{key_expr}, {value_expr}>"))
    }

    /// Returns true if the field type is a record or pointer-to-record,
    /// i.e. eligible for embedding flattening.
    fn embeds_record(&self, ty: TypeId) -> bool {
        match &self.graph.get(ty).kind {
            TypeKind::Record { .. } => true,
            TypeKind::Pointer { target } => self.graph.get(*target).is_record(),
            _ => false,
        }
    }

    /// Flattens an embedded record field: its members splice into the
    /// parent at the point of occurrence, and a resolvable name is
    /// recorded in the extends list. The field itself produces no member.
    fn flatten_embedded(
        &self,
        ty: TypeId,
        member: &Member,
        members: &mut Vec<Member>,
        extends: &mut Vec<String>,
    ) {
        let target = match &self.graph.get(ty).kind {
            TypeKind::Pointer { target } => *target,
            _ => ty,
        };

        if let Some(&index) = self.by_identity.get(&target) {
            let record = &self.records[index];
            if !record.name.is_empty() {
                extends.push(record.name.clone());
            }
            members.extend(record.members.iter().cloned());
        } else if !member.ty.is_empty() {
            // Forced type literals and well-known scalar mappings leave no
            // registry entry; the expression itself is the extends
            // reference.
            extends.push(member.ty.clone());
        }
    }

    /// Produces a unique, capitalized name for a type.
    ///
    /// The candidate runs through the naming hook, the namespace-prefix
    /// policy, forced-name overrides, and sanitization, then integer
    /// suffixes disambiguate against already-taken names. Empty names are
    /// the embedding-flatten sentinel and skip uniqueness bookkeeping.
    fn allocate_name(&mut self, ty: TypeId) -> Result<String> {
        let descriptor = self.graph.get(ty);
        let override_ = self.config.effective(ty);

        let mut name = override_.apply_namer(descriptor, capitalize(&descriptor.name));
        name = sanitize_name(&name, override_);

        if override_.namespace_policy == NamespacePolicy::Always
            || (self.taken_names.contains(&name)
                && override_.namespace_policy == NamespacePolicy::OnConflict)
        {
            // The bare element name goes back through the hook so custom
            // name changes are repeated on the prefixed form.
            let prefixed = format!(
                "{}{}",
                capitalize(descriptor.namespace_tail()),
                descriptor.name
            );
            name = override_.apply_namer(descriptor, prefixed);
        }

        if !override_.name.is_empty() {
            name = override_.name.clone();
        }

        name = sanitize_name(&name, override_);

        if name.is_empty() {
            return Ok(name);
        }

        let base = name.clone();
        let mut attempt = 0;
        while self.taken_names.contains(&name) {
            if attempt == NAME_ATTEMPTS {
                return Err(BuildError::NamingExhausted {
                    origin: descriptor.qualified(),
                    candidate: base,
                });
            }
            name = format!("{base}{attempt}");
            attempt += 1;
        }

        self.taken_names.insert(name.clone());

        Ok(name)
    }
}

/// Capitalizes the first character of a name.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips punctuation and underscores from a name per the override's
/// sanitization opt-outs.
fn sanitize_name(name: &str, override_: &Override) -> String {
    if override_.keep_bad_chars && override_.keep_underscores {
        return name.to_string();
    }

    name.chars()
        .filter(|&c| {
            if c == '_' {
                override_.keep_underscores
            } else if BAD_CHARS.contains(c) {
                override_.keep_bad_chars
            } else {
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Override;
    use crate::types::{FieldDescriptor, ScalarKind, TypeGraph, UnsupportedKind};
    use tyscript_core::RecordKind;

    fn weekday_values() -> Vec<EnumValue> {
        [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ]
        .iter()
        .enumerate()
        .map(|(value, name)| EnumValue::new(*name, value as i64))
        .collect()
    }

    #[test]
    fn test_idempotence() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let server = graph.record(
            "app",
            "Server",
            vec![FieldDescriptor::new("host", string)],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(server).expect("first resolve");
        builder.resolve(server).expect("second resolve");

        assert_eq!(builder.records().count(), 1);
    }

    #[test]
    fn test_scalar_members_never_optional() {
        let mut graph = TypeGraph::new();
        let boolean = graph.scalar(ScalarKind::Bool);
        let number = graph.scalar(ScalarKind::Float64);
        let string = graph.scalar(ScalarKind::String);
        let record = graph.record(
            "app",
            "Flags",
            vec![
                FieldDescriptor::new("enabled", boolean),
                FieldDescriptor::new("ratio", number),
                FieldDescriptor::new("label", string),
            ],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let record = builder.records().next().expect("record");
        let types: Vec<&str> = record.members.iter().map(|m| m.ty.as_str()).collect();
        assert_eq!(types, vec!["boolean", "number", "string"]);
        assert!(record.members.iter().all(|m| !m.optional));
    }

    #[test]
    fn test_pointer_optionality() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let pointer = graph.pointer(string);
        let record = graph.record("app", "Server", vec![FieldDescriptor::new("host", pointer)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "string");
        assert!(member.optional);
    }

    #[test]
    fn test_embedding_flattening() {
        let mut graph = TypeGraph::new();
        let number = graph.scalar(ScalarKind::Int32);
        let endpoint = graph.record(
            "app",
            "Endpoint",
            vec![
                FieldDescriptor::new("x", number),
                FieldDescriptor::new("y", number),
            ],
        );
        let wrapper = graph.record(
            "app",
            "Wrapper",
            vec![
                FieldDescriptor::new("z", number),
                FieldDescriptor::new("Endpoint", endpoint).embedded(),
            ],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(wrapper).expect("resolve");

        let records: Vec<_> = builder.records().collect();
        assert_eq!(records.len(), 2);

        let wrapper = records[0];
        assert_eq!(wrapper.name, "Wrapper");
        let names: Vec<&str> = wrapper.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["z", "x", "y"]);
        assert_eq!(wrapper.extends, vec!["Endpoint".to_string()]);

        // The embedded record also appears independently.
        assert_eq!(records[1].name, "Endpoint");
        assert_eq!(records[1].members.len(), 2);
    }

    #[test]
    fn test_embedded_pointer_flattens() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let endpoint = graph.record("app", "Endpoint", vec![FieldDescriptor::new("url", string)]);
        let pointer = graph.pointer(endpoint);
        let wrapper = graph.record(
            "app",
            "Wrapper",
            vec![FieldDescriptor::new("Endpoint", pointer).embedded()],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(wrapper).expect("resolve");

        let wrapper = builder.records().next().expect("record");
        assert_eq!(wrapper.extends, vec!["Endpoint".to_string()]);
        assert_eq!(wrapper.members.len(), 1);
        assert_eq!(wrapper.members[0].name, "url");
    }

    #[test]
    fn test_cycle_safety() {
        let mut graph = TypeGraph::new();
        let node = graph.record("app", "Node", Vec::new());
        let next = graph.pointer(node);
        graph.add_field(node, FieldDescriptor::new("next", next));

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(node).expect("resolve");

        let record = builder.records().next().expect("record");
        assert_eq!(record.name, "Node");
        assert_eq!(record.members[0].ty, "Node");
        assert!(record.members[0].optional);
    }

    #[test]
    fn test_mutual_cycle_safety() {
        let mut graph = TypeGraph::new();
        let left = graph.record("app", "Left", Vec::new());
        let right = graph.record("app", "Right", Vec::new());
        let to_right = graph.pointer(right);
        let to_left = graph.pointer(left);
        graph.add_field(left, FieldDescriptor::new("right", to_right));
        graph.add_field(right, FieldDescriptor::new("left", to_left));

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(left).expect("resolve");

        let records: Vec<_> = builder.records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].members[0].ty, "Right");
        assert_eq!(records[1].members[0].ty, "Left");
    }

    #[test]
    fn test_byte_sequence_maps_to_string() {
        let mut graph = TypeGraph::new();
        let byte = graph.scalar(ScalarKind::Uint8);
        let bytes = graph.sequence(byte);
        let record = graph.record("app", "Blob", vec![FieldDescriptor::new("data", bytes)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "string");
        assert!(member.optional);
    }

    #[test]
    fn test_named_byte_scalar_sequence_stays_numeric() {
        let mut graph = TypeGraph::new();
        let level = graph.named_scalar("app", "Level", ScalarKind::Uint8);
        let levels = graph.sequence(level);
        let record = graph.record("app", "Levels", vec![FieldDescriptor::new("all", levels)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "number[]");
    }

    #[test]
    fn test_sequence_always_optional() {
        let mut graph = TypeGraph::new();
        let number = graph.scalar(ScalarKind::Int64);
        let numbers = graph.sequence(number);
        let record = graph.record("app", "Series", vec![FieldDescriptor::new("points", numbers)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "number[]");
        assert!(member.optional);
    }

    #[test]
    fn test_null_slice_pointers_wraps_elements() {
        let mut graph = TypeGraph::new();
        let number = graph.scalar(ScalarKind::Int32);
        let pointer = graph.pointer(number);
        let pointers = graph.sequence(pointer);
        let record = graph.record("app", "Sparse", vec![FieldDescriptor::new("cells", pointers)]);

        let mut config = Config::new();
        config.global.null_slice_pointers = true;
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "(null | number)[]");

        // Without the policy the element stays unwrapped.
        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");
        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "number[]");
    }

    #[test]
    fn test_map_rendering() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let number = graph.scalar(ScalarKind::Int32);
        let pointer = graph.pointer(number);
        let map = graph.map(string, pointer);
        let record = graph.record("app", "Lookup", vec![FieldDescriptor::new("entries", map)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "Record<string, null | number>");
        assert!(!member.optional);
    }

    #[test]
    fn test_unsupported_kind_maps_to_any() {
        let mut graph = TypeGraph::new();
        let callback = graph.unsupported(UnsupportedKind::Function);
        let record = graph.record("app", "Hooks", vec![FieldDescriptor::new("onClose", callback)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "any");
        assert!(member.optional);
    }

    #[test]
    fn test_well_known_time_types() {
        let mut graph = TypeGraph::new();
        let time = graph.record("std::time", "SystemTime", Vec::new());
        let duration = graph.record("std::time", "Duration", Vec::new());
        let record = graph.record(
            "app",
            "Job",
            vec![
                FieldDescriptor::new("startedAt", time),
                FieldDescriptor::new("timeout", duration),
            ],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let records: Vec<_> = builder.records().collect();
        assert_eq!(records.len(), 1, "time types produce no records");
        assert_eq!(records[0].members[0].ty, "Date");
        assert_eq!(records[0].members[1].ty, "number");
    }

    #[test]
    fn test_anonymous_record_renders_inline() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let auth = graph.anonymous_record(vec![
            FieldDescriptor::new("Username", string).with_annotation("json:\"username\""),
            FieldDescriptor::new("Password", string).with_annotation("json:\"password\""),
        ]);
        let record = graph.record("app", "Server", vec![FieldDescriptor::new("Auth", auth)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let records: Vec<_> = builder.records().collect();
        assert_eq!(records.len(), 1, "anonymous records stay out of the output");

        let member = &records[0].members[0];
        assert!(member.ty.is_empty());
        assert!(member.is_inline());
        let names: Vec<&str> = member.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["username", "password"]);
    }

    #[test]
    fn test_enum_literal_fidelity() {
        let mut graph = TypeGraph::new();
        let weekday = graph.named_scalar("std::time", "Weekday", ScalarKind::Int32);
        let record = graph.record("app", "Event", vec![FieldDescriptor::new("day", weekday)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.enums(weekday, weekday_values()).expect("enums");
        builder.resolve(record).expect("resolve");

        let records: Vec<_> = builder.records().collect();
        let enum_record = records[0];
        assert_eq!(enum_record.name, "Weekday");
        assert_eq!(enum_record.kind, RecordKind::Enum);
        assert_eq!(enum_record.elements.len(), 7);
        assert_eq!(enum_record.elements[0].value, "0");
        assert_eq!(enum_record.elements[6].value, "6");

        // The field of the underlying type resolves to the enum name, not
        // the plain scalar.
        let member = &records[1].members[0];
        assert_eq!(member.ty, "Weekday");
        assert!(!member.optional);
    }

    #[test]
    fn test_unregistered_underlying_type_stays_scalar() {
        let mut graph = TypeGraph::new();
        let weekday = graph.named_scalar("std::time", "Weekday", ScalarKind::Int32);
        let record = graph.record("app", "Event", vec![FieldDescriptor::new("day", weekday)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        assert_eq!(builder.records().next().expect("record").members[0].ty, "number");
    }

    #[test]
    fn test_vacuous_enum() {
        let mut graph = TypeGraph::new();
        let status = graph.named_scalar("app", "Status", ScalarKind::Uint8);

        let mut builder = Builder::new(&graph, Config::new());
        builder.enums(status, Vec::new()).expect("enums");

        let record = builder.records().next().expect("record");
        assert_eq!(record.kind, RecordKind::Enum);
        assert!(record.elements.is_empty());
        assert_eq!(record.name, "Status");
    }

    #[test]
    fn test_enum_value_encoding_failure() {
        let mut graph = TypeGraph::new();
        let ratio = graph.named_scalar("app", "Ratio", ScalarKind::Float64);

        let mut builder = Builder::new(&graph, Config::new());
        let err = builder
            .enums(ratio, vec![EnumValue::new("Bad", f64::NAN)])
            .unwrap_err();

        match err {
            BuildError::ValueEncoding { origin, element, .. } => {
                assert_eq!(origin, "app::Ratio");
                assert_eq!(element, "Bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_collision_suffixing_never_prefix() {
        let mut graph = TypeGraph::new();
        let first = graph.record("alpha", "Config", Vec::new());
        let second = graph.record("beta", "Config", Vec::new());

        let mut config = Config::new();
        config.global.namespace_policy = NamespacePolicy::Never;
        let mut builder = Builder::new(&graph, config);
        builder.resolve(first).expect("first");
        builder.resolve(second).expect("second");

        let names: Vec<&str> = builder.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Config", "Config0"]);
    }

    #[test]
    fn test_collision_prefix_on_conflict() {
        let mut graph = TypeGraph::new();
        let first = graph.record("alpha", "Config", Vec::new());
        let second = graph.record("beta", "Config", Vec::new());

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(first).expect("first");
        builder.resolve(second).expect("second");

        let names: Vec<&str> = builder.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Config", "BetaConfig"]);
    }

    #[test]
    fn test_always_prefix_policy() {
        let mut graph = TypeGraph::new();
        let record = graph.record("app::api", "Server", Vec::new());

        let mut config = Config::new();
        config.global.namespace_policy = NamespacePolicy::Always;
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        assert_eq!(builder.records().next().expect("record").name, "ApiServer");
    }

    #[test]
    fn test_naming_exhausted() {
        let mut graph = TypeGraph::new();
        let mut ids = Vec::new();
        for _ in 0..1002 {
            ids.push(graph.record("app", "Config", Vec::new()));
        }

        let mut config = Config::new();
        config.global.namespace_policy = NamespacePolicy::Never;
        let mut builder = Builder::new(&graph, config);

        for id in &ids[..1001] {
            builder.resolve(*id).expect("within the bound");
        }

        let err = builder.resolve(ids[1001]).unwrap_err();
        match err {
            BuildError::NamingExhausted { origin, candidate } => {
                assert_eq!(origin, "app::Config");
                assert_eq!(candidate, "Config");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_root() {
        let mut graph = TypeGraph::new();
        let number = graph.scalar(ScalarKind::Int32);

        let mut builder = Builder::new(&graph, Config::new());
        let err = builder.resolve(number).unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedRoot { kind: "scalar", .. }));
    }

    #[test]
    fn test_root_pointer_indirection() {
        let mut graph = TypeGraph::new();
        let record = graph.record("app", "Server", Vec::new());
        let pointer = graph.pointer(record);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(pointer).expect("resolve");
        assert_eq!(builder.records().next().expect("record").name, "Server");
    }

    #[test]
    fn test_annotation_name_and_flags() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let record = graph.record(
            "app",
            "Endpoint",
            vec![
                FieldDescriptor::new("URL", string).with_annotation("json:\"url\""),
                FieldDescriptor::new("APIKey", string)
                    .with_annotation("json:\"apiKey,omitempty\""),
                FieldDescriptor::new("Secret", string).with_annotation("json:\"-\""),
                FieldDescriptor::new("Plain", string),
            ],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");

        let record = builder.records().next().expect("record");
        let names: Vec<&str> = record.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["url", "apiKey", "Plain"]);
        assert!(record.members[1].optional);
        assert!(!record.members[0].optional);
    }

    #[test]
    fn test_alternate_tag_key() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let record = graph.record(
            "app",
            "Endpoint",
            vec![FieldDescriptor::new("URL", string)
                .with_annotation("json:\"url\" toml:\"address\"")],
        );

        let mut config = Config::new();
        config.global.tag = "toml".to_string();
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        assert_eq!(
            builder.records().next().expect("record").members[0].name,
            "address"
        );
    }

    #[test]
    fn test_member_name_sanitization() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let record = graph.record(
            "app",
            "Endpoint",
            vec![FieldDescriptor::new("APIKey", string).with_annotation("json:\"api_key\"")],
        );

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");
        assert_eq!(
            builder.records().next().expect("record").members[0].name,
            "apikey"
        );

        let mut config = Config::new();
        config.global.keep_underscores = true;
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");
        assert_eq!(
            builder.records().next().expect("record").members[0].name,
            "api_key"
        );
    }

    #[test]
    fn test_forced_type_and_optional_override() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let record = graph.record("app", "Server", vec![FieldDescriptor::new("host", string)]);

        let mut config = Config::new();
        config.overrides.insert(
            string,
            Override {
                type_: "`${string}`".to_string(),
                optional: true,
                ..Override::default()
            },
        );
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        let member = &builder.records().next().expect("record").members[0];
        assert_eq!(member.ty, "`${string}`");
        assert!(member.optional);
    }

    #[test]
    fn test_forced_record_name_is_sanitized() {
        let mut graph = TypeGraph::new();
        let record = graph.record("app", "Server", Vec::new());

        let mut config = Config::new();
        config.overrides.insert(
            record,
            Override {
                name: "My-Server_V2".to_string(),
                ..Override::default()
            },
        );
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        assert_eq!(builder.records().next().expect("record").name, "MyServerV2");
    }

    #[test]
    fn test_namer_hook_applies() {
        let mut graph = TypeGraph::new();
        let record = graph.record("app", "Server", Vec::new());

        let mut config = Config::new();
        config.global.namer = Some(|_, name| format!("{name}Dto"));
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        assert_eq!(builder.records().next().expect("record").name, "ServerDto");
    }

    #[test]
    fn test_no_export_override() {
        let mut graph = TypeGraph::new();
        let record = graph.record("app", "Server", Vec::new());

        let mut config = Config::new();
        config.overrides.insert(
            record,
            Override {
                no_export: true,
                ..Override::default()
            },
        );
        let mut builder = Builder::new(&graph, config);
        builder.resolve(record).expect("resolve");

        assert!(!builder.records().next().expect("record").export);
    }

    #[test]
    fn test_namespaces_sorted_and_deduplicated() {
        let mut graph = TypeGraph::new();
        let beta = graph.record("beta", "B", Vec::new());
        let alpha = graph.record("alpha", "A", Vec::new());
        let alpha2 = graph.record("alpha", "A2", Vec::new());

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(beta).expect("beta");
        builder.resolve(alpha).expect("alpha");
        builder.resolve(alpha2).expect("alpha2");

        assert_eq!(builder.namespaces(), vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_finish_produces_output() {
        let mut graph = TypeGraph::new();
        let string = graph.scalar(ScalarKind::String);
        let auth = graph.anonymous_record(vec![FieldDescriptor::new("user", string)]);
        let record = graph.record("app", "Server", vec![FieldDescriptor::new("Auth", auth)]);

        let mut builder = Builder::new(&graph, Config::new());
        builder.resolve(record).expect("resolve");
        let output = builder.finish();

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].name, "Server");
        assert_eq!(output.namespaces, vec!["app".to_string()]);
    }
}
