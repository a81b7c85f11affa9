//! Interface definition generation.

use tyscript_core::{DocProvider, Member, Record};

use super::{doc_block, format_docs};

/// Generator for interface definitions.
pub struct InterfaceGenerator<'a> {
    docs: &'a dyn DocProvider,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(docs: &'a dyn DocProvider) -> Self {
        Self { docs }
    }

    /// Generates one interface definition with its JSDoc block.
    #[must_use]
    pub fn generate(&self, record: &Record) -> String {
        let mut output = String::new();

        output.push_str(&doc_block(self.docs, &record.origin, &record.comment));

        let export = if record.export { "export " } else { "" };
        if record.extends.is_empty() {
            output.push_str(&format!("{export}interface {} {{", record.name));
        } else {
            output.push_str(&format!(
                "{export}interface {} extends {} {{",
                record.name,
                record.extends.join(", ")
            ));
        }

        if !record.members.is_empty() {
            output.push('\n');
        }

        for member in &record.members {
            self.generate_member(&mut output, member, "  ");
        }

        output.push_str("};\n\n");

        output
    }

    /// Generates one member line, or an inline object block for members
    /// carrying nested members.
    fn generate_member(&self, output: &mut String, member: &Member, indent: &str) {
        let doc = format_docs(
            true,
            indent,
            &self
                .docs
                .member_doc(&member.source.type_origin, &member.source.field),
            &member.comment,
        );

        if !member.is_inline() {
            let optional = if member.optional { "?" } else { "" };
            output.push_str(&format!(
                "{doc}{indent}{}{optional}: {};\n",
                member.name, member.ty
            ));
            return;
        }

        let nullable = if member.optional { "null | " } else { "" };
        output.push_str(&format!("{indent}{}: {nullable}{{\n", member.name));

        for nested in &member.members {
            self.generate_member(output, nested, &format!("{indent}  "));
        }

        output.push_str(&format!("{indent}}};\n"));
    }
}
