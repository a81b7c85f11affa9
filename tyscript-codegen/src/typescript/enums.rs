//! Enum definition generation.

use tyscript_core::{DocProvider, Record};

use super::doc_block;

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    docs: &'a dyn DocProvider,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(docs: &'a dyn DocProvider) -> Self {
        Self { docs }
    }

    /// Generates one enum definition with its JSDoc block.
    ///
    /// Values are padded so the `=` signs align visually.
    #[must_use]
    pub fn generate(&self, record: &Record) -> String {
        let mut output = String::new();

        output.push_str(&doc_block(self.docs, &record.origin, &record.comment));

        let export = if record.export { "export " } else { "" };
        output.push_str(&format!("{export}enum {} {{\n", record.name));

        let longest = record
            .elements
            .iter()
            .map(|element| element.name.len())
            .max()
            .unwrap_or(0);

        for element in &record.elements {
            output.push_str(&format!(
                "  {:<longest$} = {},\n",
                element.name, element.value
            ));
        }

        output.push_str("};\n\n");

        output
    }
}
