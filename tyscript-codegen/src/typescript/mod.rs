//! TypeScript generation modules.

pub mod enums;
pub mod interfaces;

pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;

use tyscript_core::DocProvider;

/// Renders the JSDoc block above a record definition, ending with a
/// reference back to the source identity.
pub(crate) fn doc_block(docs: &dyn DocProvider, origin: &str, comment: &str) -> String {
    let doc = format_docs(false, "", &docs.type_doc(origin), comment);
    format!("/**{doc}\n * @see source: <{origin}>\n */\n")
}

/// Formats documentation text as JSDoc.
///
/// With `wrap` the text becomes a standalone `/** ... */` block at the
/// given indent; without it the formatted lines are meant to be appended
/// inside an existing block.
pub(crate) fn format_docs(wrap: bool, indent: &str, doc: &str, extra: &str) -> String {
    let mut doc = doc.to_string();
    if !extra.is_empty() {
        doc.push_str(extra.trim_matches('\n'));
    }

    if doc.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    if wrap {
        output.push_str(indent);
        output.push_str("/**\n");
    }

    let body = format!("{indent} * {doc}").replace('\n', &format!("\n {indent}* "));
    output.push_str(&body);

    if wrap {
        format!("{output}\n{indent} */\n")
    } else {
        format!("\n{output}")
    }
}
