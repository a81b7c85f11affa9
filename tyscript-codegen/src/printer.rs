//! Rendering of the resolved output model.
//!
//! Emission happens strictly after resolution: the printer borrows a
//! finalized `Output` and never feeds back into the build.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tyscript_core::{DocProvider, Output};

use crate::error::EmitError;
use crate::typescript::{EnumGenerator, InterfaceGenerator};

/// Banner printed before anything else.
pub const HEADER: &str = "/* Auto-generated. DO NOT EDIT.\n\
                          \x20* Edit the source definitions and rerun the generator to make updates.\n\
                          \x20*/\n\n";

/// Renders an output model as TypeScript definition text.
pub struct Printer<'a> {
    output: &'a Output,
    docs: &'a dyn DocProvider,
}

impl<'a> Printer<'a> {
    /// Creates a printer over a finalized output model.
    #[must_use]
    pub fn new(output: &'a Output, docs: &'a dyn DocProvider) -> Self {
        Self { output, docs }
    }

    /// Renders all records to a writer.
    ///
    /// # Errors
    /// Returns `EmitError::EmptyOutput` if there are no records, or
    /// `EmitError::Io` on write failures.
    pub fn render(&self, writer: &mut dyn Write) -> Result<(), EmitError> {
        if self.output.is_empty() {
            return Err(EmitError::EmptyOutput);
        }

        write!(writer, "{HEADER}")?;

        let interfaces = InterfaceGenerator::new(self.docs);
        let enums = EnumGenerator::new(self.docs);

        for record in &self.output.records {
            let text = if record.is_enum() {
                enums.generate(record)
            } else {
                interfaces.generate(record)
            };
            writer.write_all(text.as_bytes())?;
        }

        if !self.output.namespaces.is_empty() {
            writeln!(writer, "// Namespaces resolved:")?;
            for (index, namespace) in self.output.namespaces.iter().enumerate() {
                writeln!(writer, "// {:3}. {}", index + 1, namespace)?;
            }
        }

        Ok(())
    }

    /// Renders all records to a string.
    ///
    /// # Errors
    /// Returns `EmitError::EmptyOutput` if there are no records.
    pub fn render_to_string(&self) -> Result<String, EmitError> {
        let mut buffer = Vec::new();
        self.render(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Renders all records to stdout.
    ///
    /// # Errors
    /// Returns `EmitError::EmptyOutput` if there are no records, or
    /// `EmitError::Io` on write failures.
    pub fn print(&self) -> Result<(), EmitError> {
        self.render(&mut io::stdout())
    }

    /// Renders all records to a file.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    ///
    /// # Errors
    /// Returns `EmitError::EmptyOutput` if there are no records,
    /// `EmitError::OutputExists` if the target exists without `overwrite`,
    /// or `EmitError::Io` on create/write failures.
    pub fn write_file(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<(), EmitError> {
        let path = path.as_ref();

        if self.output.is_empty() {
            return Err(EmitError::EmptyOutput);
        }

        if path.exists() && !overwrite {
            return Err(EmitError::OutputExists {
                path: path.to_path_buf(),
            });
        }

        let mut file = File::create(path)?;
        self.render(&mut file)
    }
}
