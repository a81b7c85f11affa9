//! Example generating TypeScript definitions for a small config model.
//!
//! Run with: `cargo run --example generate`

use anyhow::Result;
use tyscript::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut graph = TypeGraph::new();
    let string = graph.scalar(ScalarKind::String);
    let number = graph.scalar(ScalarKind::Uint16);
    let bytes = {
        let byte = graph.scalar(ScalarKind::Uint8);
        graph.sequence(byte)
    };

    // Log level enum backed by a named scalar.
    let level = graph.named_scalar("app::logging", "Level", ScalarKind::Uint8);

    let endpoint = graph.record(
        "app::api",
        "Endpoint",
        vec![
            FieldDescriptor::new("URL", string).with_annotation("json:\"url\""),
            FieldDescriptor::new("APIKey", string).with_annotation("json:\"apiKey,omitempty\""),
        ],
    );

    let tls = graph.anonymous_record(vec![
        FieldDescriptor::new("Cert", bytes).with_annotation("json:\"cert\""),
        FieldDescriptor::new("Key", bytes).with_annotation("json:\"key\""),
    ]);

    let string_map = graph.map(string, string);

    let config = graph.record(
        "app",
        "Config",
        vec![
            FieldDescriptor::new("Endpoint", endpoint).embedded(),
            FieldDescriptor::new("Port", number).with_annotation("json:\"port\""),
            FieldDescriptor::new("TLS", tls).with_annotation("json:\"tls\""),
            FieldDescriptor::new("Labels", string_map).with_annotation("json:\"labels\""),
            FieldDescriptor::new("LogLevel", level).with_annotation("json:\"logLevel\""),
        ],
    );

    let mut builder = Builder::new(&graph, Config::new());
    builder.enums(
        level,
        vec![
            EnumValue::new("Error", 0),
            EnumValue::new("Warn", 1),
            EnumValue::new("Info", 2),
            EnumValue::new("Debug", 3),
        ],
    )?;
    builder.resolve(config)?;

    let mut docs = StaticDocs::new();
    docs.insert_type("app::Config", "Top-level application configuration.");
    docs.insert_member("app::Config", "Port", "Listen port for the public API.");

    let output = builder.finish();
    Printer::new(&output, &docs).print()?;

    Ok(())
}
