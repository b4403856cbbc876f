//! MacroCal
//!
//! An MCP server for daily calorie and macronutrient targets.

use std::path::PathBuf;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod content;
mod energy;
mod mcp;
mod models;
mod tools;

use content::ContentDoc;
use mcp::MacroCalService;

/// Get the content override path from environment or use default
fn get_content_path() -> PathBuf {
    std::env::var("MACROCAL_CONTENT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("content.json");
            path
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrocal=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Locate the optional host override document
    let content_path = get_content_path();
    eprintln!("Content override path: {}", content_path.display());

    // A missing file means defaults apply; an unreadable or unparsable one
    // is reported and ignored
    let override_doc = if content_path.exists() {
        match content::load_override(&content_path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("Ignoring content override: {}", e);
                None
            }
        }
    } else {
        None
    };

    // Resolve the content document once for the life of the process
    let resolved = ContentDoc::init(override_doc.as_ref());
    eprintln!(
        "Content resolved (override applied: {})",
        resolved.override_applied()
    );

    // Create the MacroCal service
    let service = MacroCalService::new(resolved, content_path.display().to_string());

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
