//! Utility to print the resolved content document

use std::path::PathBuf;

use macrocal::content::{self, ContentDoc};

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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let content_path = get_content_path();
    eprintln!("Content override path: {}", content_path.display());

    let override_doc = if content_path.exists() {
        Some(content::load_override(&content_path)?)
    } else {
        None
    };

    let resolved = ContentDoc::resolve(override_doc.as_ref());
    println!("{}", serde_json::to_string_pretty(resolved.as_value())?);

    Ok(())
}
