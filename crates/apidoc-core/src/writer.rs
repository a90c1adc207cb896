//! Persists content documents as `<out_dir>/<pid>.json`.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::{DocsError, Result};
use crate::view::ContentDocument;

/// Pid of the navigation index written next to the documents.
pub const INDEX_PID: &str = "_index";

/// File name of the navigation index.
pub const INDEX_FILE: &str = "_index.json";

/// Write every document in parallel. The first failure aborts the batch.
pub fn write_documents(out_dir: &Path, documents: &[ContentDocument]) -> Result<()> {
    ensure_dir(out_dir)?;
    documents
        .par_iter()
        .try_for_each(|document| write_document(out_dir, document))
}

/// Write one document, creating `out_dir` first if needed.
pub fn write_document(out_dir: &Path, document: &ContentDocument) -> Result<()> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(format!("{}.json", document.pid));
    write_json(&path, &document.pid, document)?;
    debug!(path = %path.display(), "wrote content document");
    Ok(())
}

/// Navigation entry for one document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexEntry<'a> {
    pid: &'a str,
    title: &'a str,
}

/// Write the ordered `{pid, title}` list used by the site navigation.
pub fn write_index(out_dir: &Path, documents: &[ContentDocument]) -> Result<()> {
    ensure_dir(out_dir)?;
    let entries: Vec<_> = documents
        .iter()
        .map(|document| IndexEntry {
            pid: &document.pid,
            title: &document.title,
        })
        .collect();
    write_json(&out_dir.join(INDEX_FILE), INDEX_FILE, &entries)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|error| DocsError::io(dir, error))
}

// serde_json's pretty printer indents with two spaces.
fn write_json<T: Serialize + ?Sized>(path: &Path, pid: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|error| DocsError::Serialize {
        pid: pid.to_string(),
        error,
    })?;
    fs::write(path, json).map_err(|error| DocsError::io(path, error))
}
