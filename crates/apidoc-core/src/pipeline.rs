//! Batch generation: entities in, one content document per entity out.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::info;

use crate::assemble::assemble;
use crate::error::{DocsError, Result};
use crate::location::ProjectContext;
use crate::model::DocEntity;
use crate::view::ContentDocument;
use crate::writer::{write_documents, write_index, INDEX_PID};

/// Summary of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub documents: usize,
    pub out_dir: PathBuf,
}

/// Turns top-level entities into content documents and writes them out.
#[derive(Debug, Clone)]
pub struct Generator {
    project: ProjectContext,
}

impl Generator {
    pub fn new(project: ProjectContext) -> Self {
        Self { project }
    }

    /// Document for one top-level entity. The entity name is the parent pid;
    /// the document pid is its filesystem-safe form.
    pub fn document(&self, entity: &DocEntity) -> ContentDocument {
        assemble(&sanitize_pid(&entity.name), &entity.name, entity, &self.project)
    }

    /// Assemble every entity, preserving input order.
    pub fn documents(&self, entities: &[DocEntity]) -> Vec<ContentDocument> {
        entities
            .par_iter()
            .map(|entity| self.document(entity))
            .collect()
    }

    /// Assemble and write all documents plus the navigation index into `out_dir`.
    ///
    /// Nothing is written if two documents share a pid or one claims the
    /// index's pid.
    pub fn run(&self, entities: &[DocEntity], out_dir: impl AsRef<Path>) -> Result<GenerationReport> {
        let out_dir = out_dir.as_ref();
        let documents = self.documents(entities);
        check_pids(&documents)?;

        write_documents(out_dir, &documents)?;
        write_index(out_dir, &documents)?;

        info!(
            documents = documents.len(),
            out_dir = %out_dir.display(),
            "generated API documents"
        );

        Ok(GenerationReport {
            documents: documents.len(),
            out_dir: out_dir.to_path_buf(),
        })
    }
}

fn check_pids(documents: &[ContentDocument]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(documents.len());
    for document in documents {
        if document.pid == INDEX_PID {
            return Err(DocsError::ReservedPid {
                pid: document.pid.clone(),
                name: document.parent_pid.clone(),
            });
        }
        if let Some(first) = seen.insert(&document.pid, &document.parent_pid) {
            return Err(DocsError::DuplicatePid {
                pid: document.pid.clone(),
                first: first.to_string(),
                second: document.parent_pid.clone(),
            });
        }
    }
    Ok(())
}

/// Replace every character outside `[A-Za-z0-9_-]` with `-`.
pub fn sanitize_pid(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityKind;

    #[test]
    fn sanitizes_pids() {
        assert_eq!(sanitize_pid("Vector"), "Vector");
        assert_eq!(sanitize_pid("geo.util"), "geo-util");
        assert_eq!(sanitize_pid("module:a/b#c"), "module-a-b-c");
    }

    #[test]
    fn document_uses_name_as_parent() {
        let generator = Generator::new(ProjectContext::new("/repo", ""));
        let doc = generator.document(&DocEntity::new("geo.util", EntityKind::Namespace));
        assert_eq!(doc.pid, "geo-util");
        assert_eq!(doc.parent_pid, "geo.util");
        assert_eq!(doc.title, "Geo.util");
    }

    #[test]
    fn colliding_pids_abort_before_writing() {
        let temp = tempfile::TempDir::new().unwrap();
        let out = temp.path().join("api");
        let generator = Generator::new(ProjectContext::new("/repo", ""));
        let entities = [
            DocEntity::new("geo.util", EntityKind::Namespace),
            DocEntity::new("geo-util", EntityKind::Namespace),
        ];

        let err = generator.run(&entities, &out).unwrap_err();
        match err {
            DocsError::DuplicatePid { pid, first, second } => {
                assert_eq!(pid, "geo-util");
                assert_eq!(first, "geo.util");
                assert_eq!(second, "geo-util");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn index_pid_is_reserved() {
        let temp = tempfile::TempDir::new().unwrap();
        let generator = Generator::new(ProjectContext::new("/repo", ""));
        let entities = [
            DocEntity::new("geo", EntityKind::Namespace),
            DocEntity::new("_index", EntityKind::Function),
        ];

        let err = generator.run(&entities, temp.path()).unwrap_err();
        assert!(matches!(err, DocsError::ReservedPid { ref name, .. } if name == "_index"));
        assert!(!temp.path().join("geo.json").exists());
    }

    #[test]
    fn run_counts_files_written() {
        let temp = tempfile::TempDir::new().unwrap();
        let generator = Generator::new(ProjectContext::new("/repo", ""));
        let entities = [
            DocEntity::new("geo.util", EntityKind::Namespace),
            DocEntity::new("geo", EntityKind::Namespace),
        ];

        let report = generator.run(&entities, temp.path()).unwrap();
        let files = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(files, report.documents + 1);
    }

    #[test]
    fn documents_preserve_order() {
        let generator = Generator::new(ProjectContext::new("/repo", ""));
        let entities: Vec<_> = (0..32)
            .map(|i| DocEntity::new(format!("e{i}"), EntityKind::Function))
            .collect();
        let pids: Vec<_> = generator
            .documents(&entities)
            .into_iter()
            .map(|doc| doc.pid)
            .collect();
        let expected: Vec<_> = (0..32).map(|i| format!("e{i}")).collect();
        assert_eq!(pids, expected);
    }
}
