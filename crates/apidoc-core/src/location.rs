use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::model::SourceContext;
use crate::view::CodeInfo;

/// Project-wide inputs needed to build source permalinks.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    repository_base: String,
}

impl ProjectContext {
    /// `repository_base` is the permalink prefix that relative paths are
    /// appended to, e.g. `https://github.com/org/repo/blob/v1.2.0/`.
    pub fn new(root: impl Into<PathBuf>, repository_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            repository_base: repository_base.into(),
        }
    }

    /// Resolve file name, line and permalink for an entity's source context.
    pub fn code_info(&self, context: Option<&SourceContext>) -> CodeInfo {
        let Some(context) = context else {
            return CodeInfo::default();
        };
        if context.file.is_empty() {
            return CodeInfo {
                line_num: context.line(),
                ..CodeInfo::default()
            };
        }

        let file = Path::new(&context.file);
        let filename = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let link_url = self
            .relative_path(file)
            .map(|path| format!("{}{}", self.repository_base, path))
            .unwrap_or_default();

        CodeInfo {
            filename,
            line_num: context.line(),
            link_url,
        }
    }

    /// `/`-joined path below the root, or `None` when there is no permalink for it.
    fn relative_path(&self, file: &Path) -> Option<String> {
        let Ok(relative) = file.strip_prefix(&self.root) else {
            warn!(
                file = %file.display(),
                root = %self.root.display(),
                "source file is outside the project root"
            );
            return None;
        };

        let path = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                Component::ParentDir => Some("..".into()),
                Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/acme/geo/blob/v2.1.0/";

    #[test]
    fn resolves_relative_permalink() {
        let project = ProjectContext::new("/work/geo", BASE);
        let info = project.code_info(Some(&SourceContext::new("/work/geo/src/vector.js", 42)));
        assert_eq!(info.filename, "vector.js");
        assert_eq!(info.line_num, 42);
        assert_eq!(
            info.link_url,
            "https://github.com/acme/geo/blob/v2.1.0/src/vector.js"
        );
    }

    #[test]
    fn missing_context_is_empty() {
        let project = ProjectContext::new("/work/geo", BASE);
        assert_eq!(project.code_info(None), CodeInfo::default());
    }

    #[test]
    fn empty_file_keeps_line_only() {
        let project = ProjectContext::new("/work/geo", BASE);
        let info = project.code_info(Some(&SourceContext::new("", 7)));
        assert_eq!(info.filename, "");
        assert_eq!(info.line_num, 7);
        assert_eq!(info.link_url, "");
    }

    #[test]
    fn file_outside_root_has_no_link() {
        let project = ProjectContext::new("/work/geo", BASE);
        let info = project.code_info(Some(&SourceContext::new("/opt/lib/util.js", 1)));
        assert_eq!(info.filename, "util.js");
        assert_eq!(info.line_num, 1);
        assert_eq!(info.link_url, "");
    }
}
