//! Input model for parsed doc-comment data.
//!
//! Every field is optional on the wire. Absent and `null` values deserialize to
//! their empty defaults so a degraded entity still produces a document.

mod rich_text;
mod type_expr;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{DocsError, Result};

pub use rich_text::{NodeKind, RichText};
pub use type_expr::TypeExpr;

/// One documented code construct and its annotation metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocEntity {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub kind: EntityKind,
    pub scope: Option<Scope>,
    #[serde(rename = "type")]
    pub type_expr: Option<TypeExpr>,
    pub description: Option<RichText>,
    pub context: Option<SourceContext>,
    #[serde(deserialize_with = "null_default")]
    pub members: Members,
    #[serde(deserialize_with = "null_default")]
    pub sees: Vec<RichText>,
    #[serde(deserialize_with = "null_default")]
    pub augments: Vec<Augment>,
    #[serde(deserialize_with = "null_default")]
    pub todos: Vec<RichText>,
    #[serde(deserialize_with = "null_default")]
    pub params: Vec<DocParam>,
    #[serde(deserialize_with = "null_default")]
    pub properties: Vec<DocParam>,
    #[serde(deserialize_with = "null_default")]
    pub returns: Vec<DocReturn>,
    #[serde(deserialize_with = "null_default")]
    pub examples: Vec<DocExample>,
    #[serde(rename = "override", deserialize_with = "null_default")]
    pub is_override: bool,
    /// Deprecation note; any value other than `null`/`false` marks the entity deprecated.
    pub deprecated: Option<Value>,
}

impl DocEntity {
    /// Creates an entity with only a name and kind set.
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        match &self.deprecated {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(_) => true,
        }
    }

    /// Parameter list used for signatures. Events and typedefs describe their
    /// shape through `properties` rather than call parameters.
    pub fn signature_params(&self) -> &[DocParam] {
        match self.kind {
            EntityKind::Event | EntityKind::Typedef => &self.properties,
            _ => &self.params,
        }
    }
}

/// Kind of a documented construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Function,
    Class,
    Event,
    Typedef,
    Namespace,
    Member,
    Constant,
    Module,
    Interface,
    Mixin,
    External,
    #[default]
    #[serde(other)]
    Other,
}

/// Declared scope of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Static,
    Instance,
    Inner,
    Global,
    #[serde(other)]
    Other,
}

/// Child members grouped by scope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Members {
    #[serde(rename = "static", deserialize_with = "null_default")]
    pub statics: Vec<DocEntity>,
    #[serde(deserialize_with = "null_default")]
    pub instance: Vec<DocEntity>,
}

/// Source location the entity was parsed from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceContext {
    /// Absolute path of the source file.
    #[serde(deserialize_with = "null_default")]
    pub file: String,
    pub loc: Option<SourceSpan>,
}

impl SourceContext {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            loc: Some(SourceSpan {
                start: SourcePosition { line, column: 0 },
            }),
        }
    }

    /// One-based start line, `0` when unknown.
    pub fn line(&self) -> u32 {
        self.loc.as_ref().map_or(0, |loc| loc.start.line)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceSpan {
    pub start: SourcePosition,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SourcePosition {
    #[serde(deserialize_with = "null_default")]
    pub line: u32,
    #[serde(deserialize_with = "null_default")]
    pub column: u32,
}

/// `@augments` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Augment {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// `@param` or `@property` entry, possibly with destructured sub-properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocParam {
    /// Dotted path such as `options.timeout`.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: Option<TypeExpr>,
    pub default: Option<Value>,
    pub description: Option<RichText>,
    pub properties: Option<Vec<DocParam>>,
}

impl DocParam {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Default value as display text. Strings are kept verbatim, other JSON
    /// values use their compact JSON form.
    pub fn default_text(&self) -> String {
        match &self.default {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// `@returns` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocReturn {
    #[serde(rename = "type")]
    pub type_expr: Option<TypeExpr>,
    pub description: Option<RichText>,
}

/// `@example` entry. `description` holds the example source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocExample {
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    pub caption: Option<RichText>,
}

/// Load the entity array produced by the comment parser.
pub fn load_entities(path: impl AsRef<Path>) -> Result<Vec<DocEntity>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|error| DocsError::io(path, error))?;
    parse_entities(path, &source)
}

/// Parse an in-memory entity array. `path` is only used for error reporting.
pub fn parse_entities(path: impl AsRef<Path>, source: &str) -> Result<Vec<DocEntity>> {
    serde_json::from_str(source).map_err(|error| DocsError::Parse {
        path: path.as_ref().to_path_buf(),
        message: error.to_string(),
    })
}

/// Deserialize `null` as the type's default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
