#![deny(clippy::all)]

//! Display-document generation for the API documentation site.
//!
//! This crate provides:
//! - A lenient input model for parsed doc-comment entities ([`model`]).
//! - The type-expression normalizer, rich-text renderer and tag-list transformers.
//! - Item builders, the member classifier and the content assembler that
//!   produce one [`ContentDocument`] per documented entity.
//! - A writer that persists documents as pretty-printed JSON.

pub mod assemble;
pub mod classify;
pub mod error;
pub mod highlight;
pub mod items;
pub mod location;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod tags;
pub mod types;
pub mod view;
pub mod writer;

pub use assemble::assemble;
pub use classify::{classify, classify_member, Builder, Classification, MemberSide};
pub use error::{DocsError, Result};
pub use items::{format_name, format_pid, function_item, property_item};
pub use location::ProjectContext;
pub use model::{DocEntity, EntityKind, RichText, Scope, TypeExpr};
pub use pipeline::{sanitize_pid, GenerationReport, Generator};
pub use render::render_description;
pub use types::normalize_type;
pub use view::{
    CodeInfo, ContentDocument, DisplayItem, ExampleView, ItemType, ParamView, ReturnView, TagList,
    TypeView,
};
pub use writer::{write_documents, write_index};
