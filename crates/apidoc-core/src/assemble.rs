//! Content assembly: one overview item, then static members, then instance members.

use tracing::debug;

use crate::items::{function_item, property_item};
use crate::location::ProjectContext;
use crate::model::{DocEntity, EntityKind};
use crate::view::{ContentDocument, DisplayItem, ItemType};

/// Assemble the page document for `entity`.
///
/// Static members are tagged `static-function` or `static-property` purely by
/// whether they are functions. Events and typedefs declared as static members
/// do not receive the `event`/`typedef` tags that
/// [`classify`](crate::classify::classify) would give them. Instance members
/// that are not functions are left out.
pub fn assemble(
    pid: &str,
    parent_pid: &str,
    entity: &DocEntity,
    project: &ProjectContext,
) -> ContentDocument {
    let statics = &entity.members.statics;
    let instance = &entity.members.instance;

    let mut items = Vec::with_capacity(1 + statics.len() + instance.len());
    items.push(function_item(entity, ItemType::Overview, project));
    items.extend(statics.iter().map(|member| static_member(member, project)));
    items.extend(
        instance
            .iter()
            .filter(|member| member.kind == EntityKind::Function)
            .map(|member| function_item(member, ItemType::InstanceFunction, project)),
    );

    let dropped = instance.len() - (items.len() - 1 - statics.len());
    debug!(
        pid,
        items = items.len(),
        dropped_instance_members = dropped,
        "assembled content document"
    );

    ContentDocument {
        pid: pid.to_string(),
        parent_pid: parent_pid.to_string(),
        title: capitalize(parent_pid),
        items,
    }
}

/// Display tag for a static member inside an assembled document.
pub fn static_item_type(kind: EntityKind) -> ItemType {
    match kind {
        EntityKind::Function => ItemType::StaticFunction,
        _ => ItemType::StaticProperty,
    }
}

fn static_member(member: &DocEntity, project: &ProjectContext) -> DisplayItem {
    let item_type = static_item_type(member.kind);
    match item_type {
        ItemType::StaticFunction => function_item(member, item_type, project),
        _ => property_item(member, item_type, project),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
