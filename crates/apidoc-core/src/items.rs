//! Builders for property-like and function-like display items.

use crate::location::ProjectContext;
use crate::model::{DocEntity, DocParam, EntityKind};
use crate::render::render_description;
use crate::tags::{augment_list, example_list, param_list, return_list, see_list, todo_list};
use crate::types::normalize_type;
use crate::view::{DisplayItem, ItemType};

const EXTERNAL_MARKER: &str = "external:";

/// Item with name, type and description only. The raw name doubles as pid.
pub fn property_item(
    entity: &DocEntity,
    item_type: ItemType,
    project: &ProjectContext,
) -> DisplayItem {
    DisplayItem {
        item_type,
        pid: entity.name.clone(),
        is_override: entity.is_override,
        deprecated: entity.is_deprecated(),
        name: entity.name.clone(),
        types: normalize_type(entity.type_expr.as_ref()),
        description: render_description(entity.description.as_ref()),
        code_info: project.code_info(entity.context.as_ref()),
        sees: see_list(&entity.sees),
        augments: augment_list(&entity.augments),
        todos: todo_list(&entity.todos),
        params: None,
        returns: None,
        examples: example_list(&entity.examples),
    }
}

/// Item with a formatted signature plus parameter and return lists.
pub fn function_item(
    entity: &DocEntity,
    item_type: ItemType,
    project: &ProjectContext,
) -> DisplayItem {
    let params = entity.signature_params();

    DisplayItem {
        pid: format_pid(&entity.name, entity.kind),
        name: format_name(&entity.name, entity.kind, params),
        params: Some(param_list(params)),
        returns: Some(return_list(&entity.returns)),
        ..property_item(entity, item_type, project)
    }
}

/// Display name for a function-like entity.
///
/// ```
/// use apidoc_core::{format_name, EntityKind};
/// use apidoc_core::model::DocParam;
///
/// let params = [DocParam::named("x"), DocParam::named("y")];
/// assert_eq!(format_name("Vector", EntityKind::Class, &params), "new Vector(x, y)");
/// ```
pub fn format_name(raw: &str, kind: EntityKind, params: &[DocParam]) -> String {
    match kind {
        EntityKind::Event => return after_last_hash(raw).to_string(),
        EntityKind::Typedef | EntityKind::Namespace => return raw.to_string(),
        _ => {}
    }

    let name = match raw.rfind(EXTERNAL_MARKER) {
        Some(index) => after_last_hash(&raw[index + EXTERNAL_MARKER.len()..]),
        None => raw,
    };
    let args = params
        .iter()
        .map(|param| param.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let call = format!("{name}({args})");

    if kind == EntityKind::Class {
        format!("new {call}")
    } else {
        call
    }
}

/// Stable page identifier. Events become `event-<name>` so the id carries no `#`.
pub fn format_pid(name: &str, kind: EntityKind) -> String {
    match kind {
        EntityKind::Event => format!("event-{}", after_last_hash(name)),
        _ => name.to_string(),
    }
}

fn after_last_hash(name: &str) -> &str {
    name.rsplit('#').next().unwrap_or(name)
}
