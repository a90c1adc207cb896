//! Member classification: which display tag and which builder a member gets.

use crate::items::{function_item, property_item};
use crate::location::ProjectContext;
use crate::model::{DocEntity, EntityKind, Scope};
use crate::view::{DisplayItem, ItemType};

/// Which side of the owning entity a member is declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSide {
    Static,
    Instance,
}

impl MemberSide {
    /// Anything not explicitly `instance` counts as static.
    pub fn of(scope: Option<Scope>) -> Self {
        match scope {
            Some(Scope::Instance) => MemberSide::Instance,
            Some(Scope::Static | Scope::Inner | Scope::Global | Scope::Other) | None => {
                MemberSide::Static
            }
        }
    }
}

/// Item builder a member is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builder {
    Function,
    Property,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub item_type: ItemType,
    pub builder: Builder,
}

impl Classification {
    const fn new(item_type: ItemType, builder: Builder) -> Self {
        Self { item_type, builder }
    }
}

/// Display tag and builder for a member with the given scope and kind.
pub fn classify(scope: Option<Scope>, kind: EntityKind) -> Classification {
    use Builder::{Function, Property};

    match (kind, MemberSide::of(scope)) {
        (EntityKind::Event, _) => Classification::new(ItemType::Event, Function),
        (EntityKind::Typedef, _) => Classification::new(ItemType::Typedef, Function),
        (EntityKind::Function, MemberSide::Static) => {
            Classification::new(ItemType::StaticFunction, Function)
        }
        (EntityKind::Function, MemberSide::Instance) => {
            Classification::new(ItemType::InstanceFunction, Function)
        }
        (_, MemberSide::Static) => Classification::new(ItemType::StaticProperty, Property),
        (_, MemberSide::Instance) => Classification::new(ItemType::InstanceProperty, Property),
    }
}

/// Build the display item for a member using [`classify`].
pub fn classify_member(entity: &DocEntity, project: &ProjectContext) -> DisplayItem {
    let Classification { item_type, builder } = classify(entity.scope, entity.kind);
    match builder {
        Builder::Function => function_item(entity, item_type, project),
        Builder::Property => property_item(entity, item_type, project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_and_typedefs_ignore_scope() {
        for scope in [None, Some(Scope::Static), Some(Scope::Instance)] {
            assert_eq!(classify(scope, EntityKind::Event).item_type, ItemType::Event);
            assert_eq!(classify(scope, EntityKind::Typedef).item_type, ItemType::Typedef);
            assert_eq!(classify(scope, EntityKind::Event).builder, Builder::Function);
        }
    }

    #[test]
    fn functions_split_by_scope() {
        assert_eq!(
            classify(Some(Scope::Instance), EntityKind::Function),
            Classification::new(ItemType::InstanceFunction, Builder::Function)
        );
        assert_eq!(
            classify(Some(Scope::Static), EntityKind::Function),
            Classification::new(ItemType::StaticFunction, Builder::Function)
        );
        assert_eq!(
            classify(None, EntityKind::Function).item_type,
            ItemType::StaticFunction
        );
    }

    #[test]
    fn everything_else_is_a_property() {
        assert_eq!(
            classify(Some(Scope::Instance), EntityKind::Member),
            Classification::new(ItemType::InstanceProperty, Builder::Property)
        );
        assert_eq!(
            classify(Some(Scope::Inner), EntityKind::Class),
            Classification::new(ItemType::StaticProperty, Builder::Property)
        );
        assert_eq!(
            classify(None, EntityKind::Other).item_type,
            ItemType::StaticProperty
        );
    }

    #[test]
    fn classify_member_routes_to_builder() {
        let project = ProjectContext::new("/repo", "");
        let mut event = DocEntity::new("Map#zoom", EntityKind::Event);
        event.scope = Some(Scope::Instance);
        let item = classify_member(&event, &project);
        assert_eq!(item.item_type, ItemType::Event);
        assert_eq!(item.pid, "event-zoom");
        assert!(item.params.is_some());

        let mut field = DocEntity::new("x", EntityKind::Member);
        field.scope = Some(Scope::Instance);
        let item = classify_member(&field, &project);
        assert_eq!(item.item_type, ItemType::InstanceProperty);
        assert!(item.params.is_none());
    }
}
