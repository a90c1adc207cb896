//! Output records consumed by the documentation site.
//!
//! Every record serializes with camelCase keys. Tag lists carry one trailing
//! sentinel element so the frontend can always address the slot after the last
//! real entry.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// Display role of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Overview,
    StaticFunction,
    InstanceFunction,
    StaticProperty,
    InstanceProperty,
    Event,
    Typedef,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Overview => "overview",
            ItemType::StaticFunction => "static-function",
            ItemType::InstanceFunction => "instance-function",
            ItemType::StaticProperty => "static-property",
            ItemType::InstanceProperty => "instance-property",
            ItemType::Event => "event",
            ItemType::Typedef => "typedef",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered tag entries followed by a sentinel of the same shape.
///
/// Serializes as one flat array: `[items..., sentinel]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TagList<T> {
    items: Vec<T>,
    sentinel: T,
}

impl<T: Default> TagList<T> {
    /// Wraps `items` and appends the default value as sentinel.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            sentinel: T::default(),
        }
    }
}

impl<T: Default> Default for TagList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Default> FromIterator<T> for TagList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> TagList<T> {
    /// Real entries, without the sentinel.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn sentinel(&self) -> &T {
        &self.sentinel
    }

    /// Every serialized slot: the entries, then the sentinel.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().chain(std::iter::once(&self.sentinel))
    }
}

impl<T: Serialize> Serialize for TagList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len() + 1))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.serialize_element(&self.sentinel)?;
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for TagList<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagListVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for TagListVisitor<T>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = TagList<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a tag list ending in a sentinel element")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                let sentinel = items.pop().unwrap_or_default();
                Ok(TagList { items, sentinel })
            }
        }

        deserializer.deserialize_seq(TagListVisitor(PhantomData))
    }
}

/// Flattened type expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeView {
    pub prefix: String,
    pub names: Vec<String>,
    pub is_optional: bool,
}

impl Default for TypeView {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            names: vec![String::new()],
            is_optional: false,
        }
    }
}

/// Source link for an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeInfo {
    pub filename: String,
    pub line_num: u32,
    pub link_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamView {
    pub name: String,
    pub types: TypeView,
    pub default_val: String,
    pub description: String,
    /// Destructured sub-properties, `null` when the parameter has none.
    pub properties: Option<Box<TagList<ParamView>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnView {
    pub types: TypeView,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleView {
    pub description: String,
    pub code: String,
}

/// Render-ready record for one documented member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub pid: String,
    #[serde(rename = "override")]
    pub is_override: bool,
    pub deprecated: bool,
    pub name: String,
    pub types: TypeView,
    pub description: String,
    pub code_info: CodeInfo,
    pub sees: TagList<String>,
    pub augments: TagList<String>,
    pub todos: TagList<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<TagList<ParamView>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<TagList<ReturnView>>,
    pub examples: TagList<ExampleView>,
}

/// Persisted per-entity page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub pid: String,
    pub parent_pid: String,
    pub title: String,
    pub items: Vec<DisplayItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_list_serializes_sentinel_last() {
        let list: TagList<String> = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["a", "b", ""]));
    }

    #[test]
    fn empty_tag_list_is_just_the_sentinel() {
        let list = TagList::<ExampleView>::default();
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!([{ "description": "", "code": "" }])
        );
        assert_eq!(list.iter().count(), 1);
    }

    #[test]
    fn tag_list_deserializes_by_splitting_sentinel() {
        let list: TagList<String> = serde_json::from_value(json!(["x", ""])).unwrap();
        assert_eq!(list.items(), ["x".to_string()]);
        assert_eq!(list.sentinel(), "");
    }

    #[test]
    fn type_view_default_has_one_empty_name() {
        assert_eq!(
            serde_json::to_value(TypeView::default()).unwrap(),
            json!({ "prefix": "", "names": [""], "isOptional": false })
        );
    }

    #[test]
    fn item_type_uses_kebab_case() {
        assert_eq!(
            serde_json::to_value(ItemType::StaticFunction).unwrap(),
            json!("static-function")
        );
        assert_eq!(ItemType::InstanceProperty.to_string(), "instance-property");
    }

    #[test]
    fn param_view_sentinel_has_null_properties() {
        assert_eq!(
            serde_json::to_value(ParamView::default()).unwrap(),
            json!({
                "name": "",
                "types": { "prefix": "", "names": [""], "isOptional": false },
                "defaultVal": "",
                "description": "",
                "properties": null
            })
        );
    }
}
