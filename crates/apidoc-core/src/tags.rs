//! Converters for each annotation tag family.
//!
//! Each converter maps its raw entries in order and returns a [`TagList`], which
//! always ends in that family's sentinel element.

use crate::highlight::highlight_script;
use crate::model::{Augment, DocExample, DocParam, DocReturn, RichText};
use crate::render::render_description;
use crate::types::normalize_type;
use crate::view::{ExampleView, ParamView, ReturnView, TagList};

/// `@see` entries as rendered HTML fragments.
pub fn see_list(sees: &[RichText]) -> TagList<String> {
    rich_text_list(sees)
}

/// `@todo` entries as rendered HTML fragments.
pub fn todo_list(todos: &[RichText]) -> TagList<String> {
    rich_text_list(todos)
}

fn rich_text_list(entries: &[RichText]) -> TagList<String> {
    entries
        .iter()
        .map(|entry| render_description(Some(entry)))
        .collect()
}

/// `@augments` entries as the raw names of the augmented types.
pub fn augment_list(augments: &[Augment]) -> TagList<String> {
    augments.iter().map(|augment| augment.name.clone()).collect()
}

/// `@param` / `@property` entries, recursing into destructured properties.
pub fn param_list(params: &[DocParam]) -> TagList<ParamView> {
    params.iter().map(param_view).collect()
}

fn param_view(param: &DocParam) -> ParamView {
    ParamView {
        name: last_segment(&param.name).to_string(),
        types: normalize_type(param.type_expr.as_ref()),
        default_val: param.default_text(),
        description: render_description(param.description.as_ref()),
        properties: param
            .properties
            .as_deref()
            .map(|properties| Box::new(param_list(properties))),
    }
}

// `options.retry.count` displays as `count`.
fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// `@returns` entries.
pub fn return_list(returns: &[DocReturn]) -> TagList<ReturnView> {
    returns
        .iter()
        .map(|entry| ReturnView {
            types: normalize_type(entry.type_expr.as_ref()),
            description: render_description(entry.description.as_ref()),
        })
        .collect()
}

/// `@example` entries with rendered caption and highlighted source.
pub fn example_list(examples: &[DocExample]) -> TagList<ExampleView> {
    examples
        .iter()
        .map(|example| ExampleView {
            description: render_description(example.caption.as_ref()),
            code: highlight_script(&example.description),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeExpr;
    use crate::view::TypeView;
    use serde_json::json;

    #[test]
    fn see_and_todo_render_each_entry() {
        let entries = vec![RichText::plain("first"), RichText::plain("line\nbreak")];
        let sees = see_list(&entries);
        assert_eq!(sees.items(), ["first".to_string(), "line<br>break".to_string()]);
        assert_eq!(sees.sentinel(), "");

        let todos = todo_list(&[]);
        assert!(todos.items().is_empty());
        assert_eq!(todos.iter().count(), 1);
    }

    #[test]
    fn augments_keep_raw_names() {
        let augments = vec![Augment {
            name: "EventEmitter".to_string(),
        }];
        assert_eq!(
            serde_json::to_value(augment_list(&augments)).unwrap(),
            json!(["EventEmitter", ""])
        );
    }

    #[test]
    fn params_use_last_path_segment_and_recurse() {
        let mut options = DocParam::named("options");
        options.type_expr = Some(TypeExpr::name("Object"));
        options.properties = Some(vec![DocParam {
            name: "options.timeout".to_string(),
            type_expr: Some(TypeExpr::name("number")),
            default: Some(json!("1000")),
            description: Some(RichText::plain("in ms")),
            properties: None,
        }]);

        let list = param_list(&[options]);
        let view = &list.items()[0];
        assert_eq!(view.name, "options");
        assert_eq!(view.types.names, vec!["Object"]);

        let nested = view.properties.as_ref().expect("nested properties");
        assert_eq!(nested.items()[0].name, "timeout");
        assert_eq!(nested.items()[0].default_val, "1000");
        assert_eq!(nested.items()[0].description, "in ms");
        assert_eq!(nested.items()[0].properties, None);
        assert_eq!(nested.sentinel(), &ParamView::default());
    }

    #[test]
    fn empty_properties_still_get_a_sentinel() {
        let mut param = DocParam::named("config");
        param.properties = Some(Vec::new());
        let list = param_list(&[param]);
        let nested = list.items()[0].properties.as_ref().unwrap();
        assert_eq!(nested.iter().count(), 1);
    }

    #[test]
    fn returns_normalize_types() {
        let returns = vec![DocReturn {
            type_expr: Some(TypeExpr::name("boolean")),
            description: Some(RichText::plain("true when found")),
        }];
        let list = return_list(&returns);
        assert_eq!(list.items()[0].types.names, vec!["boolean"]);
        assert_eq!(list.items()[0].description, "true when found");
        assert_eq!(list.sentinel().types, TypeView::default());
    }

    #[test]
    fn examples_highlight_code_and_render_caption() {
        let examples = vec![
            DocExample {
                description: "let a = 1;".to_string(),
                caption: Some(RichText::plain("Basic")),
            },
            DocExample {
                description: "a".to_string(),
                caption: None,
            },
        ];
        let list = example_list(&examples);
        assert_eq!(list.items()[0].description, "Basic");
        assert!(list.items()[0].code.contains("hljs-keyword"));
        assert_eq!(list.items()[1].description, "");
        assert_eq!(list.sentinel(), &ExampleView::default());
    }
}
