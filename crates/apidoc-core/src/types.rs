//! Type-expression normalization into the flat `{prefix, names, isOptional}` form.

use crate::model::TypeExpr;
use crate::view::TypeView;

const UNNAMED: &str = "undefined";
const RECORD_NAME: &str = "Object";

/// Flatten a type expression for display.
///
/// A missing expression yields the default view: empty prefix, a single empty
/// name, not optional.
pub fn normalize_type(expr: Option<&TypeExpr>) -> TypeView {
    let Some(expr) = expr else {
        return TypeView::default();
    };

    TypeView {
        prefix: prefix_of(expr.expression()).to_string(),
        names: names_of(expr),
        is_optional: matches!(expr, TypeExpr::Optional(_)),
    }
}

// The prefix comes from the wrapped sub-node, not from the node itself.
fn prefix_of(inner: Option<&TypeExpr>) -> &'static str {
    match inner {
        Some(TypeExpr::Nullable(_)) => "?",
        Some(TypeExpr::NonNullable(_)) => "!",
        Some(TypeExpr::Rest(_)) => "...",
        Some(TypeExpr::AllLiteral) => "*",
        _ => "",
    }
}

fn names_of(expr: &TypeExpr) -> Vec<String> {
    match expr {
        TypeExpr::Union(elements) => elements.iter().map(union_member_name).collect(),
        TypeExpr::Application {
            expression,
            applications,
        } => vec![application_name(expression.as_deref(), applications)],
        TypeExpr::Record => vec![RECORD_NAME.to_string()],
        TypeExpr::Name(name) => vec![name.clone()],
        TypeExpr::Nullable(_)
        | TypeExpr::NonNullable(_)
        | TypeExpr::Rest(_)
        | TypeExpr::Optional(_)
        | TypeExpr::AllLiteral
        | TypeExpr::Other { .. } => vec![expr.expression().map(wrapped_name).unwrap_or_default()],
    }
}

fn union_member_name(member: &TypeExpr) -> String {
    match member {
        TypeExpr::Application {
            expression,
            applications,
        } => application_name(expression.as_deref(), applications),
        TypeExpr::Record => RECORD_NAME.to_string(),
        other => other.own_name().unwrap_or(UNNAMED).to_string(),
    }
}

fn wrapped_name(inner: &TypeExpr) -> String {
    match inner {
        TypeExpr::Application {
            expression,
            applications,
        } => application_name(expression.as_deref(), applications),
        other => other.own_name().unwrap_or_default().to_string(),
    }
}

/// `Outer.a,b,c`, with `undefined` standing in for unnamed parts.
fn application_name(expression: Option<&TypeExpr>, applications: &[TypeExpr]) -> String {
    let outer = expression.and_then(TypeExpr::own_name).unwrap_or(UNNAMED);
    let inner = applications
        .iter()
        .map(|application| application.own_name().unwrap_or(UNNAMED))
        .collect::<Vec<_>>()
        .join(",");
    format!("{outer}.{inner}")
}
