use serde::Deserialize;

/// Type expression as authored in doc comments (`{?Array<string>}` and friends).
///
/// One variant per expression tag. Tags this model does not know about land in
/// [`TypeExpr::Other`] together with their `expression` sub-node, so parsing
/// never fails on unfamiliar shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTypeExpr")]
pub enum TypeExpr {
    Nullable(Option<Box<TypeExpr>>),
    NonNullable(Option<Box<TypeExpr>>),
    Rest(Option<Box<TypeExpr>>),
    Optional(Option<Box<TypeExpr>>),
    AllLiteral,
    Union(Vec<TypeExpr>),
    Application {
        expression: Option<Box<TypeExpr>>,
        applications: Vec<TypeExpr>,
    },
    Record,
    /// A named type. The name is empty when the input omitted it.
    Name(String),
    Other {
        tag: String,
        expression: Option<Box<TypeExpr>>,
    },
}

impl TypeExpr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn union(elements: Vec<TypeExpr>) -> Self {
        Self::Union(elements)
    }

    pub fn application(expression: TypeExpr, applications: Vec<TypeExpr>) -> Self {
        Self::Application {
            expression: Some(Box::new(expression)),
            applications,
        }
    }

    pub fn nullable(expression: TypeExpr) -> Self {
        Self::Nullable(Some(Box::new(expression)))
    }

    pub fn non_nullable(expression: TypeExpr) -> Self {
        Self::NonNullable(Some(Box::new(expression)))
    }

    pub fn rest(expression: TypeExpr) -> Self {
        Self::Rest(Some(Box::new(expression)))
    }

    pub fn optional(expression: TypeExpr) -> Self {
        Self::Optional(Some(Box::new(expression)))
    }

    /// The wrapped `expression` sub-node, if this variant carries one.
    pub fn expression(&self) -> Option<&TypeExpr> {
        match self {
            TypeExpr::Nullable(expression)
            | TypeExpr::NonNullable(expression)
            | TypeExpr::Rest(expression)
            | TypeExpr::Optional(expression)
            | TypeExpr::Application { expression, .. }
            | TypeExpr::Other { expression, .. } => expression.as_deref(),
            TypeExpr::AllLiteral | TypeExpr::Union(_) | TypeExpr::Record | TypeExpr::Name(_) => {
                None
            }
        }
    }

    /// The node's own name, `None` unless it is a named type with a non-empty name.
    pub fn own_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Name(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

/// Wire shape: a tag plus whichever kind-specific fields are present.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTypeExpr {
    #[serde(rename = "type")]
    tag: Option<String>,
    expression: Option<Box<TypeExpr>>,
    elements: Option<Vec<TypeExpr>>,
    applications: Option<Vec<TypeExpr>>,
    name: Option<String>,
}

impl From<RawTypeExpr> for TypeExpr {
    fn from(raw: RawTypeExpr) -> Self {
        let RawTypeExpr {
            tag,
            expression,
            elements,
            applications,
            name,
        } = raw;

        match tag.as_deref().unwrap_or_default() {
            "NullableType" => TypeExpr::Nullable(expression),
            "NonNullableType" => TypeExpr::NonNullable(expression),
            "RestType" => TypeExpr::Rest(expression),
            "OptionalType" => TypeExpr::Optional(expression),
            "AllLiteral" => TypeExpr::AllLiteral,
            "UnionType" => TypeExpr::Union(elements.unwrap_or_default()),
            "TypeApplication" => TypeExpr::Application {
                expression,
                applications: applications.unwrap_or_default(),
            },
            "RecordType" => TypeExpr::Record,
            "NameExpression" => TypeExpr::Name(name.unwrap_or_default()),
            other => TypeExpr::Other {
                tag: other.to_string(),
                expression,
            },
        }
    }
}
