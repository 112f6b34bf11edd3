//! `CandyType` — the structural type system the lowering core checks
//! against. Assignability itself is an external oracle (§6); this module
//! only defines the shapes that oracle reasons about.

use std::fmt;

use crate::name::{Name, StringInterner};

/// A structural type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CandyType {
    Unit,
    Never,
    Bool,
    Int,
    Float,
    Number,
    String,
    Any,
    /// A user-defined (named) type, optionally qualified by a parent module
    /// and instantiated with type arguments.
    Named {
        name: Name,
        parent_module: Option<Name>,
        type_arguments: Vec<CandyType>,
    },
    Tuple(Vec<CandyType>),
    Function {
        receiver: Option<Box<CandyType>>,
        parameters: Vec<CandyType>,
        return_type: Box<CandyType>,
    },
    Union(Vec<CandyType>),
    Intersection(Vec<CandyType>),
    TypeParameter(Name),
    /// The type of a `reflection` target: metadata about a declaration.
    Reflection(Name),
    /// `This` — resolved to the enclosing type by downstream consumers;
    /// the lowering core treats it as an opaque placeholder.
    This,
}

impl CandyType {
    pub fn named(name: Name) -> Self {
        CandyType::Named {
            name,
            parent_module: None,
            type_arguments: Vec::new(),
        }
    }

    /// `Never` is assignable to everything and is the type of any
    /// diverging expression (I2, `return`'s own type).
    pub fn is_never(&self) -> bool {
        matches!(self, CandyType::Never)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, CandyType::Unit)
    }

    pub fn display(&self, interner: &StringInterner) -> String {
        match self {
            CandyType::Unit => "Unit".to_string(),
            CandyType::Never => "Never".to_string(),
            CandyType::Bool => "Bool".to_string(),
            CandyType::Int => "Int".to_string(),
            CandyType::Float => "Float".to_string(),
            CandyType::Number => "Number".to_string(),
            CandyType::String => "String".to_string(),
            CandyType::Any => "Any".to_string(),
            CandyType::This => "This".to_string(),
            CandyType::TypeParameter(name) => interner.resolve(*name),
            CandyType::Reflection(name) => format!("Reflection<{}>", interner.resolve(*name)),
            CandyType::Named {
                name,
                type_arguments,
                ..
            } => {
                if type_arguments.is_empty() {
                    interner.resolve(*name)
                } else {
                    let args = type_arguments
                        .iter()
                        .map(|t| t.display(interner))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{}<{args}>", interner.resolve(*name))
                }
            }
            CandyType::Tuple(items) => {
                let items = items
                    .iter()
                    .map(|t| t.display(interner))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({items})")
            }
            CandyType::Function {
                receiver,
                parameters,
                return_type,
            } => {
                let params = parameters
                    .iter()
                    .map(|t| t.display(interner))
                    .collect::<Vec<_>>()
                    .join(", ");
                let recv = receiver
                    .as_ref()
                    .map(|r| format!("{}.", r.display(interner)))
                    .unwrap_or_default();
                format!("{recv}({params}) -> {}", return_type.display(interner))
            }
            CandyType::Union(members) => members
                .iter()
                .map(|t| t.display(interner))
                .collect::<Vec<_>>()
                .join(" | "),
            CandyType::Intersection(members) => members
                .iter()
                .map(|t| t.display(interner))
                .collect::<Vec<_>>()
                .join(" & "),
        }
    }
}

impl fmt::Display for CandyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug-ish fallback for contexts without an interner at hand;
        // `CandyType::display` is preferred whenever one is available.
        write!(f, "{self:?}")
    }
}
