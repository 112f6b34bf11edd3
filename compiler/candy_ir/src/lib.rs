//! Candy IR — shared AST, HIR and type data structures.
//!
//! This crate holds only data: the parsed-body representation
//! (`ast::ExprArena`), the desugared, type-resolved output of lowering
//! (`hir::HirExpr`), the structural type system (`types::CandyType`), and
//! the identity types connecting them (`decl_id`, `id_map`). It has no
//! lowering logic of its own — that lives in `candy_hir_lower`.

pub mod ast;
pub mod decl_id;
pub mod hir;
pub mod id_map;
pub mod name;
pub mod span;
pub mod types;

pub use ast::{AstId, CallArg, ExprArena, ExprKind, ExprNode, FunctionAst, StringPart, ValueParameter};
pub use decl_id::{DeclarationId, DeclarationKind, DeclarationLocalId};
pub use hir::{HirCallArg, HirExpr, HirExprKind, HirIdentifier, HirLiteral, HirStringPart};
pub use id_map::BodyAstToHirIds;
pub use name::{Name, StringInterner};
pub use span::{ResourceId, Span};
pub use types::CandyType;
