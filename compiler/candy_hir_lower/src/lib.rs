//! Candy HIR Lower — the AST-to-HIR body-lowering core.
//!
//! Takes a parsed function body, resolves every expression against a
//! lexical scope, checks each against an expected type, and emits a
//! desugared HIR tree in which every node carries a stable local id and a
//! resolved type. Lexing, parsing, declaration discovery, subtyping, and
//! code generation are all collaborators consumed through [`oracle`].

pub mod context;
pub mod id_alloc;
pub mod lower;
pub mod merge;
pub mod oracle;
pub mod rules;

pub use context::{Context, ExpressionContext, FunctionContext, LoopScope, ReturnScope, RootContext};
pub use id_alloc::IdAllocator;
pub use lower::{get_body, get_body_ast_to_hir_ids, lower_body};
pub use oracle::{FunctionSignature, LoweringDb};
