//! Candy Compiler Driver — Salsa wiring for the AST-to-HIR body-lowering
//! core (`candy_hir_lower`).

pub mod db;
pub mod queries;
pub mod tracing_setup;

pub use db::{CompilerDb, Db};
pub use queries::{body_expressions, body_id_map, lowered_body, FunctionDecl, LoweredBody};
