//! Collaborator interfaces (§6): everything the body-lowering core
//! consumes but does not own. Lexing, parsing, top-level declaration
//! discovery, the subtyping oracle, and code generation all live on the
//! other side of this boundary.

use candy_ir::{CandyType, DeclarationId, FunctionAst, Span, StringInterner};

/// A function's resolved signature, as produced by top-level declaration
/// discovery + signature derivation (out of scope here, consumed as a
/// fact).
#[derive(Clone, Debug)]
pub struct FunctionSignature {
    /// Parameter types, positionally aligned with `FunctionAst::params`.
    pub param_types: Vec<CandyType>,
    pub return_type: CandyType,
    /// Whether an unqualified `this` resolves inside this function's body:
    /// true iff the function is a non-static member of a trait, class, or
    /// impl (§4.2.1).
    pub has_this: bool,
}

/// Everything the body-lowering core needs from the rest of the compiler.
///
/// A query-engine integration (see `candyc`) implements this against Salsa
/// queries; tests implement it against fixed-up-front fixtures.
pub trait LoweringDb {
    fn interner(&self) -> &StringInterner;

    /// `getFunctionDeclarationAst`.
    fn function_ast(&self, declaration: &DeclarationId) -> Option<FunctionAst>;

    /// `getFunctionDeclarationHir`, restricted to the parts the core needs.
    fn function_signature(&self, declaration: &DeclarationId) -> FunctionSignature;

    /// The subtyping oracle: `isAssignableTo(from, to)`.
    fn is_assignable_to(&self, from: &CandyType, to: &CandyType) -> bool;

    /// `getDeclarationAst(id)`, restricted to the span: used for diagnostics
    /// that are not attached to any single AST node (e.g. *missing-return*
    /// on an empty body).
    fn declaration_span(&self, declaration: &DeclarationId) -> Span;
}
