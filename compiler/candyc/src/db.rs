//! Salsa Database - THE FOUNDATION
//!
//! Wires [`candy_hir_lower::LoweringDb`] up to a concrete Salsa database so
//! `lowerBody`/`getBody`/`getBodyAstToHirIds` (§4.6) become memoized
//! queries. Everything this core treats as a collaborator (§6) — parsing,
//! declaration discovery, signature derivation, the subtyping oracle — is
//! assembled by the driver and pushed in via `register_function`, rather
//! than computed here.

use std::sync::{Arc, Mutex};

use candy_hir_lower::{FunctionSignature, LoweringDb};
use candy_ir::{CandyType, DeclarationId, FunctionAst, ResourceId, Span, StringInterner};
use rustc_hash::FxHashMap;

/// Everything `lowerBody` needs for one declaration, assembled upstream of
/// this crate.
#[derive(Clone)]
struct FunctionFacts {
    ast: FunctionAst,
    signature: FunctionSignature,
    resource: ResourceId,
    span: Span,
}

/// Database trait every query in [`crate::queries`] is written against.
#[salsa::db]
pub trait Db: salsa::Database + LoweringDb {}

/// Concrete implementation of the compiler database.
///
/// MUST implement Clone for Salsa to work.
#[salsa::db]
#[derive(Clone)]
pub struct CompilerDb {
    storage: salsa::Storage<Self>,
    interner: Arc<StringInterner>,
    functions: Arc<Mutex<FxHashMap<DeclarationId, FunctionFacts>>>,
}

impl Default for CompilerDb {
    fn default() -> Self {
        CompilerDb {
            storage: salsa::Storage::default(),
            interner: Arc::new(StringInterner::new()),
            functions: Arc::default(),
        }
    }
}

impl CompilerDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the facts a later query for `declaration` will read.
    /// Stands in for declaration discovery + signature derivation (§6),
    /// both out of scope for this core.
    pub fn register_function(
        &self,
        declaration: DeclarationId,
        resource: ResourceId,
        span: Span,
        ast: FunctionAst,
        signature: FunctionSignature,
    ) {
        self.functions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(
                declaration,
                FunctionFacts {
                    ast,
                    signature,
                    resource,
                    span,
                },
            );
    }
}

#[salsa::db]
impl Db for CompilerDb {}

#[salsa::db]
impl salsa::Database for CompilerDb {}

impl LoweringDb for CompilerDb {
    fn interner(&self) -> &StringInterner {
        &self.interner
    }

    fn function_ast(&self, declaration: &DeclarationId) -> Option<FunctionAst> {
        self.functions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(declaration)
            .map(|facts| facts.ast.clone())
    }

    fn function_signature(&self, declaration: &DeclarationId) -> FunctionSignature {
        self.functions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(declaration)
            .map(|facts| facts.signature.clone())
            .unwrap_or_else(|| FunctionSignature {
                param_types: Vec::new(),
                return_type: CandyType::Unit,
                has_this: false,
            })
    }

    fn is_assignable_to(&self, from: &CandyType, to: &CandyType) -> bool {
        basic_is_assignable_to(from, to)
    }

    fn declaration_span(&self, declaration: &DeclarationId) -> Span {
        self.functions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(declaration)
            .map(|facts| facts.span)
            .unwrap_or(Span::DUMMY)
    }
}

/// Stand-in subtyping oracle: `Never` is bottom, `Any` is top, everything
/// else is reflexive. A real driver wires in the surface type checker's
/// assignability judgment here instead (§1, §6 — out of scope for this
/// core).
fn basic_is_assignable_to(from: &CandyType, to: &CandyType) -> bool {
    if from.is_never() || matches!(to, CandyType::Any) {
        return true;
    }
    from == to
}
