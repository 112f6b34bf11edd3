//! The AST-node ↔ HIR-local-id mapping every lowering produces.

use rustc_hash::FxHashMap;

use crate::ast::AstId;
use crate::decl_id::DeclarationLocalId;

/// An injective mapping from AST node identity to `DeclarationLocalId`,
/// built up append-only over one lowering (§3, I1/I2 of the invariant
/// list rely on it being total over every lowered node).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyAstToHirIds {
    ast_to_local: FxHashMap<AstId, DeclarationLocalId>,
    local_to_ast: FxHashMap<DeclarationLocalId, AstId>,
}

impl BodyAstToHirIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_by_ast(&self, ast_id: AstId) -> Option<&DeclarationLocalId> {
        self.ast_to_local.get(&ast_id)
    }

    pub fn get_by_local(&self, local_id: &DeclarationLocalId) -> Option<AstId> {
        self.local_to_ast.get(local_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ast_to_local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ast_to_local.is_empty()
    }

    /// Record `ast_id -> local_id`. Panics if either side is already
    /// recorded against a *different* counterpart — that would violate the
    /// injectivity invariant (P2) and signals an id-allocator bug, not a
    /// user error, so it surfaces as a hard failure rather than a
    /// diagnostic.
    pub fn insert(&mut self, ast_id: AstId, local_id: DeclarationLocalId) {
        if let Some(existing) = self.ast_to_local.get(&ast_id) {
            assert_eq!(
                existing, &local_id,
                "AstId {ast_id:?} already mapped to a different local id"
            );
            return;
        }
        if let Some(existing) = self.local_to_ast.get(&local_id) {
            assert_eq!(
                existing, &ast_id,
                "DeclarationLocalId {local_id:?} already mapped to a different AST node"
            );
            return;
        }
        self.ast_to_local.insert(ast_id, local_id.clone());
        self.local_to_ast.insert(local_id, ast_id);
    }
}
