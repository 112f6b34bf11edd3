//! Id allocator and AST↔HIR id map (§4.1).

use std::cell::{Cell, RefCell};

use candy_ir::{AstId, BodyAstToHirIds, DeclarationId, DeclarationLocalId};

/// Mints per-declaration local ids and remembers the AST node each was
/// assigned to.
///
/// - `get_id(None)` always returns a fresh id, never recorded in the map.
/// - `get_id(Some(ast))` is idempotent: the same AST node always gets back
///   the same id, distinct AST nodes always get distinct ids.
///
/// Shared via `&` (not `&mut`) because every context in the stack needs to
/// reach it; interior mutability keeps the allocation counter and map
/// consistent across however many contexts are alive at once.
pub struct IdAllocator {
    declaration: DeclarationId,
    next: Cell<u32>,
    id_map: RefCell<BodyAstToHirIds>,
}

impl IdAllocator {
    pub fn new(declaration: DeclarationId) -> Self {
        IdAllocator {
            declaration,
            next: Cell::new(0),
            id_map: RefCell::new(BodyAstToHirIds::new()),
        }
    }

    pub fn get_id(&self, ast: Option<AstId>) -> DeclarationLocalId {
        if let Some(ast_id) = ast {
            if let Some(existing) = self.id_map.borrow().get_by_ast(ast_id) {
                return existing.clone();
            }
        }
        let index = self.next.get();
        self.next.set(index + 1);
        let local = DeclarationLocalId::new(self.declaration.clone(), index);
        if let Some(ast_id) = ast {
            self.id_map.borrow_mut().insert(ast_id, local.clone());
        }
        local
    }

    /// A scope-identity id for the function body, used only so `return`,
    /// `break` and `continue` rules have something to point at. It is not
    /// drawn from the same monotonic counter as lowered-node ids (it
    /// doesn't correspond to any AST node, nor to a HIR node of its own)
    /// and is never recorded in the id map — it exists purely for
    /// label/scope matching.
    pub fn body_scope_id(&self) -> DeclarationLocalId {
        DeclarationLocalId::new(self.declaration.clone(), u32::MAX)
    }

    pub fn declaration(&self) -> &DeclarationId {
        &self.declaration
    }

    /// Consume the allocator, handing back the id map for a successful
    /// lowering. Once returned it is immutable (§3 lifecycle).
    pub fn into_id_map(self) -> BodyAstToHirIds {
        self.id_map.into_inner()
    }

    pub fn id_map(&self) -> std::cell::Ref<'_, BodyAstToHirIds> {
        self.id_map.borrow()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;
    use candy_ir::{DeclarationKind, ResourceId, StringInterner};

    fn decl() -> DeclarationId {
        let interner = StringInterner::new();
        DeclarationId::new(
            ResourceId::new(0),
            vec![interner.intern("f")],
            DeclarationKind::Function,
        )
    }

    #[test]
    fn none_is_always_fresh_and_unrecorded() {
        let alloc = IdAllocator::new(decl());
        let a = alloc.get_id(None);
        let b = alloc.get_id(None);
        assert_ne!(a, b);
        assert_eq!(alloc.id_map().len(), 0);
    }

    #[test]
    fn same_ast_node_is_idempotent() {
        let alloc = IdAllocator::new(decl());
        let ast = AstId::new(5);
        let a = alloc.get_id(Some(ast));
        let b = alloc.get_id(Some(ast));
        assert_eq!(a, b);
        assert_eq!(alloc.id_map().len(), 1);
    }

    #[test]
    fn distinct_ast_nodes_get_distinct_ids() {
        let alloc = IdAllocator::new(decl());
        let a = alloc.get_id(Some(AstId::new(0)));
        let b = alloc.get_id(Some(AstId::new(1)));
        assert_ne!(a, b);
    }

    #[test]
    fn counter_is_monotonic() {
        let alloc = IdAllocator::new(decl());
        let a = alloc.get_id(Some(AstId::new(0)));
        let b = alloc.get_id(None);
        let c = alloc.get_id(Some(AstId::new(1)));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(c.index(), 2);
    }
}
