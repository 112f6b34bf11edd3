use candy_diagnostic::{ErrorLocation, LoweringError};
use candy_ir::{AstId, CandyType, DeclarationId, DeclarationLocalId, HirIdentifier, Name, ResourceId, Span};

use crate::id_alloc::IdAllocator;
use crate::oracle::LoweringDb;

use super::{Context, LoopScope, ReturnScope};

/// The outermost scope bound to a declaration. Owns the id allocator and
/// the id map; has no parent.
pub struct RootContext<'db> {
    db: &'db dyn LoweringDb,
    declaration: DeclarationId,
    resource: ResourceId,
    alloc: IdAllocator,
    this_name: Name,
    has_this: bool,
}

impl<'db> RootContext<'db> {
    pub fn new(
        db: &'db dyn LoweringDb,
        declaration: DeclarationId,
        resource: ResourceId,
        has_this: bool,
    ) -> Self {
        let this_name = db.interner().intern("this");
        RootContext {
            db,
            alloc: IdAllocator::new(declaration.clone()),
            declaration,
            resource,
            this_name,
            has_this,
        }
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.alloc
    }

    pub fn into_id_map(self) -> candy_ir::BodyAstToHirIds {
        self.alloc.into_id_map()
    }
}

impl Context for RootContext<'_> {
    fn db(&self) -> &dyn LoweringDb {
        self.db
    }

    fn declaration_id(&self) -> &DeclarationId {
        &self.declaration
    }

    fn resource_id(&self) -> ResourceId {
        self.resource
    }

    fn expression_type(&self) -> Option<&CandyType> {
        None
    }

    fn get_id(&self, ast: Option<AstId>) -> DeclarationLocalId {
        self.alloc.get_id(ast)
    }

    fn resolve_identifier(&self, name: Name) -> Option<HirIdentifier> {
        if self.has_this && name == self.this_name {
            Some(HirIdentifier::This)
        } else {
            None
        }
    }

    fn add_identifier(&self, _identifier: HirIdentifier) -> Result<(), LoweringError> {
        Err(LoweringError::internal(
            "addIdentifier called on the root context: root is not a binding scope",
            ErrorLocation::new(self.resource, Span::DUMMY),
        ))
    }

    fn resolve_return(&self, _label: Option<Name>) -> Option<ReturnScope> {
        None
    }

    fn resolve_break(&self, _label: Option<Name>) -> Option<LoopScope> {
        None
    }

    fn resolve_continue(&self, _label: Option<Name>) -> Option<LoopScope> {
        None
    }
}
