use candy_diagnostic::LoweringError;
use candy_ir::{AstId, CandyType, DeclarationId, DeclarationLocalId, HirIdentifier, Name, ResourceId};

use crate::oracle::LoweringDb;

use super::{Context, LoopScope, ReturnScope};

/// A lightweight scope pushed around one expression to carry an expected
/// type (§4.2.3). Everything except `expression_type` and `add_identifier`
/// forwards straight to the parent — an expression context never
/// introduces scope targets of its own.
pub struct ExpressionContext<'p> {
    parent: &'p dyn Context,
    expected_type: Option<CandyType>,
    forwards_identifiers: bool,
}

impl<'p> ExpressionContext<'p> {
    /// `forwards_identifiers` models "this expression's bindings should be
    /// visible to the siblings that follow it" (top-level body statements,
    /// §4.2.2 step 2) vs "this is a nested operand position whose locals
    /// must not leak" (everything else, §4.2.3).
    pub fn new(parent: &'p dyn Context, expected_type: Option<CandyType>) -> Self {
        Self::with_forwarding(parent, expected_type, false)
    }

    pub fn with_forwarding(parent: &'p dyn Context, expected_type: Option<CandyType>, forwards_identifiers: bool) -> Self {
        ExpressionContext {
            parent,
            expected_type,
            forwards_identifiers,
        }
    }
}

impl Context for ExpressionContext<'_> {
    fn db(&self) -> &dyn LoweringDb {
        self.parent.db()
    }

    fn declaration_id(&self) -> &DeclarationId {
        self.parent.declaration_id()
    }

    fn resource_id(&self) -> ResourceId {
        self.parent.resource_id()
    }

    fn expression_type(&self) -> Option<&CandyType> {
        self.expected_type.as_ref()
    }

    fn get_id(&self, ast: Option<AstId>) -> DeclarationLocalId {
        self.parent.get_id(ast)
    }

    fn resolve_identifier(&self, name: Name) -> Option<HirIdentifier> {
        self.parent.resolve_identifier(name)
    }

    fn add_identifier(&self, identifier: HirIdentifier) -> Result<(), LoweringError> {
        if self.forwards_identifiers {
            self.parent.add_identifier(identifier)
        } else {
            // Invisible outside this expression: swallowed, not an error.
            Ok(())
        }
    }

    fn resolve_return(&self, label: Option<Name>) -> Option<ReturnScope> {
        self.parent.resolve_return(label)
    }

    fn resolve_break(&self, label: Option<Name>) -> Option<LoopScope> {
        self.parent.resolve_break(label)
    }

    fn resolve_continue(&self, label: Option<Name>) -> Option<LoopScope> {
        self.parent.resolve_continue(label)
    }
}
