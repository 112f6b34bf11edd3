use std::cell::RefCell;

use rustc_hash::FxHashMap;

use candy_diagnostic::LoweringError;
use candy_ir::{AstId, CandyType, DeclarationId, DeclarationLocalId, FunctionAst, HirIdentifier, Name, ResourceId};

use crate::oracle::{FunctionSignature, LoweringDb};

use super::{Context, LoopScope, ReturnScope, RootContext};

/// Child of a root context. Binds value parameters as identifiers,
/// remembers the declared return type, and owns the scope id that
/// `return`/`break`/`continue` resolve against for this function.
pub struct FunctionContext<'r, 'db> {
    root: &'r RootContext<'db>,
    identifiers: RefCell<FxHashMap<Name, HirIdentifier>>,
    return_type: CandyType,
    function_name: Name,
    body_scope_id: DeclarationLocalId,
}

impl<'r, 'db> FunctionContext<'r, 'db> {
    /// Builds the parameter bindings (§4.2.2 step 2): each value
    /// parameter's local id is allocated *now*, against its AST id, before
    /// any body expression is lowered.
    pub fn new(root: &'r RootContext<'db>, function: &FunctionAst, signature: &FunctionSignature) -> Self {
        let mut identifiers = FxHashMap::default();
        for (param, ty) in function.params.iter().zip(signature.param_types.iter()) {
            let id = root.get_id(Some(param.ast_id));
            identifiers.insert(
                param.name,
                HirIdentifier::Parameter {
                    id,
                    name: param.name,
                    ty: ty.clone(),
                },
            );
        }
        FunctionContext {
            root,
            identifiers: RefCell::new(identifiers),
            return_type: signature.return_type.clone(),
            function_name: function.name,
            body_scope_id: root.allocator().body_scope_id(),
        }
    }

    pub fn return_type(&self) -> &CandyType {
        &self.return_type
    }

    pub fn body_scope_id(&self) -> &DeclarationLocalId {
        &self.body_scope_id
    }
}

impl Context for FunctionContext<'_, '_> {
    fn db(&self) -> &dyn LoweringDb {
        self.root.db()
    }

    fn declaration_id(&self) -> &DeclarationId {
        self.root.declaration_id()
    }

    fn resource_id(&self) -> ResourceId {
        self.root.resource_id()
    }

    fn expression_type(&self) -> Option<&CandyType> {
        None
    }

    fn get_id(&self, ast: Option<AstId>) -> DeclarationLocalId {
        self.root.get_id(ast)
    }

    fn resolve_identifier(&self, name: Name) -> Option<HirIdentifier> {
        if let Some(identifier) = self.identifiers.borrow().get(&name) {
            return Some(identifier.clone());
        }
        self.root.resolve_identifier(name)
    }

    fn add_identifier(&self, identifier: HirIdentifier) -> Result<(), LoweringError> {
        if let Some(name) = identifier.name() {
            self.identifiers.borrow_mut().insert(name, identifier);
        }
        Ok(())
    }

    fn resolve_return(&self, label: Option<Name>) -> Option<ReturnScope> {
        match label {
            None => Some(ReturnScope {
                scope_id: self.body_scope_id.clone(),
                expected_type: self.return_type.clone(),
            }),
            Some(label) if label == self.function_name => Some(ReturnScope {
                scope_id: self.body_scope_id.clone(),
                expected_type: self.return_type.clone(),
            }),
            Some(_) => None,
        }
    }

    fn resolve_break(&self, _label: Option<Name>) -> Option<LoopScope> {
        None
    }

    fn resolve_continue(&self, _label: Option<Name>) -> Option<LoopScope> {
        None
    }
}
