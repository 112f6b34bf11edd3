//! Salsa Queries - Computed values that are cached
//!
//! The three externally visible queries of §4.6, memoized on
//! [`FunctionDecl`]: a Salsa input identifying one function declaration
//! site. The actual AST/signature facts live in the driver's side table
//! (`CompilerDb::register_function`) rather than as input fields, since
//! they are assembled by collaborators this core does not own (§6).

use candy_diagnostic::{LoweringError, LoweringErrorGuaranteed};
use candy_ir::{BodyAstToHirIds, DeclarationId, HirExpr, ResourceId};

use crate::db::Db;

#[cfg(test)]
mod tests;

/// Identity of one lowering: which declaration, in which resource.
#[salsa::input]
pub struct FunctionDecl {
    #[return_ref]
    pub declaration: DeclarationId,
    pub resource: ResourceId,
}

/// `lowerBody(id)` (§4.6): `None` when the declaration has no body.
#[salsa::tracked]
pub fn lowered_body(db: &dyn Db, decl: FunctionDecl) -> Option<LoweredBody> {
    let declaration = decl.declaration(db).clone();
    let resource = decl.resource(db);
    candy_hir_lower::lower_body(db, declaration, resource).map(LoweredBody::from_result)
}

/// `getBody(id)`: projection onto the first component.
#[salsa::tracked]
pub fn body_expressions(db: &dyn Db, decl: FunctionDecl) -> Option<Result<Vec<HirExpr>, Vec<LoweringError>>> {
    lowered_body(db, decl).map(LoweredBody::into_expressions_result)
}

/// `getBodyAstToHirIds(id)`: projection onto the second component.
#[salsa::tracked]
pub fn body_id_map(db: &dyn Db, decl: FunctionDecl) -> Option<Result<BodyAstToHirIds, Vec<LoweringError>>> {
    lowered_body(db, decl).map(LoweredBody::into_id_map_result)
}

/// Salsa-cacheable result of one `lowerBody` call. `lower_body`'s tuple
/// return doesn't implement the traits a tracked function's return type
/// needs, so this flattens it into one enum tracked functions can store.
///
/// The `Err` arm carries a [`LoweringErrorGuaranteed`] alongside the
/// diagnostics: callers downstream of this query (e.g. a later pass that
/// only needs to know "did this body fail" without re-inspecting every
/// diagnostic) can hold the token instead of the whole `Vec<LoweringError>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoweredBody {
    Ok(Vec<HirExpr>, BodyAstToHirIds),
    Err(Vec<LoweringError>, LoweringErrorGuaranteed),
}

impl LoweredBody {
    fn from_result(result: Result<(Vec<HirExpr>, BodyAstToHirIds), Vec<LoweringError>>) -> Self {
        match result {
            Ok((expressions, id_map)) => LoweredBody::Ok(expressions, id_map),
            Err(errors) => {
                let guarantee = LoweringErrorGuaranteed::from_error_count(errors.len())
                    .expect("lower_body only returns Err with at least one diagnostic");
                LoweredBody::Err(errors, guarantee)
            }
        }
    }

    /// The failure token, or `None` if this lowering succeeded.
    pub fn guarantee(&self) -> Option<LoweringErrorGuaranteed> {
        match self {
            LoweredBody::Ok(..) => None,
            LoweredBody::Err(_, guarantee) => Some(*guarantee),
        }
    }

    fn into_expressions_result(self) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
        match self {
            LoweredBody::Ok(expressions, _) => Ok(expressions),
            LoweredBody::Err(errors, _) => Err(errors),
        }
    }

    fn into_id_map_result(self) -> Result<BodyAstToHirIds, Vec<LoweringError>> {
        match self {
            LoweredBody::Ok(_, id_map) => Ok(id_map),
            LoweredBody::Err(errors, _) => Err(errors),
        }
    }
}
