//! Top-level entry point: the body-lowering algorithm (§4.2.2) plus the
//! three memoized query wrappers (§4.6), below the point where `candyc`
//! wires them into Salsa.

use candy_diagnostic::{ErrorLocation, LoweringError};
use candy_ir::{BodyAstToHirIds, CandyType, DeclarationId, ExprArena, HirExpr, HirExprKind, ResourceId};

use crate::context::{Context, ExpressionContext, FunctionContext, RootContext};
use crate::merge::merge_all;
use crate::oracle::LoweringDb;
use crate::rules::lower_unambiguous;

#[cfg(test)]
mod tests;

/// `lowerBody(id)`. `None` means the declaration has no body — an
/// abstract/trait member, or a property (property initializers are out of
/// scope here, §9).
#[tracing::instrument(level = "debug", skip_all, fields(declaration = ?declaration))]
pub fn lower_body(
    db: &dyn LoweringDb,
    declaration: DeclarationId,
    resource: ResourceId,
) -> Option<Result<(Vec<HirExpr>, BodyAstToHirIds), Vec<LoweringError>>> {
    let function = db.function_ast(&declaration)?;
    let body = function.body.clone()?;
    let signature = db.function_signature(&declaration);

    let root = RootContext::new(db, declaration, resource, signature.has_this);
    let function_ctx = FunctionContext::new(&root, &function, &signature);

    let result = lower_function_body(&function_ctx, &function.arena, &body, &signature.return_type);
    if let Err(errors) = &result {
        tracing::debug!(error_count = errors.len(), "body lowering failed");
    }
    Some(result.map(|expressions| (expressions, root.into_id_map())))
}

/// `getBody(id)`: projection onto the first component of [`lower_body`].
pub fn get_body(
    db: &dyn LoweringDb,
    declaration: DeclarationId,
    resource: ResourceId,
) -> Option<Result<Vec<HirExpr>, Vec<LoweringError>>> {
    lower_body(db, declaration, resource).map(|result| result.map(|(expressions, _)| expressions))
}

/// `getBodyAstToHirIds(id)`: projection onto the second component of
/// [`lower_body`].
pub fn get_body_ast_to_hir_ids(
    db: &dyn LoweringDb,
    declaration: DeclarationId,
    resource: ResourceId,
) -> Option<Result<BodyAstToHirIds, Vec<LoweringError>>> {
    lower_body(db, declaration, resource).map(|result| result.map(|(_, id_map)| id_map))
}

/// The body-sequencing rule (§4.2.2, steps 1-4): every expression but the
/// last lowers with no expected type in a forwarding child context; the
/// last (absent entirely when the return type is `Unit`) lowers against the
/// declared return type and is wrapped in a synthesized `return` unless it
/// is already one.
fn lower_function_body(
    function_ctx: &FunctionContext<'_, '_>,
    arena: &ExprArena,
    body: &[candy_ir::AstId],
    return_type: &CandyType,
) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    let returns_unit = return_type.is_unit();

    if !returns_unit && body.is_empty() {
        return Err(vec![LoweringError::missing_return(ErrorLocation::new(
            function_ctx.resource_id(),
            function_ctx.db().declaration_span(function_ctx.declaration_id()),
        ))]);
    }

    let last_index = if returns_unit { None } else { body.len().checked_sub(1) };

    let mut results: Vec<Result<HirExpr, Vec<LoweringError>>> = Vec::with_capacity(body.len());
    for (index, expr_id) in body.iter().enumerate() {
        if Some(index) == last_index {
            continue;
        }
        let statement_ctx = ExpressionContext::with_forwarding(function_ctx, None, true);
        results.push(lower_unambiguous(&statement_ctx, arena, *expr_id));
    }

    if let Some(last_index) = last_index {
        let last_id = body[last_index];
        let tail_ctx = ExpressionContext::with_forwarding(function_ctx, Some(return_type.clone()), true);
        let lowered = lower_unambiguous(&tail_ctx, arena, last_id);
        results.push(lowered.map(|expr| wrap_in_synthesized_return(function_ctx, expr)));
    }

    merge_all(results)
}

/// §4.2.2 step 3: if the lowered tail expression is itself a `return`, keep
/// it; otherwise wrap it so I3 (§3) holds — every non-`Unit` body's last
/// node is a `return` — uniformly for downstream passes.
fn wrap_in_synthesized_return(function_ctx: &FunctionContext<'_, '_>, expr: HirExpr) -> HirExpr {
    if matches!(expr.kind, HirExprKind::Return { .. }) {
        return expr;
    }
    let scope = function_ctx.body_scope_id().clone();
    let return_id = function_ctx.get_id(None);
    HirExpr::new(
        return_id,
        CandyType::Never,
        HirExprKind::Return {
            scope,
            value: Box::new(expr),
        },
    )
}
