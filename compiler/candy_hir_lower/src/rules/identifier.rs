use candy_diagnostic::LoweringError;
use candy_ir::{AstId, ExprArena, ExprKind, HirExpr, HirExprKind, Name};

use crate::context::Context;

use super::location;

/// Identifier reference — §4.4.
pub fn lower(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    let name: Name = match arena.kind(id) {
        ExprKind::Identifier(name) => *name,
        _ => unreachable!("identifier::lower dispatched on a non-identifier node"),
    };
    let Some(identifier) = ctx.resolve_identifier(name) else {
        return Err(vec![LoweringError::undefined_identifier(
            ctx.db().interner().resolve(name),
            location(ctx, arena, id),
        )]);
    };
    let ty = identifier.ty();
    if !ctx.is_valid_expression_type(&ty) {
        return Ok(Vec::new());
    }
    let hir_id = ctx.get_id(Some(id));
    Ok(vec![HirExpr::new(hir_id, ty, HirExprKind::Identifier(identifier))])
}
