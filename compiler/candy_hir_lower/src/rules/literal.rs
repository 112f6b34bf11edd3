use candy_diagnostic::LoweringError;
use candy_ir::{AstId, CandyType, ExprArena, ExprKind, HirExpr, HirExprKind, HirLiteral};

use crate::context::Context;

/// Literal (`Bool`, `Int`) — §4.4.
pub fn lower(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    let (literal, ty) = match arena.kind(id) {
        ExprKind::Bool(value) => (HirLiteral::Bool(*value), CandyType::Bool),
        ExprKind::Int(value) => (HirLiteral::Int(*value), CandyType::Int),
        _ => unreachable!("literal::lower dispatched on a non-literal node"),
    };
    if !ctx.is_valid_expression_type(&ty) {
        return Ok(Vec::new());
    }
    let hir_id = ctx.get_id(Some(id));
    Ok(vec![HirExpr::new(hir_id, ty, HirExprKind::Literal(literal))])
}
