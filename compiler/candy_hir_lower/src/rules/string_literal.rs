use candy_diagnostic::LoweringError;
use candy_ir::{AstId, CandyType, ExprArena, ExprKind, HirExpr, HirExprKind, HirLiteral, HirStringPart, StringPart};

use crate::context::{Context, ExpressionContext};
use crate::merge::merge_all;

use super::lower_unambiguous;

/// String literal — §4.4. Each raw chunk passes through unchanged; each
/// interpolation lowers its inner expression in a fresh, non-forwarding
/// child context with no expected type.
pub fn lower(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    let parts = match arena.kind(id) {
        ExprKind::StringLiteral(parts) => parts,
        _ => unreachable!("string_literal::lower dispatched on a non-string-literal node"),
    };
    let ty = CandyType::String;
    if !ctx.is_valid_expression_type(&ty) {
        return Ok(Vec::new());
    }
    let lowered_parts = merge_all(parts.iter().map(|part| lower_part(ctx, arena, part)))?;
    let hir_id = ctx.get_id(Some(id));
    Ok(vec![HirExpr::new(
        hir_id,
        ty,
        HirExprKind::Literal(HirLiteral::String(lowered_parts)),
    )])
}

fn lower_part(ctx: &dyn Context, arena: &ExprArena, part: &StringPart) -> Result<HirStringPart, Vec<LoweringError>> {
    match part {
        StringPart::Literal(value) => Ok(HirStringPart::Literal(value.clone())),
        StringPart::Interpolated(inner) => {
            let child = ExpressionContext::new(ctx, None);
            let hir = lower_unambiguous(&child, arena, *inner)?;
            Ok(HirStringPart::Interpolated(Box::new(hir)))
        }
    }
}
