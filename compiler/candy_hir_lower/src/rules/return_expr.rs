use candy_diagnostic::LoweringError;
use candy_ir::{AstId, CandyType, ExprArena, ExprKind, HirExpr, HirExprKind};

use crate::context::{Context, ExpressionContext};

use super::{location, lower_unambiguous};

/// Return — §4.4. Labeled returns are preserved in the `Context` API
/// (`resolveReturn(label)`) but the rule itself always passes *absent*: the
/// parser's label channel exists for a future construct this core does not
/// lower yet (§9).
pub fn lower(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    let value = match arena.kind(id) {
        ExprKind::Return { value, .. } => *value,
        _ => unreachable!("return_expr::lower dispatched on a non-return node"),
    };
    let Some(value_id) = value else {
        return Err(vec![LoweringError::unsupported_feature(
            "a bare `return` with no value is not lowered yet",
            location(ctx, arena, id),
        )]);
    };
    let Some(scope) = ctx.resolve_return(None) else {
        return Err(vec![LoweringError::invalid_return_label(location(ctx, arena, id))]);
    };

    let child = ExpressionContext::new(ctx, Some(scope.expected_type));
    let inner = lower_unambiguous(&child, arena, value_id)?;

    let hir_id = ctx.get_id(Some(id));
    Ok(vec![HirExpr::new(
        hir_id,
        CandyType::Never,
        HirExprKind::Return {
            scope: scope.scope_id,
            value: Box::new(inner),
        },
    )])
}
