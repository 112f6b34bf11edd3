use candy_diagnostic::LoweringError;
use candy_ir::{AstId, CandyType, ExprArena, ExprKind, HirCallArg, HirExpr, HirExprKind};

use crate::context::{Context, ExpressionContext};
use crate::merge::merge_all;

use super::lower_unambiguous;

/// Call — §4.4. The target is lowered with no expected type (this
/// implementation has no overload-resolution collaborator to narrow it
/// against); each argument is then lowered with the matching parameter's
/// declared type as its expected type when the target's resolved type is a
/// function type, and with no expected type otherwise.
pub fn lower(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    let (target_id, args) = match arena.kind(id) {
        ExprKind::Call { target, args } => (*target, args.clone()),
        _ => unreachable!("call::lower dispatched on a non-call node"),
    };

    let target_ctx = ExpressionContext::new(ctx, None);
    let target = lower_unambiguous(&target_ctx, arena, target_id)?;

    let param_types: Option<Vec<CandyType>> = match &target.ty {
        CandyType::Function { parameters, .. } => Some(parameters.clone()),
        _ => None,
    };

    let lowered_args = merge_all(args.iter().enumerate().map(|(index, arg)| {
        let expected = param_types.as_ref().and_then(|params| params.get(index).cloned());
        let arg_ctx = ExpressionContext::new(ctx, expected);
        lower_unambiguous(&arg_ctx, arena, arg.value).map(|value| HirCallArg { name: arg.name, value })
    }))?;

    let return_type = match &target.ty {
        CandyType::Function { return_type, .. } => (**return_type).clone(),
        _ => CandyType::Any,
    };
    if !ctx.is_valid_expression_type(&return_type) {
        return Ok(Vec::new());
    }

    let hir_id = ctx.get_id(Some(id));
    Ok(vec![HirExpr::new(
        hir_id,
        return_type,
        HirExprKind::Call {
            target: Box::new(target),
            args: lowered_args,
        },
    )])
}
