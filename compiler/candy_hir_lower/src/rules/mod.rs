//! Lowering dispatch (§4.3) and the five fully-implemented per-construct
//! rules (§4.4): literal, string literal, return, identifier, call.
//!
//! `if`/`loop`/`while`/`break`/`continue`/`assignment` are declared AST and
//! HIR shapes (§3, §9) but have no rule here yet; dispatch reports them as
//! *unsupported-feature*.

mod call;
mod identifier;
mod literal;
mod return_expr;
mod string_literal;

use candy_diagnostic::{ErrorLocation, LoweringError};
use candy_ir::{AstId, ExprArena, ExprKind, HirExpr};

use crate::context::Context;

/// `Context.lower`: every HIR candidate whose type satisfies the context's
/// expected type. No rule in this implementation produces more than one
/// candidate — there is no overload-resolution collaborator behind
/// `resolveIdentifier` — but the list-returning shape is kept so
/// [`lower_unambiguous`] can apply one uniform empty/singleton/many rule
/// regardless of which construct produced the list.
pub fn lower(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<Vec<HirExpr>, Vec<LoweringError>> {
    match arena.kind(id) {
        ExprKind::Bool(_) | ExprKind::Int(_) => literal::lower(ctx, arena, id),
        ExprKind::StringLiteral(_) => string_literal::lower(ctx, arena, id),
        ExprKind::Identifier(_) => identifier::lower(ctx, arena, id),
        ExprKind::Return { .. } => return_expr::lower(ctx, arena, id),
        ExprKind::Call { .. } => call::lower(ctx, arena, id),
        ExprKind::If { .. }
        | ExprKind::Loop { .. }
        | ExprKind::While { .. }
        | ExprKind::Break { .. }
        | ExprKind::Continue { .. }
        | ExprKind::Assignment { .. } => Err(vec![LoweringError::unsupported_feature(
            "this expression form is not lowered yet",
            location(ctx, arena, id),
        )]),
        ExprKind::Error => Err(vec![LoweringError::unsupported_feature(
            "a malformed expression cannot be lowered",
            location(ctx, arena, id),
        )]),
    }
}

/// `Context.lowerUnambiguous` (§4.3): empty candidate list becomes
/// *invalid-expression-type*, more than one becomes *ambiguous-expression*,
/// a singleton is unwrapped.
pub fn lower_unambiguous(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> Result<HirExpr, Vec<LoweringError>> {
    let mut candidates = lower(ctx, arena, id)?;
    match candidates.len() {
        0 => Err(vec![LoweringError::invalid_expression_type(
            "no candidate lowering satisfies the expected type",
            location(ctx, arena, id),
        )]),
        1 => Ok(candidates.pop().expect("len checked above")),
        n => Err(vec![LoweringError::ambiguous_expression(n, location(ctx, arena, id))]),
    }
}

pub(crate) fn location(ctx: &dyn Context, arena: &ExprArena, id: AstId) -> ErrorLocation {
    ErrorLocation::new(ctx.resource_id(), arena.span(id))
}
