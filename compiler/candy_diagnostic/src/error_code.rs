use std::fmt;

/// Diagnostic kinds the body-lowering core can emit (§7).
///
/// `InternalError` is the only one that may short-circuit a lowering; the
/// rest are always collected into the result's error list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoweringErrorKind {
    /// An AST shape the lowering dispatch does not yet recognize.
    UnsupportedFeature,
    /// A candidate's type is not assignable to the context's expected
    /// type, or no candidate was produced at all while one was expected.
    InvalidExpressionType,
    /// More than one candidate survived expected-type filtering.
    AmbiguousExpression,
    /// A function with a non-`Unit` return type has an empty body.
    MissingReturn,
    /// `return` used where no enclosing return scope matches the label.
    InvalidReturnLabel,
    /// Name lookup failed at every scope level.
    UndefinedIdentifier,
    /// An invariant was violated (e.g. `addIdentifier` called on the root
    /// context). Never a user-facing problem.
    InternalError,
}

impl LoweringErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            LoweringErrorKind::UnsupportedFeature => "L0001",
            LoweringErrorKind::InvalidExpressionType => "L0002",
            LoweringErrorKind::AmbiguousExpression => "L0003",
            LoweringErrorKind::MissingReturn => "L0004",
            LoweringErrorKind::InvalidReturnLabel => "L0005",
            LoweringErrorKind::UndefinedIdentifier => "L0006",
            LoweringErrorKind::InternalError => "L9000",
        }
    }

    /// Whether this kind may ever short-circuit a lowering instead of
    /// being collected (§7 policy).
    pub fn is_internal(self) -> bool {
        matches!(self, LoweringErrorKind::InternalError)
    }
}

impl fmt::Display for LoweringErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoweringErrorKind::UnsupportedFeature => "unsupported-feature",
            LoweringErrorKind::InvalidExpressionType => "invalid-expression-type",
            LoweringErrorKind::AmbiguousExpression => "ambiguous-expression",
            LoweringErrorKind::MissingReturn => "missing-return",
            LoweringErrorKind::InvalidReturnLabel => "invalid-return-label",
            LoweringErrorKind::UndefinedIdentifier => "undefined-identifier",
            LoweringErrorKind::InternalError => "internal-error",
        };
        write!(f, "{name} [{}]", self.code())
    }
}
