use std::fmt;

use crate::error_code::LoweringErrorKind;
use crate::location::ErrorLocation;

/// A single diagnostic raised by the body-lowering core.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LoweringError {
    pub kind: LoweringErrorKind,
    pub message: String,
    pub location: ErrorLocation,
}

impl LoweringError {
    pub fn new(kind: LoweringErrorKind, message: impl Into<String>, location: ErrorLocation) -> Self {
        LoweringError {
            kind,
            message: message.into(),
            location,
        }
    }

    pub fn unsupported_feature(what: impl fmt::Display, location: ErrorLocation) -> Self {
        Self::new(
            LoweringErrorKind::UnsupportedFeature,
            format!("unsupported expression: {what}"),
            location,
        )
    }

    pub fn invalid_expression_type(message: impl Into<String>, location: ErrorLocation) -> Self {
        Self::new(LoweringErrorKind::InvalidExpressionType, message, location)
    }

    pub fn ambiguous_expression(candidate_count: usize, location: ErrorLocation) -> Self {
        Self::new(
            LoweringErrorKind::AmbiguousExpression,
            format!("expression is ambiguous: {candidate_count} candidates matched the expected type"),
            location,
        )
    }

    pub fn missing_return(location: ErrorLocation) -> Self {
        Self::new(
            LoweringErrorKind::MissingReturn,
            "function has a non-Unit return type but an empty body",
            location,
        )
    }

    pub fn invalid_return_label(location: ErrorLocation) -> Self {
        Self::new(
            LoweringErrorKind::InvalidReturnLabel,
            "`return` does not match any enclosing return scope",
            location,
        )
    }

    pub fn undefined_identifier(name: impl fmt::Display, location: ErrorLocation) -> Self {
        Self::new(
            LoweringErrorKind::UndefinedIdentifier,
            format!("undefined identifier `{name}`"),
            location,
        )
    }

    pub fn internal(message: impl Into<String>, location: ErrorLocation) -> Self {
        Self::new(LoweringErrorKind::InternalError, message, location)
    }
}

impl fmt::Display for LoweringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (at {:?})", self.kind, self.message, self.location.span)
    }
}

impl std::error::Error for LoweringError {}
