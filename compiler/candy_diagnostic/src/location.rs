use candy_ir::{ResourceId, Span};

/// Where a diagnostic should be pointed at: a resource plus the AST span of
/// the offending construct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorLocation {
    pub resource: ResourceId,
    pub span: Span,
}

impl ErrorLocation {
    pub fn new(resource: ResourceId, span: Span) -> Self {
        ErrorLocation { resource, span }
    }
}
