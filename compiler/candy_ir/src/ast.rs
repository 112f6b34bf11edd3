//! Parsed function bodies.
//!
//! Flat arena of `Expr` nodes, indexed by `AstId`. No `Box<Expr>`: children
//! are referenced by index so the body-lowering core can use the same
//! integer as both "which AST node is this" and "has this node already been
//! assigned a HIR id" (see `candy_ir::id_map`).

use crate::name::Name;
use crate::span::Span;

/// Index of a node in an `ExprArena`. This is the "AST node's own integer
/// id from parsing" that `DeclarationLocalId` allocation keys off of.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct AstId(u32);

impl AstId {
    pub const INVALID: AstId = AstId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        AstId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl std::fmt::Debug for AstId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AstId({})", self.0)
    }
}

/// One part of a (possibly interpolated) string literal.
#[derive(Clone, Debug)]
pub enum StringPart {
    /// A raw, already-unescaped chunk of the literal.
    Literal(String),
    /// `$expr` / `${expr}` — the inner expression to lower and stringify.
    Interpolated(AstId),
}

/// A single call argument.
#[derive(Copy, Clone, Debug)]
pub struct CallArg {
    pub name: Option<Name>,
    pub value: AstId,
}

/// The surface-syntax shape of one expression node.
///
/// Only the variants the current lowering dispatch fully implements
/// (`Bool`, `Int`, `StringLiteral`, `Return`) carry lowering logic; the rest
/// are declared so dispatch is exhaustive and so that an unimplemented
/// construct produces `unsupported-feature` rather than failing to parse.
#[derive(Clone, Debug)]
pub enum ExprKind {
    Bool(bool),
    Int(i64),
    StringLiteral(Vec<StringPart>),
    Identifier(Name),
    Return {
        label: Option<Name>,
        value: Option<AstId>,
    },
    Call {
        target: AstId,
        args: Vec<CallArg>,
    },
    If {
        condition: AstId,
        then_branch: AstId,
        else_branch: Option<AstId>,
    },
    Loop {
        body: AstId,
    },
    While {
        condition: AstId,
        body: AstId,
    },
    Break {
        label: Option<Name>,
        value: Option<AstId>,
    },
    Continue {
        label: Option<Name>,
    },
    Assignment {
        target: AstId,
        value: AstId,
    },
    /// A node the parser already flagged as malformed.
    Error,
}

/// One arena-allocated AST node.
#[derive(Clone, Debug)]
pub struct ExprNode {
    pub span: Span,
    pub kind: ExprKind,
}

/// Contiguous storage for every expression parsed out of one declaration's
/// source.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    nodes: Vec<ExprNode>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: Span, kind: ExprKind) -> AstId {
        let index = u32::try_from(self.nodes.len()).expect("expression arena capacity exceeded");
        self.nodes.push(ExprNode { span, kind });
        AstId::new(index)
    }

    pub fn get(&self, id: AstId) -> &ExprNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: AstId) -> &ExprKind {
        &self.nodes[id.index()].kind
    }

    pub fn span(&self, id: AstId) -> Span {
        self.nodes[id.index()].span
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A value parameter's occurrence in a function signature.
///
/// Carries its own `AstId` so the id allocator can record
/// `param.ast_id -> local id` the moment the function context is built
/// (§4.2.2 step 2), before any body expression is lowered.
#[derive(Copy, Clone, Debug)]
pub struct ValueParameter {
    pub ast_id: AstId,
    pub name: Name,
}

/// The parsed shape of a function declaration's body.
///
/// `arena` holds every expression node reachable from `body`, parameter
/// default values aside; `AstId`s in `params` and `body` all index into it.
/// `body: None` means the declaration has no body (an abstract/trait
/// member); `lowerBody` returns "absent" for those (§4.6).
#[derive(Clone, Debug, Default)]
pub struct FunctionAst {
    pub name: Name,
    pub params: Vec<ValueParameter>,
    pub body: Option<Vec<AstId>>,
    pub arena: ExprArena,
}
