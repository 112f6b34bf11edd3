//! Declaration identity.

use std::fmt;

use crate::name::Name;
use crate::span::ResourceId;

/// What kind of item a `DeclarationId` names.
///
/// Only the predicates the body-lowering core actually branches on are
/// exposed (`is_function`, `is_static`-style checks live on the collaborator
/// types instead, since staticness is a property of the signature, not the
/// path).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclarationKind {
    Module,
    Trait,
    Class,
    Function,
    Property,
    Constructor,
}

/// An opaque path identifying a top-level or nested declaration.
///
/// Two `DeclarationId`s are equal iff they name the same declaration; the
/// body-lowering core never inspects a path's components beyond `parent`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DeclarationId {
    resource: ResourceId,
    path: Vec<Name>,
    kind: DeclarationKind,
}

impl DeclarationId {
    pub fn new(resource: ResourceId, path: Vec<Name>, kind: DeclarationKind) -> Self {
        assert!(!path.is_empty(), "a declaration path must have at least one component");
        DeclarationId { resource, path, kind }
    }

    pub fn resource(&self) -> ResourceId {
        self.resource
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn simple_name(&self) -> Name {
        *self.path.last().expect("non-empty path")
    }

    pub fn path_components(&self) -> &[Name] {
        &self.path
    }

    /// The enclosing declaration, or `None` if this is a module root.
    ///
    /// A parent's kind is reconstructed as `Module` when there is no kind
    /// information left on the shortened path; callers that need an
    /// enclosing class/trait/impl kind should consult the signature
    /// collaborator (`getFunctionDeclarationHir`) rather than this.
    pub fn parent(&self) -> Option<DeclarationId> {
        if self.path.len() <= 1 {
            return None;
        }
        let mut parent_path = self.path.clone();
        parent_path.pop();
        Some(DeclarationId {
            resource: self.resource,
            path: parent_path,
            kind: DeclarationKind::Module,
        })
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, DeclarationKind::Function)
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, DeclarationKind::Property)
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, DeclarationKind::Constructor)
    }
}

impl fmt::Debug for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclarationId({:?}, {:?}, {:?})", self.resource, self.path, self.kind)
    }
}

/// `(DeclarationId, nonnegative integer)`. Unique within its declaration,
/// stable across a successful lowering, never reused.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DeclarationLocalId {
    declaration: DeclarationId,
    index: u32,
}

impl DeclarationLocalId {
    pub fn new(declaration: DeclarationId, index: u32) -> Self {
        DeclarationLocalId { declaration, index }
    }

    pub fn declaration(&self) -> &DeclarationId {
        &self.declaration
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Debug for DeclarationLocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}
