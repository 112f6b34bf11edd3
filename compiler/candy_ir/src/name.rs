//! Interned identifiers.
//!
//! Mirrors the "intern everything" rule used across the rest of the
//! pipeline: names compare in O(1) and hash by their interned index rather
//! than by string content.

use std::fmt;
use std::sync::RwLock;

use rustc_hash::FxHashMap;

/// An interned string.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shared string interner.
///
/// Safe to use from multiple threads: the query engine may type-check and
/// lower several declarations concurrently, and they all resolve names
/// through the same interner.
#[derive(Default)]
pub struct StringInterner {
    inner: RwLock<InternerInner>,
}

#[derive(Default)]
struct InternerInner {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Name>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&self, s: &str) -> Name {
        if let Some(&name) = self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner).lookup.get(s) {
            return name;
        }
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(&name) = inner.lookup.get(s) {
            return name;
        }
        let index = u32::try_from(inner.strings.len()).expect("interner capacity exceeded");
        let boxed: Box<str> = s.into();
        inner.strings.push(boxed.clone());
        let name = Name(index);
        inner.lookup.insert(boxed, name);
        name
    }

    pub fn resolve(&self, name: Name) -> String {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .strings[name.index()]
            .to_string()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
