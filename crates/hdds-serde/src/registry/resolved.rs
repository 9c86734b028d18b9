// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cache entries: a shared codec tagged with where it came from.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// How a cached codec was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodecOrigin {
    /// Registered from the built-in table at construction.
    BuiltIn,
    /// Registered with the component registry under this name.
    Registered(Arc<str>),
    /// Generic object codec (no bucket matched).
    ObjectFallback,
    /// Generic object-array codec.
    ObjectArrayFallback,
}

impl CodecOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::ObjectFallback | Self::ObjectArrayFallback)
    }

    /// Candidate name for registered codecs.
    pub fn candidate_name(&self) -> Option<&str> {
        match self {
            Self::Registered(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for CodecOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => f.write_str("built-in"),
            Self::Registered(name) => write!(f, "registered({})", name),
            Self::ObjectFallback => f.write_str("object fallback"),
            Self::ObjectArrayFallback => f.write_str("object-array fallback"),
        }
    }
}

/// A resolved codec. Cloning shares the instance.
pub struct Resolved<C: ?Sized> {
    origin: CodecOrigin,
    codec: Arc<C>,
}

impl<C: ?Sized> Resolved<C> {
    pub fn new(origin: CodecOrigin, codec: Arc<C>) -> Self {
        Self { origin, codec }
    }

    pub fn built_in(codec: Arc<C>) -> Self {
        Self::new(CodecOrigin::BuiltIn, codec)
    }

    pub fn origin(&self) -> &CodecOrigin {
        &self.origin
    }

    pub fn codec(&self) -> &Arc<C> {
        &self.codec
    }

    /// Whether both handles point at the same codec instance.
    pub fn same_codec(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.codec), Arc::as_ptr(&other.codec))
    }
}

impl<C: ?Sized> Clone for Resolved<C> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<C: ?Sized> Deref for Resolved<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.codec
    }
}

impl<C: ?Sized> fmt::Debug for Resolved<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("origin", &self.origin)
            .field("codec", &Arc::as_ptr(&self.codec).cast::<()>())
            .finish()
    }
}
