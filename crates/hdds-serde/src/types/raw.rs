// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Raw (non-generic) types and assignability.

use super::{ClassRef, PrimitiveKind};
use std::fmt;

/// The raw shape of a type: what a codec candidate is indexed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawType {
    /// Unboxed scalar (`int`). Never null, never assignable to `Object`.
    Primitive(PrimitiveKind),
    /// Boxed scalar (`Integer`). Nullable.
    Boxed(PrimitiveKind),
    /// Named class.
    Class(ClassRef),
    /// Array of the component raw type.
    Array(Box<RawType>),
}

impl RawType {
    pub fn array_of(component: RawType) -> Self {
        Self::Array(Box::new(component))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Class(c) if c.is_object())
    }

    /// Component type of an array, `None` otherwise.
    pub fn component(&self) -> Option<&RawType> {
        match self {
            Self::Array(component) => Some(component),
            _ => None,
        }
    }

    /// The unboxed counterpart of a boxed scalar.
    pub fn primitive_counterpart(&self) -> Option<RawType> {
        match self {
            Self::Boxed(kind) => Some(Self::Primitive(*kind)),
            _ => None,
        }
    }

    /// Whether a value of raw type `other` can be used where `self` is expected.
    ///
    /// Primitive raw types only accept themselves. `Object` accepts every
    /// reference type, `Number` accepts the numeric boxed kinds, classes
    /// accept their subclasses and reference arrays are covariant.
    pub fn is_assignable_from(&self, other: &RawType) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Self::Primitive(_), _) | (_, Self::Primitive(_)) => false,
            (Self::Class(target), _) if target.is_object() => true,
            (Self::Class(target), Self::Class(source)) => source.is_subclass_of(target),
            (Self::Class(target), Self::Boxed(kind)) => {
                *target == ClassRef::number() && kind.is_numeric()
            }
            (Self::Array(target), Self::Array(source)) => {
                !target.is_primitive() && target.is_assignable_from(source)
            }
            _ => false,
        }
    }
}

impl From<ClassRef> for RawType {
    fn from(class: ClassRef) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.name()),
            Self::Boxed(kind) => f.write_str(kind.boxed_name()),
            Self::Class(class) => f.write_str(class.name()),
            Self::Array(component) => write!(f, "{}[]", component),
        }
    }
}
