// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors used as resolution keys.

use super::{ClassRef, PrimitiveKind, RawType};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A (possibly generic, possibly array) type descriptor.
///
/// Equality and hashing are structural over the raw type and the full
/// parameter list. Type-variable markers are ignored, so `List<T extends
/// String>` and `List<String>` occupy the same cache slot. Descriptors
/// are immutable once built.
#[derive(Clone)]
pub struct Argument {
    raw: RawType,
    params: Vec<Argument>,
    variable: Option<Arc<str>>,
}

impl Argument {
    /// Non-generic descriptor for a raw type.
    pub fn of(raw: impl Into<RawType>) -> Self {
        Self {
            raw: raw.into(),
            params: Vec::new(),
            variable: None,
        }
    }

    /// Generic descriptor, e.g. `List<String>`.
    pub fn generic(raw: impl Into<RawType>, params: Vec<Argument>) -> Self {
        Self {
            raw: raw.into(),
            params,
            variable: None,
        }
    }

    /// Open type variable bounded above by `bound` (`T extends Number`).
    pub fn variable(name: impl Into<Arc<str>>, bound: Argument) -> Self {
        Self {
            raw: bound.raw,
            params: bound.params,
            variable: Some(name.into()),
        }
    }

    /// Open type variable with no bound other than `Object`.
    pub fn unbounded(name: impl Into<Arc<str>>) -> Self {
        Self::variable(name, Self::object())
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::of(RawType::Primitive(kind))
    }

    pub fn boxed(kind: PrimitiveKind) -> Self {
        Self::of(RawType::Boxed(kind))
    }

    pub fn object() -> Self {
        Self::of(ClassRef::object())
    }

    pub fn string() -> Self {
        Self::of(ClassRef::string())
    }

    /// Array whose component is `component`'s raw type.
    pub fn array_of(component: &Argument) -> Self {
        Self::of(RawType::array_of(component.raw.clone()))
    }

    pub fn raw(&self) -> &RawType {
        &self.raw
    }

    pub fn params(&self) -> &[Argument] {
        &self.params
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn is_type_variable(&self) -> bool {
        self.variable.is_some()
    }

    pub fn variable_name(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn is_array(&self) -> bool {
        self.raw.is_array()
    }

    pub fn is_primitive(&self) -> bool {
        self.raw.is_primitive()
    }

    /// `Object` with no parameters: the universal "any object" marker.
    pub fn is_any_object(&self) -> bool {
        self.raw.is_object() && self.params.is_empty()
    }

    /// Component descriptor of an array type.
    pub fn component_type(&self) -> Option<Argument> {
        self.raw.component().cloned().map(Self::of)
    }

    /// Structural key equality (the `PartialEq` relation, spelled out).
    pub fn equals_type(&self, other: &Argument) -> bool {
        self.raw == other.raw
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.equals_type(b))
    }

    /// Whether a codec declared for `self` can serve `requested`, judged
    /// on the type parameters only.
    ///
    /// Counts must match, and at every position the declared parameter
    /// must either have the requested raw type exactly, or be an open
    /// type variable whose bound is assignable from the requested one.
    pub fn parameters_accept(&self, requested: &Argument) -> bool {
        self.params.len() == requested.params.len()
            && self
                .params
                .iter()
                .zip(&requested.params)
                .all(|(declared, wanted)| {
                    declared.raw == wanted.raw
                        || (declared.is_type_variable()
                            && declared.raw.is_assignable_from(&wanted.raw))
                })
    }
}

impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        self.equals_type(other)
    }
}

impl Eq for Argument {}

impl Hash for Argument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.params.len().hash(state);
        for param in &self.params {
            param.hash(state);
        }
    }
}

impl From<RawType> for Argument {
    fn from(raw: RawType) -> Self {
        Self::of(raw)
    }
}

impl From<ClassRef> for Argument {
    fn from(class: ClassRef) -> Self {
        Self::of(class)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.variable {
            if self.is_any_object() {
                return f.write_str(name);
            }
            write!(f, "{} extends ", name)?;
        }
        write!(f, "{}", self.raw)?;
        if let Some((first, rest)) = self.params.split_first() {
            write!(f, "<{}", first)?;
            for param in rest {
                write!(f, ", {}", param)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argument({})", self)
    }
}
