// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors.
//!
//! - **PrimitiveKind**: the eight unboxed scalar kinds
//! - **ClassRef**: named classes with a supertype graph rooted at `Object`
//! - **RawType**: primitive / boxed / class / array raw shapes, with assignability
//! - **Argument**: raw type + generic parameters, the resolution cache key
//!
//! # Example
//!
//! ```rust
//! use hdds_serde::types::{Argument, ClassRef, RawType};
//!
//! let collection = ClassRef::new("Collection");
//! let list = ClassRef::with_supertypes("List", vec![collection.clone()]);
//!
//! let a = Argument::generic(list.clone(), vec![Argument::string()]);
//! let b = Argument::generic(ClassRef::list(), vec![Argument::string()]);
//! assert_eq!(a, b);
//!
//! // Same name, different supertypes: a different key.
//! let bare = Argument::generic(ClassRef::new("List"), vec![Argument::string()]);
//! assert_ne!(a, bare);
//!
//! assert!(RawType::from(collection).is_assignable_from(a.raw()));
//! ```

mod argument;
mod class;
mod primitive;
mod raw;

pub use argument::Argument;
pub use class::ClassRef;
pub use primitive::PrimitiveKind;
pub use raw::RawType;

#[cfg(test)]
mod tests;
