// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hdds-serde
//!
//! Type-directed serializer/deserializer registry.
//!
//! Given a type descriptor, [`SerdeRegistry`] returns the codec that
//! encodes or decodes values of that type. Codecs come from three places:
//! a fixed set of built-ins (scalars, big numbers, value types, optional
//! scalars, primitive arrays), codecs registered with a
//! [`ComponentRegistry`], and the object fallbacks used when nothing else
//! applies.
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |  SerdeRegistry::find_serializer / find_deserializer              |
//! +------------------------------------------------------------------+
//! |  codec caches (DashMap<Argument, Resolved<_>>)                    |
//! |    seeded with built-ins, filled on first lookup                 |
//! +------------------------------------------------------------------+
//! |  CandidateIndex (raw type -> candidates, read-only)              |
//! |  generic parameter narrowing | supertype bucket selection        |
//! +------------------------------------------------------------------+
//! |  ComponentRegistry (instantiation, exact deserializer lookup)    |
//! +------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hdds_serde::binding::{from_wire, to_wire};
//! use hdds_serde::types::{Argument, PrimitiveKind};
//! use hdds_serde::{SerdeRegistry, Value};
//!
//! let registry = SerdeRegistry::builtin_only();
//! let ty = Argument::array_of(&Argument::primitive(PrimitiveKind::Int));
//!
//! let wire = to_wire(&registry, &Value::IntArray(vec![1, 2, 3]), &ty).unwrap();
//! let back = from_wire(&registry, wire, &ty).unwrap();
//! assert_eq!(back, Value::IntArray(vec![1, 2, 3]));
//! ```
//!
//! ## Modules
//!
//! - [`types`] - type descriptors and assignability
//! - [`value`] - dynamically typed values
//! - [`codec`] - encoder/decoder contracts and codec traits
//! - [`builtins`] - built-in codecs
//! - [`component`] - codec registration and instantiation
//! - [`registry`] - resolution and caching
//! - [`binding`] - in-memory wire tree (and JSON with the `json` feature)
//! - [`config`] - registry configuration (TOML with `config-loaders`)

pub mod binding;
pub mod builtins;
pub mod codec;
pub mod component;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;
pub mod value;

pub use codec::{
    Decoder, DecoderContext, Deserializer, Encoder, EncoderContext, InclusionPolicy, Serializer,
};
pub use component::{
    CandidateDescriptor, ComponentRegistry, SerdeIntrospections, StaticComponentRegistry,
    StaticIntrospections,
};
pub use config::{BucketSelection, ConfigError, RegistryConfig};
pub use error::{SerdeError, SerdeResult};
pub use registry::{CodecOrigin, Resolved, SerdeRegistry, SerdeRegistryBuilder};
pub use types::{Argument, ClassRef, PrimitiveKind, RawType};
pub use value::Value;
