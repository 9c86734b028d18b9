// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec resolution.
//!
//! [`SerdeRegistry`] maps type descriptors to serializers and
//! deserializers. Results are cached per descriptor in two concurrent
//! maps seeded with the built-in codecs.
//!
//! # Serializer lookup
//!
//! 1. Cache hit.
//! 2. The candidate bucket for the requested raw type, or failing that a
//!    bucket whose raw type is a supertype of it ([`BucketSelection`]).
//! 3. For a generic request, candidates whose declared parameters do not
//!    accept the requested ones are dropped.
//! 4. One survivor is instantiated and cached. None, or several, is an
//!    error and nothing is cached.
//! 5. No bucket at all: the object serializer.
//!
//! # Deserializer lookup
//!
//! Cache, then the component registry's exact-type lookup, then the
//! object-array or object deserializer. Never fails.
//!
//! # Example
//!
//! ```rust
//! use hdds_serde::types::{Argument, ClassRef, PrimitiveKind};
//! use hdds_serde::SerdeRegistry;
//!
//! let registry = SerdeRegistry::builtin_only();
//!
//! let unboxed = registry.find_deserializer(&Argument::primitive(PrimitiveKind::Int));
//! let boxed = registry.find_deserializer(&Argument::boxed(PrimitiveKind::Int));
//! assert!(!unboxed.allows_null());
//! assert!(boxed.allows_null());
//!
//! let fallback = registry.find_serializer(&Argument::of(ClassRef::new("Point"))).unwrap();
//! assert!(fallback.origin().is_fallback());
//! ```

mod index;
mod resolved;

pub use index::CandidateIndex;
pub use resolved::{CodecOrigin, Resolved};

use crate::builtins::{
    register_builtins, DeserializerCache, ObjectArrayDeserializer, ObjectDeserializer,
    ObjectSerializer, SerializerCache,
};
use crate::codec::{Deserializer, Serializer};
use crate::component::{
    CandidateDescriptor, ComponentRegistry, SerdeIntrospections, StaticComponentRegistry,
    StaticIntrospections,
};
use crate::config::{BucketSelection, RegistryConfig};
use crate::error::{SerdeError, SerdeResult};
use crate::types::{Argument, ClassRef, RawType};
use std::fmt;
use std::sync::Arc;

/// Resolves and caches codecs by type descriptor.
///
/// Built once, then shared (typically behind an `Arc`) by every encode
/// and decode operation. All lookups take `&self`.
pub struct SerdeRegistry {
    config: RegistryConfig,
    components: Arc<dyn ComponentRegistry>,
    introspections: Arc<dyn SerdeIntrospections>,
    index: CandidateIndex,
    serializers: SerializerCache,
    deserializers: DeserializerCache,
    object_serializer: Resolved<dyn Serializer>,
    object_deserializer: Resolved<dyn Deserializer>,
    object_array_deserializer: Resolved<dyn Deserializer>,
}

impl SerdeRegistry {
    pub fn builder() -> SerdeRegistryBuilder {
        SerdeRegistryBuilder::default()
    }

    /// A registry with the built-in codecs and nothing registered.
    pub fn builtin_only() -> Self {
        Self::assemble(
            RegistryConfig::default(),
            Arc::new(StaticComponentRegistry::empty()),
            Arc::new(StaticIntrospections::default()),
            CandidateIndex::default(),
            Fallbacks::default(),
        )
    }

    fn assemble(
        config: RegistryConfig,
        components: Arc<dyn ComponentRegistry>,
        introspections: Arc<dyn SerdeIntrospections>,
        index: CandidateIndex,
        fallbacks: Fallbacks,
    ) -> Self {
        let serializers = SerializerCache::with_capacity(config.initial_cache_capacity);
        let deserializers = DeserializerCache::with_capacity(config.initial_cache_capacity);
        let builtins = register_builtins(&serializers, &deserializers);

        log::info!(
            "[serde] registry ready: {} indexed candidates, {} built-in entries, bucket selection {:?}",
            index.len(),
            builtins,
            config.bucket_selection
        );

        Self {
            config,
            components,
            introspections,
            index,
            serializers,
            deserializers,
            object_serializer: Resolved::new(CodecOrigin::ObjectFallback, fallbacks.serializer),
            object_deserializer: Resolved::new(CodecOrigin::ObjectFallback, fallbacks.deserializer),
            object_array_deserializer: Resolved::new(
                CodecOrigin::ObjectArrayFallback,
                fallbacks.array_deserializer,
            ),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn index(&self) -> &CandidateIndex {
        &self.index
    }

    /// Serializer for `ty`.
    ///
    /// Fails with [`SerdeError::NoSerializer`] or
    /// [`SerdeError::AmbiguousSerializer`] when `ty` has a candidate bucket
    /// but not exactly one candidate accepts it, and with
    /// [`SerdeError::Instantiation`] when the chosen candidate cannot be
    /// created. Failures are not cached.
    pub fn find_serializer(&self, ty: &Argument) -> SerdeResult<Resolved<dyn Serializer>> {
        if let Some(cached) = self.serializers.get(ty) {
            return Ok(cached.value().clone());
        }

        let resolved = self.resolve_serializer(ty)?;
        // A racing resolver may have stored first; keep its entry.
        let stored = self
            .serializers
            .entry(ty.clone())
            .or_insert(resolved)
            .value()
            .clone();
        Ok(stored)
    }

    fn resolve_serializer(&self, ty: &Argument) -> SerdeResult<Resolved<dyn Serializer>> {
        let Some((bucket_type, bucket)) = self
            .index
            .find_serializer_bucket(ty.raw(), self.config.bucket_selection)
        else {
            log::debug!(
                "[SerdeRegistry::find_serializer] no candidates for {}, using object serializer",
                ty
            );
            return Ok(self.object_serializer.clone());
        };

        let survivors: Vec<&CandidateDescriptor> = if ty.has_params() {
            bucket
                .iter()
                .filter(|candidate| {
                    candidate
                        .declared()
                        .is_some_and(|declared| declared.parameters_accept(ty))
                })
                .collect()
        } else {
            bucket.iter().collect()
        };

        match survivors.as_slice() {
            [only] => {
                log::debug!(
                    "[SerdeRegistry::find_serializer] {} resolved to {:?} (bucket {})",
                    ty,
                    only,
                    bucket_type
                );
                let codec = self.components.instantiate_serializer(only)?;
                Ok(Resolved::new(CodecOrigin::Registered(only.shared_name()), codec))
            }
            [] => Err(SerdeError::NoSerializer {
                type_name: ty.to_string(),
            }),
            several => {
                log::warn!(
                    "[SerdeRegistry::find_serializer] {} candidates accept {}: {:?}",
                    several.len(),
                    ty,
                    several
                );
                Err(SerdeError::AmbiguousSerializer {
                    type_name: ty.to_string(),
                    candidates: several.iter().map(|c| c.name().to_string()).collect(),
                })
            }
        }
    }

    /// Deserializer for `ty`. Always succeeds: types without a codec get
    /// the object or object-array deserializer.
    pub fn find_deserializer(&self, ty: &Argument) -> Resolved<dyn Deserializer> {
        if let Some(cached) = self.deserializers.get(ty) {
            return cached.value().clone();
        }

        let resolved = match self.components.find_deserializer(ty) {
            Some(found) => found,
            None if ty.is_array() => {
                log::debug!(
                    "[SerdeRegistry::find_deserializer] no deserializer for {}, using object array deserializer",
                    ty
                );
                self.object_array_deserializer.clone()
            }
            None => {
                log::debug!(
                    "[SerdeRegistry::find_deserializer] no deserializer for {}, using object deserializer",
                    ty
                );
                self.object_deserializer.clone()
            }
        };
        self.deserializers
            .entry(ty.clone())
            .or_insert(resolved)
            .value()
            .clone()
    }

    /// Known concrete subtypes of `super_type` that can be deserialized.
    pub fn deserializable_subtypes(&self, super_type: &ClassRef) -> Vec<ClassRef> {
        self.introspections.find_subtype_deserializables(super_type)
    }

    /// Serializer candidates indexed under `raw`, in registration order.
    pub fn serializer_candidates_for(&self, raw: &RawType) -> &[CandidateDescriptor] {
        self.index.serializer_bucket(raw).unwrap_or_default()
    }

    /// Deserializer candidates indexed under `raw`. Informational:
    /// deserializer lookup goes through the component registry.
    pub fn deserializer_candidates_for(&self, raw: &RawType) -> &[CandidateDescriptor] {
        self.index.deserializer_bucket(raw).unwrap_or_default()
    }

    pub fn cached_serializers(&self) -> usize {
        self.serializers.len()
    }

    pub fn cached_deserializers(&self) -> usize {
        self.deserializers.len()
    }
}

impl Default for SerdeRegistry {
    fn default() -> Self {
        Self::builtin_only()
    }
}

impl fmt::Debug for SerdeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeRegistry")
            .field("config", &self.config)
            .field("index", &self.index)
            .field("cached_serializers", &self.serializers.len())
            .field("cached_deserializers", &self.deserializers.len())
            .finish_non_exhaustive()
    }
}

struct Fallbacks {
    serializer: Arc<dyn Serializer>,
    deserializer: Arc<dyn Deserializer>,
    array_deserializer: Arc<dyn Deserializer>,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            serializer: Arc::new(ObjectSerializer),
            deserializer: Arc::new(ObjectDeserializer),
            array_deserializer: Arc::new(ObjectArrayDeserializer),
        }
    }
}

/// Startup configuration for [`SerdeRegistry`].
#[derive(Default)]
pub struct SerdeRegistryBuilder {
    config: RegistryConfig,
    components: Option<Arc<dyn ComponentRegistry>>,
    introspections: Option<Arc<dyn SerdeIntrospections>>,
    object_serializer: Option<Arc<dyn Serializer>>,
    object_deserializer: Option<Arc<dyn Deserializer>>,
    object_array_deserializer: Option<Arc<dyn Deserializer>>,
}

impl SerdeRegistryBuilder {
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn bucket_selection(mut self, selection: BucketSelection) -> Self {
        self.config.bucket_selection = selection;
        self
    }

    pub fn components<C: ComponentRegistry + 'static>(self, components: C) -> Self {
        self.shared_components(Arc::new(components))
    }

    pub fn shared_components(mut self, components: Arc<dyn ComponentRegistry>) -> Self {
        self.components = Some(components);
        self
    }

    pub fn introspections<I: SerdeIntrospections + 'static>(mut self, introspections: I) -> Self {
        self.introspections = Some(Arc::new(introspections));
        self
    }

    /// Replace the serializer used for types without candidates.
    pub fn object_serializer<S: Serializer + 'static>(mut self, serializer: S) -> Self {
        self.object_serializer = Some(Arc::new(serializer));
        self
    }

    pub fn object_deserializer<D: Deserializer + 'static>(mut self, deserializer: D) -> Self {
        self.object_deserializer = Some(Arc::new(deserializer));
        self
    }

    pub fn object_array_deserializer<D: Deserializer + 'static>(mut self, deserializer: D) -> Self {
        self.object_array_deserializer = Some(Arc::new(deserializer));
        self
    }

    /// Validate the configuration, index the registered candidates and
    /// seed the caches.
    ///
    /// Fails with [`SerdeError::Configuration`] on an invalid configuration
    /// or a candidate without a declared type.
    pub fn build(self) -> SerdeResult<SerdeRegistry> {
        self.config
            .validate()
            .map_err(|e| SerdeError::Configuration(e.to_string()))?;

        let components = self
            .components
            .unwrap_or_else(|| Arc::new(StaticComponentRegistry::empty()));
        let introspections = self
            .introspections
            .unwrap_or_else(|| Arc::new(StaticIntrospections::default()));
        let index = CandidateIndex::build(
            components.serializer_candidates(),
            components.deserializer_candidates(),
        )?;

        let defaults = Fallbacks::default();
        let fallbacks = Fallbacks {
            serializer: self.object_serializer.unwrap_or(defaults.serializer),
            deserializer: self.object_deserializer.unwrap_or(defaults.deserializer),
            array_deserializer: self
                .object_array_deserializer
                .unwrap_or(defaults.array_deserializer),
        };

        Ok(SerdeRegistry::assemble(
            self.config,
            components,
            introspections,
            index,
            fallbacks,
        ))
    }
}
