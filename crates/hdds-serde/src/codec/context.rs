// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-call state handed to codecs.

use super::{Deserializer, InclusionPolicy, Serializer};
use crate::error::SerdeResult;
use crate::registry::{Resolved, SerdeRegistry};
use crate::types::{Argument, ClassRef};
use crate::value::Value;

/// State of one serialize call.
///
/// Codecs reach nested serializers through the context rather than
/// holding a registry themselves.
#[derive(Clone, Copy)]
pub struct EncoderContext<'a> {
    registry: &'a SerdeRegistry,
    inclusion: InclusionPolicy,
}

impl<'a> EncoderContext<'a> {
    /// Context using the registry's configured inclusion policy.
    pub fn new(registry: &'a SerdeRegistry) -> Self {
        Self {
            registry,
            inclusion: registry.config().inclusion,
        }
    }

    pub fn with_inclusion(mut self, inclusion: InclusionPolicy) -> Self {
        self.inclusion = inclusion;
        self
    }

    pub fn registry(&self) -> &'a SerdeRegistry {
        self.registry
    }

    pub fn inclusion(&self) -> InclusionPolicy {
        self.inclusion
    }

    pub fn find_serializer(&self, ty: &Argument) -> SerdeResult<Resolved<dyn Serializer>> {
        self.registry.find_serializer(ty)
    }
}

/// State of one deserialize call.
#[derive(Clone, Copy)]
pub struct DecoderContext<'a> {
    registry: &'a SerdeRegistry,
}

impl<'a> DecoderContext<'a> {
    pub fn new(registry: &'a SerdeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a SerdeRegistry {
        self.registry
    }

    pub fn find_deserializer(&self, ty: &Argument) -> Resolved<dyn Deserializer> {
        self.registry.find_deserializer(ty)
    }

    /// Default for a member of type `ty` that is missing from the wire.
    pub fn missing_value(&self, ty: &Argument) -> Option<Value> {
        self.registry.find_deserializer(ty).default_value()
    }

    /// Known concrete subtypes of `super_type` that can be deserialized.
    pub fn deserializable_subtypes(&self, super_type: &ClassRef) -> Vec<ClassRef> {
        self.registry.deserializable_subtypes(super_type)
    }
}
