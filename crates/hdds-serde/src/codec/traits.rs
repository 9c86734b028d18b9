// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Serializer / deserializer traits.

use super::{Decoder, DecoderContext, Encoder, EncoderContext};
use crate::error::SerdeResult;
use crate::types::Argument;
use crate::value::Value;

/// Writes values of one type to an [`Encoder`].
///
/// Implementations are shared across threads and must not keep per-value
/// state; everything a call needs arrives through its arguments.
pub trait Serializer: Send + Sync {
    /// Write `value`, declared as `ty`, to `encoder`.
    fn serialize(
        &self,
        encoder: &mut dyn Encoder,
        ctx: &EncoderContext<'_>,
        value: &Value,
        ty: &Argument,
    ) -> SerdeResult<()>;

    /// Whether `value` counts as empty for [`InclusionPolicy::NonEmpty`].
    fn is_empty(&self, value: &Value) -> bool {
        value.is_null()
    }

    /// Whether `value` counts as absent for [`InclusionPolicy::NonAbsent`].
    fn is_absent(&self, value: &Value) -> bool {
        value.is_null()
    }
}

/// Reads values of one type from a [`Decoder`].
pub trait Deserializer: Send + Sync {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        ctx: &DecoderContext<'_>,
        ty: &Argument,
    ) -> SerdeResult<Value>;

    /// Whether a wire null is accepted (and decoded as [`Value::Null`]).
    fn allows_null(&self) -> bool {
        false
    }

    /// Value to use when a member of this type is missing from the wire.
    fn default_value(&self) -> Option<Value> {
        None
    }
}

/// Null-aware wrapper: a wire null decodes as [`Value::Null`], anything
/// else is handed to the inner deserializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<D>(pub D);

impl<D> Nullable<D> {
    pub fn new(inner: D) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &D {
        &self.0
    }
}

impl<D: Deserializer> Deserializer for Nullable<D> {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        ctx: &DecoderContext<'_>,
        ty: &Argument,
    ) -> SerdeResult<Value> {
        if decoder.decode_null()? {
            return Ok(Value::Null);
        }
        self.0.deserialize(decoder, ctx, ty)
    }

    fn allows_null(&self) -> bool {
        true
    }

    fn default_value(&self) -> Option<Value> {
        self.0.default_value()
    }
}

/// When an object member is written, judged by the member's serializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "kebab-case"))]
pub enum InclusionPolicy {
    /// Every member, null or not.
    #[default]
    Always,
    /// Skip null members.
    NonNull,
    /// Skip members the serializer reports as absent.
    NonAbsent,
    /// Skip members the serializer reports as empty.
    NonEmpty,
}

impl InclusionPolicy {
    pub fn includes(self, serializer: &dyn Serializer, value: &Value) -> bool {
        match self {
            Self::Always => true,
            Self::NonNull => !value.is_null(),
            Self::NonAbsent => !serializer.is_absent(value),
            Self::NonEmpty => !serializer.is_empty(value),
        }
    }
}
