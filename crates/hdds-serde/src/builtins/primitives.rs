// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar and string deserializers.
//!
//! Unboxed kinds decode directly and treat a wire null as a type error;
//! boxed kinds and `String` are registered wrapped in [`Nullable`].
//!
//! [`Nullable`]: crate::codec::Nullable

use crate::codec::{Decoder, DecoderContext, Deserializer};
use crate::error::SerdeResult;
use crate::types::{Argument, PrimitiveKind};
use crate::value::Value;

/// Decodes one primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveDeserializer(pub PrimitiveKind);

impl Deserializer for PrimitiveDeserializer {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        _ctx: &DecoderContext<'_>,
        _ty: &Argument,
    ) -> SerdeResult<Value> {
        decode_primitive(decoder, self.0)
    }
}

pub(crate) fn decode_primitive(decoder: &mut dyn Decoder, kind: PrimitiveKind) -> SerdeResult<Value> {
    Ok(match kind {
        PrimitiveKind::Boolean => Value::Boolean(decoder.decode_boolean()?),
        PrimitiveKind::Byte => Value::Byte(decoder.decode_byte()?),
        PrimitiveKind::Short => Value::Short(decoder.decode_short()?),
        PrimitiveKind::Int => Value::Int(decoder.decode_int()?),
        PrimitiveKind::Long => Value::Long(decoder.decode_long()?),
        PrimitiveKind::Float => Value::Float(decoder.decode_float()?),
        PrimitiveKind::Double => Value::Double(decoder.decode_double()?),
        PrimitiveKind::Char => Value::Char(decoder.decode_char()?),
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringDeserializer;

impl Deserializer for StringDeserializer {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        _ctx: &DecoderContext<'_>,
        _ty: &Argument,
    ) -> SerdeResult<Value> {
        Ok(Value::String(decoder.decode_string()?))
    }
}
