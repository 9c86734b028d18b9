// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fallback codecs used when no specific codec matches a type.

use crate::codec::{Decoder, DecoderContext, Deserializer, Encoder, EncoderContext, Serializer, Token};
use crate::error::{SerdeError, SerdeResult};
use crate::types::Argument;
use crate::value::Value;
use indexmap::IndexMap;

/// Structural serializer for any value.
///
/// Scalars are written directly. Elements and members are written with
/// whatever serializer the registry resolves for their natural type, so
/// registered codecs apply inside untyped containers. Object members are
/// filtered by the context's inclusion policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    fn serialize_nested(
        encoder: &mut dyn Encoder,
        ctx: &EncoderContext<'_>,
        value: &Value,
    ) -> SerdeResult<()> {
        let ty = value.natural_argument();
        let serializer = ctx.find_serializer(&ty)?;
        serializer.serialize(encoder, ctx, value, &ty)
    }
}

impl Serializer for ObjectSerializer {
    fn serialize(
        &self,
        encoder: &mut dyn Encoder,
        ctx: &EncoderContext<'_>,
        value: &Value,
        ty: &Argument,
    ) -> SerdeResult<()> {
        match value {
            Value::Null => encoder.encode_null(),
            Value::Boolean(v) => encoder.encode_boolean(*v),
            Value::Byte(v) => encoder.encode_byte(*v),
            Value::Short(v) => encoder.encode_short(*v),
            Value::Int(v) => encoder.encode_int(*v),
            Value::Long(v) => encoder.encode_long(*v),
            Value::Float(v) => encoder.encode_float(*v),
            Value::Double(v) => encoder.encode_double(*v),
            Value::Char(v) => encoder.encode_char(*v),
            Value::String(v) => encoder.encode_string(v),
            Value::Array(items) | Value::List(items) => {
                encoder.encode_array(ty)?;
                for item in items {
                    Self::serialize_nested(encoder, ctx, item)?;
                }
                encoder.finish_structure()
            }
            Value::Object(members) => {
                encoder.encode_object(ty)?;
                for (key, member) in members {
                    let member_ty = member.natural_argument();
                    let serializer = ctx.find_serializer(&member_ty)?;
                    if !ctx.inclusion().includes(&*serializer, member) {
                        continue;
                    }
                    encoder.encode_key(key)?;
                    serializer.serialize(encoder, ctx, member, &member_ty)?;
                }
                encoder.finish_structure()
            }
            // Value types, optionals and primitive arrays have built-in codecs.
            other => {
                let natural = other.natural_argument();
                let serializer = ctx.find_serializer(&natural)?;
                if serializer.origin().is_fallback() {
                    return Err(SerdeError::ValueMismatch {
                        expected: "a value with a registered codec",
                        found: other.kind_name(),
                    });
                }
                serializer.serialize(encoder, ctx, other, &natural)
            }
        }
    }

    fn is_empty(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) | Value::List(items) => items.is_empty(),
            Value::Object(members) => members.is_empty(),
            _ => false,
        }
    }
}

/// Token-driven deserializer for values of unknown shape.
///
/// Integers read as `Long` (or `BigInteger` past the i64 range), decimals
/// as `Double`, arrays as `List` and objects as `Object`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectDeserializer;

impl Deserializer for ObjectDeserializer {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        ctx: &DecoderContext<'_>,
        ty: &Argument,
    ) -> SerdeResult<Value> {
        match decoder.peek_token()? {
            Token::Null => {
                decoder.decode_null()?;
                Ok(Value::Null)
            }
            Token::Boolean => Ok(Value::Boolean(decoder.decode_boolean()?)),
            Token::Integer => match decoder.decode_long() {
                Ok(v) => Ok(Value::Long(v)),
                Err(SerdeError::OutOfRange { .. }) => Ok(Value::BigInteger(decoder.decode_big_integer()?)),
                Err(e) => Err(e),
            },
            Token::Decimal => Ok(Value::Double(decoder.decode_double()?)),
            Token::String => Ok(Value::String(decoder.decode_string()?)),
            Token::Array => {
                let element_ty = Argument::object();
                let element = ctx.find_deserializer(&element_ty);
                decoder.decode_array(ty)?;
                let mut items = Vec::new();
                while decoder.has_next_array_value()? {
                    items.push(element.deserialize(decoder, ctx, &element_ty)?);
                }
                decoder.finish_structure()?;
                Ok(Value::List(items))
            }
            Token::Object => {
                let member_ty = Argument::object();
                let member = ctx.find_deserializer(&member_ty);
                decoder.decode_object(ty)?;
                let mut members = IndexMap::new();
                while let Some(key) = decoder.decode_key()? {
                    let value = member.deserialize(decoder, ctx, &member_ty)?;
                    members.insert(key, value);
                }
                decoder.finish_structure()?;
                Ok(Value::Object(members))
            }
        }
    }

    fn allows_null(&self) -> bool {
        true
    }
}

/// Deserializer for reference arrays (`T[]` with a non-primitive `T`).
///
/// Elements are read with the deserializer resolved for the component
/// type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectArrayDeserializer;

impl Deserializer for ObjectArrayDeserializer {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        ctx: &DecoderContext<'_>,
        ty: &Argument,
    ) -> SerdeResult<Value> {
        if decoder.decode_null()? {
            return Ok(Value::Null);
        }
        let component = ty.component_type().unwrap_or_else(Argument::object);
        let element = ctx.find_deserializer(&component);
        decoder.decode_array(ty)?;
        let mut items = Vec::new();
        while decoder.has_next_array_value()? {
            items.push(element.deserialize(decoder, ctx, &component)?);
        }
        decoder.finish_structure()?;
        Ok(Value::Array(items))
    }

    fn allows_null(&self) -> bool {
        true
    }
}
