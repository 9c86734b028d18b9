// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive arrays.
//!
//! Written as a wire array of scalars in index order. Reading does not
//! know the length up front: elements go into a buffer that starts at
//! [`ArrayElement::INITIAL_CAPACITY`] slots, doubles when full, and is
//! trimmed to the element count at the end. A null element reads as the
//! kind's zero value.

use crate::codec::{Decoder, DecoderContext, Deserializer, Encoder, EncoderContext, Serializer};
use crate::error::{SerdeError, SerdeResult};
use crate::types::Argument;
use crate::value::Value;
use std::marker::PhantomData;

/// Element type of a primitive array.
pub trait ArrayElement: Copy + Default + Send + Sync + 'static {
    /// Array type name, used in errors.
    const NAME: &'static str;
    /// Buffer slots allocated before the first element is read.
    const INITIAL_CAPACITY: usize = 50;

    fn encode(self, encoder: &mut dyn Encoder) -> SerdeResult<()>;
    fn decode(decoder: &mut dyn Decoder) -> SerdeResult<Self>;
    fn elements(value: &Value) -> Option<&[Self]>;
    fn into_value(elements: Vec<Self>) -> Value;
}

macro_rules! impl_array_element {
    ($ty:ty, $name:literal, $variant:ident, $encode:ident, $decode:ident $(, capacity = $cap:expr)?) => {
        impl ArrayElement for $ty {
            const NAME: &'static str = $name;
            $(const INITIAL_CAPACITY: usize = $cap;)?

            fn encode(self, encoder: &mut dyn Encoder) -> SerdeResult<()> {
                encoder.$encode(self)
            }

            fn decode(decoder: &mut dyn Decoder) -> SerdeResult<Self> {
                decoder.$decode()
            }

            fn elements(value: &Value) -> Option<&[Self]> {
                match value {
                    Value::$variant(elements) => Some(elements),
                    _ => None,
                }
            }

            fn into_value(elements: Vec<Self>) -> Value {
                Value::$variant(elements)
            }
        }
    };
}

impl_array_element!(bool, "boolean[]", BooleanArray, encode_boolean, decode_boolean);
impl_array_element!(i8, "byte[]", ByteArray, encode_byte, decode_byte, capacity = 100);
impl_array_element!(i16, "short[]", ShortArray, encode_short, decode_short);
impl_array_element!(i32, "int[]", IntArray, encode_int, decode_int);
impl_array_element!(i64, "long[]", LongArray, encode_long, decode_long);
impl_array_element!(f32, "float[]", FloatArray, encode_float, decode_float);
impl_array_element!(f64, "double[]", DoubleArray, encode_double, decode_double);
impl_array_element!(char, "char[]", CharArray, encode_char, decode_char, capacity = 100);

/// Serde for `T[]`.
pub struct PrimitiveArraySerde<T>(PhantomData<T>);

impl<T> PrimitiveArraySerde<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for PrimitiveArraySerde<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayElement> Serializer for PrimitiveArraySerde<T> {
    fn serialize(
        &self,
        encoder: &mut dyn Encoder,
        _ctx: &EncoderContext<'_>,
        value: &Value,
        ty: &Argument,
    ) -> SerdeResult<()> {
        let Some(elements) = T::elements(value) else {
            if value.is_null() {
                return encoder.encode_null();
            }
            return Err(SerdeError::ValueMismatch {
                expected: T::NAME,
                found: value.kind_name(),
            });
        };
        encoder.encode_array(ty)?;
        for &element in elements {
            element.encode(encoder)?;
        }
        encoder.finish_structure()
    }

    fn is_empty(&self, value: &Value) -> bool {
        value.is_null() || T::elements(value).is_some_and(<[T]>::is_empty)
    }
}

impl<T: ArrayElement> Deserializer for PrimitiveArraySerde<T> {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        _ctx: &DecoderContext<'_>,
        ty: &Argument,
    ) -> SerdeResult<Value> {
        if decoder.decode_null()? {
            return Ok(Value::Null);
        }
        decoder.decode_array(ty)?;
        let mut buffer = vec![T::default(); T::INITIAL_CAPACITY];
        let mut len = 0;
        while decoder.has_next_array_value()? {
            if len == buffer.len() {
                buffer.resize(len * 2, T::default());
            }
            buffer[len] = if decoder.decode_null()? {
                T::default()
            } else {
                T::decode(decoder)?
            };
            len += 1;
        }
        decoder.finish_structure()?;
        buffer.truncate(len);
        buffer.shrink_to_fit();
        Ok(T::into_value(buffer))
    }

    fn allows_null(&self) -> bool {
        true
    }
}
