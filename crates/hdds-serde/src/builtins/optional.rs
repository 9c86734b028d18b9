// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Optional scalars.
//!
//! A present value is written as the bare scalar and an absent one as
//! null. Absent and empty are the same state: `is_empty(x) == is_absent(x)`
//! for every value. A missing member defaults to absent.

use crate::codec::{Decoder, DecoderContext, Deserializer, Encoder, EncoderContext, Serializer};
use crate::error::{SerdeError, SerdeResult};
use crate::types::Argument;
use crate::value::Value;

macro_rules! optional_serde {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $target:literal, $encode:ident, $decode:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Serializer for $name {
            fn serialize(
                &self,
                encoder: &mut dyn Encoder,
                _ctx: &EncoderContext<'_>,
                value: &Value,
                _ty: &Argument,
            ) -> SerdeResult<()> {
                match value {
                    Value::$variant(Some(v)) => encoder.$encode(*v),
                    Value::$variant(None) | Value::Null => encoder.encode_null(),
                    other => Err(SerdeError::ValueMismatch {
                        expected: $target,
                        found: other.kind_name(),
                    }),
                }
            }

            fn is_empty(&self, value: &Value) -> bool {
                matches!(value, Value::$variant(None) | Value::Null)
            }

            fn is_absent(&self, value: &Value) -> bool {
                self.is_empty(value)
            }
        }

        impl Deserializer for $name {
            fn deserialize(
                &self,
                decoder: &mut dyn Decoder,
                _ctx: &DecoderContext<'_>,
                _ty: &Argument,
            ) -> SerdeResult<Value> {
                if decoder.decode_null()? {
                    return Ok(Value::$variant(None));
                }
                Ok(Value::$variant(Some(decoder.$decode()?)))
            }

            fn allows_null(&self) -> bool {
                true
            }

            fn default_value(&self) -> Option<Value> {
                Some(Value::$variant(None))
            }
        }
    };
}

optional_serde!(OptionalIntSerde, OptionalInt, "OptionalInt", encode_int, decode_int);
optional_serde!(OptionalLongSerde, OptionalLong, "OptionalLong", encode_long, decode_long);
optional_serde!(OptionalDoubleSerde, OptionalDouble, "OptionalDouble", encode_double, decode_double);
