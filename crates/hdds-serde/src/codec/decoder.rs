// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read side of the wire contract.

use crate::error::SerdeResult;
use crate::types::Argument;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;

/// Kind of the next wire value, as seen by [`Decoder::peek_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Null,
    Boolean,
    /// Integral number of any width.
    Integer,
    /// Number with a fractional part or exponent.
    Decimal,
    String,
    Array,
    Object,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// Structural reader driven by deserializers.
///
/// Arrays are iterated with `has_next_array_value` (no length is known up
/// front) and objects with `decode_key` until it returns `None`. Each scope
/// ends with `finish_structure`, which fails if elements were left unread.
/// Decoding a scalar against a different wire token is an error, never a
/// panic, and leaves the value unconsumed.
pub trait Decoder {
    /// Kind of the next value without consuming it.
    fn peek_token(&mut self) -> SerdeResult<Token>;

    /// Enter the array at the current position.
    fn decode_array(&mut self, ty: &Argument) -> SerdeResult<()>;

    /// Enter the object at the current position.
    fn decode_object(&mut self, ty: &Argument) -> SerdeResult<()>;

    /// Whether the innermost array scope has another element.
    fn has_next_array_value(&mut self) -> SerdeResult<bool>;

    /// Next member name of the innermost object scope, `None` when exhausted.
    fn decode_key(&mut self) -> SerdeResult<Option<String>>;

    /// Leave the innermost scope.
    fn finish_structure(&mut self) -> SerdeResult<()>;

    /// Consume and discard the next value, whatever its shape.
    fn skip_value(&mut self) -> SerdeResult<()>;

    /// Consume a null if one is next. Returns whether it did.
    fn decode_null(&mut self) -> SerdeResult<bool>;

    /// Whether the next value is null, without consuming it.
    fn is_null(&mut self) -> SerdeResult<bool> {
        Ok(self.peek_token()? == Token::Null)
    }

    fn decode_string(&mut self) -> SerdeResult<String>;
    fn decode_boolean(&mut self) -> SerdeResult<bool>;
    fn decode_byte(&mut self) -> SerdeResult<i8>;
    fn decode_short(&mut self) -> SerdeResult<i16>;
    fn decode_int(&mut self) -> SerdeResult<i32>;
    fn decode_long(&mut self) -> SerdeResult<i64>;
    fn decode_float(&mut self) -> SerdeResult<f32>;
    fn decode_double(&mut self) -> SerdeResult<f64>;
    fn decode_char(&mut self) -> SerdeResult<char>;
    fn decode_big_integer(&mut self) -> SerdeResult<BigInt>;
    fn decode_big_decimal(&mut self) -> SerdeResult<BigDecimal>;
}
