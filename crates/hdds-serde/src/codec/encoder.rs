// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Write side of the wire contract.

use crate::error::SerdeResult;
use crate::types::Argument;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Structural writer driven by serializers.
///
/// `encode_array` and `encode_object` open a scope that must be closed by
/// exactly one `finish_structure` before a sibling value is written.
/// Inside an object scope every value is preceded by `encode_key`.
/// Implementations report misuse as [`SerdeError::EncoderContract`].
///
/// [`SerdeError::EncoderContract`]: crate::SerdeError::EncoderContract
pub trait Encoder {
    /// Open an array scope for a value of type `ty`.
    fn encode_array(&mut self, ty: &Argument) -> SerdeResult<()>;

    /// Open an object scope for a value of type `ty`.
    fn encode_object(&mut self, ty: &Argument) -> SerdeResult<()>;

    /// Name the next member of the innermost object scope.
    fn encode_key(&mut self, key: &str) -> SerdeResult<()>;

    /// Close the innermost scope.
    fn finish_structure(&mut self) -> SerdeResult<()>;

    fn encode_string(&mut self, value: &str) -> SerdeResult<()>;
    fn encode_boolean(&mut self, value: bool) -> SerdeResult<()>;
    fn encode_byte(&mut self, value: i8) -> SerdeResult<()>;
    fn encode_short(&mut self, value: i16) -> SerdeResult<()>;
    fn encode_int(&mut self, value: i32) -> SerdeResult<()>;
    fn encode_long(&mut self, value: i64) -> SerdeResult<()>;
    fn encode_float(&mut self, value: f32) -> SerdeResult<()>;
    fn encode_double(&mut self, value: f64) -> SerdeResult<()>;
    fn encode_char(&mut self, value: char) -> SerdeResult<()>;
    fn encode_big_integer(&mut self, value: &BigInt) -> SerdeResult<()>;
    fn encode_big_decimal(&mut self, value: &BigDecimal) -> SerdeResult<()>;
    fn encode_null(&mut self) -> SerdeResult<()>;
}
