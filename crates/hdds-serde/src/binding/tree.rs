// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON-like tree wire format.
//!
//! [`TreeEncoder`] builds a [`WireValue`] and [`TreeDecoder`] walks one.
//! With the `json` feature a tree converts to and from `serde_json::Value`.

use crate::codec::{Decoder, Encoder, Token};
use crate::error::{SerdeError, SerdeResult};
use crate::types::Argument;
use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt::Display;
use std::iter::Peekable;

/// A wire value: objects, arrays, scalars and null.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
    String(String),
    Array(Vec<WireValue>),
    Object(IndexMap<String, WireValue>),
}

impl WireValue {
    pub fn token(&self) -> Token {
        match self {
            Self::Null => Token::Null,
            Self::Boolean(_) => Token::Boolean,
            Self::Integer(_) | Self::BigInteger(_) => Token::Integer,
            Self::Float(_) | Self::BigDecimal(_) => Token::Decimal,
            Self::String(_) => Token::String,
            Self::Array(_) => Token::Array,
            Self::Object(_) => Token::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_array(&self) -> Option<&[WireValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Member of an object.
    pub fn get(&self, key: &str) -> Option<&WireValue> {
        match self {
            Self::Object(members) => members.get(key),
            _ => None,
        }
    }
}

impl From<&str> for WireValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i64> for WireValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for WireValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for WireValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

enum WriteFrame {
    Array(Vec<WireValue>),
    Object {
        members: IndexMap<String, WireValue>,
        key: Option<String>,
    },
}

/// Builds a single root [`WireValue`].
#[derive(Default)]
pub struct TreeEncoder {
    stack: Vec<WriteFrame>,
    root: Option<WireValue>,
}

fn encoder_misuse(reason: &str) -> SerdeError {
    SerdeError::EncoderContract(reason.to_string())
}

impl TreeEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished tree. Fails if a scope is still open or nothing was written.
    pub fn into_wire(self) -> SerdeResult<WireValue> {
        if !self.stack.is_empty() {
            return Err(encoder_misuse("structure not finished"));
        }
        self.root.ok_or_else(|| encoder_misuse("no value written"))
    }

    /// Fails unless a value may be written at the current position.
    fn check_slot(&self) -> SerdeResult<()> {
        match self.stack.last() {
            Some(WriteFrame::Object { key: None, .. }) => {
                Err(encoder_misuse("object member written without a key"))
            }
            Some(_) => Ok(()),
            None if self.root.is_some() => Err(encoder_misuse("root value already written")),
            None => Ok(()),
        }
    }

    fn push(&mut self, value: WireValue) -> SerdeResult<()> {
        self.check_slot()?;
        match self.stack.last_mut() {
            Some(WriteFrame::Array(items)) => items.push(value),
            Some(WriteFrame::Object { members, key }) => {
                if let Some(key) = key.take() {
                    members.insert(key, value);
                }
            }
            None => self.root = Some(value),
        }
        Ok(())
    }
}

impl Encoder for TreeEncoder {
    fn encode_array(&mut self, _ty: &Argument) -> SerdeResult<()> {
        self.check_slot()?;
        self.stack.push(WriteFrame::Array(Vec::new()));
        Ok(())
    }

    fn encode_object(&mut self, _ty: &Argument) -> SerdeResult<()> {
        self.check_slot()?;
        self.stack.push(WriteFrame::Object {
            members: IndexMap::new(),
            key: None,
        });
        Ok(())
    }

    fn encode_key(&mut self, name: &str) -> SerdeResult<()> {
        match self.stack.last_mut() {
            Some(WriteFrame::Object { key, .. }) => {
                if key.is_some() {
                    return Err(encoder_misuse("two keys without a value"));
                }
                *key = Some(name.to_string());
                Ok(())
            }
            _ => Err(encoder_misuse("key written outside an object")),
        }
    }

    fn finish_structure(&mut self) -> SerdeResult<()> {
        let value = match self.stack.pop() {
            Some(WriteFrame::Array(items)) => WireValue::Array(items),
            Some(WriteFrame::Object { key: Some(key), .. }) => {
                return Err(SerdeError::EncoderContract(format!(
                    "object finished with dangling key {:?}",
                    key
                )))
            }
            Some(WriteFrame::Object { members, key: None }) => WireValue::Object(members),
            None => return Err(encoder_misuse("no open structure to finish")),
        };
        self.push(value)
    }

    fn encode_string(&mut self, value: &str) -> SerdeResult<()> {
        self.push(WireValue::String(value.to_string()))
    }

    fn encode_boolean(&mut self, value: bool) -> SerdeResult<()> {
        self.push(WireValue::Boolean(value))
    }

    fn encode_byte(&mut self, value: i8) -> SerdeResult<()> {
        self.push(WireValue::Integer(i64::from(value)))
    }

    fn encode_short(&mut self, value: i16) -> SerdeResult<()> {
        self.push(WireValue::Integer(i64::from(value)))
    }

    fn encode_int(&mut self, value: i32) -> SerdeResult<()> {
        self.push(WireValue::Integer(i64::from(value)))
    }

    fn encode_long(&mut self, value: i64) -> SerdeResult<()> {
        self.push(WireValue::Integer(value))
    }

    fn encode_float(&mut self, value: f32) -> SerdeResult<()> {
        self.push(WireValue::Float(f64::from(value)))
    }

    fn encode_double(&mut self, value: f64) -> SerdeResult<()> {
        self.push(WireValue::Float(value))
    }

    fn encode_char(&mut self, value: char) -> SerdeResult<()> {
        self.push(WireValue::String(value.to_string()))
    }

    fn encode_big_integer(&mut self, value: &BigInt) -> SerdeResult<()> {
        self.push(WireValue::BigInteger(value.clone()))
    }

    fn encode_big_decimal(&mut self, value: &BigDecimal) -> SerdeResult<()> {
        self.push(WireValue::BigDecimal(value.clone()))
    }

    fn encode_null(&mut self) -> SerdeResult<()> {
        self.push(WireValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

enum ReadFrame {
    Array(Peekable<std::vec::IntoIter<WireValue>>),
    Object {
        members: indexmap::map::IntoIter<String, WireValue>,
        pending: Option<WireValue>,
    },
}

/// Walks a [`WireValue`] as a stream of tokens.
pub struct TreeDecoder {
    root: Option<WireValue>,
    stack: Vec<ReadFrame>,
}

fn decoder_misuse(reason: &str) -> SerdeError {
    SerdeError::DecoderContract(reason.to_string())
}

fn unexpected(expected: &'static str, found: &WireValue) -> SerdeError {
    SerdeError::UnexpectedToken {
        expected,
        found: found.token(),
    }
}

fn out_of_range(target: &'static str, value: &dyn Display) -> SerdeError {
    SerdeError::OutOfRange {
        target,
        value: value.to_string(),
    }
}

fn widen_number(value: &WireValue, target: &'static str) -> SerdeResult<f64> {
    match value {
        WireValue::Integer(i) => Ok(*i as f64),
        WireValue::Float(f) => Ok(*f),
        WireValue::BigInteger(b) => b.to_f64().ok_or_else(|| out_of_range(target, b)),
        WireValue::BigDecimal(d) => d.to_f64().ok_or_else(|| out_of_range(target, d)),
        other => Err(unexpected(target, other)),
    }
}

impl TreeDecoder {
    pub fn new(root: WireValue) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }

    /// Fails unless the whole tree was consumed and every scope finished.
    pub fn finish(&self) -> SerdeResult<()> {
        if !self.stack.is_empty() {
            return Err(decoder_misuse("structure not finished"));
        }
        if self.root.is_some() {
            return Err(decoder_misuse("root value not read"));
        }
        Ok(())
    }

    fn peek(&mut self) -> SerdeResult<&WireValue> {
        match self.stack.last_mut() {
            None => self.root.as_ref().ok_or(SerdeError::UnexpectedEnd),
            Some(ReadFrame::Array(items)) => items.peek().ok_or(SerdeError::UnexpectedEnd),
            Some(ReadFrame::Object { pending, .. }) => pending
                .as_ref()
                .ok_or_else(|| decoder_misuse("member value read before its key")),
        }
    }

    fn take(&mut self) -> SerdeResult<WireValue> {
        match self.stack.last_mut() {
            None => self.root.take().ok_or(SerdeError::UnexpectedEnd),
            Some(ReadFrame::Array(items)) => items.next().ok_or(SerdeError::UnexpectedEnd),
            Some(ReadFrame::Object { pending, .. }) => pending
                .take()
                .ok_or_else(|| decoder_misuse("member value read before its key")),
        }
    }

    /// Convert the next value with `read`, consuming it only on success.
    fn scalar<T>(&mut self, read: impl FnOnce(&WireValue) -> SerdeResult<T>) -> SerdeResult<T> {
        let value = read(self.peek()?)?;
        self.take()?;
        Ok(value)
    }

    fn integer<T: TryFrom<i64>>(&mut self, target: &'static str) -> SerdeResult<T> {
        self.scalar(|v| {
            let wide = match v {
                WireValue::Integer(i) => *i,
                WireValue::BigInteger(b) => b.to_i64().ok_or_else(|| out_of_range(target, b))?,
                other => return Err(unexpected(target, other)),
            };
            T::try_from(wide).map_err(|_| out_of_range(target, &wide))
        })
    }

}

impl Decoder for TreeDecoder {
    fn peek_token(&mut self) -> SerdeResult<Token> {
        Ok(self.peek()?.token())
    }

    fn decode_array(&mut self, _ty: &Argument) -> SerdeResult<()> {
        let found = self.peek()?;
        if !matches!(found, WireValue::Array(_)) {
            return Err(unexpected("array", found));
        }
        if let WireValue::Array(items) = self.take()? {
            self.stack.push(ReadFrame::Array(items.into_iter().peekable()));
        }
        Ok(())
    }

    fn decode_object(&mut self, _ty: &Argument) -> SerdeResult<()> {
        let found = self.peek()?;
        if !matches!(found, WireValue::Object(_)) {
            return Err(unexpected("object", found));
        }
        if let WireValue::Object(members) = self.take()? {
            self.stack.push(ReadFrame::Object {
                members: members.into_iter(),
                pending: None,
            });
        }
        Ok(())
    }

    fn has_next_array_value(&mut self) -> SerdeResult<bool> {
        match self.stack.last_mut() {
            Some(ReadFrame::Array(items)) => Ok(items.peek().is_some()),
            _ => Err(decoder_misuse("not inside an array")),
        }
    }

    fn decode_key(&mut self) -> SerdeResult<Option<String>> {
        match self.stack.last_mut() {
            Some(ReadFrame::Object { pending: Some(_), .. }) => {
                Err(decoder_misuse("previous member value was not read"))
            }
            Some(ReadFrame::Object { members, pending }) => Ok(members.next().map(|(key, value)| {
                *pending = Some(value);
                key
            })),
            _ => Err(decoder_misuse("not inside an object")),
        }
    }

    fn finish_structure(&mut self) -> SerdeResult<()> {
        match self.stack.pop() {
            Some(ReadFrame::Array(mut items)) => {
                if items.peek().is_some() {
                    return Err(decoder_misuse("array has unread elements"));
                }
                Ok(())
            }
            Some(ReadFrame::Object { members, pending }) => {
                if pending.is_some() || members.len() > 0 {
                    return Err(decoder_misuse("object has unread members"));
                }
                Ok(())
            }
            None => Err(decoder_misuse("no open structure to finish")),
        }
    }

    fn skip_value(&mut self) -> SerdeResult<()> {
        self.take()?;
        Ok(())
    }

    fn decode_null(&mut self) -> SerdeResult<bool> {
        if self.peek()?.is_null() {
            self.take()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn decode_string(&mut self) -> SerdeResult<String> {
        self.scalar(|v| match v {
            WireValue::String(s) => Ok(s.clone()),
            other => Err(unexpected("string", other)),
        })
    }

    fn decode_boolean(&mut self) -> SerdeResult<bool> {
        self.scalar(|v| match v {
            WireValue::Boolean(b) => Ok(*b),
            other => Err(unexpected("boolean", other)),
        })
    }

    fn decode_byte(&mut self) -> SerdeResult<i8> {
        self.integer("byte")
    }

    fn decode_short(&mut self) -> SerdeResult<i16> {
        self.integer("short")
    }

    fn decode_int(&mut self) -> SerdeResult<i32> {
        self.integer("int")
    }

    fn decode_long(&mut self) -> SerdeResult<i64> {
        self.integer("long")
    }

    fn decode_float(&mut self) -> SerdeResult<f32> {
        self.scalar(|v| {
            let wide = widen_number(v, "float")?;
            let narrow = wide as f32;
            // Infinity and NaN pass through; finite doubles past f32::MAX do not.
            if wide.is_finite() && !narrow.is_finite() {
                return Err(out_of_range("float", &wide));
            }
            Ok(narrow)
        })
    }

    fn decode_double(&mut self) -> SerdeResult<f64> {
        self.scalar(|v| widen_number(v, "double"))
    }

    fn decode_char(&mut self) -> SerdeResult<char> {
        self.scalar(|v| match v {
            WireValue::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(SerdeError::parse("char", s.as_str(), "expected exactly one character")),
                }
            }
            WireValue::Integer(i) => u32::try_from(*i)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| out_of_range("char", i)),
            other => Err(unexpected("char", other)),
        })
    }

    fn decode_big_integer(&mut self) -> SerdeResult<BigInt> {
        self.scalar(|v| match v {
            WireValue::Integer(i) => Ok(BigInt::from(*i)),
            WireValue::BigInteger(b) => Ok(b.clone()),
            WireValue::String(s) => s
                .parse::<BigInt>()
                .map_err(|e| SerdeError::parse("BigInteger", s.as_str(), e)),
            other => Err(unexpected("big integer", other)),
        })
    }

    fn decode_big_decimal(&mut self) -> SerdeResult<BigDecimal> {
        self.scalar(|v| match v {
            WireValue::Integer(i) => Ok(BigDecimal::from(*i)),
            // Shortest round-trip rendering, so 0.1 stays 0.1.
            WireValue::Float(f) => f
                .to_string()
                .parse::<BigDecimal>()
                .map_err(|e| SerdeError::parse("BigDecimal", f.to_string(), e)),
            WireValue::BigInteger(b) => Ok(BigDecimal::new(b.clone(), 0)),
            WireValue::BigDecimal(d) => Ok(d.clone()),
            WireValue::String(s) => s
                .parse::<BigDecimal>()
                .map_err(|e| SerdeError::parse("BigDecimal", s.as_str(), e)),
            other => Err(unexpected("big decimal", other)),
        })
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[cfg(feature = "json")]
impl WireValue {
    /// Convert to a JSON value.
    ///
    /// Big numbers that a JSON number cannot carry exactly become strings;
    /// the big-number decoders parse them back. Non-finite floats become null.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::{Number, Value as Json};

        match self {
            Self::Null => Json::Null,
            Self::Boolean(b) => Json::Bool(*b),
            Self::Integer(i) => Json::Number((*i).into()),
            Self::Float(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::BigInteger(b) => match (b.to_i64(), b.to_u64()) {
                (Some(i), _) => Json::Number(i.into()),
                (None, Some(u)) => Json::Number(u.into()),
                (None, None) => Json::String(b.to_string()),
            },
            Self::BigDecimal(d) => d
                .to_f64()
                .filter(|f| f.to_string().parse::<BigDecimal>().is_ok_and(|back| back == *d))
                .and_then(Number::from_f64)
                .map_or_else(|| Json::String(d.to_string()), Json::Number),
            Self::String(s) => Json::String(s.clone()),
            Self::Array(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(members) => Json::Object(
                members
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Convert from a JSON value. Integers above `i64::MAX` become big integers.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::BigInteger(BigInt::from(u))
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Self::from_json).collect()),
            Json::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Self::from_json(value)))
                    .collect(),
            ),
        }
    }

    pub fn to_json_string(&self) -> SerdeResult<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    pub fn from_json_str(input: &str) -> SerdeResult<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from_json(json))
    }
}
