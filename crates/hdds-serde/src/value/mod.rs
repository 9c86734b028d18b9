// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory values handled by codecs.

mod charset;
mod locale;
mod uri;

pub use charset::{Charset, UnsupportedCharset};
pub use locale::{LanguageTagError, Locale};
pub use uri::{Uri, UriError};

use crate::types::{Argument, ClassRef, PrimitiveKind};
use bigdecimal::BigDecimal;
use chrono_tz::Tz;
use indexmap::IndexMap;
use num_bigint::BigInt;
use url::Url;
use uuid::Uuid;

/// A dynamically typed value on the in-memory side of a codec.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,

    // Scalars
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),

    // Value types
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
    Uuid(Uuid),
    Url(Url),
    Uri(Uri),
    Charset(Charset),
    TimeZone(Tz),
    Locale(Locale),

    // Scalar optionals; `None` is both absent and empty
    OptionalInt(Option<i32>),
    OptionalLong(Option<i64>),
    OptionalDouble(Option<f64>),

    // Primitive arrays
    BooleanArray(Vec<bool>),
    ByteArray(Vec<i8>),
    ShortArray(Vec<i16>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    CharArray(Vec<char>),

    // Composites
    Array(Vec<Value>),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Byte(_) => "byte",
            Self::Short(_) => "short",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::BigInteger(_) => "big integer",
            Self::BigDecimal(_) => "big decimal",
            Self::Uuid(_) => "uuid",
            Self::Url(_) => "url",
            Self::Uri(_) => "uri",
            Self::Charset(_) => "charset",
            Self::TimeZone(_) => "time zone",
            Self::Locale(_) => "locale",
            Self::OptionalInt(_) => "optional int",
            Self::OptionalLong(_) => "optional long",
            Self::OptionalDouble(_) => "optional double",
            Self::BooleanArray(_) => "boolean[]",
            Self::ByteArray(_) => "byte[]",
            Self::ShortArray(_) => "short[]",
            Self::IntArray(_) => "int[]",
            Self::LongArray(_) => "long[]",
            Self::FloatArray(_) => "float[]",
            Self::DoubleArray(_) => "double[]",
            Self::CharArray(_) => "char[]",
            Self::Array(_) => "array",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// The type this value serializes as when nothing more specific is known.
    ///
    /// Scalars map to their boxed kinds, since a value reached through a
    /// container is always a reference.
    pub fn natural_argument(&self) -> Argument {
        let primitive_array = |kind| Argument::array_of(&Argument::primitive(kind));
        match self {
            Self::Null | Self::Object(_) => Argument::object(),
            Self::Boolean(_) => Argument::boxed(PrimitiveKind::Boolean),
            Self::Byte(_) => Argument::boxed(PrimitiveKind::Byte),
            Self::Short(_) => Argument::boxed(PrimitiveKind::Short),
            Self::Int(_) => Argument::boxed(PrimitiveKind::Int),
            Self::Long(_) => Argument::boxed(PrimitiveKind::Long),
            Self::Float(_) => Argument::boxed(PrimitiveKind::Float),
            Self::Double(_) => Argument::boxed(PrimitiveKind::Double),
            Self::Char(_) => Argument::boxed(PrimitiveKind::Char),
            Self::String(_) => Argument::string(),
            Self::BigInteger(_) => Argument::of(ClassRef::big_integer()),
            Self::BigDecimal(_) => Argument::of(ClassRef::big_decimal()),
            Self::Uuid(_) => Argument::of(ClassRef::uuid()),
            Self::Url(_) => Argument::of(ClassRef::url()),
            Self::Uri(_) => Argument::of(ClassRef::uri()),
            Self::Charset(_) => Argument::of(ClassRef::charset()),
            Self::TimeZone(_) => Argument::of(ClassRef::time_zone()),
            Self::Locale(_) => Argument::of(ClassRef::locale()),
            Self::OptionalInt(_) => Argument::of(ClassRef::optional_int()),
            Self::OptionalLong(_) => Argument::of(ClassRef::optional_long()),
            Self::OptionalDouble(_) => Argument::of(ClassRef::optional_double()),
            Self::BooleanArray(_) => primitive_array(PrimitiveKind::Boolean),
            Self::ByteArray(_) => primitive_array(PrimitiveKind::Byte),
            Self::ShortArray(_) => primitive_array(PrimitiveKind::Short),
            Self::IntArray(_) => primitive_array(PrimitiveKind::Int),
            Self::LongArray(_) => primitive_array(PrimitiveKind::Long),
            Self::FloatArray(_) => primitive_array(PrimitiveKind::Float),
            Self::DoubleArray(_) => primitive_array(PrimitiveKind::Double),
            Self::CharArray(_) => primitive_array(PrimitiveKind::Char),
            Self::Array(_) => Argument::array_of(&Argument::object()),
            Self::List(_) => Argument::of(ClassRef::list()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Any integral scalar widened to i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Byte(v) => Some(i64::from(*v)),
            Self::Short(v) => Some(i64::from(*v)),
            Self::Int(v) => Some(i64::from(*v)),
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Elements of an object array or list.
    pub fn as_elements(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) | Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn get_field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.get(name),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}
