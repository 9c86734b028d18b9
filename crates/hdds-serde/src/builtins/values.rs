// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value types carried as a single wire scalar.
//!
//! Big numbers use the numeric wire tokens; everything else is written as
//! a string and parsed back on read. Parse failures are
//! [`SerdeError::Parse`], never a panic.

use crate::codec::{Decoder, DecoderContext, Deserializer, Encoder, EncoderContext, Serializer};
use crate::error::{SerdeError, SerdeResult};
use crate::types::Argument;
use crate::value::{Charset, Locale, Uri, Value};
use chrono_tz::Tz;
use url::Url;
use uuid::Uuid;

fn mismatch(expected: &'static str, found: &Value) -> SerdeError {
    SerdeError::ValueMismatch {
        expected,
        found: found.kind_name(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerSerde;

impl Serializer for BigIntegerSerde {
    fn serialize(
        &self,
        encoder: &mut dyn Encoder,
        _ctx: &EncoderContext<'_>,
        value: &Value,
        _ty: &Argument,
    ) -> SerdeResult<()> {
        match value {
            Value::BigInteger(v) => encoder.encode_big_integer(v),
            Value::Null => encoder.encode_null(),
            other => Err(mismatch("BigInteger", other)),
        }
    }
}

impl Deserializer for BigIntegerSerde {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        _ctx: &DecoderContext<'_>,
        _ty: &Argument,
    ) -> SerdeResult<Value> {
        if decoder.decode_null()? {
            return Ok(Value::Null);
        }
        Ok(Value::BigInteger(decoder.decode_big_integer()?))
    }

    fn allows_null(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BigDecimalSerde;

impl Serializer for BigDecimalSerde {
    fn serialize(
        &self,
        encoder: &mut dyn Encoder,
        _ctx: &EncoderContext<'_>,
        value: &Value,
        _ty: &Argument,
    ) -> SerdeResult<()> {
        match value {
            Value::BigDecimal(v) => encoder.encode_big_decimal(v),
            Value::Null => encoder.encode_null(),
            other => Err(mismatch("BigDecimal", other)),
        }
    }
}

impl Deserializer for BigDecimalSerde {
    fn deserialize(
        &self,
        decoder: &mut dyn Decoder,
        _ctx: &DecoderContext<'_>,
        _ty: &Argument,
    ) -> SerdeResult<Value> {
        if decoder.decode_null()? {
            return Ok(Value::Null);
        }
        Ok(Value::BigDecimal(decoder.decode_big_decimal()?))
    }

    fn allows_null(&self) -> bool {
        true
    }
}

/// Serde for a value type written as a string.
///
/// `parse` turns the wire string into the value, `render` the value into
/// the wire string.
macro_rules! string_serde {
    (
        $(#[$meta:meta])*
        $name:ident, $variant:ident, $target:literal,
        parse = |$s:ident| $parse:expr,
        render = |$v:ident| $render:expr $(,)?
    ) => {
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
                    Value::$variant($v) => encoder.encode_string(&$render),
                    Value::Null => encoder.encode_null(),
                    other => Err(mismatch($target, other)),
                }
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
                    return Ok(Value::Null);
                }
                let $s: String = decoder.decode_string()?;
                let parsed = $parse;
                parsed
                    .map(Value::$variant)
                    .map_err(|e| SerdeError::parse($target, $s.as_str(), e))
            }

            fn allows_null(&self) -> bool {
                true
            }
        }
    };
}

string_serde!(
    /// Hyphenated UUID strings.
    UuidSerde, Uuid, "Uuid",
    parse = |s| Uuid::parse_str(&s),
    render = |v| v.hyphenated().to_string(),
);

string_serde!(
    /// Absolute URLs.
    UrlSerde, Url, "Url",
    parse = |s| Url::parse(&s),
    render = |v| v.as_str(),
);

string_serde!(
    /// URI references, kept verbatim.
    UriSerde, Uri, "Uri",
    parse = |s| Uri::parse(&s),
    render = |v| v.as_str(),
);

string_serde!(
    /// Canonical charset names (aliases accepted on read).
    CharsetSerde, Charset, "Charset",
    parse = |s| Charset::for_name(&s),
    render = |v| v.name(),
);

string_serde!(
    /// IANA time zone ids.
    TimeZoneSerde, TimeZone, "TimeZone",
    parse = |s| s.parse::<Tz>(),
    render = |v| v.name(),
);

string_serde!(
    /// BCP 47 language tags.
    LocaleSerde, Locale, "Locale",
    parse = |s| Locale::for_language_tag(&s),
    render = |v| v.to_language_tag(),
);
