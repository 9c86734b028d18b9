// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by resolution, codecs and wire bindings.

use crate::codec::Token;
use thiserror::Error;

/// Errors produced while building the registry, resolving codecs, or
/// driving a codec against an encoder/decoder.
#[derive(Debug, Error)]
pub enum SerdeError {
    /// Startup-fatal: a registered codec cannot be indexed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A candidate bucket exists for the type but nothing survived narrowing.
    #[error("no serializers found for type: {type_name}")]
    NoSerializer { type_name: String },

    /// More than one equally specific candidate survived narrowing.
    #[error(
        "multiple possible serializers found for type [{type_name}]: [{}]",
        candidates.join(", ")
    )]
    AmbiguousSerializer {
        type_name: String,
        candidates: Vec<String>,
    },

    /// The component registry failed to produce an instance for a candidate.
    #[error("failed to instantiate codec {candidate}: {reason}")]
    Instantiation { candidate: String, reason: String },

    /// A scalar or structure was requested but the wire holds another token.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: Token },

    /// An integer token does not fit the requested width.
    #[error("value {value} out of range for {target}")]
    OutOfRange { target: &'static str, value: String },

    /// A wire scalar could not be parsed into its target representation.
    #[error("cannot parse {target} from {input:?}: {reason}")]
    Parse {
        target: &'static str,
        input: String,
        reason: String,
    },

    /// A codec was handed a value it does not serialize.
    #[error("cannot serialize {found} value as {expected}")]
    ValueMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Begin/finish pairing or key/value ordering was violated on an encoder.
    #[error("encoder contract violated: {0}")]
    EncoderContract(String),

    /// A decoder was driven out of order (e.g. finishing a scope with unread elements).
    #[error("decoder contract violated: {0}")]
    DecoderContract(String),

    /// The decoder ran out of values.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerdeError {
    pub(crate) fn parse(
        target: &'static str,
        input: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            target,
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` for errors raised by codec resolution rather than by
    /// reading or writing a value.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::NoSerializer { .. } | Self::AmbiguousSerializer { .. } | Self::Instantiation { .. }
        )
    }
}

pub type SerdeResult<T> = core::result::Result<T, SerdeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguity_message_names_every_candidate() {
        let err = SerdeError::AmbiguousSerializer {
            type_name: "List<String>".into(),
            candidates: vec!["StringListSerializer".into(), "AnyListSerializer".into()],
        };
        assert_eq!(
            err.to_string(),
            "multiple possible serializers found for type [List<String>]: \
             [StringListSerializer, AnyListSerializer]"
        );
        assert!(err.is_resolution_error());
    }

    #[test]
    fn parse_error_display() {
        let err = SerdeError::parse("Uuid", "not-a-uuid", "invalid character");
        assert_eq!(
            err.to_string(),
            "cannot parse Uuid from \"not-a-uuid\": invalid character"
        );
        assert!(!err.is_resolution_error());
    }

    #[test]
    fn unexpected_token_display() {
        let err = SerdeError::UnexpectedToken {
            expected: "int",
            found: Token::String,
        };
        assert_eq!(err.to_string(), "expected int, found string");
    }
}
