// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! URI references (RFC 3986), absolute or relative.

use std::fmt;
use std::str::FromStr;

/// A syntactically valid URI reference.
///
/// Unlike [`url::Url`], relative references (`../a?b`) are accepted and
/// nothing is normalized: the text round-trips verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

/// Reason a string is not a URI reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriError {
    pub position: usize,
    pub reason: &'static str,
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}", self.reason, self.position)
    }
}

impl std::error::Error for UriError {}

impl Uri {
    pub fn parse(input: &str) -> Result<Self, UriError> {
        let bytes = input.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'%' => {
                    let valid = bytes.len() > i + 2
                        && bytes[i + 1].is_ascii_hexdigit()
                        && bytes[i + 2].is_ascii_hexdigit();
                    if !valid {
                        return Err(UriError {
                            position: i,
                            reason: "malformed escape pair",
                        });
                    }
                    i += 3;
                    continue;
                }
                b if is_uri_char(b) => {}
                _ => {
                    return Err(UriError {
                        position: i,
                        reason: "illegal character",
                    })
                }
            }
            i += 1;
        }
        if input.starts_with(':') {
            return Err(UriError {
                position: 0,
                reason: "expected scheme name",
            });
        }
        if input.matches('#').count() > 1 {
            return Err(UriError {
                position: input.rfind('#').unwrap_or(0),
                reason: "illegal character in fragment",
            });
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme, if the reference is absolute.
    pub fn scheme(&self) -> Option<&str> {
        let (candidate, _) = self.0.split_once(':')?;
        let mut chars = candidate.chars();
        let first = chars.next()?;
        let valid = first.is_ascii_alphabetic()
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        valid.then_some(candidate)
    }

    pub fn is_absolute(&self) -> bool {
        self.scheme().is_some()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.0.split_once('#').map(|(_, fragment)| fragment)
    }
}

fn is_uri_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            // unreserved
            b'-' | b'.' | b'_' | b'~'
            // gen-delims
            | b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@'
            // sub-delims
            | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        )
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_and_relative_references() {
        let abs = Uri::parse("urn:isbn:0451450523").unwrap();
        assert_eq!(abs.scheme(), Some("urn"));
        assert!(abs.is_absolute());

        let rel = Uri::parse("../docs/index.html?q=a%20b#top").unwrap();
        assert!(!rel.is_absolute());
        assert_eq!(rel.fragment(), Some("top"));
        assert_eq!(rel.to_string(), "../docs/index.html?q=a%20b#top");

        assert!(Uri::parse("").is_ok());
    }

    #[test]
    fn rejects_illegal_characters_and_escapes() {
        let err = Uri::parse("http://host/a b").unwrap_err();
        assert_eq!(err.position, 13);
        assert_eq!(Uri::parse("a%zz").unwrap_err().reason, "malformed escape pair");
        assert!(Uri::parse("a%2").is_err());
        assert!(Uri::parse(":nothing").is_err());
        assert!(Uri::parse("a#b#c").is_err());
    }
}
