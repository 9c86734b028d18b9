// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Named character sets.

use std::fmt;
use std::str::FromStr;

/// The standard character sets every platform is required to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
    UsAscii,
    Iso8859_1,
    Utf16,
    Utf16Be,
    Utf16Le,
    Utf32,
    Windows1252,
}

/// Name lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedCharset(pub String);

impl fmt::Display for UnsupportedCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported charset: {}", self.0)
    }
}

impl std::error::Error for UnsupportedCharset {}

// (charset, canonical name, aliases); lookups are ASCII case-insensitive.
const TABLE: &[(Charset, &str, &[&str])] = &[
    (Charset::Utf8, "UTF-8", &["utf8", "unicode-1-1-utf-8"]),
    (
        Charset::UsAscii,
        "US-ASCII",
        &["ascii", "iso646-us", "ascii7", "646", "default", "cp367"],
    ),
    (
        Charset::Iso8859_1,
        "ISO-8859-1",
        &["iso8859_1", "iso_8859_1", "iso-latin-1", "latin1", "l1", "8859_1", "cp819"],
    ),
    (Charset::Utf16, "UTF-16", &["utf16", "unicode", "utf_16"]),
    (Charset::Utf16Be, "UTF-16BE", &["utf_16be", "x-utf-16be", "unicodebigunmarked"]),
    (Charset::Utf16Le, "UTF-16LE", &["utf_16le", "x-utf-16le", "unicodelittleunmarked"]),
    (Charset::Utf32, "UTF-32", &["utf32", "utf_32"]),
    (Charset::Windows1252, "windows-1252", &["cp1252", "cp5348"]),
];

impl Charset {
    /// Resolve a canonical name or alias.
    pub fn for_name(name: &str) -> Result<Self, UnsupportedCharset> {
        TABLE
            .iter()
            .find(|(_, canonical, aliases)| {
                canonical.eq_ignore_ascii_case(name)
                    || aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .map(|(charset, _, _)| *charset)
            .ok_or_else(|| UnsupportedCharset(name.to_string()))
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|(charset, _, _)| *charset == self)
            .map_or("UTF-8", |(_, canonical, _)| *canonical)
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match TABLE.iter().find(|(charset, _, _)| *charset == self) {
            Some((_, _, aliases)) => *aliases,
            None => &[],
        }
    }
}

impl FromStr for Charset {
    type Err = UnsupportedCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_name(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_and_aliases_resolve() {
        assert_eq!(Charset::for_name("utf-8"), Ok(Charset::Utf8));
        assert_eq!(Charset::for_name("LATIN1"), Ok(Charset::Iso8859_1));
        assert_eq!(Charset::for_name("cp1252"), Ok(Charset::Windows1252));
        assert_eq!(Charset::Iso8859_1.name(), "ISO-8859-1");
        assert!(Charset::UsAscii.aliases().contains(&"ascii"));
    }

    #[test]
    fn every_canonical_name_round_trips() {
        for (charset, name, _) in TABLE {
            assert_eq!(charset.name(), *name);
            assert_eq!(name.parse::<Charset>(), Ok(*charset));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = Charset::for_name("klingon-8").unwrap_err();
        assert_eq!(err.to_string(), "unsupported charset: klingon-8");
    }
}
