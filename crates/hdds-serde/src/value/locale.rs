// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Locales identified by BCP 47 language tags.

use std::fmt;
use std::str::FromStr;

/// A locale parsed from a well-formed language tag.
///
/// Subtags are case-normalized (`EN-latn-us` becomes `en-Latn-US`). The
/// root locale has an empty language and renders as `und`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    extensions: Option<String>,
}

/// The tag is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTagError {
    pub tag: String,
    pub subtag: String,
}

impl fmt::Display for LanguageTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ill-formed language tag {:?}: invalid subtag {:?}",
            self.tag, self.subtag
        )
    }
}

impl std::error::Error for LanguageTagError {}

const UNDETERMINED: &str = "und";

impl Locale {
    /// The root locale (`und`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a BCP 47 language tag.
    pub fn for_language_tag(tag: &str) -> Result<Self, LanguageTagError> {
        let mut locale = Self::default();
        if tag.is_empty() || tag.eq_ignore_ascii_case(UNDETERMINED) {
            return Ok(locale);
        }

        let err = |subtag: &str| LanguageTagError {
            tag: tag.to_string(),
            subtag: subtag.to_string(),
        };
        let subtags: Vec<&str> = tag.split('-').collect();
        if subtags
            .iter()
            .any(|s| s.is_empty() || s.len() > 8 || !s.bytes().all(|b| b.is_ascii_alphanumeric()))
        {
            let bad = subtags
                .iter()
                .find(|s| s.is_empty() || s.len() > 8 || !s.bytes().all(|b| b.is_ascii_alphanumeric()))
                .copied()
                .unwrap_or_default();
            return Err(err(bad));
        }

        let mut rest = subtags.as_slice();
        let first = rest[0];
        if first.len() == 1 {
            // Private-use or extension-only tag: no language subtag.
            locale.extensions = Some(parse_extensions(rest).ok_or_else(|| err(first))?);
            return Ok(locale);
        }
        if !is_alpha(first) || !(matches!(first.len(), 2 | 3) || (5..=8).contains(&first.len())) {
            return Err(err(first));
        }
        if !first.eq_ignore_ascii_case(UNDETERMINED) {
            locale.language = first.to_ascii_lowercase();
        }
        rest = &rest[1..];

        if let Some((&s, tail)) = rest.split_first() {
            if s.len() == 4 && is_alpha(s) {
                locale.script = Some(titlecase(s));
                rest = tail;
            }
        }
        if let Some((&s, tail)) = rest.split_first() {
            if (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())) {
                locale.region = Some(s.to_ascii_uppercase());
                rest = tail;
            }
        }
        while let Some((&s, tail)) = rest.split_first() {
            let is_variant = (5..=8).contains(&s.len())
                || (s.len() == 4 && s.as_bytes()[0].is_ascii_digit());
            if !is_variant {
                break;
            }
            locale.variants.push(s.to_ascii_lowercase());
            rest = tail;
        }
        if let Some(&s) = rest.first() {
            if s.len() != 1 {
                return Err(err(s));
            }
            locale.extensions = Some(parse_extensions(rest).ok_or_else(|| err(s))?);
        }
        Ok(locale)
    }

    /// Render the normalized language tag.
    pub fn to_language_tag(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4 + self.variants.len());
        let has_language = !self.language.is_empty();
        if has_language || self.extensions.is_none() || self.script.is_some() || self.region.is_some() {
            parts.push(if has_language { &self.language } else { UNDETERMINED });
        }
        if let Some(script) = &self.script {
            parts.push(script);
        }
        if let Some(region) = &self.region {
            parts.push(region);
        }
        parts.extend(self.variants.iter().map(String::as_str));
        if let Some(extensions) = &self.extensions {
            parts.push(extensions);
        }
        parts.join("-")
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn is_root(&self) -> bool {
        *self == Self::root()
    }
}

fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn titlecase(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Validate `singleton 1*(2..8 alnum)` runs and `x 1*(1..8 alnum)` private use.
fn parse_extensions(subtags: &[&str]) -> Option<String> {
    let mut i = 0;
    while i < subtags.len() {
        let singleton = subtags[i];
        if singleton.len() != 1 {
            return None;
        }
        let private = singleton.eq_ignore_ascii_case("x");
        let min = if private { 1 } else { 2 };
        let start = i + 1;
        let mut end = start;
        while end < subtags.len() && subtags[end].len() >= min && (private || subtags[end].len() > 1) {
            end += 1;
        }
        if end == start {
            return None;
        }
        if private {
            end = subtags.len();
        }
        i = end;
    }
    Some(subtags.join("-").to_ascii_lowercase())
}

impl FromStr for Locale {
    type Err = LanguageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_language_tag(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_language_tag())
    }
}
