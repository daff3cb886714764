//! Random strings drawn from named or custom character sets.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::{CollectionOptions, StringOptions};
use crate::error::BuilderError;
use crate::generators::collections::multiple;

const ALPHABETIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &[u8] = b"0123456789";
const HEX: &[u8] = b"0123456789abcdef";
const BINARY: &[u8] = b"01";
const OCTAL: &[u8] = b"01234567";

/// Character class a random string is drawn from.
///
/// Serialized as a plain string: a class name, or the literal characters of
/// a custom set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Charset {
    #[default]
    Alphabetic,
    Alphanumeric,
    Numeric,
    Hex,
    Binary,
    Octal,
    /// Literal characters to draw from.
    Custom(CustomCharset),
}

impl Charset {
    /// Builds a custom charset. Fails on an empty string.
    pub fn custom(chars: &str) -> Result<Self, BuilderError> {
        CustomCharset::try_from(chars.to_string()).map(Self::Custom)
    }

    fn chars(&self) -> Vec<char> {
        let ascii = match self {
            Self::Alphabetic => ALPHABETIC,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Numeric => NUMERIC,
            Self::Hex => HEX,
            Self::Binary => BINARY,
            Self::Octal => OCTAL,
            Self::Custom(custom) => return custom.0.chars().collect(),
        };
        ascii.iter().map(|&b| char::from(b)).collect()
    }
}

impl FromStr for Charset {
    type Err = BuilderError;

    /// Known class names map to their class; any other string is used as a
    /// custom set of characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "alphabetic" => Self::Alphabetic,
            "alphanumeric" => Self::Alphanumeric,
            "numeric" => Self::Numeric,
            "hex" => Self::Hex,
            "binary" => Self::Binary,
            "octal" => Self::Octal,
            other => Self::custom(other)?,
        })
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabetic => f.write_str("alphabetic"),
            Self::Alphanumeric => f.write_str("alphanumeric"),
            Self::Numeric => f.write_str("numeric"),
            Self::Hex => f.write_str("hex"),
            Self::Binary => f.write_str("binary"),
            Self::Octal => f.write_str("octal"),
            Self::Custom(custom) => f.write_str(&custom.0),
        }
    }
}

impl TryFrom<String> for Charset {
    type Error = BuilderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Charset> for String {
    fn from(value: Charset) -> Self {
        value.to_string()
    }
}

/// Non-empty set of literal characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCharset(String);

impl TryFrom<String> for CustomCharset {
    type Error = BuilderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(BuilderError::EmptyCharset);
        }
        Ok(Self(value))
    }
}

impl From<CustomCharset> for String {
    fn from(value: CustomCharset) -> Self {
        value.0
    }
}

/// Generates a string of exactly `options.length` characters from
/// `options.charset`, then applies `options.capitalization` if set.
///
/// Casing can change the character count for custom charsets whose
/// characters expand under case mapping (`ß` uppercases to `SS`).
pub fn string(options: &StringOptions, rng: &mut impl Rng) -> String {
    let chars = options.charset.chars();
    let raw: String = (0..options.length)
        .filter_map(|_| chars.choose(rng).copied())
        .collect();

    match options.capitalization {
        Some(capitalization) => capitalization.apply(&raw),
        None => raw,
    }
}

/// Generates `options.count` independent strings sharing one shape.
pub fn strings(options: &CollectionOptions, rng: &mut impl Rng) -> Vec<String> {
    multiple(options.count, || string(&options.string, rng))
}
