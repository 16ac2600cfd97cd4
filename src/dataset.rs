//! Dictionary dataset model and JSON codec
//!
//! The dataset is a JSON array of `{"word": ..., "tier": ...}` objects. Output
//! is ASCII-only and uses `", "` / `": "` separators, so re-curating an
//! unchanged dataset reproduces the same bytes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io;

/// Tier assumed when a record has none or an unusable one
pub const DEFAULT_TIER: u8 = 1;

/// Highest tier a record may carry
pub const MAX_TIER: u8 = 3;

/// A curated dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub tier: u8,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, tier: u8) -> Self {
        Self {
            word: word.into(),
            tier,
        }
    }
}

/// A record read from an existing dataset, before re-curation
///
/// Parsing is lenient per field: a missing or non-string `word` becomes empty
/// (and is later discarded), a missing or out-of-range `tier` becomes
/// [`DEFAULT_TIER`]. Only a non-object element is an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetRecord {
    #[serde(default, deserialize_with = "lenient_word")]
    pub word: String,
    #[serde(default = "default_tier", deserialize_with = "lenient_tier")]
    pub tier: u8,
}

impl DatasetRecord {
    pub fn new(word: impl Into<String>, tier: u8) -> Self {
        Self {
            word: word.into(),
            tier,
        }
    }
}

fn default_tier() -> u8 {
    DEFAULT_TIER
}

fn lenient_word<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(word) => word,
        _ => String::new(),
    })
}

fn lenient_tier<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let tier = Value::deserialize(deserializer)?
        .as_u64()
        .filter(|t| (1..=u64::from(MAX_TIER)).contains(t))
        .and_then(|t| u8::try_from(t).ok());
    Ok(tier.unwrap_or(DEFAULT_TIER))
}

/// Parse an existing dataset document
///
/// The document must be an array whose elements are all objects.
pub fn parse_dataset(text: &str) -> serde_json::Result<Vec<DatasetRecord>> {
    let objects: Vec<Map<String, Value>> = serde_json::from_str(text)?;
    objects
        .into_iter()
        .map(|object| DatasetRecord::deserialize(Value::Object(object)))
        .collect()
}

/// Encode curated entries in the on-disk dataset layout
pub fn encode_entries(entries: &[WordEntry]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(entries.len() * 32 + 2);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    entries.serialize(&mut ser)?;
    Ok(buf)
}

/// JSON formatter with spaced separators and `\uXXXX` escapes for non-ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
