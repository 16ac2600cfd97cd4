//! Source text decoding
//!
//! Wordlists come from many places. Text is decoded as UTF-8 and any byte
//! sequence that does not decode is dropped rather than failing the run.
//! The denylist is the exception: it is decoded strictly.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::io;
use std::path::Path;

/// Size of the sample handed to the encoding detector
const DETECT_SAMPLE: usize = 64 * 1024;

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<(&'static Encoding, usize)> {
    Encoding::for_bom(content)
}

/// Best guess for the encoding of content that failed UTF-8 validation
pub fn guess_encoding(content: &[u8]) -> &'static Encoding {
    let sample = &content[..content.len().min(DETECT_SAMPLE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    detector.guess(None, true)
}

/// Decode raw bytes to a String, dropping anything that is not valid text
///
/// A BOM selects its encoding (UTF-8, UTF-16LE or UTF-16BE) and is removed.
/// Without a BOM the content is treated as UTF-8.
pub fn decode_lossy(content: &[u8]) -> String {
    let (encoding, bom_len) = detect_bom(content).unwrap_or((encoding_rs::UTF_8, 0));
    let body = &content[bom_len..];

    if encoding == encoding_rs::UTF_8 {
        if let Ok(text) = std::str::from_utf8(body) {
            return text.to_string();
        }
        log::warn!(
            "Input is not valid UTF-8 (looks like {}), dropping undecodable bytes",
            guess_encoding(body).name()
        );
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        decoded
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect()
    } else {
        decoded.into_owned()
    }
}

/// Decode raw bytes to a String, failing on anything that is not valid text
///
/// BOM handling matches [`decode_lossy`].
pub fn decode_strict(content: &[u8]) -> io::Result<String> {
    let (encoding, bom_len) = detect_bom(content).unwrap_or((encoding_rs::UTF_8, 0));
    let body = &content[bom_len..];

    if encoding == encoding_rs::UTF_8 {
        return std::str::from_utf8(body)
            .map(str::to_string)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e));
    }

    match encoding.decode_without_bom_handling_and_without_replacement(body) {
        Some(text) => Ok(text.into_owned()),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("stream did not contain valid {}", encoding.name()),
        )),
    }
}

/// Read a whole file and decode it leniently
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_lossy(&bytes))
}

/// Read a whole file and decode it strictly
pub fn read_text_strict(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    decode_strict(&bytes)
}

/// Characters that end a line, besides `\n` and `\r`
const EXTRA_LINE_BREAKS: [char; 8] = [
    '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r' || EXTRA_LINE_BREAKS.contains(&c)
}

/// Split text into lines on every Unicode line boundary
///
/// Unlike `str::lines`, a bare `\r` (old Mac line endings), vertical tab,
/// form feed, the file/group/record separators, NEL and U+2028/U+2029 all end
/// a line. `\r\n` counts as one break. A trailing break does not produce an
/// empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                start += 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
