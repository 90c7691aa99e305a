//! Encoding detection and config file reading.
//!
//! Reading strategy:
//! - BOM markers (UTF-8, UTF-16 LE/BE) decide the encoding outright
//! - otherwise strict UTF-8 is tried first
//! - non-UTF-8 input falls back to chardetng detection, decoded with replacement

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::io;
use std::path::Path;

/// Decoded file contents and the label of the encoding that was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub content: String,
    pub encoding: &'static str,
}

impl DecodedText {
    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8.name()
    }
}

/// Read a whole file as text.
///
/// Only I/O failures are errors; undecodable bytes become U+FFFD.
pub fn read_text(path: &Path) -> io::Result<DecodedText> {
    let bytes = fs::read(path)?;
    Ok(decode_bytes(&bytes))
}

pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (cow, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return DecodedText { content: cow.into_owned(), encoding: encoding.name() };
    }

    if let Ok(content) = std::str::from_utf8(bytes) {
        return DecodedText { content: content.to_string(), encoding: UTF_8.name() };
    }

    let encoding = detect_encoding(bytes);
    let (cow, _) = encoding.decode_without_bom_handling(bytes);
    DecodedText { content: cow.into_owned(), encoding: encoding.name() }
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
