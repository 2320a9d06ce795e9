// logtool - core/encoding.rs
//
// Strict text codecs for the closed set of supported encodings.
// Core layer: operates on byte slices only, no I/O.
//
// Decoding never substitutes replacement characters: a byte stream that is
// not valid under the declared encoding is rejected with a DecodeError that
// carries the offending byte offset.

use crate::util::error::{DecodeError, EncodingError};
use std::fmt;
use std::str::FromStr;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// A text encoding a log file can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// Strict UTF-8. A leading BOM is kept as U+FEFF.
    #[default]
    Utf8,
    /// Strict UTF-8 with an optional leading BOM that is removed.
    Utf8Sig,
    /// UTF-16 with a mandatory byte-order mark selecting endianness.
    Utf16,
    /// UTF-16 little-endian, no BOM expected.
    Utf16Le,
    /// UTF-16 big-endian, no BOM expected.
    Utf16Be,
    /// ISO-8859-1. Every byte is a valid character.
    Latin1,
}

impl TextEncoding {
    /// Returns all variants.
    pub fn all() -> &'static [TextEncoding] {
        &[
            TextEncoding::Utf8,
            TextEncoding::Utf8Sig,
            TextEncoding::Utf16,
            TextEncoding::Utf16Le,
            TextEncoding::Utf16Be,
            TextEncoding::Latin1,
        ]
    }

    /// Canonical identifier, as accepted on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Utf16Le => "utf-16-le",
            TextEncoding::Utf16Be => "utf-16-be",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Decode `bytes` into a string, rejecting invalid input.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            TextEncoding::Utf8 => decode_utf8(bytes, 0),
            TextEncoding::Utf8Sig => match bytes.strip_prefix(&UTF8_BOM) {
                Some(rest) => decode_utf8(rest, UTF8_BOM.len()),
                None => decode_utf8(bytes, 0),
            },
            TextEncoding::Utf16 => {
                if bytes.is_empty() {
                    return Ok(String::new());
                }
                if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
                    decode_utf16(rest, false, UTF16_LE_BOM.len())
                } else if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
                    decode_utf16(rest, true, UTF16_BE_BOM.len())
                } else {
                    Err(DecodeError::MissingBom)
                }
            }
            TextEncoding::Utf16Le => decode_utf16(bytes, false, 0),
            TextEncoding::Utf16Be => decode_utf16(bytes, true, 0),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Encode `text` for output.
    ///
    /// `Utf8Sig` and `Utf16` prepend their byte-order mark; `Utf16` writes
    /// little-endian code units.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf8Sig => {
                let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
                out.extend_from_slice(&UTF8_BOM);
                out.extend_from_slice(text.as_bytes());
                Ok(out)
            }
            TextEncoding::Utf16 => {
                let mut out = UTF16_LE_BOM.to_vec();
                out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
                Ok(out)
            }
            TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            TextEncoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            TextEncoding::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| EncodingError::Unrepresentable {
                        ch,
                        encoding: self.label(),
                    })
                })
                .collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = EncodingError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalised.as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(TextEncoding::Utf8Sig),
            "utf-16" | "utf16" => Ok(TextEncoding::Utf16),
            "utf-16-le" | "utf-16le" | "utf16-le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "utf-16-be" | "utf-16be" | "utf16-be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(EncodingError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

/// `base` is the offset of `bytes` within the file, for error reporting.
fn decode_utf8(bytes: &[u8], base: usize) -> Result<String, DecodeError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| DecodeError::InvalidUtf8 {
            offset: base + e.valid_up_to(),
        })
}

fn decode_utf16(bytes: &[u8], big_endian: bool, base: usize) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddByteCount {
            len: base + bytes.len(),
        });
    }

    let units = bytes.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });

    let mut out = String::with_capacity(bytes.len() / 2);
    // Position in code units, advanced by each decoded char's UTF-16 width.
    let mut unit_pos = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                unit_pos += ch.len_utf16();
            }
            Err(e) => {
                return Err(DecodeError::UnpairedSurrogate {
                    offset: base + unit_pos * 2,
                    unit: e.unpaired_surrogate(),
                });
            }
        }
    }
    Ok(out)
}
