//! Source text decoding.
//!
//! The recipe corpus and its companion JSON files were written by different
//! tools: some are Latin-1, others UTF-8. Each reader names the encoding of the
//! file it opens instead of guessing.

use crate::errors::RecipeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Byte encoding of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Decode raw bytes. UTF-8 decoding is strict; Latin-1 maps each byte to
    /// the code point of the same value and never fails.
    pub fn decode(self, bytes: &[u8]) -> Result<String, RecipeError> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| RecipeError::Parse(format!("invalid UTF-8: {e}"))),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf8"),
            TextEncoding::Latin1 => write!(f, "latin1"),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "utf8" => Ok(TextEncoding::Utf8),
            "latin1" | "iso88591" => Ok(TextEncoding::Latin1),
            other => Err(RecipeError::Parse(format!("unknown text encoding {other:?}"))),
        }
    }
}

/// Read a whole file and decode it with the given encoding
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<String, RecipeError> {
    let bytes = fs::read(path).map_err(|e| RecipeError::Io(format!("{}: {e}", path.display())))?;
    encoding
        .decode(&bytes)
        .map_err(|e| RecipeError::Parse(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_decoding() {
        // "cdta. azúcar" in Latin-1
        let bytes = b"cdta. az\xfacar";
        assert_eq!(TextEncoding::Latin1.decode(bytes).unwrap(), "cdta. azúcar");
        assert!(TextEncoding::Utf8.decode(bytes).is_err());
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("latin1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert_eq!("ISO-8859-1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert!("cp1252".parse::<TextEncoding>().is_err());
    }
}
