use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Text encoding used to decode the source manifest.
///
/// Decoding is lossy: byte sequences that are invalid for the encoding become
/// U+FFFD, and the JSON parser rejects the result wherever that breaks the
/// syntax. The encoding applies to reading only; the compiled manifest is
/// always written as UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    #[serde(alias = "utf-8")]
    Utf8,
    /// UTF-16 little-endian (`utf16le`, also known as `ucs2`).
    #[serde(alias = "utf-16le", alias = "ucs2", alias = "ucs-2")]
    Utf16Le,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    #[serde(alias = "iso-8859-1")]
    Latin1,
}

/// Error returned when an encoding name is not recognized.
#[derive(Debug, Error)]
#[error("unsupported manifest encoding {0:?} (expected utf8, utf16le, or latin1)")]
pub struct UnknownEncoding(String);

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
            Encoding::Latin1 => "latin1",
        }
    }

    /// Decode `bytes` into text, replacing invalid sequences with U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Utf16Le => {
                // A trailing odd byte carries no code unit and is dropped.
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect()
            }
            Encoding::Latin1 => bytes.iter().map(|&byte| byte as char).collect(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(UnknownEncoding(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parsing() {
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf16le".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
        assert_eq!("ucs2".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
        assert_eq!("latin1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("iso-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);

        assert!("utf32".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_serde_aliases() {
        let encoding: Encoding = serde_json::from_str("\"utf-16le\"").unwrap();
        assert_eq!(encoding, Encoding::Utf16Le);

        let encoding: Encoding = serde_json::from_str("\"utf8\"").unwrap();
        assert_eq!(encoding, Encoding::Utf8);

        assert!(serde_json::from_str::<Encoding>("\"koi8-r\"").is_err());
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(Encoding::Utf8.decode(b"{\"a\":1}"), "{\"a\":1}");

        // Invalid UTF-8 decodes lossily instead of failing.
        let decoded = Encoding::Utf8.decode(&[b'"', 0xff, b'"']);
        assert_eq!(decoded, "\"\u{fffd}\"");
    }

    #[test]
    fn test_decode_utf16le() {
        let bytes: Vec<u8> = "{\"name\":\"x\"}"
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect();
        assert_eq!(Encoding::Utf16Le.decode(&bytes), "{\"name\":\"x\"}");

        // Unpaired surrogate becomes the replacement character.
        let bytes = 0xd800u16.to_le_bytes().to_vec();
        assert_eq!(Encoding::Utf16Le.decode(&bytes), "\u{fffd}");
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(Encoding::Latin1.decode(&[b'c', 0xe9]), "c\u{e9}");
    }
}
