//! Transparent decoding of compressed species corpora.
//!
//! Corpora may be shipped plain, gzip-compressed or zstd-compressed.
//! [`decode`] sniffs the magic bytes and hands back plain bytes either way.

use std::fmt;
use std::io::Read;

use crate::{Result, TaxonomerError};

const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// How a corpus file is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Plain,
    Gzip,
    Zstd,
}

impl Encoding {
    /// Identify the encoding from the leading magic bytes.
    ///
    /// Anything without a gzip or zstd header is treated as plain text.
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(&ZSTD_MAGIC) {
            Encoding::Zstd
        } else if data.starts_with(&GZIP_MAGIC) {
            Encoding::Gzip
        } else {
            Encoding::Plain
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Plain => "plain",
            Encoding::Gzip => "gzip",
            Encoding::Zstd => "zstd",
        })
    }
}

/// Return `data` decompressed if it carries a gzip or zstd header, or as-is.
///
/// # Errors
///
/// Returns [`TaxonomerError::Compression`] if a compressed stream is
/// truncated or corrupt.
pub fn decode(data: Vec<u8>) -> Result<Vec<u8>> {
    let encoding = Encoding::detect(&data);
    let decoded = match encoding {
        Encoding::Plain => return Ok(data),
        Encoding::Zstd => zstd::decode_all(data.as_slice()),
        Encoding::Gzip => {
            let mut out = Vec::new();
            flate2::read::GzDecoder::new(data.as_slice())
                .read_to_end(&mut out)
                .map(|_| out)
        }
    };
    decoded.map_err(|e| TaxonomerError::Compression(format!("{encoding} corpus: {e}")))
}
