//! JSON document loading.
//!
//! Documents come from a file on disk or from stdin. Gzip input is
//! decompressed transparently: files by their `.gz` extension, streams by
//! the gzip magic bytes.

use crate::document::node::Value;
use crate::document::parser::parse_json;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// First two bytes of every gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a JSON file from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use jsonpick::file::loader::load_json_file;
///
/// let doc = load_json_file("config.json").unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid gzip (for
/// `.gz` files), or does not contain valid JSON.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        log::debug!("reading gzipped file {}", path_ref.display());
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_json(&content).with_context(|| format!("Failed to load {}", path_ref.display()))
}

/// Loads and parses JSON from standard input.
///
/// ```no_run
/// use jsonpick::file::loader::load_json_from_stdin;
///
/// // Usage: echo '{"key": "value"}' | jsonpick '$.key'
/// let doc = load_json_from_stdin().unwrap();
/// ```
pub fn load_json_from_stdin() -> Result<Value> {
    log::debug!("reading document from stdin");
    load_json_from_reader(std::io::stdin().lock()).context("Failed to load JSON from stdin")
}

/// Reads a whole stream and parses it as JSON, gunzipping it if it starts
/// with the gzip magic bytes.
pub fn load_json_from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    let content = if buffer.starts_with(&GZIP_MAGIC) {
        log::debug!("input is gzip compressed");
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_json(&content)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
