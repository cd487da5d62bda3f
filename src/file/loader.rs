//! unist document loading.
//!
//! This module provides functions to load unist trees from files or stdin.
//! Files may be JSON or YAML, either plain or gzip-compressed; the format is
//! taken from the file name.

use crate::document::parser::{parse_document, parse_json, parse_yaml, DocumentFormat};
use crate::document::tree::UnistTree;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Loads and parses a unist tree from the filesystem.
///
/// `.yaml` and `.yml` files are read as YAML, everything else as JSON. A
/// trailing `.gz` is decompressed first and ignored for format detection.
///
/// # Examples
///
/// ```no_run
/// use unist_find_all_after::file::loader::load_tree_file;
///
/// let tree = load_tree_file("readme.mdast.json").unwrap();
/// assert!(tree.root().is_parent());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not a valid unist tree in the detected format
pub fn load_tree_file<P: AsRef<Path>>(path: P) -> Result<UnistTree> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    let format = determine_format(path_ref);
    debug!(
        "Loading {} as {}{}",
        path_ref.display(),
        format,
        if is_gzipped { " (gzip)" } else { "" }
    );

    parse_document(&content, format)
        .with_context(|| format!("Failed to load {}", path_ref.display()))
}

/// Loads and parses a unist tree from standard input.
///
/// Gzip input is detected by its magic bytes. JSON is tried first, then YAML.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is neither a JSON nor a YAML unist tree
pub fn load_tree_from_stdin() -> Result<UnistTree> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_tree_from_bytes(&buffer)
}

/// Parses a unist tree from raw bytes, using the same rules as stdin.
pub fn load_tree_from_bytes(bytes: &[u8]) -> Result<UnistTree> {
    // Gzip magic bytes (0x1f 0x8b)
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Invalid UTF-8 in input")?
    };

    if let Ok(tree) = parse_json(&content) {
        return Ok(tree);
    }

    parse_yaml(&content)
        .context("Failed to parse input: it is neither a JSON nor a YAML unist tree")
}

/// Determines the document format from a file name.
///
/// Examples:
/// - `tree.json` → JSON
/// - `tree.yml.gz` → YAML
/// - `tree` → JSON
pub fn determine_format<P: AsRef<Path>>(path: P) -> DocumentFormat {
    let path_str = path.as_ref().to_string_lossy();

    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    if base.ends_with(".yaml") || base.ends_with(".yml") {
        DocumentFormat::Yaml
    } else {
        DocumentFormat::Json
    }
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_determine_format() {
        assert_eq!(determine_format("tree.json"), DocumentFormat::Json);
        assert_eq!(determine_format("tree.json.gz"), DocumentFormat::Json);
        assert_eq!(determine_format("tree.yaml"), DocumentFormat::Yaml);
        assert_eq!(determine_format("path/to/tree.yml.gz"), DocumentFormat::Yaml);
        assert_eq!(determine_format("tree"), DocumentFormat::Json);
    }

    #[test]
    fn test_bytes_json() {
        let tree = load_tree_from_bytes(br#"{"type": "root", "children": []}"#).unwrap();
        assert!(tree.root().is_parent());
    }

    #[test]
    fn test_bytes_yaml_fallback() {
        let tree = load_tree_from_bytes(b"type: root\nchildren: []\n").unwrap();
        assert_eq!(tree.root().kind(), "root");
    }

    #[test]
    fn test_bytes_gzip() {
        let bytes = gzip(r#"{"type": "root", "children": [{"type": "text", "value": "x"}]}"#);
        let tree = load_tree_from_bytes(&bytes).unwrap();
        assert_eq!(tree.get_node(&[0]).unwrap().value_str(), Some("x"));
    }

    #[test]
    fn test_bytes_garbage() {
        assert!(load_tree_from_bytes(b"- just\n- a list\n").is_err());
        assert!(load_tree_from_bytes(&[0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn test_read_gzipped_file_corrupted() {
        use tempfile::NamedTempFile;

        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");
        fs::write(&gz_path, b"not gzip data").unwrap();

        let result = read_gzipped_file(&gz_path);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("decompress") || err_msg.contains("corrupted"));
        let _ = fs::remove_file(&gz_path);
    }
}
