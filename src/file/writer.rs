//! Rendering and saving query results.
//!
//! Matches are written as a single sequence of nodes, in the same unist shape
//! they were loaded in.

use crate::document::node::Node;
use crate::document::parser::DocumentFormat;
use anyhow::{Context, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders `nodes` as a JSON array or a YAML sequence.
///
/// `pretty` only affects JSON; YAML is always block-formatted. The output
/// ends with a newline.
///
/// # Examples
///
/// ```
/// use unist_find_all_after::document::node::Node;
/// use unist_find_all_after::document::parser::DocumentFormat;
/// use unist_find_all_after::file::writer::render_nodes;
///
/// let text = Node::literal("text", "hi");
/// let out = render_nodes(&[&text], DocumentFormat::Json, false).unwrap();
/// assert_eq!(out, "[{\"type\":\"text\",\"value\":\"hi\"}]\n");
/// ```
pub fn render_nodes(nodes: &[&Node], format: DocumentFormat, pretty: bool) -> Result<String> {
    let mut output = match format {
        DocumentFormat::Json if pretty => {
            serde_json::to_string_pretty(nodes).context("Failed to serialize JSON")?
        }
        DocumentFormat::Json => serde_json::to_string(nodes).context("Failed to serialize JSON")?,
        DocumentFormat::Yaml => serde_yaml::to_string(nodes).context("Failed to serialize YAML")?,
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Writes `data` to `path` atomically, gzip-compressing when the path ends
/// with `.gz`.
///
/// The data goes to a uniquely named temporary file in the target's directory
/// first and is then renamed over the target, so the target is never left
/// partially written and no other file is touched.
///
/// # Errors
///
/// Returns an error if:
/// - Creating the temp file fails
/// - Writing or compressing fails
/// - Renaming the temp file fails
pub fn write_output<P: AsRef<Path>>(path: P, data: &str) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let compress = path.to_string_lossy().ends_with(".gz");
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).context("Failed to create temp file")?;
    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder
            .write_all(data.as_bytes())
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data.as_bytes())
            .context("Failed to write temp file")?;
    }

    temp.persist(path).context("Failed to rename temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_nodes(&[], DocumentFormat::Json, true).unwrap(), "[]\n");
    }

    #[test]
    fn test_render_yaml() {
        let node = Node::new("thematicBreak");
        let out = render_nodes(&[&node], DocumentFormat::Yaml, true).unwrap();
        assert_eq!(out, "- type: thematicBreak\n");
    }

    #[test]
    fn test_render_pretty_json_round_trips() {
        let node = Node::parent("emphasis", vec![Node::literal("text", "a")]);
        let out = render_nodes(&[&node], DocumentFormat::Json, true).unwrap();
        assert!(out.contains('\n'));
        let back: Vec<Node> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, vec![node]);
    }

    #[test]
    fn test_write_output_plain() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_output(&path, "[]\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_output_leaves_siblings_alone() {
        let dir = TempDir::new().unwrap();
        let sibling = dir.path().join("out.tmp");
        fs::write(&sibling, "keep me").unwrap();

        write_output(dir.path().join("out.json"), "[]\n").unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
        assert_eq!(fs::read_to_string(dir.path().join("out.json")).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_output_replaces_existing_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.yaml");
        fs::write(&path, "old").unwrap();

        write_output(&path, "- type: text\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "- type: text\n");
    }

    #[test]
    fn test_write_output_gzip() {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json.gz");
        write_output(&path, "[1]\n").unwrap();

        let mut decoder = GzDecoder::new(fs::File::open(&path).unwrap());
        let mut content = String::new();
        decoder.read_to_string(&mut content).unwrap();
        assert_eq!(content, "[1]\n");
    }
}
