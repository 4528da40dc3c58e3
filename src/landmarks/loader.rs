//! Landmark file parsing
//!
//! A landmark file is an XML document whose root element holds one child
//! element per point, each carrying `name`, `x` and `y` attributes:
//!
//! ```xml
//! <points>
//!   <point name="Ant shelf L" x="102.5" y="88.0"/>
//!   <point name="Post shelf L" x="140.25" y="91.5"/>
//! </points>
//! ```

use crate::io::error::{LandmarkError, Result, parse_error};
use crate::landmarks::metadata::{self, StageTable};
use crate::landmarks::point::{LandmarkFile, LandmarkPoint};
use log::{debug, warn};
use std::path::Path;

/// What to do when a landmark name occurs twice in one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the last occurrence and log a warning
    #[default]
    Warn,
    /// Fail with [`LandmarkError::DuplicateLandmark`]
    Reject,
}

/// Options controlling how landmark files are loaded
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Ages of fixed specimens by stage
    pub stages: StageTable,
    /// Handling of repeated landmark names
    pub duplicate_policy: DuplicatePolicy,
}

/// Load a landmark file with default options
///
/// # Errors
///
/// Returns [`LandmarkError::Parse`] when the file cannot be read or is not a
/// valid point document, and [`LandmarkError::MalformedFilename`] when the
/// filename does not encode specimen metadata
pub fn load(path: &Path) -> Result<LandmarkFile> {
    load_with(path, &LoadOptions::default())
}

/// Load a landmark file
///
/// # Errors
///
/// Returns [`LandmarkError::Parse`] when the file cannot be read or is not a
/// valid point document, [`LandmarkError::MalformedFilename`] when the
/// filename does not encode specimen metadata, and
/// [`LandmarkError::DuplicateLandmark`] when duplicates are rejected
pub fn load_with(path: &Path, options: &LoadOptions) -> Result<LandmarkFile> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| parse_error(path, &format!("cannot read file: {e}")))?;

    let points = parse_points(path, &text)?;
    let file_id = file_id_from_path(path)?;
    let metadata = metadata::parse_with(&file_id, &options.stages)?;
    let file = LandmarkFile::from_points(file_id, metadata, points);

    if let Some(name) = file.duplicates().first() {
        match options.duplicate_policy {
            DuplicatePolicy::Reject => {
                return Err(LandmarkError::DuplicateLandmark {
                    path: path.to_path_buf(),
                    name: name.clone(),
                });
            }
            DuplicatePolicy::Warn => {
                for duplicate in file.duplicates() {
                    warn!(
                        "'{}': landmark '{duplicate}' appears more than once, keeping the last",
                        path.display()
                    );
                }
            }
        }
    }

    debug!(
        "Loaded '{}': {} landmarks from {} nodes",
        file.file_id(),
        file.len(),
        file.node_count()
    );

    Ok(file)
}

/// Parse the point nodes of a landmark document in document order
///
/// # Errors
///
/// Returns [`LandmarkError::Parse`] naming `path` when the text is not
/// well-formed XML, or a point lacks a `name`, `x` or `y` attribute, or a
/// coordinate is not a finite number
pub fn parse_points(path: &Path, text: &str) -> Result<Vec<LandmarkPoint>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let document = roxmltree::Document::parse_with_options(text, options)
        .map_err(|e| parse_error(path, &format!("not well-formed XML: {e}")))?;

    document
        .root_element()
        .children()
        .filter(roxmltree::Node::is_element)
        .map(|node| point_from_node(path, node))
        .collect()
}

fn point_from_node(path: &Path, node: roxmltree::Node<'_, '_>) -> Result<LandmarkPoint> {
    let line = node.document().text_pos_at(node.range().start).row;

    let name = node.attribute("name").ok_or_else(|| {
        parse_error(
            path,
            &format!("point on line {line} has no 'name' attribute"),
        )
    })?;
    let x = coordinate(path, node, name, "x", line)?;
    let y = coordinate(path, node, name, "y", line)?;

    Ok(LandmarkPoint::new(name, x, y))
}

fn coordinate(
    path: &Path,
    node: roxmltree::Node<'_, '_>,
    name: &str,
    axis: &str,
    line: u32,
) -> Result<f64> {
    let raw = node.attribute(axis).ok_or_else(|| {
        parse_error(
            path,
            &format!("point '{name}' on line {line} has no '{axis}' attribute"),
        )
    })?;

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(parse_error(
            path,
            &format!("point '{name}' on line {line} has non-numeric {axis} = '{raw}'"),
        )),
    }
}

/// Filename without extension, used as the specimen identifier
///
/// # Errors
///
/// Returns [`LandmarkError::Parse`] when the path has no UTF-8 file stem
pub fn file_id_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| parse_error(path, &"file name is missing or not valid UTF-8"))
}
