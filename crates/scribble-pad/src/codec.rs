//! JSON document format (`.canvas` files).
//!
//! ```text
//! {
//!   "strokes": [ [ [x, y, pressure], ... ], ... ],
//!   "thickness": 3,
//!   "show_shadows": true,
//!   "bg_index": 0
//! }
//! ```
//!
//! Unknown fields are ignored on read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use scribble_engine::coords::Vec2;

use crate::color::PALETTE;
use crate::document::Document;
use crate::stroke::{Stroke, StrokePoint};

/// File extension of saved documents.
pub const EXTENSION: &str = "canvas";

/// Malformed payload or schema violation.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Not well-formed JSON, a missing field, or a field of the wrong type.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stroke {stroke} has no points")]
    EmptyStroke { stroke: usize },

    #[error("stroke {stroke} point {point}: pressure {value} is outside [0, 1]")]
    Pressure { stroke: usize, point: usize, value: f32 },

    #[error("stroke {stroke} point {point}: coordinate is not finite")]
    Coordinate { stroke: usize, point: usize },

    #[error("thickness must be at least 1")]
    Thickness,

    #[error("bg_index {index} is out of range (palette has {len} entries)")]
    BackgroundIndex { index: usize, len: usize },
}

/// Failure reading or writing a document file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid document: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl DocumentError {
    pub fn path(&self) -> &Path {
        match self {
            DocumentError::Io { path, .. } | DocumentError::Format { path, .. } => path,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Wire {
    strokes: Vec<Vec<[f32; 3]>>,
    thickness: u32,
    show_shadows: bool,
    bg_index: usize,
}

impl Wire {
    fn from_document(doc: &Document) -> Self {
        Self {
            strokes: doc
                .strokes()
                .iter()
                .map(|s| {
                    s.points()
                        .iter()
                        .map(|p| [p.pos.x, p.pos.y, p.pressure])
                        .collect()
                })
                .collect(),
            thickness: doc.thickness(),
            show_shadows: doc.show_shadows(),
            bg_index: doc.bg_index(),
        }
    }

    fn into_document(self) -> Result<Document, FormatError> {
        if self.thickness == 0 {
            return Err(FormatError::Thickness);
        }
        if self.bg_index >= PALETTE.len() {
            return Err(FormatError::BackgroundIndex {
                index: self.bg_index,
                len: PALETTE.len(),
            });
        }

        let strokes = self
            .strokes
            .into_iter()
            .enumerate()
            .map(|(si, raw)| decode_stroke(si, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Document::new(
            strokes,
            self.thickness,
            self.show_shadows,
            self.bg_index,
        ))
    }
}

fn decode_stroke(stroke: usize, raw: Vec<[f32; 3]>) -> Result<Stroke, FormatError> {
    let points = raw
        .into_iter()
        .enumerate()
        .map(|(point, [x, y, pressure])| {
            if !(x.is_finite() && y.is_finite()) {
                return Err(FormatError::Coordinate { stroke, point });
            }
            if !(0.0..=1.0).contains(&pressure) {
                return Err(FormatError::Pressure {
                    stroke,
                    point,
                    value: pressure,
                });
            }
            Ok(StrokePoint {
                pos: Vec2::new(x, y),
                pressure,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Stroke::from_points(points).ok_or(FormatError::EmptyStroke { stroke })
}

/// Serializes a document as pretty-printed JSON.
///
/// Fails if the document holds a point that could not be read back.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>, FormatError> {
    for (stroke, s) in doc.strokes().iter().enumerate() {
        if let Some((point, p)) = s.points().iter().enumerate().find(|(_, p)| !p.is_valid()) {
            return Err(if p.pos.is_finite() {
                FormatError::Pressure {
                    stroke,
                    point,
                    value: p.pressure,
                }
            } else {
                FormatError::Coordinate { stroke, point }
            });
        }
    }

    Ok(serde_json::to_vec_pretty(&Wire::from_document(doc))?)
}

/// Parses a document, validating every field.
pub fn from_bytes(bytes: &[u8]) -> Result<Document, FormatError> {
    let wire: Wire = serde_json::from_slice(bytes)?;
    wire.into_document()
}

/// Writes `doc` to `path`.
///
/// The payload goes to a temporary sibling that is then renamed over `path`,
/// so a failed save leaves any existing file intact.
pub fn save(path: &Path, doc: &Document) -> Result<(), DocumentError> {
    let bytes = to_bytes(doc).map_err(|source| DocumentError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = temp_sibling(path);
    if let Err(source) = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(DocumentError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Reads and parses the document at `path`.
pub fn load(path: &Path) -> Result<Document, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_bytes(&bytes).map_err(|source| DocumentError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// `path` with the `.canvas` extension added when it has none.
pub fn with_canvas_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(EXTENSION)
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        let stroke = Stroke::from_points(vec![
            StrokePoint::new(Vec2::new(10.0, 10.0), Some(0.5)),
            StrokePoint::new(Vec2::new(20.0, 10.0), Some(1.0)),
        ])
        .unwrap();
        Document::new(vec![stroke], 4, false, 1)
    }

    #[test]
    fn round_trip_preserves_document() {
        let doc = sample();
        let bytes = to_bytes(&doc).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), doc);
    }

    #[test]
    fn writes_expected_field_names() {
        let v: serde_json::Value = serde_json::from_slice(&to_bytes(&sample()).unwrap()).unwrap();
        assert_eq!(v["strokes"][0][0], serde_json::json!([10.0, 10.0, 0.5]));
        assert_eq!(v["thickness"], 4);
        assert_eq!(v["show_shadows"], false);
        assert_eq!(v["bg_index"], 1);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc = from_bytes(
            br#"{"strokes": [], "thickness": 2, "show_shadows": true, "bg_index": 0, "zoom": 3}"#,
        )
        .unwrap();
        assert_eq!(doc.thickness(), 2);
    }

    #[test]
    fn rejects_schema_violations() {
        let cases: &[&[u8]] = &[
            b"not json",
            br#"{"thickness": 3, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [], "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [], "thickness": 0, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [], "thickness": -1, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [], "thickness": 2.5, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [], "thickness": 3, "show_shadows": 1, "bg_index": 0}"#,
            br#"{"strokes": [], "thickness": 3, "show_shadows": true, "bg_index": 2}"#,
            br#"{"strokes": [], "thickness": 3, "show_shadows": true}"#,
            br#"{"strokes": [[]], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [[[1, 2]]], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [[[1, 2, 1.5]]], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [[[1, 2, -0.1]]], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [[[1e300, 2, 1]]], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
            br#"{"strokes": [[1, 2, 1]], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
        ];

        for case in cases {
            assert!(
                from_bytes(case).is_err(),
                "accepted {}",
                String::from_utf8_lossy(case)
            );
        }
    }

    #[test]
    fn specific_errors_name_the_problem() {
        let err = from_bytes(
            br#"{"strokes": [[[0, 0, 1]], []], "thickness": 3, "show_shadows": true, "bg_index": 0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::EmptyStroke { stroke: 1 }));

        let err = from_bytes(br#"{"strokes": [], "show_shadows": true, "bg_index": 0}"#).unwrap_err();
        assert!(err.to_string().contains("thickness"), "{err}");
    }

    #[test]
    fn extension_is_added_only_when_missing() {
        assert_eq!(with_canvas_extension(Path::new("a/b")), PathBuf::from("a/b.canvas"));
        assert_eq!(with_canvas_extension(Path::new("a/b.json")), PathBuf::from("a/b.json"));
    }
}
