use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::geometry::ReferencePlane;
use crate::math::{Point3, Vector3};
use crate::path::ArchPath;

/// One persisted coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PointRecord {
    fn from_point(point: &Point3) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }

    fn from_vector(vector: &Vector3) -> Self {
        Self {
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }

    fn to_point(self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

/// The persisted reference-plane record.
///
/// The control points are authoritative: restoring re-derives the normal
/// from them, in stored order, so the same normal comes back
/// deterministically. The stored `normal` is kept for hosts that render
/// the document without rebuilding the engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneRecord {
    pub control_points: Vec<PointRecord>,
    pub normal: PointRecord,
    pub position: PointRecord,
    pub visible: bool,
}

/// A persisted wire design: the ordered path points plus the optional
/// reference plane.
///
/// This is the engine's half of the host-owned design document; the host
/// wraps or embeds it as it likes. Tags are not persisted — restored path
/// points are ordinary editable points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    pub points: Vec<PointRecord>,
    #[serde(default)]
    pub reference_plane: Option<PlaneRecord>,
}

impl DesignDocument {
    /// Captures the current path and reference plane into a document.
    #[must_use]
    pub fn capture(path: &ArchPath, plane: Option<&ReferencePlane>) -> Self {
        Self {
            points: path
                .points()
                .iter()
                .map(|p| PointRecord::from_point(&p.position))
                .collect(),
            reference_plane: plane.map(|rp| PlaneRecord {
                control_points: rp
                    .control_points()
                    .iter()
                    .map(PointRecord::from_point)
                    .collect(),
                normal: PointRecord::from_vector(rp.normal()),
                position: PointRecord::from_point(rp.plane().anchor()),
                visible: rp.visible(),
            }),
        }
    }

    /// Rebuilds the path and, when present, the reference plane.
    ///
    /// Control-point order is preserved exactly, so the re-derived normal
    /// matches the captured one. Plane records without exactly three
    /// control points are ignored, as in the original document format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::DegeneratePlane`] when a
    /// well-formed plane record carries collinear control points.
    pub fn restore(&self) -> Result<(ArchPath, Option<ReferencePlane>)> {
        let path =
            ArchPath::from_positions(self.points.iter().map(|r| r.to_point()).collect());

        let plane = match &self.reference_plane {
            Some(record) if record.control_points.len() == 3 => {
                let control = [
                    record.control_points[0].to_point(),
                    record.control_points[1].to_point(),
                    record.control_points[2].to_point(),
                ];
                Some(
                    ReferencePlane::restore(
                        control,
                        record.position.to_point(),
                        record.visible,
                    )
                    .map_err(crate::error::ArchwireError::from)?,
                )
            }
            Some(record) => {
                debug!(
                    control_points = record.control_points.len(),
                    "ignoring malformed plane record"
                );
                None
            }
            None => None,
        };

        Ok((path, plane))
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] on serialization failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the input is not a valid
    /// document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_plane() -> ReferencePlane {
        ReferencePlane::from_control_points(
            [
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(4.0, 0.0, 5.0),
                Point3::new(0.0, 4.0, 5.0),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn document_round_trips_points_and_plane() {
        let path = ArchPath::from_positions(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
        ]);
        let plane = sample_plane();

        let doc = DesignDocument::capture(&path, Some(&plane));
        let json = doc.to_json().unwrap();
        let parsed = DesignDocument::from_json(&json).unwrap();
        let (restored_path, restored_plane) = parsed.restore().unwrap();

        assert_eq!(restored_path.len(), 2);
        assert_eq!(restored_path.get(1).unwrap().position.z, 3.0);

        let restored_plane = restored_plane.unwrap();
        assert_eq!(restored_plane.control_points(), plane.control_points());
        assert_relative_eq!(
            (restored_plane.normal() - plane.normal()).norm(),
            0.0,
            epsilon = 1e-12
        );
        assert!(restored_plane.visible());
    }

    #[test]
    fn missing_plane_restores_to_none() {
        let doc = DesignDocument::from_json(r#"{ "points": [{"x":1.0,"y":2.0,"z":3.0}] }"#)
            .unwrap();
        let (path, plane) = doc.restore().unwrap();
        assert_eq!(path.len(), 1);
        assert!(plane.is_none());
    }

    #[test]
    fn malformed_plane_record_is_ignored() {
        let json = r#"{
            "points": [],
            "referencePlane": {
                "controlPoints": [{"x":0.0,"y":0.0,"z":0.0}],
                "normal": {"x":0.0,"y":0.0,"z":1.0},
                "position": {"x":0.0,"y":0.0,"z":0.0},
                "visible": true
            }
        }"#;
        let doc = DesignDocument::from_json(json).unwrap();
        let (_, plane) = doc.restore().unwrap();
        assert!(plane.is_none());
    }

    #[test]
    fn collinear_plane_record_is_an_error() {
        let json = r#"{
            "points": [],
            "referencePlane": {
                "controlPoints": [
                    {"x":0.0,"y":0.0,"z":0.0},
                    {"x":1.0,"y":0.0,"z":0.0},
                    {"x":2.0,"y":0.0,"z":0.0}
                ],
                "normal": {"x":0.0,"y":0.0,"z":1.0},
                "position": {"x":0.0,"y":0.0,"z":0.0},
                "visible": true
            }
        }"#;
        let doc = DesignDocument::from_json(json).unwrap();
        assert!(doc.restore().is_err());
    }

    #[test]
    fn field_names_match_the_document_format() {
        let path = ArchPath::from_positions(vec![Point3::origin()]);
        let doc = DesignDocument::capture(&path, Some(&sample_plane()));
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"referencePlane\""));
        assert!(json.contains("\"controlPoints\""));
        assert!(json.contains("\"position\""));
        assert!(json.contains("\"visible\""));
    }
}
