//! Immutable data-set snapshot consumed by the attribute resolvers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DataSetError;

/// Scalar metadata value stored under a string key on a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
}

impl MetadataValue {
    /// Display form used for label text.
    pub fn display(&self) -> String {
        match self {
            MetadataValue::Text(text) => text.clone(),
            MetadataValue::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(text: &str) -> Self {
        MetadataValue::Text(text.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(text: String) -> Self {
        MetadataValue::Text(text)
    }
}

impl From<f64> for MetadataValue {
    fn from(number: f64) -> Self {
        MetadataValue::Number(number)
    }
}

/// Number of render dimensions a data set projects into.
/// Fixed per data set, not per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimensions {
    Two,
    Three,
}

impl Dimensions {
    pub fn count(self) -> usize {
        match self {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }
}

/// A single projected point with its metadata.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Projected coordinates; length matches the data set dimensionality
    pub coordinates: Vec<f32>,
    /// String-keyed metadata (label text, source fields)
    pub metadata: HashMap<String, MetadataValue>,
    /// Index of the owning sequence, derived at construction
    pub sequence_index: Option<usize>,
}

impl DataPoint {
    pub fn new(coordinates: Vec<f32>) -> Self {
        Self {
            coordinates,
            metadata: HashMap::new(),
            sequence_index: None,
        }
    }

    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Ordered chain of point indices rendered as a connected polyline.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub point_indices: Vec<usize>,
}

impl Sequence {
    pub fn new(point_indices: Vec<usize>) -> Self {
        Self { point_indices }
    }

    /// Number of drawable segments (adjacent index pairs).
    /// Sequences shorter than 2 points have no segments.
    pub fn segment_count(&self) -> usize {
        self.point_indices.len().saturating_sub(1)
    }
}

/// Read-only snapshot of projected points and their polyline
/// sequences. Point indices are 0-based, dense, and stable for the
/// lifetime of the snapshot.
#[derive(Debug, Clone)]
pub struct DataSet {
    points: Vec<DataPoint>,
    sequences: Vec<Sequence>,
    dimensions: Dimensions,
    label_field: String,
}

impl DataSet {
    /// Validate coordinate lengths and sequence point indices, and
    /// derive the per-point sequence back-references.
    pub fn new(
        mut points: Vec<DataPoint>,
        sequences: Vec<Sequence>,
        dimensions: Dimensions,
        label_field: impl Into<String>,
    ) -> Result<Self, DataSetError> {
        for (index, point) in points.iter().enumerate() {
            if point.coordinates.len() != dimensions.count() {
                return Err(DataSetError::DimensionMismatch {
                    point: index,
                    got: point.coordinates.len(),
                    expected: dimensions.count(),
                });
            }
        }

        for point in &mut points {
            point.sequence_index = None;
        }
        for (sequence_index, sequence) in sequences.iter().enumerate() {
            for &point_index in &sequence.point_indices {
                if point_index >= points.len() {
                    return Err(DataSetError::SequenceIndexOutOfRange {
                        sequence: sequence_index,
                        point: point_index,
                        point_count: points.len(),
                    });
                }
                points[point_index].sequence_index = Some(sequence_index);
            }
        }

        Ok(Self {
            points,
            sequences,
            dimensions,
            label_field: label_field.into(),
        })
    }

    /// Snapshot with no points; every resolver degrades to empty
    /// buffers for it.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            sequences: Vec::new(),
            dimensions: Dimensions::Two,
            label_field: String::new(),
        }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Metadata key that supplies label text.
    pub fn label_field(&self) -> &str {
        &self.label_field
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Label text for a point; empty when the label field is absent
    /// from its metadata.
    pub fn label_text(&self, point_index: usize) -> String {
        self.points[point_index]
            .metadata
            .get(&self.label_field)
            .map(MetadataValue::display)
            .unwrap_or_default()
    }

    /// Caller preconditions for the interaction state. Out-of-range
    /// hover or selection indices are programmer errors and panic
    /// before any buffer write can go wrong.
    pub fn check_interaction_indices(&self, selection: &[usize], hover: Option<usize>) {
        for &point_index in selection {
            assert!(
                point_index < self.len(),
                "selection index {point_index} out of range for {} points",
                self.len()
            );
        }
        if let Some(hover_index) = hover {
            assert!(
                hover_index < self.len(),
                "hover index {hover_index} out of range for {} points",
                self.len()
            );
        }
    }
}
