//! Attribute synthesis for an interactive point-cloud visualizer.
//!
//! Given an immutable [`DataSet`] snapshot and the current interaction
//! state (selection, hover target, optional custom colorer, display
//! mode), the resolvers in this crate deterministically recompute the
//! flat buffers a renderer draws from: normalized positions, per-point
//! linear RGB colours and size multipliers, visible-label render
//! parameters, and per-sequence polyline colours/opacities/widths.
//!
//! Every resolver is a pure function over its arguments: no hidden
//! state, no input mutation, full recomputation on every call. The
//! owning controller serializes state changes and re-invokes the
//! resolvers with a consistent snapshot.

pub mod bounds;
pub mod color;
pub mod color_math;
pub mod dataset;
pub mod error;
pub mod label;
pub mod polyline;
pub mod scale;
pub mod style;

pub use bounds::{AxisExtent, compute_point_positions};
pub use color::{DisplayMode, PointColorer, compute_point_colors};
pub use dataset::{DataPoint, DataSet, Dimensions, MetadataValue, Sequence};
pub use error::{DataSetError, StyleError};
pub use label::{LabelRenderParams, compute_visible_labels};
pub use polyline::{
    compute_polyline_colors, compute_polyline_opacities, compute_polyline_widths,
};
pub use scale::compute_point_scales;
pub use style::{LabelStyle, PointStyle, PolylineStyle, StyleConfig};
