//! Per-sequence polyline attributes: segment endpoint colours and the
//! single-highlight opacity/width tables.

use constants::coordinate_system::COLOR_COMPONENTS;
use glam::Vec3;
use log::trace;

use crate::color::PointColorer;
use crate::color_math::hsl_to_rgb;
use crate::dataset::DataSet;
use crate::style::{PolylineStyle, StyleConfig};

/// Default colour of a sequence point: a hue ramp over its position
/// along the sequence, 0 at the first point and 1 at the last.
fn ramp_color(style: &PolylineStyle, position: usize, last_position: usize) -> Vec3 {
    let t = if last_position == 0 {
        0.0
    } else {
        position as f32 / last_position as f32
    };
    let hue = style.start_hue + (style.end_hue - style.start_hue) * t;
    hsl_to_rgb(hue, style.saturation, style.lightness)
}

/// Segment endpoint colours for every sequence, indexed by sequence.
/// Each array holds 2 endpoint colours of 3 floats per segment, so a
/// sequence of N points yields (N - 1) * 6 floats (empty below 2
/// points). A custom colorer overrides the ramp per point; a point it
/// has no opinion on falls back to its ramp colour.
pub fn compute_polyline_colors(
    dataset: &DataSet,
    colorer: Option<&dyn PointColorer>,
    styles: &StyleConfig,
) -> Vec<Vec<f32>> {
    trace!("recoloring {} sequences", dataset.sequences().len());
    dataset
        .sequences()
        .iter()
        .map(|sequence| {
            let indices = &sequence.point_indices;
            let last_position = indices.len().saturating_sub(1);
            let mut colors = vec![0.0f32; sequence.segment_count() * 2 * COLOR_COMPONENTS];

            for segment in 0..sequence.segment_count() {
                for endpoint in 0..2 {
                    let position = segment + endpoint;
                    let rgb = colorer
                        .and_then(|c| c.color(indices[position]))
                        .unwrap_or_else(|| {
                            ramp_color(&styles.polylines, position, last_position)
                        });
                    let base_idx = (segment * 2 + endpoint) * COLOR_COMPONENTS;
                    colors[base_idx] = rgb.x;
                    colors[base_idx + 1] = rgb.y;
                    colors[base_idx + 2] = rgb.z;
                }
            }

            colors
        })
        .collect()
}

/// One opacity per sequence. While a selection exists only the
/// sequence containing the FIRST selected point is highlighted; every
/// other sequence recedes to the deselected opacity. Later-selected
/// points never highlight their sequences.
pub fn compute_polyline_opacities(
    dataset: &DataSet,
    selection: &[usize],
    styles: &StyleConfig,
) -> Vec<f32> {
    dataset.check_interaction_indices(selection, None);
    let highlighted = highlighted_sequence(dataset, selection);

    (0..dataset.sequences().len())
        .map(|sequence_index| {
            if selection.is_empty() {
                styles.polylines.default_opacity
            } else if highlighted == Some(sequence_index) {
                styles.polylines.selected_opacity
            } else {
                styles.polylines.deselected_opacity
            }
        })
        .collect()
}

/// One line width per sequence. Two-state: the first selected point's
/// sequence gets the selected width, everything else keeps the
/// default (there is no deselected width).
pub fn compute_polyline_widths(
    dataset: &DataSet,
    selection: &[usize],
    styles: &StyleConfig,
) -> Vec<f32> {
    dataset.check_interaction_indices(selection, None);
    let highlighted = highlighted_sequence(dataset, selection);

    (0..dataset.sequences().len())
        .map(|sequence_index| {
            if highlighted == Some(sequence_index) {
                styles.polylines.selected_width
            } else {
                styles.polylines.default_width
            }
        })
        .collect()
}

/// Sequence containing the first selected point, if that point lies
/// on one.
fn highlighted_sequence(dataset: &DataSet, selection: &[usize]) -> Option<usize> {
    selection
        .first()
        .and_then(|&point_index| dataset.points()[point_index].sequence_index)
}
