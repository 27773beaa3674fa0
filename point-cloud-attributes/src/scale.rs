//! Per-point size multipliers, default -> selected -> hover.

use crate::dataset::DataSet;
use crate::style::StyleConfig;

/// Resolve one size multiplier per point. Same precedence as the
/// colour resolver; there is no custom-colorer equivalent for scale.
pub fn compute_point_scales(
    dataset: &DataSet,
    selection: &[usize],
    hover: Option<usize>,
    styles: &StyleConfig,
) -> Vec<f32> {
    dataset.check_interaction_indices(selection, hover);

    let mut scales = vec![styles.points.scale_default; dataset.len()];

    for &point_index in selection {
        scales[point_index] = styles.points.scale_selected;
    }

    if let Some(hover_index) = hover {
        scales[hover_index] = styles.points.scale_hover;
    }

    scales
}
