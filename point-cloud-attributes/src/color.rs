//! Layered per-point colour rules: mode base palette, optional custom
//! colorer, then selection and hover overlays.

use constants::coordinate_system::COLOR_COMPONENTS;
use glam::Vec3;
use log::debug;

use crate::color_math::rgb_bytes_to_linear;
use crate::dataset::DataSet;
use crate::style::StyleConfig;

/// Base palette selector for unselected / no-selection points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Plain,
    Labels3d,
    SpriteImage,
}

impl DisplayMode {
    /// Collapse the caller's mutually exclusive mode flags: 3-D labels
    /// win over sprite images, plain applies when neither flag is set.
    pub fn from_flags(labels_3d: bool, sprite_image: bool) -> Self {
        if labels_3d {
            DisplayMode::Labels3d
        } else if sprite_image {
            DisplayMode::SpriteImage
        } else {
            DisplayMode::Plain
        }
    }
}

/// Optional per-point colour strategy (the "legend colorer"). `None`
/// means no opinion for that point: defer to the default rule.
pub trait PointColorer {
    fn color(&self, point_index: usize) -> Option<Vec3>;
}

impl<F> PointColorer for F
where
    F: Fn(usize) -> Option<Vec3>,
{
    fn color(&self, point_index: usize) -> Option<Vec3> {
        self(point_index)
    }
}

/// Resolve one linear RGB triple per point, 3 floats each.
///
/// Precedence, lowest to highest: mode base palette (the custom
/// colorer replaces the no-selection base while nothing is selected),
/// the shared selected colour for every selected point, the hover
/// colour for the hover target.
pub fn compute_point_colors(
    dataset: &DataSet,
    colorer: Option<&dyn PointColorer>,
    selection: &[usize],
    hover: Option<usize>,
    mode: DisplayMode,
    styles: &StyleConfig,
) -> Vec<f32> {
    let mut colors = vec![0.0f32; dataset.len() * COLOR_COMPONENTS];
    if dataset.is_empty() {
        return colors;
    }
    dataset.check_interaction_indices(selection, hover);
    debug!(
        "recoloring {} points ({} selected, hover {:?})",
        dataset.len(),
        selection.len(),
        hover
    );

    let (unselected, no_selection) = styles.points.base_pair(mode);
    let unselected = rgb_bytes_to_linear(unselected);
    let no_selection = rgb_bytes_to_linear(no_selection);

    for i in 0..dataset.len() {
        let base = if selection.is_empty() {
            colorer.and_then(|c| c.color(i)).unwrap_or(no_selection)
        } else {
            unselected
        };
        write_color(&mut colors, i, base);
    }

    let selected = rgb_bytes_to_linear(styles.points.color_selected);
    for &point_index in selection {
        write_color(&mut colors, point_index, selected);
    }

    if let Some(hover_index) = hover {
        let hover_color = rgb_bytes_to_linear(styles.points.color_hover);
        write_color(&mut colors, hover_index, hover_color);
    }

    colors
}

fn write_color(colors: &mut [f32], point_index: usize, rgb: Vec3) {
    let base_idx = point_index * COLOR_COMPONENTS;
    colors[base_idx] = rgb.x;
    colors[base_idx + 1] = rgb.y;
    colors[base_idx + 2] = rgb.z;
}

/// Linear colour of one point out of a packed colour buffer.
pub fn color_at(colors: &[f32], point_index: usize) -> Vec3 {
    let base_idx = point_index * COLOR_COMPONENTS;
    Vec3::new(colors[base_idx], colors[base_idx + 1], colors[base_idx + 2])
}
