//! Visible-label selection and packed label render parameters.

use constants::point_style::Rgb;
use log::debug;

use crate::dataset::DataSet;
use crate::style::StyleConfig;

/// Fixed-layout label buffers handed to the text renderer. All arrays
/// are parallel and ordered: hover label first (when present), then
/// selection labels in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRenderParams {
    /// Point index backing each label
    pub point_indices: Vec<usize>,
    /// Display text resolved from point metadata
    pub label_strings: Vec<String>,
    pub scale_factors: Vec<f32>,
    /// 1 = draw with scene opacity, 0 = opacity suppressed
    pub opacity_flags: Vec<u8>,
    /// RGB bytes, 3 per label
    pub fill_colors: Vec<u8>,
    /// RGB bytes, 3 per label
    pub stroke_colors: Vec<u8>,
    /// Font size shared by every label
    pub font_size: f32,
}

impl LabelRenderParams {
    fn with_capacity(capacity: usize, font_size: f32) -> Self {
        Self {
            point_indices: Vec::with_capacity(capacity),
            label_strings: Vec::with_capacity(capacity),
            scale_factors: Vec::with_capacity(capacity),
            opacity_flags: Vec::with_capacity(capacity),
            fill_colors: Vec::with_capacity(capacity * 3),
            stroke_colors: Vec::with_capacity(capacity * 3),
            font_size,
        }
    }

    fn push(
        &mut self,
        point_index: usize,
        text: String,
        scale: f32,
        opacity_flag: u8,
        fill: Rgb,
        stroke: Rgb,
    ) {
        self.point_indices.push(point_index);
        self.label_strings.push(text);
        self.scale_factors.push(scale);
        self.opacity_flags.push(opacity_flag);
        self.fill_colors.extend_from_slice(&fill);
        self.stroke_colors.extend_from_slice(&stroke);
    }

    pub fn len(&self) -> usize {
        self.point_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_indices.is_empty()
    }
}

/// Choose the points that carry visible text labels and pack their
/// styling: the hover target (if any) followed by the selection.
///
/// A point that is both hovered and selected is emitted once, in the
/// hover slot with hover styling; the selected slot is skipped by
/// point-index dedup.
///
/// A lone selected label (selection of exactly one point) is emitted
/// with its opacity flag suppressed. This is a preserved presentation
/// policy, not a derived rule.
pub fn compute_visible_labels(
    dataset: &DataSet,
    selection: &[usize],
    hover: Option<usize>,
    styles: &StyleConfig,
) -> LabelRenderParams {
    dataset.check_interaction_indices(selection, hover);

    let capacity = selection.len() + usize::from(hover.is_some());
    let mut params = LabelRenderParams::with_capacity(capacity, styles.labels.font_size);
    debug!("packing up to {capacity} visible labels");

    if let Some(hover_index) = hover {
        params.push(
            hover_index,
            dataset.label_text(hover_index),
            styles.labels.scale_large,
            1,
            styles.labels.fill_color_hover,
            styles.labels.stroke_color_hover,
        );
    }

    let selected_flag: u8 = if selection.len() == 1 { 0 } else { 1 };
    for &point_index in selection {
        if hover == Some(point_index) {
            // already emitted as the hover label
            continue;
        }
        params.push(
            point_index,
            dataset.label_text(point_index),
            styles.labels.scale_large,
            selected_flag,
            styles.labels.fill_color_selected,
            styles.labels.stroke_color_selected,
        );
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataPoint, Dimensions};

    fn dataset(n: usize) -> DataSet {
        let points = (0..n)
            .map(|i| DataPoint::new(vec![i as f32, 0.0]).with_metadata("word", format!("w{i}")))
            .collect();
        DataSet::new(points, Vec::new(), Dimensions::Two, "word").unwrap()
    }

    #[test]
    fn hover_label_comes_first_then_selection_order() {
        let styles = StyleConfig::default();
        let params = compute_visible_labels(&dataset(5), &[3, 1], Some(4), &styles);

        assert_eq!(params.point_indices, vec![4, 3, 1]);
        assert_eq!(params.label_strings, vec!["w4", "w3", "w1"]);
        assert_eq!(params.font_size, styles.labels.font_size);
        assert_eq!(params.scale_factors, vec![styles.labels.scale_large; 3]);
    }

    #[test]
    fn lone_selected_label_is_opacity_suppressed() {
        let styles = StyleConfig::default();
        let params = compute_visible_labels(&dataset(5), &[2], None, &styles);

        assert_eq!(params.len(), 1);
        assert_eq!(params.opacity_flags, vec![0]);
    }

    #[test]
    fn two_selected_labels_are_not_suppressed() {
        let styles = StyleConfig::default();
        let params = compute_visible_labels(&dataset(5), &[2, 4], None, &styles);

        assert_eq!(params.len(), 2);
        assert_eq!(params.opacity_flags, vec![1, 1]);
    }

    #[test]
    fn hover_label_is_never_suppressed() {
        let styles = StyleConfig::default();
        let params = compute_visible_labels(&dataset(5), &[], Some(1), &styles);

        assert_eq!(params.len(), 1);
        assert_eq!(params.opacity_flags, vec![1]);
    }

    #[test]
    fn hovered_selected_point_is_emitted_once_as_hover() {
        let styles = StyleConfig::default();
        let params = compute_visible_labels(&dataset(5), &[2, 3], Some(2), &styles);

        assert_eq!(params.point_indices, vec![2, 3]);
        // First entry carries hover styling.
        assert_eq!(&params.fill_colors[0..3], &styles.labels.fill_color_hover);
        assert_eq!(
            &params.stroke_colors[0..3],
            &styles.labels.stroke_color_hover
        );
        // Second entry carries selected styling.
        assert_eq!(&params.fill_colors[3..6], &styles.labels.fill_color_selected);
    }

    #[test]
    fn missing_label_field_resolves_to_empty_string() {
        let points = vec![DataPoint::new(vec![0.0, 0.0])];
        let dataset = DataSet::new(points, Vec::new(), Dimensions::Two, "word").unwrap();
        let params = compute_visible_labels(&dataset, &[0], None, &StyleConfig::default());

        assert_eq!(params.label_strings, vec![String::new()]);
    }

    #[test]
    fn no_interaction_yields_no_labels() {
        let params = compute_visible_labels(&dataset(3), &[], None, &StyleConfig::default());
        assert!(params.is_empty());
        assert!(params.fill_colors.is_empty());
    }
}
