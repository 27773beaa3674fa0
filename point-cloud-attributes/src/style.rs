//! Style configuration: named constant tables grouped by concern,
//! serde-loadable with defaults from the `constants` crate.

use constants::point_style::Rgb;
use constants::{label_style, point_style, polyline_style};
use serde::{Deserialize, Serialize};

use crate::color::DisplayMode;
use crate::error::StyleError;

/// Full style table threaded through every resolver call. Colours are
/// RGB byte triples, so every configured colour is representable by
/// construction; scales, opacities, and widths are validated
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleConfig {
    pub points: PointStyle,
    pub labels: LabelStyle,
    pub polylines: PolylineStyle,
}

/// Point palette (per display mode) and scale factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub color_unselected: Rgb,
    pub color_no_selection: Rgb,
    pub color_selected: Rgb,
    pub color_hover: Rgb,
    pub labels_3d_color_unselected: Rgb,
    pub labels_3d_color_no_selection: Rgb,
    pub sprite_image_color_unselected: Rgb,
    pub sprite_image_color_no_selection: Rgb,
    pub scale_default: f32,
    pub scale_selected: f32,
    pub scale_hover: f32,
}

/// Label font, scale, and per-state fill/stroke pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_size: f32,
    pub scale_large: f32,
    pub fill_color_selected: Rgb,
    pub stroke_color_selected: Rgb,
    pub fill_color_hover: Rgb,
    pub stroke_color_hover: Rgb,
}

/// Polyline hue ramp and opacity/width tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineStyle {
    pub start_hue: f32,
    pub end_hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub default_opacity: f32,
    pub selected_opacity: f32,
    pub deselected_opacity: f32,
    pub default_width: f32,
    pub selected_width: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color_unselected: point_style::POINT_COLOR_UNSELECTED,
            color_no_selection: point_style::POINT_COLOR_NO_SELECTION,
            color_selected: point_style::POINT_COLOR_SELECTED,
            color_hover: point_style::POINT_COLOR_HOVER,
            labels_3d_color_unselected: point_style::LABELS_3D_COLOR_UNSELECTED,
            labels_3d_color_no_selection: point_style::LABELS_3D_COLOR_NO_SELECTION,
            sprite_image_color_unselected: point_style::SPRITE_IMAGE_COLOR_UNSELECTED,
            sprite_image_color_no_selection: point_style::SPRITE_IMAGE_COLOR_NO_SELECTION,
            scale_default: point_style::POINT_SCALE_DEFAULT,
            scale_selected: point_style::POINT_SCALE_SELECTED,
            scale_hover: point_style::POINT_SCALE_HOVER,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: label_style::LABEL_FONT_SIZE,
            scale_large: label_style::LABEL_SCALE_LARGE,
            fill_color_selected: label_style::LABEL_FILL_COLOR_SELECTED,
            stroke_color_selected: label_style::LABEL_STROKE_COLOR_SELECTED,
            fill_color_hover: label_style::LABEL_FILL_COLOR_HOVER,
            stroke_color_hover: label_style::LABEL_STROKE_COLOR_HOVER,
        }
    }
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            start_hue: polyline_style::POLYLINE_START_HUE,
            end_hue: polyline_style::POLYLINE_END_HUE,
            saturation: polyline_style::POLYLINE_SATURATION,
            lightness: polyline_style::POLYLINE_LIGHTNESS,
            default_opacity: polyline_style::POLYLINE_DEFAULT_OPACITY,
            selected_opacity: polyline_style::POLYLINE_SELECTED_OPACITY,
            deselected_opacity: polyline_style::POLYLINE_DESELECTED_OPACITY,
            default_width: polyline_style::POLYLINE_DEFAULT_LINEWIDTH,
            selected_width: polyline_style::POLYLINE_SELECTED_LINEWIDTH,
        }
    }
}

impl PointStyle {
    /// (unselected, no-selection) base pair for a display mode.
    pub fn base_pair(&self, mode: DisplayMode) -> (Rgb, Rgb) {
        match mode {
            DisplayMode::Plain => (self.color_unselected, self.color_no_selection),
            DisplayMode::Labels3d => (
                self.labels_3d_color_unselected,
                self.labels_3d_color_no_selection,
            ),
            DisplayMode::SpriteImage => (
                self.sprite_image_color_unselected,
                self.sprite_image_color_no_selection,
            ),
        }
    }
}

impl StyleConfig {
    /// Parse a JSON style table. Omitted fields keep their default
    /// constant; the result is validated before use.
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Enforce the style invariants: every scale, opacity, saturation,
    /// lightness, and width non-negative, every numeric field finite.
    pub fn validate(&self) -> Result<(), StyleError> {
        let non_negative = [
            ("points.scale_default", self.points.scale_default),
            ("points.scale_selected", self.points.scale_selected),
            ("points.scale_hover", self.points.scale_hover),
            ("labels.font_size", self.labels.font_size),
            ("labels.scale_large", self.labels.scale_large),
            ("polylines.saturation", self.polylines.saturation),
            ("polylines.lightness", self.polylines.lightness),
            ("polylines.default_opacity", self.polylines.default_opacity),
            ("polylines.selected_opacity", self.polylines.selected_opacity),
            (
                "polylines.deselected_opacity",
                self.polylines.deselected_opacity,
            ),
            ("polylines.default_width", self.polylines.default_width),
            ("polylines.selected_width", self.polylines.selected_width),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(StyleError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(StyleError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("polylines.start_hue", self.polylines.start_hue),
            ("polylines.end_hue", self.polylines.end_hue),
        ] {
            if !value.is_finite() {
                return Err(StyleError::NonFinite { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_constant_tables() {
        let styles = StyleConfig::default();
        assert_eq!(styles.points.color_hover, [0x76, 0x0b, 0x4f]);
        assert_eq!(styles.points.scale_selected, 1.2);
        assert_eq!(styles.labels.font_size, 10.0);
        assert_eq!(styles.polylines.start_hue, 60.0);
        assert_eq!(styles.polylines.end_hue, 360.0);
        assert!(styles.validate().is_ok());
    }

    #[test]
    fn json_overrides_merge_over_defaults() {
        let styles = StyleConfig::from_json_str(
            r#"{ "points": { "scale_hover": 2.5 }, "polylines": { "default_width": 1.0 } }"#,
        )
        .unwrap();

        assert_eq!(styles.points.scale_hover, 2.5);
        assert_eq!(styles.polylines.default_width, 1.0);
        // Untouched fields keep their constants.
        assert_eq!(styles.points.scale_default, 1.0);
        assert_eq!(styles.polylines.selected_width, 3.0);
    }

    #[test]
    fn negative_scale_is_rejected() {
        let err = StyleConfig::from_json_str(r#"{ "points": { "scale_default": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            StyleError::Negative {
                field: "points.scale_default",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = StyleConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn config_round_trips_through_json() {
        let styles = StyleConfig::default();
        let json = serde_json::to_string(&styles).unwrap();
        let reparsed = StyleConfig::from_json_str(&json).unwrap();
        assert_eq!(styles, reparsed);
    }
}
