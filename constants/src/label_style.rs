use crate::point_style::Rgb;

/// Shared font size for every visible label (points, not pixels)
pub const LABEL_FONT_SIZE: f32 = 10.0;

/// Scale applied to labels of selected and hovered points
pub const LABEL_SCALE_LARGE: f32 = 2.0;

pub const LABEL_FILL_COLOR_SELECTED: Rgb = [0x00, 0x00, 0x00];
pub const LABEL_STROKE_COLOR_SELECTED: Rgb = [0xff, 0xff, 0xff];

pub const LABEL_FILL_COLOR_HOVER: Rgb = [0x00, 0x00, 0x00];
pub const LABEL_STROKE_COLOR_HOVER: Rgb = [0xff, 0xff, 0xff];
