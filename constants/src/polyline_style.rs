/// Hue ramp endpoints for the default polyline gradient (degrees).
/// The first point of a sequence sits at the start hue, the last at
/// the end hue.
pub const POLYLINE_START_HUE: f32 = 60.0;
pub const POLYLINE_END_HUE: f32 = 360.0;
pub const POLYLINE_SATURATION: f32 = 1.0;
pub const POLYLINE_LIGHTNESS: f32 = 0.3;

/// Opacity for every sequence when nothing is selected
pub const POLYLINE_DEFAULT_OPACITY: f32 = 0.2;

/// Opacity for the sequence containing the first selected point
pub const POLYLINE_SELECTED_OPACITY: f32 = 0.9;

/// Opacity for all other sequences while a selection exists
pub const POLYLINE_DESELECTED_OPACITY: f32 = 0.05;

/// Line widths; deselected sequences keep the default width
pub const POLYLINE_DEFAULT_LINEWIDTH: f32 = 2.0;
pub const POLYLINE_SELECTED_LINEWIDTH: f32 = 3.0;
