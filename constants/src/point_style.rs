/// RGB byte triple in [r, g, b] order.
pub type Rgb = [u8; 3];

/// Base colour for points outside the selection while a selection exists
pub const POINT_COLOR_UNSELECTED: Rgb = [0xe3, 0xe3, 0xe3];

/// Base colour for every point when nothing is selected
pub const POINT_COLOR_NO_SELECTION: Rgb = [0x75, 0x75, 0xd9];

/// Overlay colour shared by all selected points
pub const POINT_COLOR_SELECTED: Rgb = [0xfa, 0x66, 0x66];

/// Overlay colour for the hover target (highest precedence)
pub const POINT_COLOR_HOVER: Rgb = [0x76, 0x0b, 0x4f];

/// 3D-label mode renders text glyphs, so its base pair stays white
pub const LABELS_3D_COLOR_UNSELECTED: Rgb = [0xff, 0xff, 0xff];
pub const LABELS_3D_COLOR_NO_SELECTION: Rgb = [0xff, 0xff, 0xff];

/// Sprite-image mode must not tint the sprite texels
pub const SPRITE_IMAGE_COLOR_UNSELECTED: Rgb = [0xff, 0xff, 0xff];
pub const SPRITE_IMAGE_COLOR_NO_SELECTION: Rgb = [0xff, 0xff, 0xff];

/// Point size multipliers applied default -> selected -> hover
pub const POINT_SCALE_DEFAULT: f32 = 1.0;
pub const POINT_SCALE_SELECTED: f32 = 1.2;
pub const POINT_SCALE_HOVER: f32 = 1.2;
