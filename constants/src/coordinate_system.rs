/// Edge length of the cube the normalized cloud is fitted into.
/// Positions come out of normalization in [-half, +half] per axis.
pub const RENDER_CUBE_LENGTH: f32 = 2.0;

/// Half extent of the render cube ([-1, 1] output range)
pub const RENDER_CUBE_HALF_EXTENT: f32 = RENDER_CUBE_LENGTH / 2.0;

/// Components per packed position (z is zero-filled for 2-D data)
pub const POSITION_COMPONENTS: usize = 3;

/// Components per packed linear RGB colour
pub const COLOR_COMPONENTS: usize = 3;
