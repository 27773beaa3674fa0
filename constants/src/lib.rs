pub mod coordinate_system;
pub mod label_style;
pub mod point_style;
pub mod polyline_style;
