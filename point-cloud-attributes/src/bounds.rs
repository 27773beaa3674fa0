//! Per-axis coordinate extents and position normalization.

use constants::coordinate_system::{
    POSITION_COMPONENTS, RENDER_CUBE_HALF_EXTENT, RENDER_CUBE_LENGTH,
};
use log::debug;

use crate::dataset::DataSet;

/// Running [min, max] of one coordinate axis across all points.
#[derive(Debug, Clone, Copy)]
pub struct AxisExtent {
    pub min: f32,
    pub max: f32,
}

impl AxisExtent {
    /// New extent initialised to infinity values
    pub fn new() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    /// Widen the extent to cover a new value
    pub fn update(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Width of the extent; zero when every sample was equal
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Rescale a raw value into [-1, 1]. A zero-width extent maps
    /// every value to the range midpoint instead of dividing by zero.
    pub fn normalize(&self, value: f32) -> f32 {
        let width = self.width();
        if width <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / width) * RENDER_CUBE_LENGTH - RENDER_CUBE_HALF_EXTENT
    }
}

impl Default for AxisExtent {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-axis extents over every point, one per active render dimension.
pub fn compute_extents(dataset: &DataSet) -> Vec<AxisExtent> {
    let mut extents = vec![AxisExtent::new(); dataset.dimensions().count()];
    for point in dataset.points() {
        for (axis, extent) in extents.iter_mut().enumerate() {
            extent.update(point.coordinates[axis]);
        }
    }
    extents
}

/// Pack normalized positions, 3 floats per point. The cloud is fitted
/// into a cube of edge length 2 centered at the origin regardless of
/// input scale; the third component is zero-filled for 2-D data sets.
pub fn compute_point_positions(dataset: &DataSet) -> Vec<f32> {
    let mut positions = vec![0.0f32; dataset.len() * POSITION_COMPONENTS];
    if dataset.is_empty() {
        return positions;
    }

    let extents = compute_extents(dataset);
    debug!("normalizing {} points into the render cube", dataset.len());

    for (i, point) in dataset.points().iter().enumerate() {
        let base_idx = i * POSITION_COMPONENTS;
        for (axis, extent) in extents.iter().enumerate() {
            positions[base_idx + axis] = extent.normalize(point.coordinates[axis]);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataPoint, Dimensions};

    fn dataset_3d(coords: &[[f32; 3]]) -> DataSet {
        let points = coords
            .iter()
            .map(|c| DataPoint::new(c.to_vec()))
            .collect();
        DataSet::new(points, Vec::new(), Dimensions::Three, "label").unwrap()
    }

    fn dataset_2d(coords: &[[f32; 2]]) -> DataSet {
        let points = coords
            .iter()
            .map(|c| DataPoint::new(c.to_vec()))
            .collect();
        DataSet::new(points, Vec::new(), Dimensions::Two, "label").unwrap()
    }

    #[test]
    fn buffer_is_three_floats_per_point() {
        let dataset = dataset_3d(&[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(compute_point_positions(&dataset).len(), 9);
    }

    #[test]
    fn extremes_map_to_exact_cube_corners() {
        let dataset = dataset_3d(&[[-10.0, 0.0, 5.0], [30.0, 4.0, 25.0]]);
        let positions = compute_point_positions(&dataset);
        assert_eq!(&positions[0..3], &[-1.0, -1.0, -1.0]);
        assert_eq!(&positions[3..6], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn interior_values_stay_inside_the_cube() {
        let dataset = dataset_3d(&[
            [-10.0, 0.0, 5.0],
            [3.0, 1.0, 7.0],
            [30.0, 4.0, 25.0],
        ]);
        for value in compute_point_positions(&dataset) {
            assert!((-1.0..=1.0).contains(&value), "value {value} escaped the cube");
        }
    }

    #[test]
    fn two_dimensional_data_zero_fills_z() {
        let dataset = dataset_2d(&[[0.0, 3.0], [5.0, -2.0], [1.0, 1.0]]);
        let positions = compute_point_positions(&dataset);
        for i in 0..3 {
            assert_eq!(positions[i * 3 + 2], 0.0);
        }
    }

    #[test]
    fn zero_width_extent_maps_to_midpoint() {
        let dataset = dataset_3d(&[[7.0, 0.0, 1.0], [7.0, 1.0, 2.0], [7.0, 2.0, 3.0]]);
        let positions = compute_point_positions(&dataset);
        for i in 0..3 {
            let x = positions[i * 3];
            assert_eq!(x, 0.0);
            assert!(x.is_finite());
        }
    }

    #[test]
    fn empty_dataset_yields_empty_buffer() {
        assert!(compute_point_positions(&DataSet::empty()).is_empty());
    }

    #[test]
    fn single_point_maps_to_origin() {
        let dataset = dataset_3d(&[[12.0, -4.0, 9.0]]);
        assert_eq!(compute_point_positions(&dataset), vec![0.0, 0.0, 0.0]);
    }
}
