//! Colour conversions shared by the point and polyline resolvers.

use constants::point_style::Rgb;
use glam::Vec3;

/// Convert HSL (hue in degrees, saturation/lightness in 0-1) to
/// linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    Vec3::new(r1 + m, g1 + m, b1 + m)
}

/// Expand an RGB byte triple into linear 0-1 components.
pub fn rgb_bytes_to_linear(rgb: Rgb) -> Vec3 {
    Vec3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
}

/// Hue of a linear RGB colour in degrees (0 for achromatic input).
pub fn rgb_to_hue(rgb: Vec3) -> f32 {
    let max = rgb.x.max(rgb.y).max(rgb.z);
    let min = rgb.x.min(rgb.y).min(rgb.z);
    let delta = max - min;
    if delta <= f32::EPSILON {
        return 0.0;
    }
    let hue = if max == rgb.x {
        ((rgb.y - rgb.z) / delta).rem_euclid(6.0)
    } else if max == rgb.y {
        (rgb.z - rgb.x) / delta + 2.0
    } else {
        (rgb.x - rgb.y) / delta + 4.0
    };
    hue * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn primary_hues_convert_exactly() {
        assert!(hsl_to_rgb(0.0, 1.0, 0.5).abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPS));
        assert!(hsl_to_rgb(120.0, 1.0, 0.5).abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPS));
        assert!(hsl_to_rgb(240.0, 1.0, 0.5).abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn hue_360_wraps_to_red() {
        assert!(hsl_to_rgb(360.0, 1.0, 0.5).abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn byte_triples_expand_to_unit_range() {
        let white = rgb_bytes_to_linear([0xff, 0xff, 0xff]);
        assert_eq!(white, Vec3::ONE);
        let grey = rgb_bytes_to_linear([0xe3, 0xe3, 0xe3]);
        assert!((grey.x - 227.0 / 255.0).abs() < EPS);
    }

    #[test]
    fn hue_round_trips_through_rgb() {
        for hue in [20.0, 60.0, 145.0, 250.0, 330.0] {
            let rgb = hsl_to_rgb(hue, 1.0, 0.3);
            assert!(
                (rgb_to_hue(rgb) - hue).abs() < 0.5,
                "hue {hue} round-tripped to {}",
                rgb_to_hue(rgb)
            );
        }
    }
}
