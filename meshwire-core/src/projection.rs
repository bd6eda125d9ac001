/// Orthographic scale-and-offset projection to pixel coordinates
use nalgebra::{Matrix3, Point2, Point3, Vector2};

use crate::vector::Vector3;

/// Pixels per model unit. Models spanning roughly -0.5..0.5 fill about half
/// of a 512 pixel canvas.
pub const DEFAULT_SCALE: f32 = 250.0;

/// Maps model-space vertices onto a `width` x `height` canvas
///
/// Depth is never read: there is no perspective divide and no clipping.
/// Model Y points up while image rows grow downwards, so Y is negated.
/// Coordinates beyond the `i32` range saturate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
}

impl Projector {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_scale(width, height, DEFAULT_SCALE)
    }

    pub fn with_scale(width: u32, height: u32, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Homogeneous 2D form of the scaling applied to `(x, y)` before rounding
    pub fn screen_matrix(&self) -> Matrix3<f32> {
        Matrix3::new_nonuniform_scaling(&self.axis_scale())
    }

    fn axis_scale(&self) -> Vector2<f32> {
        Vector2::new(self.scale, -self.scale)
    }

    /// Project a vertex to integer pixel coordinates
    ///
    /// The result may lie outside the canvas.
    pub fn project(&self, vertex: &Vector3) -> (i32, i32) {
        // per axis, no cross terms
        let planar: Point2<f32> = Point3::from(*vertex).xy();
        let scaled = planar.coords.component_mul(&self.axis_scale());
        let center_x = f64::from(self.width / 2);
        let center_y = f64::from(self.height / 2);
        // `as` saturates, so the offset goes in before the cast
        (
            (f64::from(scaled.x.round()) + center_x) as i32,
            (f64::from(scaled.y.round()) + center_y) as i32,
        )
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(512, 512)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_center() {
        let projector = Projector::new(512, 512);
        assert_eq!(projector.project(&Vector3::new(0.0, 0.0, 0.0)), (256, 256));
    }

    #[test]
    fn test_y_is_flipped() {
        let projector = Projector::new(512, 512);
        assert_eq!(projector.project(&Vector3::new(0.1, -0.2, 0.3)), (281, 306));
        assert_eq!(projector.project(&Vector3::new(-0.4, 0.4, 0.0)), (156, 156));
    }

    #[test]
    fn test_depth_ignored() {
        let projector = Projector::new(512, 512);
        let near = projector.project(&Vector3::new(0.2, 0.2, -5.0));
        let far = projector.project(&Vector3::new(0.2, 0.2, 5.0));
        assert_eq!(near, far);
    }

    #[test]
    fn test_rounding_and_odd_canvas() {
        let projector = Projector::with_scale(101, 51, 10.0);
        // 0.26 * 10 rounds to 3, 101 / 2 == 50
        assert_eq!(projector.project(&Vector3::new(0.26, 0.0, 0.0)), (53, 25));
        assert_eq!(projector.project(&Vector3::new(-0.24, 0.0, 0.0)), (48, 25));
    }

    #[test]
    fn test_off_canvas_vertex() {
        let projector = Projector::new(512, 512);
        assert_eq!(projector.project(&Vector3::new(2.0, 0.0, 0.0)), (756, 256));
    }

    #[test]
    fn test_non_finite_depth_ignored() {
        let projector = Projector::new(512, 512);
        for z in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN, 1e38] {
            assert_eq!(projector.project(&Vector3::new(0.1, 0.1, z)), (281, 231));
        }
    }

    #[test]
    fn test_far_vertex_saturates_on_its_own_side() {
        let projector = Projector::new(512, 512);
        assert_eq!(
            projector.project(&Vector3::new(1.0e8, 0.0, 0.0)),
            (i32::MAX, 256)
        );
        assert_eq!(
            projector.project(&Vector3::new(-1.0e8, 1.0e8, 0.0)),
            (i32::MIN, i32::MIN)
        );
        assert_eq!(
            projector.project(&Vector3::new(0.0, -1.0e8, 0.0)),
            (256, i32::MAX)
        );
    }

    #[test]
    fn test_infinite_axis_saturates() {
        let projector = Projector::new(512, 512);
        assert_eq!(
            projector.project(&Vector3::new(f32::INFINITY, 0.1, 0.0)),
            (i32::MAX, 231)
        );
    }

    #[test]
    fn test_screen_matrix() {
        let m = Projector::new(512, 512).screen_matrix();
        let p = m.transform_point(&Point2::new(1.0, 1.0));
        assert_eq!(p, Point2::new(250.0, -250.0));
    }
}
