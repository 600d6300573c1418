/// Vertex position `(x, y, z)` in scene units.
pub type Vertex = [f32; 3];

/// Per-vertex RGB color, channels in `[0, 1]`.
pub type VertexColor = [f32; 3];

/// A single triangle with one color per corner.
///
/// `colors[i]` belongs to `vertices[i]`; the rasterizer blends them across the
/// interior.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub colors: [VertexColor; 3],
}

/// Equilateral triangle (unit side) centered on the origin: red top, green
/// bottom-left, blue bottom-right.
pub const TRIANGLE: Triangle = Triangle {
    vertices: [
        [0.0, 0.433, 0.0],
        [-0.5, -0.433, 0.0],
        [0.5, -0.433, 0.0],
    ],
    colors: [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ],
};

impl Triangle {
    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vertex, Vertex) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        (min, max)
    }

    /// Edge lengths, starting with the edge from vertex 0 to vertex 1.
    pub fn side_lengths(&self) -> [f32; 3] {
        std::array::from_fn(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % 3];
            ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2) + (b[2] - a[2]).powi(2)).sqrt()
        })
    }
}

impl Default for Triangle {
    fn default() -> Self {
        TRIANGLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_equilateral() {
        // 0.433 is sqrt(3)/4 rounded to three places.
        for side in TRIANGLE.side_lengths() {
            assert!((side - 1.0).abs() < 1e-3, "side {side}");
        }
    }

    #[test]
    fn triangle_bounds_are_centered_on_origin() {
        let (min, max) = TRIANGLE.bounds();
        assert_eq!(min[0], -max[0]);
        assert_eq!(min[1], -max[1]);
        assert_eq!((min[2], max[2]), (0.0, 0.0));
    }

    #[test]
    fn triangle_fits_in_unit_square() {
        let (min, max) = TRIANGLE.bounds();
        assert!(min.iter().chain(max.iter()).all(|c| c.abs() <= 1.0));
    }

    #[test]
    fn colors_are_red_green_blue() {
        assert_eq!(TRIANGLE.colors[0], [1.0, 0.0, 0.0]);
        assert_eq!(TRIANGLE.colors[1], [0.0, 1.0, 0.0]);
        assert_eq!(TRIANGLE.colors[2], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn colors_are_normalized() {
        assert!(TRIANGLE.colors.iter().flatten().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn top_vertex_comes_first() {
        let top = TRIANGLE.vertices[0];
        assert!(TRIANGLE.vertices[1..].iter().all(|v| v[1] < top[1]));
    }
}
