/// Bounds of an orthographic viewing volume in scene units.
///
/// `near`/`far` follow the classic eye-space convention: the plane `z = -near`
/// maps to the front of the depth range and `z = -far` to the back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionVolume {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionVolume {
    /// The `[-1, 1]` cube.
    pub const UNIT: Self = Self::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);

    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self { left, right, bottom, top, near, far }
    }

    /// Volume that keeps scene units square on a `width` x `height` surface.
    ///
    /// The shorter surface side always spans `[-1, 1]`; the longer side is widened
    /// by the aspect ratio. A zero-sized side is treated as a square surface.
    pub fn fit(width: u32, height: u32) -> Self {
        let aspect = aspect_ratio(width, height);

        if aspect >= 1.0 {
            Self::new(-aspect, aspect, -1.0, 1.0, -1.0, 1.0)
        } else {
            let inv = 1.0 / aspect;
            Self::new(-1.0, 1.0, -inv, inv, -1.0, 1.0)
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Column-major orthographic matrix mapping this volume to wgpu clip space.
    ///
    /// x/y land in `[-1, 1]`; depth lands in `[0, 1]` with `z = -near` at 0.
    pub fn to_matrix(&self) -> [[f32; 4]; 4] {
        let Self { left, right, bottom, top, near, far } = *self;
        debug_assert!(right != left && top != bottom && far != near);

        let rl = right - left;
        let tb = top - bottom;
        let fne = far - near;

        [
            [2.0 / rl, 0.0, 0.0, 0.0],
            [0.0, 2.0 / tb, 0.0, 0.0],
            [0.0, 0.0, -1.0 / fne, 0.0],
            [-(right + left) / rl, -(top + bottom) / tb, -near / fne, 1.0],
        ]
    }
}

impl Default for ProjectionVolume {
    fn default() -> Self {
        Self::UNIT
    }
}

/// `width / height`, or `1.0` when either side is zero.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    fn transform(m: &[[f32; 4]; 4], p: [f32; 3]) -> [f32; 4] {
        let v = [p[0], p[1], p[2], 1.0];
        let mut out = [0.0; 4];
        for (col, &s) in m.iter().zip(v.iter()) {
            for row in 0..4 {
                out[row] += col[row] * s;
            }
        }
        out
    }

    // ── fit ───────────────────────────────────────────────────────────────

    #[test]
    fn square_surface_is_exact_unit_volume() {
        assert_eq!(ProjectionVolume::fit(512, 512), ProjectionVolume::UNIT);
    }

    #[test]
    fn wide_surface_widens_horizontal_range() {
        let v = ProjectionVolume::fit(800, 600);
        assert!(approx(v.left, -4.0 / 3.0));
        assert!(approx(v.right, 4.0 / 3.0));
        assert_eq!((v.bottom, v.top), (-1.0, 1.0));
        assert_eq!((v.near, v.far), (-1.0, 1.0));
    }

    #[test]
    fn tall_surface_widens_vertical_range() {
        let v = ProjectionVolume::fit(600, 800);
        assert_eq!((v.left, v.right), (-1.0, 1.0));
        assert!(approx(v.bottom, -4.0 / 3.0));
        assert!(approx(v.top, 4.0 / 3.0));
    }

    #[test]
    fn shorter_side_always_spans_unit_range() {
        let sizes = [1u32, 2, 3, 7, 64, 599, 600, 601, 1080, 1920, 4096];
        for &w in &sizes {
            for &h in &sizes {
                let v = ProjectionVolume::fit(w, h);
                let aspect = w as f32 / h as f32;

                assert!(approx(v.width(), 2.0 * aspect.max(1.0)), "{w}x{h}: {v:?}");
                assert!(approx(v.height(), 2.0 * (1.0 / aspect).max(1.0)), "{w}x{h}: {v:?}");
                assert_eq!(v.left, -v.right);
                assert_eq!(v.bottom, -v.top);
            }
        }
    }

    #[test]
    fn fit_is_deterministic() {
        let a = ProjectionVolume::fit(1366, 768);
        let b = ProjectionVolume::fit(1366, 768);
        assert_eq!(a.left.to_bits(), b.left.to_bits());
        assert_eq!(a.right.to_bits(), b.right.to_bits());
        assert_eq!(a.bottom.to_bits(), b.bottom.to_bits());
        assert_eq!(a.top.to_bits(), b.top.to_bits());
    }

    #[test]
    fn zero_height_falls_back_to_square() {
        assert_eq!(ProjectionVolume::fit(800, 0), ProjectionVolume::UNIT);
    }

    #[test]
    fn zero_width_falls_back_to_square() {
        assert_eq!(ProjectionVolume::fit(0, 600), ProjectionVolume::UNIT);
        assert_eq!(ProjectionVolume::fit(0, 0), ProjectionVolume::UNIT);
    }

    // ── to_matrix ─────────────────────────────────────────────────────────

    #[test]
    fn unit_volume_matrix_keeps_xy() {
        let m = ProjectionVolume::UNIT.to_matrix();
        let p = transform(&m, [0.25, -0.5, 0.0]);
        assert!(approx(p[0], 0.25));
        assert!(approx(p[1], -0.5));
        assert!(approx(p[2], 0.5));
        assert_eq!(p[3], 1.0);
    }

    #[test]
    fn matrix_maps_corners_to_clip_edges() {
        let v = ProjectionVolume::fit(800, 600);
        let m = v.to_matrix();

        let lo = transform(&m, [v.left, v.bottom, -v.near]);
        let hi = transform(&m, [v.right, v.top, -v.far]);

        assert!(approx(lo[0], -1.0) && approx(lo[1], -1.0) && approx(lo[2], 0.0));
        assert!(approx(hi[0], 1.0) && approx(hi[1], 1.0) && approx(hi[2], 1.0));
    }

    #[test]
    fn matrix_maps_origin_to_center() {
        let m = ProjectionVolume::fit(600, 800).to_matrix();
        let p = transform(&m, [0.0, 0.0, 0.0]);
        assert!(approx(p[0], 0.0));
        assert!(approx(p[1], 0.0));
    }

    #[test]
    fn matrix_handles_off_center_volume() {
        let v = ProjectionVolume::new(0.0, 4.0, 2.0, 4.0, 0.0, 10.0);
        let m = v.to_matrix();
        let p = transform(&m, [2.0, 3.0, -5.0]);
        assert!(approx(p[0], 0.0));
        assert!(approx(p[1], 0.0));
        assert!(approx(p[2], 0.5));
    }
}
