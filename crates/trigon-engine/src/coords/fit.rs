use super::{ProjectionVolume, Viewport};

/// How scene space is fitted onto a surface of arbitrary shape.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Fill the surface; the longer side shows more of the scene.
    #[default]
    Extend,
    /// Draw into the largest centered square; the rest stays clear color.
    Square,
}

/// Viewport rectangle and projection volume computed together for one surface size.
///
/// Replaced as a single value on resize so a frame never pairs a new viewport with
/// a stale projection.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Fitting {
    pub viewport: Viewport,
    pub projection: ProjectionVolume,
}

impl Fitting {
    pub fn new(width: u32, height: u32, mode: FitMode) -> Self {
        match mode {
            FitMode::Extend => Self {
                viewport: Viewport::full(width, height),
                projection: ProjectionVolume::fit(width, height),
            },
            FitMode::Square => Self {
                viewport: Viewport::centered_square(width, height),
                projection: ProjectionVolume::UNIT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_uses_full_surface() {
        let f = Fitting::new(800, 600, FitMode::Extend);
        assert_eq!(f.viewport, Viewport::full(800, 600));
        assert_eq!(f.projection, ProjectionVolume::fit(800, 600));
    }

    #[test]
    fn square_letterboxes_with_unit_volume() {
        let f = Fitting::new(800, 600, FitMode::Square);
        assert_eq!(f.viewport, Viewport::new(100, 0, 600, 600));
        assert_eq!(f.projection, ProjectionVolume::UNIT);
    }

    #[test]
    fn both_modes_agree_on_square_surface() {
        let a = Fitting::new(720, 720, FitMode::Extend);
        let b = Fitting::new(720, 720, FitMode::Square);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_height_does_not_panic() {
        for mode in [FitMode::Extend, FitMode::Square] {
            let f = Fitting::new(800, 0, mode);
            assert!(f.viewport.is_empty());
            assert_eq!(f.projection, ProjectionVolume::UNIT);
        }
    }

    #[test]
    fn default_mode_is_extend() {
        assert_eq!(FitMode::default(), FitMode::Extend);
    }
}
