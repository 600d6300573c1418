/// Pixel rectangle of the surface that receives rendered output.
///
/// Physical pixels, origin top-left.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Covers the whole surface.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Largest square centered inside a `width` x `height` surface.
    #[inline]
    pub fn centered_square(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self::new((width - side) / 2, (height - side) / 2, side, side)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Restricts the rectangle to a `width` x `height` surface.
    ///
    /// GPU backends reject viewports that extend past the render target, which can
    /// happen for a frame when the surface configuration lags behind a resize.
    #[inline]
    pub fn clamped(self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        let x2 = self.x.saturating_add(self.width).min(width);
        let y2 = self.y.saturating_add(self.height).min(height);
        Self::new(x, y, x2 - x, y2 - y)
    }
}
