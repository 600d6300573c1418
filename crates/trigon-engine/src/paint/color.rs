/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Values are sRGB-encoded, the way they are usually written down (hex codes,
/// byte triples). Use [`Color::for_surface`] when handing a color to the GPU.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Decodes the sRGB transfer curve; alpha is already linear and passes through.
    #[inline]
    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a,
        )
    }

    /// Clear/constant value for a render target of `format`.
    ///
    /// sRGB targets encode on write, so the value is linearized first; the
    /// displayed color then matches the sRGB channels of `self`.
    pub fn for_surface(self, format: wgpu::TextureFormat) -> wgpu::Color {
        let c = if format.is_srgb() { self.to_linear() } else { self };
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
