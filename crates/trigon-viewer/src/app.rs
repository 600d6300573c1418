use trigon_engine::coords::{FitMode, Fitting};
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::paint::Color;
use trigon_engine::render::TriangleRenderer;
use trigon_engine::scene::{Triangle, TRIANGLE};

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

/// Dark neutral background, `#1b1e2b`.
pub const BACKGROUND: Color = Color::new(27.0 / 255.0, 30.0 / 255.0, 43.0 / 255.0, 1.0);

/// Viewer settings fixed at startup.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub clear: Color,
    pub fit_mode: FitMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            clear: BACKGROUND,
            fit_mode: FitMode::Extend,
        }
    }
}

/// Draws the static triangle, refitting the projection whenever the window
/// changes shape.
pub struct TriangleApp {
    scene: &'static Triangle,
    fit_mode: FitMode,
    fitting: Fitting,
    renderer: TriangleRenderer,
}

impl TriangleApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            scene: &TRIANGLE,
            fit_mode: config.fit_mode,
            fitting: Fitting::default(),
            renderer: TriangleRenderer::new(config.clear),
        }
    }

    /// Recomputes viewport and projection together for a `width` x `height` surface.
    pub fn refit(&mut self, width: u32, height: u32) {
        self.fitting = Fitting::new(width, height, self.fit_mode);

        let p = self.fitting.projection;
        log::debug!(
            "fit {width}x{height}: viewport {:?}, ortho l={} r={} b={} t={}",
            self.fitting.viewport,
            p.left,
            p.right,
            p.bottom,
            p.top
        );
    }
}

impl App for TriangleApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                log::info!("escape pressed; closing");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_resize(&mut self, _window_id: WindowId, width: u32, height: u32) {
        self.refit(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (scene, fitting, renderer) = (self.scene, &self.fitting, &mut self.renderer);
        ctx.render(|rctx, target| renderer.render(rctx, target, scene, fitting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon_engine::coords::{ProjectionVolume, Viewport};

    #[test]
    fn background_is_1b1e2b() {
        assert_eq!(BACKGROUND, Color::from_srgb_u8(0x1b, 0x1e, 0x2b, 0xff));
    }

    #[test]
    fn default_config_extends_over_background() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.clear, BACKGROUND);
        assert_eq!(cfg.fit_mode, FitMode::Extend);
    }

    #[test]
    fn refit_replaces_viewport_and_projection_together() {
        let mut app = TriangleApp::new(ViewerConfig::default());

        app.refit(800, 600);
        let wide = app.fitting;
        assert_eq!(wide.viewport, Viewport::full(800, 600));
        assert_eq!(wide.projection, ProjectionVolume::fit(800, 600));

        app.refit(600, 800);
        let tall = app.fitting;
        assert_eq!(tall.viewport, Viewport::full(600, 800));
        assert_eq!(tall.projection, ProjectionVolume::fit(600, 800));
    }

    #[test]
    fn refit_same_size_is_stable() {
        let mut app = TriangleApp::new(ViewerConfig::default());
        app.refit(1280, 720);
        let first = app.fitting;
        app.refit(1280, 720);
        assert_eq!(first, app.fitting);
    }

    #[test]
    fn refit_survives_minimized_window() {
        let mut app = TriangleApp::new(ViewerConfig::default());
        app.refit(800, 0);
        assert!(app.fitting.viewport.is_empty());
        assert_eq!(app.fitting.projection, ProjectionVolume::UNIT);
    }

    #[test]
    fn square_mode_letterboxes() {
        let mut app = TriangleApp::new(ViewerConfig {
            fit_mode: FitMode::Square,
            ..ViewerConfig::default()
        });
        app.refit(800, 600);
        assert_eq!(app.fitting.viewport, Viewport::new(100, 0, 600, 600));
        assert_eq!(app.fitting.projection, ProjectionVolume::UNIT);
    }

    #[test]
    fn scene_is_the_static_triangle() {
        let app = TriangleApp::new(ViewerConfig::default());
        assert_eq!(*app.scene, TRIANGLE);
    }
}
