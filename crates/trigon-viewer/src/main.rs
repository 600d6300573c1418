mod app;

use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use app::{TriangleApp, ViewerConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let runtime = RuntimeConfig {
        title: "Triangle".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        resizable: true,
    };

    // Unconverted output: colors blend the way a plain RGB framebuffer blends them.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    if let Err(e) = Runtime::run(runtime, gpu_init, TriangleApp::new(ViewerConfig::default())) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
