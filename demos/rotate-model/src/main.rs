use touchbridge_core::bridge::RenderBridge;
use touchbridge_core::contact::ContactPhase;
use touchbridge_core::interpreter::DragInterpreter;
use touchbridge_core::raw_handle::SurfaceHandle;
use touchbridge_core::types::{Point, Pos};
use touchbridge_winit::Window;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Stand-in renderer: logs every Bridge call and keeps a running rotation
/// total so drags are visible in the output.
#[derive(Debug, Default)]
struct LogBridge {
    total_rotation: f32,
}

impl RenderBridge for LogBridge {
    fn init(&mut self, _surface: SurfaceHandle) {
        info!("renderer init");
    }

    fn cleanup(&mut self) {
        info!("renderer cleanup");
    }

    fn apply_rotation(&mut self, radius: f32, axis: Pos) {
        self.total_rotation += radius;
        info!(radius, ?axis, total = self.total_rotation, "rotate");
    }

    fn update_pointer(&mut self, id: i32, position: Point, size: f32, phase: ContactPhase) {
        info!(id, ?position, size, ?phase, "pointer");
    }

    fn request_redraw(&mut self) {
        info!("redraw");
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();

    Window::open_blocking::<DragInterpreter, LogBridge>(
        "rotate-model",
        800,
        600,
        LogBridge::default(),
    )
}
