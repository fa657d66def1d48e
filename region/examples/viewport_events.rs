// Example: a host event loop driving the process-wide viewport.
use std::cell::Cell;

use region::{Region, RegionError, Surface, SurfaceEvent, SurfaceMetrics, ViewportOptions};

/// Stand-in for a browser window or terminal: scroll position changes between events.
struct Window {
    loaded: Cell<bool>,
    scroll_top: Cell<f64>,
}

impl Surface for Window {
    fn is_ready(&self) -> bool {
        self.loaded.get()
    }

    fn metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics {
            scroll_left: 0.0,
            scroll_top: self.scroll_top.get(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

fn main() -> Result<(), RegionError> {
    let viewport = region::init_global(ViewportOptions::default().with_refresh_on_load(false));
    let footer = Region::new(0.0, 1900.0, 1280.0, 2000.0)?;

    viewport.bind(move |state| {
        println!(
            "rev={} phase={:?} viewport={} footer visible={}",
            state.revision,
            state.phase,
            state.region,
            footer.intersects(state),
        );
    });

    let window = Window {
        loaded: Cell::new(false),
        scroll_top: Cell::new(500.0),
    };

    // Scroll offsets read as zero until the host reports ready.
    viewport.handle_event(SurfaceEvent::Resize, &window);

    window.loaded.set(true);
    viewport.handle_event(SurfaceEvent::Ready, &window);
    viewport.handle_event(SurfaceEvent::Load, &window);

    for top in [800.0, 1200.0, 1300.0] {
        window.scroll_top.set(top);
        viewport.handle_event(SurfaceEvent::Scroll, &window);
    }
    Ok(())
}
