use crate::{Region, SurfaceEvent};

/// Configuration for [`crate::Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportOptions {
    /// Edges reported before the first refresh.
    pub initial_region: Option<Region>,
    pub refresh_on_resize: bool,
    pub refresh_on_scroll: bool,
    /// Whether the host's load notification also refreshes the viewport.
    pub refresh_on_load: bool,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            initial_region: None,
            refresh_on_resize: true,
            refresh_on_scroll: true,
            refresh_on_load: true,
        }
    }
}

impl ViewportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_region(mut self, initial_region: Option<Region>) -> Self {
        self.initial_region = initial_region;
        self
    }

    pub fn with_refresh_on_resize(mut self, refresh_on_resize: bool) -> Self {
        self.refresh_on_resize = refresh_on_resize;
        self
    }

    pub fn with_refresh_on_scroll(mut self, refresh_on_scroll: bool) -> Self {
        self.refresh_on_scroll = refresh_on_scroll;
        self
    }

    pub fn with_refresh_on_load(mut self, refresh_on_load: bool) -> Self {
        self.refresh_on_load = refresh_on_load;
        self
    }

    /// Whether `event` triggers a refresh. `Ready` always does (once).
    pub fn refreshes_on(&self, event: SurfaceEvent) -> bool {
        match event {
            SurfaceEvent::Ready => true,
            SurfaceEvent::Load => self.refresh_on_load,
            SurfaceEvent::Resize => self.refresh_on_resize,
            SurfaceEvent::Scroll => self.refresh_on_scroll,
        }
    }
}
