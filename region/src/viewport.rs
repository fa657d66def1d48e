use alloc::sync::Arc;

use crate::emitter::ChangeEmitter;
use crate::{
    ListenerId, Region, Surface, SurfaceEvent, ViewportOptions, ViewportPhase, ViewportState,
};

/// The visible, scrolled area of a display surface.
///
/// This type holds no host objects. The host drives it:
/// - `ready` once the surface can be measured (or construct with [`Viewport::attach`])
/// - `handle_event` (or `refresh`) on every resize/scroll/load notification
///
/// Each refresh replaces all four edges before any listener runs, so listeners always see a
/// fully updated viewport. Refreshes are not deduplicated: an unchanged surface still
/// notifies.
///
/// `Viewport` is single-owner state. For a process-wide instance shared across threads, see
/// `SharedViewport` (requires `feature = "std"`).
#[derive(Clone, Debug)]
pub struct Viewport {
    options: ViewportOptions,
    region: Region,
    phase: ViewportPhase,
    revision: u64,
    listeners: ChangeEmitter,
}

impl Viewport {
    /// Creates an uninitialized viewport. Scroll offsets read as zero until [`Self::ready`].
    pub fn new(options: ViewportOptions) -> Self {
        rdebug!(
            refresh_on_resize = options.refresh_on_resize,
            refresh_on_scroll = options.refresh_on_scroll,
            refresh_on_load = options.refresh_on_load,
            "Viewport::new"
        );
        Self {
            region: options.initial_region.unwrap_or_default(),
            options,
            phase: ViewportPhase::Uninitialized,
            revision: 0,
            listeners: ChangeEmitter::default(),
        }
    }

    /// Creates a viewport and, if `surface` is already measurable, runs the ready transition.
    ///
    /// Otherwise the viewport stays uninitialized until the host delivers
    /// [`SurfaceEvent::Ready`].
    pub fn attach<S: Surface + ?Sized>(options: ViewportOptions, surface: &S) -> Self {
        let mut vp = Self::new(options);
        if surface.is_ready() {
            vp.ready(surface);
        }
        vp
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ViewportOptions) {
        self.options = options;
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn phase(&self) -> ViewportPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == ViewportPhase::Active
    }

    /// Number of completed refreshes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            region: self.region,
            phase: self.phase,
            revision: self.revision,
        }
    }

    /// Moves `Uninitialized -> Active` and performs the first refresh.
    ///
    /// Returns `false` (and does nothing) if the viewport is already active.
    pub fn ready<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
        let Some(state) = self.apply_ready(surface) else {
            return false;
        };
        self.listeners.emit(&state);
        true
    }

    /// Recomputes the edges from `surface`, then notifies every listener in registration
    /// order.
    pub fn refresh<S: Surface + ?Sized>(&mut self, surface: &S) {
        let state = self.refresh_silently(surface);
        self.listeners.emit(&state);
    }

    /// Routes a host notification.
    ///
    /// Returns `true` when the event refreshed the viewport (and listeners were notified).
    pub fn handle_event<S: Surface + ?Sized>(
        &mut self,
        event: SurfaceEvent,
        surface: &S,
    ) -> bool {
        let Some(state) = self.apply_event(event, surface) else {
            return false;
        };
        self.listeners.emit(&state);
        true
    }

    pub fn bind(
        &mut self,
        listener: impl Fn(&ViewportState) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = self.listeners.bind(Arc::new(listener));
        rdebug!(?id, listeners = self.listeners.len(), "Viewport::bind");
        id
    }

    /// Removes a listener. Returns `false` if `id` was not bound.
    pub fn unbind(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.unbind(id);
        rdebug!(?id, removed, "Viewport::unbind");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notifies every listener with the current state, without re-measuring.
    pub fn trigger(&self) {
        self.listeners.emit(&self.state());
    }

    #[cfg(feature = "std")]
    pub(crate) fn listeners(&self) -> &ChangeEmitter {
        &self.listeners
    }

    /// Applies `event` to the edges without notifying.
    pub(crate) fn apply_event<S: Surface + ?Sized>(
        &mut self,
        event: SurfaceEvent,
        surface: &S,
    ) -> Option<ViewportState> {
        match event {
            SurfaceEvent::Ready => self.apply_ready(surface),
            _ if !self.options.refreshes_on(event) => {
                rtrace!(?event, "Viewport: event ignored by options");
                None
            }
            _ => Some(self.refresh_silently(surface)),
        }
    }

    fn apply_ready<S: Surface + ?Sized>(&mut self, surface: &S) -> Option<ViewportState> {
        if self.is_active() {
            rwarn!("Viewport: duplicate ready signal ignored");
            return None;
        }
        self.phase = ViewportPhase::Active;
        rdebug!("Viewport: Uninitialized -> Active");
        Some(self.refresh_silently(surface))
    }

    pub(crate) fn refresh_silently<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
    ) -> ViewportState {
        let scrolled = self.is_active() && surface.is_ready();
        self.region = Region::measure_surface(surface, scrolled);
        self.revision = self.revision.wrapping_add(1);
        rtrace!(
            top = self.region.top(),
            left = self.region.left(),
            right = self.region.right(),
            bottom = self.region.bottom(),
            revision = self.revision,
            "Viewport::refresh"
        );
        self.state()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportOptions::default())
    }
}

impl AsRef<Region> for Viewport {
    fn as_ref(&self) -> &Region {
        &self.region
    }
}

impl From<&Viewport> for Region {
    fn from(viewport: &Viewport) -> Self {
        viewport.region
    }
}
