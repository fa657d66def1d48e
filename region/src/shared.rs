use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::{
    ListenerId, Region, Surface, SurfaceEvent, Viewport, ViewportOptions, ViewportState,
};

static GLOBAL: OnceLock<SharedViewport> = OnceLock::new();

/// A [`Viewport`] that can be driven and observed from several threads.
///
/// One mutex guards the edges and the listener list. It is held while a refresh replaces
/// the edges and snapshots the listeners, and released before any listener runs; a
/// listener may therefore refresh, bind or unbind on the same viewport.
#[derive(Debug)]
pub struct SharedViewport {
    inner: Mutex<Viewport>,
}

impl SharedViewport {
    pub fn new(options: ViewportOptions) -> Self {
        Self::from_viewport(Viewport::new(options))
    }

    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            inner: Mutex::new(viewport),
        }
    }

    // Every mutation replaces the edges in one assignment, so a poisoned lock still guards
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, Viewport> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> ViewportState {
        self.lock().state()
    }

    pub fn region(&self) -> Region {
        self.lock().region()
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_active()
    }

    pub fn bind(&self, listener: impl Fn(&ViewportState) + Send + Sync + 'static) -> ListenerId {
        self.lock().bind(listener)
    }

    pub fn unbind(&self, id: ListenerId) -> bool {
        self.lock().unbind(id)
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listener_count()
    }

    /// See [`Viewport::ready`].
    pub fn ready<S: Surface + ?Sized>(&self, surface: &S) -> bool {
        self.handle_event(SurfaceEvent::Ready, surface)
    }

    /// See [`Viewport::refresh`].
    pub fn refresh<S: Surface + ?Sized>(&self, surface: &S) {
        let (state, listeners) = {
            let mut vp = self.lock();
            let state = vp.refresh_silently(surface);
            (state, vp.listeners().snapshot())
        };
        for listener in listeners {
            listener(&state);
        }
    }

    /// See [`Viewport::handle_event`].
    pub fn handle_event<S: Surface + ?Sized>(&self, event: SurfaceEvent, surface: &S) -> bool {
        let (state, listeners) = {
            let mut vp = self.lock();
            let Some(state) = vp.apply_event(event, surface) else {
                return false;
            };
            (state, vp.listeners().snapshot())
        };
        for listener in listeners {
            listener(&state);
        }
        true
    }

    /// Notifies every listener with the current state, without re-measuring.
    pub fn trigger(&self) {
        let (state, listeners) = {
            let vp = self.lock();
            (vp.state(), vp.listeners().snapshot())
        };
        for listener in listeners {
            listener(&state);
        }
    }
}

impl Default for SharedViewport {
    fn default() -> Self {
        Self::new(ViewportOptions::default())
    }
}

/// Installs the process-wide viewport. Call once at startup.
///
/// Later calls return the already installed instance and ignore `options`.
pub fn init_global(options: ViewportOptions) -> &'static SharedViewport {
    let mut installed = false;
    let vp = GLOBAL.get_or_init(|| {
        installed = true;
        SharedViewport::new(options)
    });
    if installed {
        rdebug!("region: global viewport installed");
    } else {
        rwarn!("region: global viewport already installed, options ignored");
    }
    vp
}

/// The process-wide viewport, or `None` before [`init_global`].
pub fn global() -> Option<&'static SharedViewport> {
    GLOBAL.get()
}
