use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::ViewportState;

/// A callback fired after every viewport refresh, with the refreshed state.
pub type ChangeListener = Arc<dyn Fn(&ViewportState) + Send + Sync>;

/// Handle returned by `bind`, used to unbind the listener later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered listener registry.
///
/// Delivery follows registration order. Ids are never reused, so a stale handle can not
/// remove a listener registered later.
#[derive(Clone, Default)]
pub(crate) struct ChangeEmitter {
    next_id: u64,
    listeners: Vec<(ListenerId, ChangeListener)>,
}

impl ChangeEmitter {
    pub(crate) fn bind(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unbind(&mut self, id: ListenerId) -> bool {
        let Some(pos) = self.listeners.iter().position(|(i, _)| *i == id) else {
            return false;
        };
        self.listeners.remove(pos);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Clones the current listener list so it can be invoked without borrowing the owner.
    #[cfg(feature = "std")]
    pub(crate) fn snapshot(&self) -> Vec<ChangeListener> {
        self.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
    }

    pub(crate) fn emit(&self, state: &ViewportState) {
        for (_, listener) in &self.listeners {
            listener(state);
        }
    }
}

impl fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
