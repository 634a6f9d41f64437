use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{SurfaceKind, ViewModel};

/// Destination for finished view-models.
///
/// Implementations must replace the surface's previous model as a whole;
/// a surface is never left half-updated.
pub trait RenderSink {
    fn apply(&self, view: ViewModel);
}

/// Keeps the latest view-model per surface.
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<HashMap<SurfaceKind, ViewModel>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self, kind: SurfaceKind) -> Option<ViewModel> {
        self.inner.lock().get(&kind).cloned()
    }
}

impl RenderSink for MemorySink {
    fn apply(&self, view: ViewModel) {
        self.inner.lock().insert(view.surface, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_whole_model() {
        let sink = MemorySink::new();

        let mut first = ViewModel::blank(SurfaceKind::SavingsGoal);
        first.set_text("goal_title", "Car");
        sink.apply(first);

        let second = ViewModel::blank(SurfaceKind::SavingsGoal);
        sink.apply(second.clone());

        assert_eq!(sink.latest(SurfaceKind::SavingsGoal), Some(second));
        assert_eq!(sink.latest(SurfaceKind::ExpenseTrend), None);
    }
}
