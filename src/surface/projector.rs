use crate::config::Config;
use crate::routing::DeepLinkRouter;
use crate::snapshot;
use crate::store::{SnapshotStore, StoreKey};
use crate::visibility;

use super::{RenderSink, SurfaceContext, SurfaceKind, ViewModel};

/// Turns the current store contents into surface view-models.
///
/// Holds no state between refreshes: every call re-reads the store and
/// rebuilds the full view-model from a blank layout.
pub struct Projector<S> {
    store: S,
    router: DeepLinkRouter,
    default_currency: String,
}

impl<S: SnapshotStore> Projector<S> {
    pub fn new(store: S, router: DeepLinkRouter, default_currency: impl Into<String>) -> Self {
        Self {
            store,
            router,
            default_currency: default_currency.into(),
        }
    }

    pub fn from_config(store: S, config: &Config) -> Self {
        Self::new(
            store,
            DeepLinkRouter::from_config(&config.deep_link),
            config.display.default_currency.as_str(),
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds the view-model for one surface. Never fails.
    pub fn project(&self, kind: SurfaceKind) -> ViewModel {
        let summary = self.store.read(StoreKey::Summary);
        let snapshot = snapshot::parse(summary.as_deref());

        let visible = kind
            .uses_visibility()
            .then(|| visibility::resolve(self.store.read(StoreKey::Settings).as_deref()));
        let currency = self.store.currency_code(&self.default_currency);

        let ctx = SurfaceContext {
            snapshot: &snapshot,
            visible: visible.as_ref(),
            currency: &currency,
            router: &self.router,
        };

        let mut view = ViewModel::blank(kind);
        kind.project(&ctx, &mut view);
        tracing::debug!(surface = %kind, %currency, "Projected surface");
        view
    }

    /// Projects one surface and hands it to `sink`.
    pub fn refresh(&self, kind: SurfaceKind, sink: &impl RenderSink) {
        sink.apply(self.project(kind));
    }

    /// Refreshes every surface kind, each independently.
    pub fn refresh_all(&self, sink: &impl RenderSink) {
        for &kind in SurfaceKind::all() {
            self.refresh(kind, sink);
        }
    }
}
