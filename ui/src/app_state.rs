use std::ops::Deref;
use std::sync::Arc;

use api::backend::simulated::SimulatedBackend;
use api::prefs::user_prefs::UserPrefs;
use api::price_map::PriceMap;

/// Read-only data shared by every screen.
#[derive(Debug)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub price_map: PriceMap,
    pub backend: SimulatedBackend,
}

#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        let backend = SimulatedBackend::new(prefs.link_base());
        Self(Arc::new(AppStateData {
            prefs,
            price_map: PriceMap::fixed(),
            backend,
        }))
    }
}
