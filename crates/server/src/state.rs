use std::sync::Arc;

use service::AutoService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub autos: Arc<dyn AutoService>,
}

impl AppState {
    pub fn new(autos: Arc<dyn AutoService>) -> Self { Self { autos } }
}
