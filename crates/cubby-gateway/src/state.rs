use std::sync::Arc;

use cubby_core::RecordService;

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn RecordService>,
}

impl AppState {
    pub fn new(service: Arc<dyn RecordService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &dyn RecordService {
        self.service.as_ref()
    }
}
