use std::sync::Arc;

use crate::features::chamber::ChamberDataSource;

#[derive(Clone)]
pub struct AppState {
    pub chamber: Arc<dyn ChamberDataSource>,
}

impl AppState {
    pub fn new(chamber: Arc<dyn ChamberDataSource>) -> Self {
        Self { chamber }
    }
}
