// Application state for HTTP handlers
use crate::application::browse_service::BrowseService;

#[derive(Clone)]
pub struct AppState {
    pub browse_service: BrowseService,
}
