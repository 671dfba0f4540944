// Application state for HTTP handlers
use crate::application::dashboard_page::SharedPage;

#[derive(Clone)]
pub struct AppState {
    pub page: SharedPage,
    pub refresh_secs: u64,
}
