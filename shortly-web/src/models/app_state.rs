use shortly_shared::models::SessionState;
use yewdux::Store;

use crate::models::toast::ToastMessage;

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// `Unknown` until the startup current-user probe resolves.
    pub session: SessionState,

    /// What the backend config endpoint advertised, once probed.
    pub backend_mock: Option<bool>,

    pub toasts: Vec<ToastMessage>,
}
