use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

use crate::models::{app_state::AppState, toast::ToastMessage};

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 3000;

/// Append a toast and schedule its removal. Presentation-owned state,
/// mutated only on the UI thread.
pub fn push_toast(dispatch: &Dispatch<AppState>, toast: ToastMessage) {
    let id = toast.id;
    dispatch.reduce_mut(|state| state.toasts.push(toast));

    let dispatch = dispatch.clone();
    Timeout::new(TOAST_TTL_MS, move || {
        dispatch.reduce_mut(|state| state.toasts.retain(|toast| toast.id != id));
    })
    .forget();
}

#[function_component(ToastStack)]
pub fn toast_stack() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    if state.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast toast-top toast-end z-50">
            { for state.toasts.iter().map(|toast| {
                let id = toast.id;
                let dispatch = dispatch.clone();
                let onclick = Callback::from(move |_| {
                    dispatch.reduce_mut(|state| state.toasts.retain(|toast| toast.id != id));
                });
                html! {
                    <div class={classes!("alert", toast.kind.alert_class())} key={id.to_string()}>
                        <span>{ toast.message.clone() }</span>
                        <button class="btn btn-ghost btn-xs" {onclick}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
