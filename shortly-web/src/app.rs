use shortly_shared::models::SessionState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::{
    api::ShortlyClient,
    components::{ToastStack, loading::Loading, toast_stack::push_toast},
    models::{app_state::AppState, toast::ToastMessage},
    routes::{self, MainRoute},
};

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ShortlyClient::shared();

                match client.backend_config().await {
                    Ok(backend) => {
                        log::info!("backend mode: use_mock={}", backend.use_mock);
                        dispatch.reduce_mut(|state| state.backend_mock = Some(backend.use_mock));
                    }
                    Err(err) => log::warn!("backend config probe failed: {err}"),
                }

                // Resolve the session exactly once before anything renders
                // as signed-out.
                let user = client.current_user().await;
                dispatch.reduce_mut(|state| state.session = SessionState::resolved(user));
            });
            || ()
        });
    }

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let client = ShortlyClient::shared();
            client.logout();
            dispatch.reduce_mut(|state| state.session = SessionState::Anonymous);
            push_toast(&dispatch, ToastMessage::info("Signed out"));
        })
    };

    if !state.session.is_resolved() {
        return html! { <Loading /> };
    }

    html! {
        <>
            <BrowserRouter>
                <Switch<MainRoute> render={move |route| routes::switch_with_logout(route, on_logout.clone())} />
            </BrowserRouter>
            <ToastStack />
        </>
    }
}
