use shortly_shared::{error::ClientError, models::SessionState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::{
    api::ShortlyClient,
    components::toast_stack::push_toast,
    models::{app_state::AppState, toast::ToastMessage},
    routes::MainRoute,
};

fn bind_input(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

/// Sign-in form. Only deleting links needs an account; the page says so
/// instead of pretending the rest of the app is locked.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username).clone();
            let password_value = (*password).clone();
            busy.set(true);
            error.set(None);

            let busy = busy.clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ShortlyClient::shared();
                match client.login(&username_value, &password_value).await {
                    Ok(user) => {
                        push_toast(
                            &dispatch,
                            ToastMessage::success(format!("Signed in as {}", user.username)),
                        );
                        dispatch.reduce_mut(|state| {
                            state.session = SessionState::Authenticated(user);
                        });
                        if let Some(ref nav) = navigator {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(ClientError::AuthRejected) => {
                        error.set(Some("Invalid username or password".to_string()));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let is_busy = *busy;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in to Shortly"}</h2>
                    <p class="text-sm opacity-70">
                        {"Shortening links works without an account; sign in to manage and delete them."}
                    </p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <label class="form-control">
                        <span class="label label-text">{"Username"}</span>
                        <input
                            class="input input-bordered"
                            type="text"
                            autocomplete="username"
                            required=true
                            value={(*username).clone()}
                            oninput={bind_input(username.clone())}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label label-text">{"Password"}</span>
                        <input
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(password.clone())}
                        />
                    </label>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
