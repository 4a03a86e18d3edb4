use shortly_shared::{
    error::ClientError,
    models::{ShortenResult, validate_url},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::{
    api::ShortlyClient,
    clipboard::copy_to_clipboard,
    components::toast_stack::push_toast,
    models::{app_state::AppState, toast::ToastMessage},
};

#[derive(Properties, PartialEq)]
pub struct ShortenFormProps {
    /// Fired after a successful shorten, with the resolved result.
    #[prop_or_default]
    pub on_shortened: Option<Callback<ShortenResult>>,
}

#[function_component(ShortenForm)]
pub fn shorten_form(props: &ShortenFormProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let url = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let result = use_state(|| None::<ShortenResult>);

    let onsubmit = {
        let url_handle = url.clone();
        let error_handle = error.clone();
        let busy_handle = busy.clone();
        let result_handle = result.clone();
        let on_shortened = props.on_shortened.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let raw = (*url_handle).trim().to_string();

            // Validation gates the network call entirely.
            if let Err(err) = validate_url(&raw) {
                error_handle.set(Some(err.to_string()));
                return;
            }

            error_handle.set(None);
            busy_handle.set(true);
            result_handle.set(None);

            let error_ref = error_handle.clone();
            let busy_ref = busy_handle.clone();
            let result_ref = result_handle.clone();
            let on_shortened = on_shortened.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = ShortlyClient::shared();
                match client.shorten(&raw).await {
                    Ok(response) => {
                        let note = response.message.clone();
                        let shortened = response.into_result(client.short_url_base());
                        match note {
                            Some(note) => push_toast(&dispatch, ToastMessage::info(note)),
                            None => {
                                push_toast(&dispatch, ToastMessage::success("URL shortened!"));
                            }
                        }
                        if let Some(callback) = on_shortened {
                            callback.emit(shortened.clone());
                        }
                        result_ref.set(Some(shortened));
                    }
                    Err(ClientError::InvalidUrl(err)) => {
                        error_ref.set(Some(format!("invalid URL: {err}")));
                    }
                    Err(err) => push_toast(&dispatch, ToastMessage::error(err.to_string())),
                }
                busy_ref.set(false);
            });
        })
    };

    let on_url_change = {
        let url = url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
            }
        })
    };

    let on_copy = {
        let result = result.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let Some(shortened) = (*result).clone() else {
                return;
            };
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match copy_to_clipboard(&shortened.short_url).await {
                    Ok(()) => {
                        push_toast(&dispatch, ToastMessage::success("Link copied to clipboard!"));
                    }
                    Err(_) => {
                        push_toast(&dispatch, ToastMessage::error("Failed to copy to clipboard"));
                    }
                }
            });
        })
    };

    let is_busy = *busy;
    let trimmed = url.trim();
    let looks_invalid = !trimmed.is_empty() && validate_url(trimmed).is_err();
    let disable_submit = trimmed.is_empty() || is_busy;
    let input_classes = if looks_invalid {
        classes!("input", "input-bordered", "w-full", "input-error")
    } else {
        classes!("input", "input-bordered", "w-full")
    };

    html! {
        <div class="card bg-base-100 shadow-lg">
            <form class="card-body" onsubmit={onsubmit}>
                <h2 class="card-title">{"Shorten a URL"}</h2>
                if let Some(message) = &*error {
                    <div class="alert alert-error">
                        <span>{message.clone()}</span>
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="url">
                        <span class="label-text">{"Enter the URL to shorten"}</span>
                    </label>
                    <input
                        id="url"
                        class={input_classes}
                        type="url"
                        placeholder="https://example.com/some/very/long/path"
                        required=true
                        value={(*url).clone()}
                        oninput={on_url_change}
                        disabled={is_busy}
                    />
                </div>
                <div class="form-control mt-4">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if is_busy { "Shortening..." } else { "Shorten URL" }}
                    </button>
                </div>
                if let Some(shortened) = &*result {
                    <div class="mt-4 p-4 rounded-box bg-base-200">
                        <div class="flex items-center gap-2">
                            <input
                                class="input input-bordered flex-1 font-mono"
                                type="text"
                                readonly=true
                                value={shortened.short_url.clone()}
                            />
                            <button class="btn btn-secondary" type="button" onclick={on_copy}>
                                {"Copy"}
                            </button>
                        </div>
                        <div class="text-sm opacity-70 mt-2">
                            <span class="font-medium">{"Original: "}</span>
                            <span class="font-mono break-all">{ shortened.original_url.clone() }</span>
                        </div>
                    </div>
                }
            </form>
        </div>
    }
}
