use shortly_shared::{
    error::ClientError,
    models::{SessionState, SortKey, SortOrder, short_url_for, sort_rows, StatRow},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::{use_selector, use_store};

use crate::{
    api::ShortlyClient,
    clipboard::copy_to_clipboard,
    components::toast_stack::push_toast,
    models::{app_state::AppState, toast::ToastMessage},
};

#[derive(Properties, PartialEq)]
pub struct StatsTableProps {
    /// Bump to trigger a reload, e.g. after a shorten completes.
    #[prop_or_default]
    pub refresh: u32,
}

#[function_component(StatsTable)]
pub fn stats_table(props: &StatsTableProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated());
    let rows = use_state(Vec::<StatRow>::new);
    let loading = use_state(|| true);
    let sort_key = use_state(SortKey::default);
    let sort_order = use_state(SortOrder::default);
    // Monotonic fetch id: a superseded response must not overwrite newer
    // rows, because in-flight requests are never cancelled.
    let fetch_seq = use_mut_ref(|| 0u32);

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let fetch_seq = fetch_seq.clone();
        use_effect_with(props.refresh, move |_| {
            let seq = {
                let mut guard = fetch_seq.borrow_mut();
                *guard += 1;
                *guard
            };
            loading.set(true);
            spawn_local(async move {
                let client = ShortlyClient::shared();
                let fetched = match client.stats().await {
                    Ok(rows) => rows,
                    Err(err) => {
                        // Failure and "no data yet" render identically.
                        log::warn!("stats fetch failed: {err}");
                        Vec::new()
                    }
                };
                if *fetch_seq.borrow() == seq {
                    rows.set(fetched);
                    loading.set(false);
                }
            });
            || ()
        });
    }

    let on_sort_change = {
        let sort_key = sort_key.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let key = match select.value().as_str() {
                    "received" => SortKey::ReceivedOrder,
                    _ => SortKey::ClickCount,
                };
                sort_key.set(key);
            }
        })
    };

    let on_order_toggle = {
        let sort_order = sort_order.clone();
        Callback::from(move |_| sort_order.set(sort_order.toggled()))
    };

    let on_copy = {
        let dispatch = dispatch.clone();
        Callback::from(move |short_code: String| {
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = ShortlyClient::shared();
                let short_url = short_url_for(client.short_url_base(), &short_code);
                match copy_to_clipboard(&short_url).await {
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

    let on_delete = {
        let rows = rows.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |short_code: String| {
            let rows = rows.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = ShortlyClient::shared();
                match client.delete_url(&short_code).await {
                    Ok(()) => {
                        let remaining: Vec<StatRow> = (*rows)
                            .iter()
                            .filter(|row| row.short_code != short_code)
                            .cloned()
                            .collect();
                        rows.set(remaining);
                        push_toast(&dispatch, ToastMessage::success(format!("Deleted {short_code}")));
                    }
                    Err(ClientError::AuthRequired) => {
                        dispatch.reduce_mut(|state| state.session = SessionState::Anonymous);
                        push_toast(
                            &dispatch,
                            ToastMessage::error("You must be signed in to delete a link."),
                        );
                    }
                    Err(ClientError::Delete(message)) => {
                        push_toast(&dispatch, ToastMessage::error(message));
                    }
                    Err(err) => push_toast(&dispatch, ToastMessage::error(err.to_string())),
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body items-center py-16">
                    <span class="loading loading-spinner loading-lg"></span>
                    <p class="opacity-70">{"Loading statistics..."}</p>
                </div>
            </div>
        };
    }

    let sorted = sort_rows(&rows, *sort_key, *sort_order);
    let order_label = match *sort_order {
        SortOrder::Descending => "↓ DESC",
        SortOrder::Ascending => "↑ ASC",
    };

    html! {
        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{"URL statistics"}</h2>
                    <div class="flex items-center gap-3">
                        <select class="select select-bordered select-sm" onchange={on_sort_change}>
                            <option value="clicks" selected={*sort_key == SortKey::ClickCount}>
                                {"Click count"}
                            </option>
                            <option value="received" selected={*sort_key == SortKey::ReceivedOrder}>
                                {"Date added"}
                            </option>
                        </select>
                        <button class="btn btn-sm" onclick={on_order_toggle}>{order_label}</button>
                        <div class="text-right">
                            <div class="text-lg font-bold">{sorted.len()}</div>
                            <div class="text-xs opacity-60">{"Total URLs"}</div>
                        </div>
                    </div>
                </div>

                if sorted.is_empty() {
                    <div class="text-center py-12">
                        <h3 class="text-lg font-semibold">{"No URLs yet"}</h3>
                        <p class="opacity-60">{"Shorten your first URL above and its clicks will show up here."}</p>
                    </div>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Code"}</th>
                                <th>{"Original URL"}</th>
                                <th>{"Clicks"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for sorted.iter().map(|row| {
                                let code = row.short_code.clone();
                                let copy_code = code.clone();
                                let on_copy = on_copy.clone();
                                let copy_click = Callback::from(move |_| on_copy.emit(copy_code.clone()));
                                let delete_code = code.clone();
                                let on_delete = on_delete.clone();
                                let delete_click = Callback::from(move |_| on_delete.emit(delete_code.clone()));
                                html! {
                                    <tr key={code.clone()}>
                                        <td><code class="badge badge-ghost font-mono">{ code.clone() }</code></td>
                                        <td class="max-w-md">
                                            <a
                                                href={row.original_url.clone()}
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="link link-primary truncate block"
                                            >
                                                { row.original_url.clone() }
                                            </a>
                                        </td>
                                        <td>
                                            <span class="badge badge-success badge-outline">
                                                { format!("{} clicks", row.click_count) }
                                            </span>
                                        </td>
                                        <td class="text-right">
                                            <button class="btn btn-ghost btn-xs" onclick={copy_click}>{"Copy"}</button>
                                            if *is_authenticated {
                                                <button class="btn btn-ghost btn-xs text-error" onclick={delete_click}>{"Delete"}</button>
                                            }
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
