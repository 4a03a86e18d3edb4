use gloo_timers::callback::Timeout;
use shortly_shared::models::ShortenResult;
use yew::prelude::*;

use crate::components::{ShortenForm, StatsTable};

/// Delay between a shorten completing and the stats reload, to tolerate
/// eventually-consistent backend storage.
const STATS_SETTLE_MS: u32 = 500;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let refresh = use_state(|| 0u32);

    let on_shortened = {
        let refresh = refresh.clone();
        Callback::from(move |_result: ShortenResult| {
            let refresh = refresh.clone();
            let next = *refresh + 1;
            Timeout::new(STATS_SETTLE_MS, move || refresh.set(next)).forget();
        })
    };

    html! {
        <div class="space-y-8">
            <ShortenForm on_shortened={Some(on_shortened)} />
            <StatsTable refresh={*refresh} />
        </div>
    }
}
