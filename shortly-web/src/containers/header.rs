use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::{components::user_menu::UserMenu, models::app_state::AppState, routes::MainRoute};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated());
    let backend_mock = use_selector(|state: &AppState| state.backend_mock);

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Shortly"}
                </Link<MainRoute>>
            </a>
            <div class="flex items-center gap-2">
                if *backend_mock == Some(true) {
                    <span class="badge badge-warning">{"mock mode"}</span>
                }
                if *is_authenticated {
                    <UserMenu on_logout={props.on_logout.clone()} />
                } else {
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost">
                        {"Sign in"}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}
