use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::{
    containers::layout::Layout,
    models::app_state::AppState,
    pages::{ErrorPage, HomePage, LoginPage},
};

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated());
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if *is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        // Shortening and statistics work signed-out; only delete needs a
        // session.
        MainRoute::Home => {
            html! {
                <Layout on_logout={Some(on_logout)}>
                    <HomePage />
                </Layout>
            }
        }
        MainRoute::NotFound => {
            html! {
                <Layout on_logout={Some(on_logout)}>
                    <ErrorPage />
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    html! { <MainRouteView {route} {on_logout} /> }
}
