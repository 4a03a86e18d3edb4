mod api;
#[cfg(test)]
mod api_test;
mod app;
mod clipboard;
mod components;
mod config;
mod containers;
mod credentials;
mod models;
mod pages;
mod routes;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(RootApp)]
fn root_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Route panic payloads to the browser console instead of losing them.
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        web_sys::console::error_1(&format!("Panic: {payload}").into());
        if let Some(location) = info.location() {
            web_sys::console::error_1(&format!("  at {location}").into());
        }
    }));

    web_sys::console::log_1(&"Starting Shortly".into());

    // Mounts to <body>.
    Renderer::<RootApp>::new().render();
}
