use web_sys::window;
use yew::{Callback, Children, Html, Properties, function_component, html, use_effect_with};

use crate::containers::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "dark")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
        <>
            <Header on_logout={props.on_logout.clone()} />
            <div class="min-h-screen bg-base-100">
                <main class="max-w-4xl mx-auto p-4 space-y-8">
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"Shortly · Powered by Rust and Yew"}</p>
                    </div>
                </footer>
            </div>
        </>
    }
}
