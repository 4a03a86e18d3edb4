use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let Some(user) = session.user().cloned() else {
        return html! {};
    };

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    let role = if user.is_superuser {
        Some("superuser")
    } else if user.is_staff {
        Some("staff")
    } else {
        None
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost">
                { user.username.clone() }
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold">{ user.username.clone() }</div>
                    if let Some(role) = role {
                        <div class="text-xs opacity-70">{ role }</div>
                    }
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
