use dioxus::prelude::*;
use types::IconId;

use crate::Icon;

#[component]
pub fn TopBar(user_name: String, on_sign_out: EventHandler<()>) -> Element {
    rsx! {
        header { class: "top-bar",
            div { class: "top-bar-actions",
                Icon { id: IconId::Bell, size: 20, class: "top-bar-icon" }
                Icon { id: IconId::Settings, size: 20, class: "top-bar-icon" }
                div { class: "top-bar-user",
                    div { class: "top-bar-avatar",
                        Icon { id: IconId::User, size: 20 }
                    }
                    span { class: "top-bar-user-name", "{user_name}" }
                }
                Icon { id: IconId::GridDots, size: 20, class: "top-bar-icon" }
                button {
                    class: "btn btn-secondary top-bar-sign-out",
                    r#type: "button",
                    onclick: move |_| on_sign_out.call(()),
                    "Sign out"
                }
            }
        }
    }
}
