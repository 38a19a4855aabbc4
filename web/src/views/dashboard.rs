use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            ui::PageHeader {
                title: "Dashboard",
                subtitle: "Overview of your inventory and the people who manage it.",
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::Items {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Items" }
                    p { class: "dashboard-card-desc", "Browse and maintain the goods you keep in stock." }
                }
                Link {
                    to: Route::Users {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Users" }
                    p { class: "dashboard-card-desc", "See who has access to the console." }
                }
            }
        }
    }
}
