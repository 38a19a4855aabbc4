use dioxus::prelude::*;

#[component]
pub fn Users() -> Element {
    rsx! {
        div {
            ui::PageHeader { title: "Users", subtitle: "People with access to the console." }
            div { class: "card",
                ui::EmptyTable {
                    columns: vec!["Name".to_string(), "Username".to_string(), "Role".to_string()],
                    message: "No users yet.",
                }
            }
        }
    }
}
