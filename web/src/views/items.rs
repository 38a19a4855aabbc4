use dioxus::prelude::*;

#[component]
pub fn Items() -> Element {
    rsx! {
        div {
            ui::PageHeader { title: "Items", subtitle: "Goods tracked by the inventory." }
            div { class: "card",
                ui::EmptyTable {
                    columns: vec!["Name".to_string(), "Category".to_string(), "Quantity".to_string(), "Price".to_string()],
                    message: "No items yet.",
                }
            }
        }
    }
}
