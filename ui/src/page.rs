use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            p { class: "page-subtitle", "{subtitle}" }
        }
    }
}

/// Table with column headers and a single "nothing here" row.
#[component]
pub fn EmptyTable(columns: Vec<String>, message: String) -> Element {
    let span = columns.len().to_string();

    rsx! {
        div { class: "table-container",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody {
                    tr {
                        td { class: "table-empty", colspan: span, "{message}" }
                    }
                }
            }
        }
    }
}
