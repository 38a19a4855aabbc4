use crate::Route;
use dioxus::prelude::*;

/// Rendered inside the shell for paths with no route; no menu entry is selected.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            ui::PageHeader { title: "Page not found", subtitle: "Nothing lives at {path}." }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
        }
    }
}
