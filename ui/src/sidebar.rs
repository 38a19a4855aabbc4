use dioxus::prelude::*;
use types::{IconId, MenuItem, Orientation};

use crate::Icon;

/// Collapsible side panel. Menu links are passed in as children so the
/// panel stays independent of the router.
#[component]
pub fn Sidebar(
    title: String,
    logo: Asset,
    collapsed: bool,
    width: u32,
    orientation: Orientation,
    on_toggle: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        aside {
            class: if collapsed { "sidebar sidebar-collapsed" } else { "sidebar" },
            style: "width: {width}px; min-width: {width}px;",
            div { class: "sidebar-header",
                img { class: "sidebar-logo", src: logo, alt: "logo" }
                if !collapsed {
                    span { class: "sidebar-title", "{title}" }
                }
            }
            nav { class: "sidebar-nav", {children} }
            CollapseToggle { orientation, on_toggle }
        }
    }
}

/// Control pinned to the bottom of the panel.
#[component]
pub fn CollapseToggle(orientation: Orientation, on_toggle: EventHandler<()>) -> Element {
    let degrees = orientation.rotation_degrees();
    let label = match orientation {
        Orientation::Forward => "Expand navigation",
        Orientation::Back => "Collapse navigation",
    };

    rsx! {
        button {
            class: "sidebar-toggle",
            r#type: "button",
            title: label,
            onclick: move |_| on_toggle.call(()),
            Icon {
                id: IconId::ArrowForward,
                size: 20,
                class: "sidebar-toggle-icon",
                style: "transform: rotate({degrees}deg);",
            }
        }
    }
}

/// Icon and label of one menu item; the label is dropped while collapsed.
#[component]
pub fn MenuEntry(item: MenuItem, selected: bool, collapsed: bool) -> Element {
    rsx! {
        span {
            class: if selected { "menu-entry selected" } else { "menu-entry" },
            title: if collapsed { item.label.clone() },
            Icon { id: item.icon }
            if !collapsed {
                span { class: "menu-entry-label", "{item.label}" }
            }
        }
    }
}
