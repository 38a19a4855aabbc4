use dioxus::prelude::*;
use types::IconId;

/// Stroke paths on a 24x24 grid.
fn paths(id: IconId) -> &'static [&'static str] {
    match id {
        IconId::Dashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        IconId::Box => &[
            "M21 8l-9-5-9 5v8l9 5 9-5z",
            "M3 8l9 5 9-5",
            "M12 13v8",
        ],
        IconId::UserSquare => &[
            "M4 3h16a1 1 0 0 1 1 1v16a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            "M6 20a6 6 0 0 1 12 0",
        ],
        IconId::Bell => &[
            "M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9",
            "M13.7 21a2 2 0 0 1-3.4 0",
        ],
        IconId::Settings => &[
            "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            "M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-2.9 1.2V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-2.9-1.2l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1A1.7 1.7 0 0 0 3.1 14H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.2-2.9l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1A1.7 1.7 0 0 0 10 3.1V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 2.9 1.2l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0 1.2 2.9H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z",
        ],
        IconId::User => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
        ],
        IconId::GridDots => &[
            "M5 5h.01", "M12 5h.01", "M19 5h.01",
            "M5 12h.01", "M12 12h.01", "M19 12h.01",
            "M5 19h.01", "M12 19h.01", "M19 19h.01",
        ],
        IconId::ArrowForward => &["M9 18l6-6-6-6"],
    }
}

#[component]
pub fn Icon(
    id: IconId,
    #[props(default = 16)] size: u32,
    #[props(default = "icon".to_string())] class: String,
    #[props(default)] style: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            style: "{style}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths(id) {
                path { d: *d }
            }
        }
    }
}
