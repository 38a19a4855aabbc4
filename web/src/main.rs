use std::rc::Rc;

use dioxus::prelude::*;
use shell::{
    Access, Config, Credentials, NavShell, Paths, RouteEntry, RouteTable, SessionGuard,
    SharedStorage,
};
use types::{IconId, MenuItem, SessionState};

mod views;

use views::{Dashboard, Items, Login, NotFound, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SessionGate)]
        #[route("/login")]
        Login {},
        #[layout(NavigationShell)]
            #[route("/")]
            Dashboard {},
            #[route("/item")]
            Items {},
            #[route("/user")]
            Users {},
            #[route("/:..segments")]
            NotFound { segments: Vec<String> },
}

/// Sidebar entries, in display order.
fn menu_entries() -> Vec<RouteEntry<Route>> {
    vec![
        RouteEntry::new(
            MenuItem::new("/", IconId::Dashboard, "Dashboard"),
            Route::Dashboard {},
        ),
        RouteEntry::new(MenuItem::new("/item", IconId::Box, "Items"), Route::Items {}),
        RouteEntry::new(
            MenuItem::new("/user", IconId::UserSquare, "Users"),
            Route::Users {},
        ),
    ]
}

fn menu() -> RouteTable<Route> {
    RouteTable::new(menu_entries()).unwrap_or_else(|e| {
        tracing::error!("invalid route table, sidebar will be empty: {e}");
        RouteTable::default()
    })
}

/// Apply the access table to `route`. The login and home paths are the
/// router's own, so `Access::Login` is only ever returned for `Route::Login`.
fn access(state: SessionState, route: &Route) -> Access {
    let login = Route::Login {}.to_string();
    let home = Route::Dashboard {}.to_string();
    let paths = Paths {
        login: &login,
        home: &home,
    };
    shell::decide(state, &route.to_string(), paths)
}

fn redirect(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().replace(route);
        }
        Err(e) => tracing::error!("cannot redirect to '{path}': {e}"),
    }
}

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(Config::load_or_default);
    use_context_provider(shell::default_storage);
    use_context_provider(|| Rc::new(menu()));

    rsx! {
        document::Title { "{config.app_title}" }
        document::Link { rel: "icon", href: asset!("/assets/logo.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Re-evaluates the session on every navigation and applies the access table.
#[component]
fn SessionGate() -> Element {
    let route = use_route::<Route>();
    let config = use_context::<Config>();
    let storage = use_context::<SharedStorage>();

    let state = SessionGuard::new(storage, config.token_key.as_str()).state();

    match access(state, &route) {
        Access::Login | Access::Shell => rsx! { Outlet::<Route> {} },
        Access::Redirect(target) => {
            tracing::debug!(from = %route, to = %target, "redirecting");
            redirect(&target);
            rsx! {
                div { class: "loading", "Redirecting..." }
            }
        }
    }
}

/// Side panel and top bar around the routed screen. Lives across child
/// route changes, so the collapse state is never reset by navigation.
#[component]
fn NavigationShell() -> Element {
    let route = use_route::<Route>();
    let config = use_context::<Config>();
    let storage = use_context::<SharedStorage>();
    let menu = use_context::<Rc<RouteTable<Route>>>();

    let mut nav = use_signal({
        let storage = storage.clone();
        let key = config.sidebar_key.clone();
        move || NavShell::load(storage, key)
    });

    let path = route.to_string();
    let selected = menu.selected_key(&path).map(str::to_string);
    let collapsed = nav.read().collapsed();
    let orientation = nav.read().orientation();
    let width = config.sidebar_width_for(collapsed);

    let sign_out = {
        let config = config.clone();
        move |_: ()| {
            let credentials = Credentials::new(storage.clone(), config.token_key.as_str());
            if let Err(e) = credentials.sign_out() {
                tracing::warn!("failed to clear credential: {e}");
            }
            navigator().replace(Route::Login {});
        }
    };

    rsx! {
        div { class: "app-layout",
            ui::Sidebar {
                title: config.app_title.clone(),
                logo: asset!("/assets/logo.svg"),
                collapsed,
                width,
                orientation,
                on_toggle: move |_| {
                    nav.write().toggle_collapsed();
                },
                for entry in menu.entries() {
                    Link {
                        key: "{entry.path()}",
                        to: entry.screen.clone(),
                        class: "menu-link",
                        ui::MenuEntry {
                            item: entry.item.clone(),
                            selected: selected.as_deref() == Some(entry.path()),
                            collapsed,
                        }
                    }
                }
            }
            div { class: "main-panel",
                ui::TopBar { user_name: config.user_name.clone(), on_sign_out: sign_out }
                main { class: "content", Outlet::<Route> {} }
            }
        }
    }
}
