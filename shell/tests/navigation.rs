//! A browsing session driven through the public API: gate, sign in, move
//! between screens, reload, sign out.

use shell::{
    Access, Config, Credentials, MemoryStorage, NavShell, Paths, RouteEntry, RouteTable,
    SessionGuard, decide,
};
use types::{IconId, MenuItem, login::LoginForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Items,
    Users,
}

fn routes() -> RouteTable<Screen> {
    RouteTable::new(vec![
        RouteEntry::new(MenuItem::new("/", IconId::Dashboard, "Dashboard"), Screen::Dashboard),
        RouteEntry::new(MenuItem::new("/item", IconId::Box, "Items"), Screen::Items),
        RouteEntry::new(MenuItem::new("/user", IconId::UserSquare, "Users"), Screen::Users),
    ])
    .unwrap()
}

fn access(storage: &MemoryStorage, config: &Config, path: &str) -> Access {
    let guard = SessionGuard::new(storage, config.token_key.as_str());
    let paths = Paths {
        login: "/login",
        home: "/",
    };
    decide(guard.state(), path, paths)
}

#[test]
fn full_session() {
    let config = Config::default();
    let storage = MemoryStorage::new();
    let routes = routes();
    let credentials = Credentials::new(&storage, config.token_key.as_str());

    assert_eq!(access(&storage, &config, "/user"), Access::Redirect("/login".into()));

    // Rejected submission leaves the visitor logged out.
    assert!(credentials.sign_in(&LoginForm::new("", "secret")).is_err());
    assert_eq!(access(&storage, &config, "/login"), Access::Login);

    credentials
        .sign_in(&LoginForm::new("admin", "secret"))
        .unwrap();
    assert_eq!(access(&storage, &config, "/login"), Access::Redirect("/".into()));

    let mut nav = NavShell::load(&storage, config.sidebar_key.as_str());
    assert!(!nav.collapsed());
    nav.toggle_collapsed();

    for path in ["/", "/item", "/user", "/item"] {
        assert_eq!(access(&storage, &config, path), Access::Shell);
        assert_eq!(routes.selected_key(path), Some(path));
        assert!(routes.screen(path).is_some());
    }

    // Unmatched paths still render the shell, with nothing selected.
    assert_eq!(access(&storage, &config, "/reports"), Access::Shell);
    assert_eq!(routes.selected_key("/reports"), None);

    // Reload.
    drop(nav);
    let nav = NavShell::load(&storage, config.sidebar_key.as_str());
    assert!(nav.collapsed());
    assert_eq!(access(&storage, &config, "/item"), Access::Shell);

    credentials.sign_out().unwrap();
    assert_eq!(access(&storage, &config, "/item"), Access::Redirect("/login".into()));
    assert_eq!(access(&storage, &config, "/login"), Access::Login);

    // Logging out leaves UI state alone.
    assert!(NavShell::load(&storage, config.sidebar_key.as_str()).collapsed());
}

#[test]
fn every_route_selects_one_entry_and_one_screen() {
    let routes = routes();
    for entry in routes.entries() {
        let selected = routes
            .menu_items()
            .filter(|item| routes.selected_key(entry.path()) == Some(item.key()))
            .count();
        assert_eq!(selected, 1);
        assert_eq!(routes.screen(entry.path()), Some(&entry.screen));
    }
}

#[test]
fn broken_storage_degrades_to_defaults() {
    let config = Config::default();
    let storage = MemoryStorage::unavailable();

    assert_eq!(access(&storage, &config, "/"), Access::Redirect("/login".into()));
    assert_eq!(access(&storage, &config, "/login"), Access::Login);

    let mut nav = NavShell::load(&storage, config.sidebar_key.as_str());
    assert!(!nav.collapsed());
    assert!(nav.toggle_collapsed());
}
