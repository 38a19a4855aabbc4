//! Presentation components shared by the console views.

mod icon;
pub use icon::Icon;

mod sidebar;
pub use sidebar::{CollapseToggle, MenuEntry, Sidebar};

mod top_bar;
pub use top_bar::TopBar;

mod page;
pub use page::{EmptyTable, PageHeader};
