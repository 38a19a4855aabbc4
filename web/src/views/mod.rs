mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod items;
pub use items::Items;

mod users;
pub use users::Users;

mod not_found;
pub use not_found::NotFound;
