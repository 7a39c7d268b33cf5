#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod flags;
pub use flags::*;

mod maintenance;
pub use maintenance::*;

mod dashboard;
pub use dashboard::*;

mod notifications;
pub use notifications::*;

mod chat;
pub use chat::*;
