pub mod error;
pub mod feature_flags;
pub mod models;

pub mod chat;
pub mod dashboard;
pub mod maintenance;
pub mod notification;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use chat::*;
pub use dashboard::*;
pub use maintenance::*;
pub use notification::*;
