pub mod chat;
pub mod notifications;
