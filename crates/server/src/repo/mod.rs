pub mod chat_message;
pub mod maintenance_request;
pub mod notification;
pub mod refresh_token;
pub mod user;
