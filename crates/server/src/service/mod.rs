//! Operations shared by the server functions and the REST handlers.

pub mod account;
pub mod chat;
pub mod maintenance;
