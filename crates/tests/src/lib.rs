#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod maintenance_create_tests;

#[cfg(test)]
mod maintenance_isolation_tests;

#[cfg(test)]
mod notification_tests;

#[cfg(test)]
mod chat_tests;
