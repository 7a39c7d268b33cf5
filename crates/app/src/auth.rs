use dioxus::prelude::*;
use shared_types::AuthUser;

/// Signed-in user, provided once at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// What the student route guard should do with the session lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardState {
    /// Lookup still in flight.
    Resolving,
    /// No session, or the lookup failed.
    Anonymous,
    /// Signed in with a role other than student.
    WrongRole,
    Student(AuthUser),
}

impl GuardState {
    pub fn resolve<E>(lookup: Option<&Result<Option<AuthUser>, E>>) -> Self {
        match lookup {
            None => GuardState::Resolving,
            Some(Ok(Some(user))) if user.is_student() => GuardState::Student(user.clone()),
            Some(Ok(Some(_))) => GuardState::WrongRole,
            Some(Ok(None)) | Some(Err(_)) => GuardState::Anonymous,
        }
    }

    /// Whether the visitor must be sent back to the portal entry.
    pub fn redirects(&self) -> bool {
        matches!(self, GuardState::Anonymous | GuardState::WrongRole)
    }
}
