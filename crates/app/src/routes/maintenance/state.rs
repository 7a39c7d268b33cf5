//! Pure state for the maintenance page: what the list shows, whether the
//! create form is open, and how statuses map to badges.

use shared_types::{AppError, CreateMaintenanceRequest, MaintenanceRequestResponse};
use shared_ui::BadgeVariant;
use std::collections::HashMap;
use validator::Validate;

pub const LOADING_TEXT: &str = "Loading requests...";
pub const EMPTY_TEXT: &str = "No maintenance requests found.";

#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Empty,
    Populated(Vec<MaintenanceRequestResponse>),
}

impl ListState {
    /// Keep only rows owned by `owner_id`, in the order they were fetched.
    ///
    /// A failed fetch shows as empty; the caller logs the error.
    pub fn from_fetch<E>(
        owner_id: i64,
        fetch: Option<&Result<Vec<MaintenanceRequestResponse>, E>>,
    ) -> Self {
        match fetch {
            None => ListState::Loading,
            Some(Err(_)) => ListState::Empty,
            Some(Ok(rows)) => {
                let own: Vec<_> = rows
                    .iter()
                    .filter(|r| r.user_id == owner_id)
                    .cloned()
                    .collect();
                if own.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Populated(own)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Open,
    Cancel,
    /// The server acknowledged a new request.
    Created,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    Nothing,
    Refetch,
}

impl FormState {
    pub fn on(self, event: FormEvent) -> (FormState, FollowUp) {
        match event {
            FormEvent::Open => (FormState::Shown, FollowUp::Nothing),
            FormEvent::Cancel => (FormState::Hidden, FollowUp::Nothing),
            FormEvent::Created => (FormState::Hidden, FollowUp::Refetch),
        }
    }

    pub fn is_shown(self) -> bool {
        self == FormState::Shown
    }
}

/// Trimmed draft ready to send, or the per-field messages to show.
pub fn checked_draft(
    draft: &CreateMaintenanceRequest,
) -> Result<CreateMaintenanceRequest, HashMap<String, String>> {
    let draft = draft.trimmed();
    match draft.validate() {
        Ok(()) => Ok(draft),
        Err(e) => Err(AppError::from(e).field_errors),
    }
}

pub fn status_badge(status: &str) -> BadgeVariant {
    match status {
        "completed" => BadgeVariant::Default,
        "in_progress" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

pub fn priority_badge(priority: &str) -> BadgeVariant {
    match priority {
        "high" => BadgeVariant::Destructive,
        "medium" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

pub fn priority_label(priority: &str) -> String {
    format!("{priority} priority")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(id: &str, user_id: i64) -> MaintenanceRequestResponse {
        MaintenanceRequestResponse {
            id: id.into(),
            user_id,
            title: format!("Request {id}"),
            description: "Something is broken".into(),
            status: "pending".into(),
            priority: "medium".into(),
            created_at: "2026-01-20T09:30:00+00:00".into(),
        }
    }

    type Fetch = Result<Vec<MaintenanceRequestResponse>, String>;

    #[test]
    fn pending_fetch_is_loading() {
        assert_eq!(ListState::from_fetch::<String>(1, None), ListState::Loading);
    }

    #[test]
    fn only_the_owners_rows_are_shown() {
        let fetched: Fetch = Ok(vec![request("r1", 1), request("r2", 2)]);
        assert_eq!(
            ListState::from_fetch(1, Some(&fetched)),
            ListState::Populated(vec![request("r1", 1)])
        );
    }

    #[test]
    fn fetch_order_is_kept() {
        let fetched: Fetch = Ok(vec![
            request("c", 4),
            request("x", 9),
            request("a", 4),
            request("b", 4),
        ]);
        let ListState::Populated(rows) = ListState::from_fetch(4, Some(&fetched)) else {
            panic!("expected rows");
        };
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn nothing_owned_is_empty() {
        let fetched: Fetch = Ok(vec![request("r2", 2)]);
        assert_eq!(ListState::from_fetch(1, Some(&fetched)), ListState::Empty);
        let none: Fetch = Ok(vec![]);
        assert_eq!(ListState::from_fetch(1, Some(&none)), ListState::Empty);
    }

    #[test]
    fn failed_fetch_looks_empty() {
        let failed: Fetch = Err("timeout".into());
        assert_eq!(ListState::from_fetch(1, Some(&failed)), ListState::Empty);
    }

    #[test]
    fn open_then_cancel_writes_nothing() {
        let (shown, follow) = FormState::Hidden.on(FormEvent::Open);
        assert_eq!((shown, follow), (FormState::Shown, FollowUp::Nothing));
        assert!(shown.is_shown());

        let (hidden, follow) = shown.on(FormEvent::Cancel);
        assert_eq!((hidden, follow), (FormState::Hidden, FollowUp::Nothing));
    }

    #[test]
    fn created_hides_form_and_refetches() {
        assert_eq!(
            FormState::Shown.on(FormEvent::Created),
            (FormState::Hidden, FollowUp::Refetch)
        );
    }

    #[test]
    fn reopening_an_open_form_is_harmless() {
        assert_eq!(
            FormState::Shown.on(FormEvent::Open),
            (FormState::Shown, FollowUp::Nothing)
        );
    }

    fn draft(title: &str, description: &str, priority: &str) -> CreateMaintenanceRequest {
        CreateMaintenanceRequest {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
        }
    }

    #[test]
    fn draft_is_trimmed_before_sending() {
        assert_eq!(
            checked_draft(&draft(" Leaking tap ", "Drips ", "medium")),
            Ok(draft("Leaking tap", "Drips", "medium"))
        );
    }

    #[test]
    fn blank_draft_reports_each_field() {
        let errors = checked_draft(&draft("  ", "\n", "")).unwrap_err();
        let mut fields: Vec<_> = errors.keys().map(String::as_str).collect();
        fields.sort();
        assert_eq!(fields, vec!["description", "priority", "title"]);
    }

    #[test]
    fn status_badges() {
        assert_eq!(status_badge("completed"), BadgeVariant::Default);
        assert_eq!(status_badge("in_progress"), BadgeVariant::Secondary);
        assert_eq!(status_badge("pending"), BadgeVariant::Outline);
        assert_eq!(status_badge("on_hold"), BadgeVariant::Outline);
    }

    #[test]
    fn priority_badges() {
        assert_eq!(priority_badge("high"), BadgeVariant::Destructive);
        assert_eq!(priority_badge("medium"), BadgeVariant::Secondary);
        assert_eq!(priority_badge("low"), BadgeVariant::Outline);
        assert_eq!(priority_badge("urgent"), BadgeVariant::Outline);
    }

    #[test]
    fn priority_text() {
        assert_eq!(priority_label("high"), "high priority");
    }
}
