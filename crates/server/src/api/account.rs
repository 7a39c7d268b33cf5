use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

/// Create a student account and sign it in.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    username: String,
    email: String,
    password: String,
    display_name: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use crate::service::account;
    use shared_types::RegisterRequest;

    let pool = db().await?;
    let req = RegisterRequest {
        username,
        email,
        password,
        display_name,
    };
    let open = crate::config::feature_flags().open_registration;
    let user = account::register_student(pool, &req, open)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    let tokens = account::issue_tokens(pool, &user)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_auth_cookies(&tokens.access_token, &tokens.refresh_token);
    Ok(user.into())
}

/// Sign in with email and password. Cookies are set on the response.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use crate::service::account;
    use shared_types::LoginRequest;

    let pool = db().await?;
    let user = account::authenticate(pool, &LoginRequest { email, password })
        .await
        .map_err(|e| e.into_server_fn_error())?;
    let tokens = account::issue_tokens(pool, &user)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_auth_cookies(&tokens.access_token, &tokens.refresh_token);
    tracing::info!(user_id = user.id, "signed in");
    Ok(user.into())
}

/// The signed-in user, or `None` for anonymous callers. A session whose
/// account has disappeared is treated as anonymous and its cookies cleared.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::cookies;
    use crate::repo::user;

    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    let pool = db().await?;
    match user::find_by_id(pool, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?
    {
        Some(row) => Ok(Some(row.into())),
        None => {
            tracing::warn!(user_id = claims.sub, "token for a missing account, clearing cookies");
            cookies::schedule_clear_cookies();
            Ok(None)
        }
    }
}

/// Revoke the caller's refresh tokens and clear the auth cookies. Succeeds
/// for anonymous callers too.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;
    use crate::service::account;

    if let Some(claims) = current_claims() {
        let pool = db().await?;
        account::end_sessions(pool, claims.sub)
            .await
            .map_err(|e| e.into_server_fn_error())?;
    }

    cookies::schedule_clear_cookies();
    Ok(())
}
