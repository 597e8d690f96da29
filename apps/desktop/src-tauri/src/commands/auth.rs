//! # Auth Commands
//!
//! SIMULATED authentication: a fixed delay, then a hardcoded profile. No
//! credentials are checked or stored; the password parameters exist so the
//! command signatures survive a real backend swap unchanged.
//!
//! The session is a tagged union (`loggedOut | loggingIn | loggedIn`), so
//! the frontend renders from `status` and nothing here is nullable.

use std::time::Duration;

use tauri::State;
use tracing::{debug, info};

use artspace_core::validation::{validate_display_name, validate_email};

use crate::error::ApiError;
use crate::state::{Session, SessionState, UserProfile};

/// Fixed latency of the simulated backend round-trip.
const SIMULATED_AUTH_DELAY: Duration = Duration::from_millis(1000);

// =============================================================================
// Commands
// =============================================================================

/// Gets the current session.
#[tauri::command]
pub fn get_session(session: State<'_, SessionState>) -> Session {
    debug!("get_session command");
    session.current()
}

/// Simulated email/password login.
#[tauri::command]
pub async fn login(
    session: State<'_, SessionState>,
    email: String,
    _password: String,
) -> Result<Session, ApiError> {
    debug!(email = %email, "login command");
    validate_email(&email)?;

    session.begin_login();
    tokio::time::sleep(SIMULATED_AUTH_DELAY).await;
    session.complete_login(UserProfile::simulated(&email, None));

    info!(email = %email, "simulated login complete");
    Ok(session.current())
}

/// Simulated "continue with Google" login.
#[tauri::command]
pub async fn login_with_google(session: State<'_, SessionState>) -> Session {
    debug!("login_with_google command");

    session.begin_login();
    tokio::time::sleep(SIMULATED_AUTH_DELAY).await;
    session.complete_login(UserProfile::simulated_google());

    info!("simulated google login complete");
    session.current()
}

/// Simulated registration.
#[tauri::command]
pub async fn register(
    session: State<'_, SessionState>,
    email: String,
    _password: String,
    name: String,
) -> Result<Session, ApiError> {
    debug!(email = %email, name = %name, "register command");
    validate_email(&email)?;
    validate_display_name(&name)?;

    session.begin_login();
    tokio::time::sleep(SIMULATED_AUTH_DELAY).await;
    session.complete_login(UserProfile::simulated(&email, Some(&name)));

    info!(email = %email, "simulated registration complete");
    Ok(session.current())
}

/// Logs out.
#[tauri::command]
pub fn logout(session: State<'_, SessionState>) -> Session {
    debug!("logout command");
    session.logout();
    session.current()
}

/// Flips the profile privacy flag. Silent no-op when logged out.
#[tauri::command]
pub fn toggle_privacy(session: State<'_, SessionState>) -> Session {
    debug!("toggle_privacy command");
    session.toggle_privacy();
    session.current()
}
