//! # Session State
//!
//! The simulated authentication session.
//!
//! ## Design
//! The session is a tagged union - `LoggedOut | LoggingIn | LoggedIn(user)`
//! - so consumers pattern-match on states instead of poking nullable
//! fields, and a real backend can replace the simulation later without
//! changing a single consumer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session State Machine                              │
//! │                                                                         │
//! │   {LoggedOut} ── login/register ──► {LoggingIn} ── delay ──► {LoggedIn} │
//! │        ▲                                 │                       │      │
//! │        │                                 └── (simulated, never   │      │
//! │        └──────────────── logout ─────────────  fails) ───────────┘      │
//! │                                                                         │
//! │   Checkout and profile commands require {LoggedIn}.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is SIMULATED: fixed delay, hardcoded profile data, no
//! credentials ever checked or stored.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Profile Types
// =============================================================================

/// Badge tier, mirrored by the frontend's badge icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Gold,
    Silver,
    Bronze,
}

/// A community badge on the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: BadgeTier,
    /// Badge tied to a specific artist, if any.
    pub artist_id: Option<String>,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// A friend entry on the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
}

/// The logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    /// Whether the profile is hidden from the community pages.
    pub is_private: bool,
    pub badges: Vec<Badge>,
    pub friends: Vec<Friend>,
}

impl UserProfile {
    /// Simulated profile for email/password login and registration.
    /// The display name defaults to the email's local part.
    pub fn simulated(email: &str, name: Option<&str>) -> Self {
        let fallback = email.split('@').next().unwrap_or(email);
        UserProfile {
            id: "1".to_string(),
            email: email.to_string(),
            name: name.unwrap_or(fallback).to_string(),
            avatar_url: None,
            is_private: false,
            badges: vec![starter_badge()],
            friends: simulated_friends(),
        }
    }

    /// Simulated profile for the "continue with Google" path.
    pub fn simulated_google() -> Self {
        UserProfile {
            id: "1".to_string(),
            email: "user@gmail.com".to_string(),
            name: "Google User".to_string(),
            avatar_url: Some(
                "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100".to_string(),
            ),
            is_private: false,
            badges: vec![starter_badge()],
            friends: Vec::new(),
        }
    }
}

/// Everyone starts with the community welcome badge.
fn starter_badge() -> Badge {
    Badge {
        id: "1".to_string(),
        name: "Entusiasta em Arte".to_string(),
        description: "Bem-vindo à comunidade ArtSpace!".to_string(),
        tier: BadgeTier::Gold,
        artist_id: None,
        unlocked_at: Some(Utc::now()),
    }
}

fn simulated_friends() -> Vec<Friend> {
    vec![
        Friend {
            id: "2".to_string(),
            name: "Maria Silva".to_string(),
            avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100"
                .to_string(),
        },
        Friend {
            id: "3".to_string(),
            name: "João Santos".to_string(),
            avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100"
                .to_string(),
        },
    ]
}

// =============================================================================
// Session
// =============================================================================

/// The authentication session as a tagged union.
///
/// Serializes as `{"status": "loggedIn", "user": {...}}` so the frontend
/// switches on `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "camelCase")]
pub enum Session {
    /// Nobody is logged in.
    LoggedOut,
    /// A (simulated) login is in flight.
    LoggingIn,
    /// A user is logged in.
    LoggedIn(UserProfile),
}

impl Session {
    /// Checks whether a user is logged in.
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    /// The logged-in profile, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::LoggedIn(user) => Some(user),
            _ => None,
        }
    }
}

// =============================================================================
// Session State
// =============================================================================

/// Tauri-managed session state.
#[derive(Debug)]
pub struct SessionState {
    session: Mutex<Session>,
}

impl SessionState {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        SessionState {
            session: Mutex::new(Session::LoggedOut),
        }
    }

    /// Returns a clone of the current session.
    pub fn current(&self) -> Session {
        self.lock().clone()
    }

    /// Marks a login as in flight.
    pub fn begin_login(&self) {
        *self.lock() = Session::LoggingIn;
    }

    /// Completes a login with the given profile.
    pub fn complete_login(&self, user: UserProfile) {
        *self.lock() = Session::LoggedIn(user);
    }

    /// Logs out. Always lands on `LoggedOut`, whatever the prior state.
    pub fn logout(&self) {
        *self.lock() = Session::LoggedOut;
    }

    /// Flips the profile privacy flag. No-op unless logged in; returns the
    /// new flag when it applied.
    pub fn toggle_privacy(&self) -> Option<bool> {
        let mut session = self.lock();
        match &mut *session {
            Session::LoggedIn(user) => {
                user.is_private = !user.is_private;
                Some(user.is_private)
            }
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.session.lock().expect("Session mutex poisoned")
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_logged_out() {
        let state = SessionState::new();
        assert!(!state.current().is_authenticated());
    }

    #[test]
    fn test_login_transition() {
        let state = SessionState::new();

        state.begin_login();
        assert!(matches!(state.current(), Session::LoggingIn));
        assert!(!state.current().is_authenticated());

        state.complete_login(UserProfile::simulated("maria@example.com", None));
        let session = state.current();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().name, "maria");

        state.logout();
        assert!(matches!(state.current(), Session::LoggedOut));
    }

    #[test]
    fn test_toggle_privacy_requires_login() {
        let state = SessionState::new();
        assert_eq!(state.toggle_privacy(), None);

        state.complete_login(UserProfile::simulated("maria@example.com", Some("Maria")));
        assert_eq!(state.toggle_privacy(), Some(true));
        assert_eq!(state.toggle_privacy(), Some(false));
    }

    #[test]
    fn test_session_serialization_is_tagged() {
        let json = serde_json::to_value(Session::LoggedOut).unwrap();
        assert_eq!(json["status"], "loggedOut");

        let session = Session::LoggedIn(UserProfile::simulated_google());
        let json = serde_json::to_value(session).unwrap();
        assert_eq!(json["status"], "loggedIn");
        assert_eq!(json["user"]["email"], "user@gmail.com");
    }
}
