// SPDX-License-Identifier: MPL-2.0
//! Remote content port.
//!
//! The platform backend (authentication, member data, content feed) is an
//! external collaborator. This module defines the [`ContentApi`] trait the
//! shell talks to and a [`DemoApi`] adapter with canned data, so the shell
//! runs and is testable without the real service. Responses arrive
//! asynchronously; pages hold a [`RemoteState`] and render loading, empty,
//! and error states while waiting. The exact backend schema is out of
//! scope here.

use std::fmt;

// =============================================================================
// ApiError
// =============================================================================

/// Errors surfaced by the content API.
///
/// These stay confined to the page that issued the request; chrome and the
/// overlay subsystem never see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The service could not be reached.
    Unreachable(String),

    /// The credentials were rejected.
    Unauthorized,

    /// The service answered with an unexpected payload.
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unreachable(msg) => write!(f, "service unreachable: {}", msg),
            ApiError::Unauthorized => write!(f, "credentials rejected"),
            ApiError::Malformed(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Data carried by the port
// =============================================================================

/// One feed item on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSummary {
    pub title: String,
    pub channel: String,
    pub views: u64,
}

/// The signed-in member, as shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub nickname: String,
    pub email: String,
    pub channel_count: u32,
}

/// Sign-in form payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Request lifecycle
// =============================================================================

/// Lifecycle of one asynchronous request, owned by the page that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteState<T> {
    /// Request in flight; render a loading placeholder.
    Loading,
    /// Response arrived. An empty collection renders the empty state.
    Loaded(T),
    /// Request failed; render the error state, keep chrome intact.
    Failed(ApiError),
}

impl<T> RemoteState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, RemoteState::Failed(_))
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            RemoteState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for RemoteState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => RemoteState::Loaded(value),
            Err(err) => RemoteState::Failed(err),
        }
    }
}

// =============================================================================
// ContentApi port
// =============================================================================

/// Port for the platform backend.
///
/// Implementations must be `Send + Sync`: calls are issued from async
/// tasks and only their results re-enter the UI thread.
pub trait ContentApi: Send + Sync {
    /// Fetches the home feed.
    fn home_feed(&self) -> Result<Vec<VideoSummary>, ApiError>;

    /// Fetches the signed-in member's profile.
    fn member_profile(&self) -> Result<MemberProfile, ApiError>;

    /// Validates credentials.
    fn sign_in(&self, credentials: &Credentials) -> Result<(), ApiError>;
}

// =============================================================================
// DemoApi adapter
// =============================================================================

/// Canned-data adapter used until the real backend is wired in.
#[derive(Debug, Default, Clone)]
pub struct DemoApi;

impl ContentApi for DemoApi {
    fn home_feed(&self) -> Result<Vec<VideoSummary>, ApiError> {
        Ok(vec![
            VideoSummary {
                title: "Getting started with the platform".to_string(),
                channel: "Platform team".to_string(),
                views: 12_408,
            },
            VideoSummary {
                title: "Creator spotlight: building an audience".to_string(),
                channel: "Community".to_string(),
                views: 3_997,
            },
            VideoSummary {
                title: "Studio tour".to_string(),
                channel: "Behind the scenes".to_string(),
                views: 881,
            },
        ])
    }

    fn member_profile(&self) -> Result<MemberProfile, ApiError> {
        Ok(MemberProfile {
            nickname: "guest".to_string(),
            email: "guest@example.com".to_string(),
            channel_count: 2,
        })
    }

    fn sign_in(&self, credentials: &Credentials) -> Result<(), ApiError> {
        if credentials.email.contains('@') && !credentials.password.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_state_from_result() {
        let ok: RemoteState<u32> = Ok(7).into();
        assert_eq!(ok.loaded(), Some(&7));
        assert!(!ok.is_loading());

        let err: RemoteState<u32> = Err(ApiError::Unauthorized).into();
        assert!(err.is_failed());
        assert!(err.loaded().is_none());
    }

    #[test]
    fn demo_feed_is_nonempty() {
        let api = DemoApi;
        let feed = api.home_feed().expect("demo feed always succeeds");
        assert!(!feed.is_empty());
    }

    #[test]
    fn demo_sign_in_validates_credential_shape() {
        let api = DemoApi;
        let good = Credentials {
            email: "member@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(api.sign_in(&good).is_ok());

        let bad = Credentials {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(api.sign_in(&bad), Err(ApiError::Unauthorized));

        let empty = Credentials {
            email: "member@example.com".to_string(),
            password: String::new(),
        };
        assert_eq!(api.sign_in(&empty), Err(ApiError::Unauthorized));
    }

    #[test]
    fn api_error_display() {
        assert!(format!("{}", ApiError::Unreachable("timeout".into())).contains("timeout"));
        assert_eq!(format!("{}", ApiError::Unauthorized), "credentials rejected");
    }
}
