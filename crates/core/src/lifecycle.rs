//! Video lifecycle state machine.
//!
//! A video moves strictly forward through `draft → editing →
//! ready_to_post → posted`; `posted` is terminal. [`transition_to`]
//! validates the transition locally *before* touching the store, then
//! writes through the injected [`VideoStateStore`] with a timeout, so an
//! illegal pair can never reach the persistence layer.
//!
//! [`derive_video_state`] reconciles rows whose persisted tag is missing
//! or stale (rows predating the state machine, partial writes). It is a
//! read-time self-healing step, not a substitute for explicit transitions.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// VideoState
// ---------------------------------------------------------------------------

/// Persisted lifecycle tag for a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoState {
    Draft,
    Editing,
    ReadyToPost,
    Posted,
}

/// All valid lifecycle states, in progression order.
pub const VALID_VIDEO_STATES: &[VideoState] = &[
    VideoState::Draft,
    VideoState::Editing,
    VideoState::ReadyToPost,
    VideoState::Posted,
];

impl VideoState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Editing => "editing",
            Self::ReadyToPost => "ready_to_post",
            Self::Posted => "posted",
        }
    }

    /// Parse a persisted tag. Returns `None` for anything that is not one
    /// of the four valid tags.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "editing" => Some(Self::Editing),
            "ready_to_post" => Some(Self::ReadyToPost),
            "posted" => Some(Self::Posted),
            _ => None,
        }
    }
}

impl fmt::Display for VideoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transition table
// ---------------------------------------------------------------------------

/// Returns the states that `from` may transition to.
///
/// - `draft`         -> `editing`
/// - `editing`       -> `ready_to_post`
/// - `ready_to_post` -> `posted`
/// - `posted`        -> (terminal)
pub fn valid_transitions(from: VideoState) -> &'static [VideoState] {
    match from {
        VideoState::Draft => &[VideoState::Editing],
        VideoState::Editing => &[VideoState::ReadyToPost],
        VideoState::ReadyToPost => &[VideoState::Posted],
        VideoState::Posted => &[],
    }
}

/// Whether `current → next` appears in the transition table.
///
/// Same-state pairs and backward moves are never allowed.
pub fn can_transition_to(current: VideoState, next: VideoState) -> bool {
    valid_transitions(current).contains(&next)
}

/// Validate a transition, with an error naming the allowed targets.
pub fn validate_transition(current: VideoState, next: VideoState) -> Result<(), CoreError> {
    if can_transition_to(current, next) {
        Ok(())
    } else {
        let allowed: Vec<&str> = valid_transitions(current)
            .iter()
            .map(|s| s.as_str())
            .collect();
        Err(CoreError::Validation(format!(
            "Cannot transition video from '{current}' to '{next}'. Allowed: [{}]",
            allowed.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// State derivation
// ---------------------------------------------------------------------------

/// Resolve the authoritative state when the persisted tag may be absent
/// or stale.
///
/// Precedence:
/// 1. a valid explicit tag always wins;
/// 2. a finalized slug implies `ready_to_post`;
/// 3. any hotspot implies `editing`;
/// 4. otherwise `draft`.
pub fn derive_video_state(
    slug_finalized: bool,
    has_hotspots: bool,
    explicit: Option<&str>,
) -> VideoState {
    if let Some(state) = explicit.and_then(VideoState::parse) {
        return state;
    }
    if slug_finalized {
        VideoState::ReadyToPost
    } else if has_hotspots {
        VideoState::Editing
    } else {
        VideoState::Draft
    }
}

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Error reported by a [`VideoStateStore`] write.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Persistence seam for lifecycle transitions. The API layer provides a
/// PostgreSQL-backed implementation; tests provide in-memory fakes.
#[async_trait]
pub trait VideoStateStore: Send + Sync {
    /// Persist `next` as the state tag of video `video_id`.
    async fn persist_state(&self, video_id: DbId, next: VideoState) -> Result<(), StoreError>;
}

/// How long a store write may take before it is reported as timed out.
/// Matches the external-call timeout convention used across the service.
pub const STORE_TIMEOUT: Duration = Duration::from_secs(8);

/// Failure modes of [`transition_to`]. Timeouts are distinct from
/// rejected writes so callers can message them differently.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot transition video from '{from}' to '{to}'")]
    Illegal { from: VideoState, to: VideoState },

    #[error("State store did not respond within {0:?}")]
    Timeout(Duration),

    #[error("State store rejected the write: {0}")]
    Store(String),
}

/// Transition a video to `next`, persisting through `store`.
///
/// The transition is validated locally first — an illegal pair returns
/// [`TransitionError::Illegal`] without any store call. On failure the
/// caller's in-memory state must not be updated; there is no retry, the
/// user retries explicitly.
pub async fn transition_to(
    store: &dyn VideoStateStore,
    video_id: DbId,
    current: VideoState,
    next: VideoState,
) -> Result<(), TransitionError> {
    transition_to_with_timeout(store, video_id, current, next, STORE_TIMEOUT).await
}

/// [`transition_to`] with an explicit store timeout.
pub async fn transition_to_with_timeout(
    store: &dyn VideoStateStore,
    video_id: DbId,
    current: VideoState,
    next: VideoState,
    timeout: Duration,
) -> Result<(), TransitionError> {
    if !can_transition_to(current, next) {
        return Err(TransitionError::Illegal {
            from: current,
            to: next,
        });
    }

    match tokio::time::timeout(timeout, store.persist_state(video_id, next)).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(TransitionError::Store(e.to_string())),
        Err(_) => Err(TransitionError::Timeout(timeout)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use assert_matches::assert_matches;

    use super::*;

    // -- transition table -----------------------------------------------------

    #[test]
    fn forward_transitions_allowed() {
        assert!(can_transition_to(VideoState::Draft, VideoState::Editing));
        assert!(can_transition_to(VideoState::Editing, VideoState::ReadyToPost));
        assert!(can_transition_to(VideoState::ReadyToPost, VideoState::Posted));
    }

    #[test]
    fn skipping_states_rejected() {
        assert!(!can_transition_to(VideoState::Draft, VideoState::ReadyToPost));
        assert!(!can_transition_to(VideoState::Draft, VideoState::Posted));
        assert!(!can_transition_to(VideoState::Editing, VideoState::Posted));
    }

    #[test]
    fn posted_is_terminal() {
        for &next in VALID_VIDEO_STATES {
            assert!(!can_transition_to(VideoState::Posted, next));
        }
    }

    #[test]
    fn exhaustive_pair_sweep_matches_table() {
        for &from in VALID_VIDEO_STATES {
            for &to in VALID_VIDEO_STATES {
                let expected = matches!(
                    (from, to),
                    (VideoState::Draft, VideoState::Editing)
                        | (VideoState::Editing, VideoState::ReadyToPost)
                        | (VideoState::ReadyToPost, VideoState::Posted)
                );
                assert_eq!(can_transition_to(from, to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn same_state_rejected() {
        for &s in VALID_VIDEO_STATES {
            assert!(!can_transition_to(s, s));
        }
    }

    #[test]
    fn validate_transition_names_allowed_targets() {
        let err = validate_transition(VideoState::Draft, VideoState::Posted).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("draft"));
        assert!(msg.contains("editing"));
    }

    // -- parse / as_str -------------------------------------------------------

    #[test]
    fn parse_round_trips_all_states() {
        for &s in VALID_VIDEO_STATES {
            assert_eq!(VideoState::parse(s.as_str()), Some(s));
        }
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(VideoState::parse("published"), None);
        assert_eq!(VideoState::parse(""), None);
        assert_eq!(VideoState::parse("DRAFT"), None);
    }

    // -- derive_video_state ---------------------------------------------------

    #[test]
    fn explicit_tag_wins_over_signals() {
        assert_eq!(
            derive_video_state(true, false, Some("draft")),
            VideoState::Draft
        );
        assert_eq!(
            derive_video_state(true, true, Some("posted")),
            VideoState::Posted
        );
    }

    #[test]
    fn invalid_explicit_tag_falls_through() {
        assert_eq!(
            derive_video_state(true, false, Some("bogus")),
            VideoState::ReadyToPost
        );
    }

    #[test]
    fn slug_finalized_implies_ready_to_post() {
        assert_eq!(derive_video_state(true, false, None), VideoState::ReadyToPost);
        // Slug beats hotspot presence.
        assert_eq!(derive_video_state(true, true, None), VideoState::ReadyToPost);
    }

    #[test]
    fn hotspots_imply_editing() {
        assert_eq!(derive_video_state(false, true, None), VideoState::Editing);
    }

    #[test]
    fn bare_video_is_draft() {
        assert_eq!(derive_video_state(false, false, None), VideoState::Draft);
    }

    // -- transition_to --------------------------------------------------------

    /// Store fake that records every persisted (video_id, state) pair.
    #[derive(Default)]
    struct RecordingStore {
        writes: Mutex<Vec<(DbId, VideoState)>>,
    }

    #[async_trait]
    impl VideoStateStore for RecordingStore {
        async fn persist_state(&self, video_id: DbId, next: VideoState) -> Result<(), StoreError> {
            self.writes.lock().unwrap().push((video_id, next));
            Ok(())
        }
    }

    /// Store fake that always rejects the write.
    struct RejectingStore;

    #[async_trait]
    impl VideoStateStore for RejectingStore {
        async fn persist_state(&self, _: DbId, _: VideoState) -> Result<(), StoreError> {
            Err(StoreError("row locked".to_string()))
        }
    }

    /// Store fake that never completes, counting how often it was called.
    #[derive(Default)]
    struct HangingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl VideoStateStore for HangingStore {
        async fn persist_state(&self, _: DbId, _: VideoState) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    #[tokio::test]
    async fn legal_transition_persists() {
        let store = RecordingStore::default();
        transition_to(&store, 42, VideoState::Draft, VideoState::Editing)
            .await
            .unwrap();
        assert_eq!(
            *store.writes.lock().unwrap(),
            vec![(42, VideoState::Editing)]
        );
    }

    #[tokio::test]
    async fn illegal_transition_never_reaches_store() {
        let store = RecordingStore::default();
        let err = transition_to(&store, 42, VideoState::Draft, VideoState::Posted)
            .await
            .unwrap_err();
        assert_matches!(
            err,
            TransitionError::Illegal {
                from: VideoState::Draft,
                to: VideoState::Posted
            }
        );
        assert!(store.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_write_reports_store_failure() {
        let err = transition_to(&RejectingStore, 42, VideoState::Draft, VideoState::Editing)
            .await
            .unwrap_err();
        assert_matches!(err, TransitionError::Store(msg) if msg.contains("row locked"));
    }

    #[tokio::test]
    async fn slow_store_reports_timeout() {
        let store = HangingStore::default();
        let err = transition_to_with_timeout(
            &store,
            42,
            VideoState::Editing,
            VideoState::ReadyToPost,
            Duration::from_millis(20),
        )
        .await
        .unwrap_err();
        assert_matches!(err, TransitionError::Timeout(_));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }
}
