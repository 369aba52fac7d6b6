//! Event bus and telemetry infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PlatformEvent`] — the canonical domain event envelope.
//! - [`EventPersistence`] — background service that durably writes every
//!   event to the `events` table.
//! - [`DedupWindow`] — bounded time-keyed cache suppressing duplicate
//!   fire-and-forget telemetry.

pub mod bus;
pub mod dedup;
pub mod persistence;

pub use bus::{EventBus, PlatformEvent};
pub use dedup::DedupWindow;
pub use persistence::EventPersistence;
