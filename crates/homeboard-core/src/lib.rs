//! # Homeboard Core Library
//!
//! Core logic for the Homeboard household/student dashboard. It implements a
//! CLI-first philosophy where all operations are available via a standalone
//! CLI binary; any richer front end is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Model**: the single JSON-serializable [`Document`] holding study
//!   sessions, grades, chores, and notification thresholds
//! - **Storage**: whole-file JSON persistence with seed-on-first-run and
//!   seed-on-corruption semantics
//! - **Stats**: pure aggregates (rolling-window study hours, average grade,
//!   pending chore count)
//! - **Notify**: threshold evaluation producing ordered, leveled alerts
//!
//! ## Key Components
//!
//! - [`Document`]: the persisted aggregate, replaced wholesale on save
//! - [`DataStore`]: load/save handle over the document file
//! - [`build_notifications`]: the notification-derivation function

pub mod error;
pub mod model;
pub mod notify;
pub mod stats;
pub mod storage;

pub use error::{CoreError, Result};
pub use model::{Chore, Document, Grade, StudySession, Thresholds};
pub use notify::{build_notifications, build_notifications_now, Level, Notification};
pub use stats::DashboardSummary;
pub use storage::{DataStore, LoadOutcome};
