//! Per-resource bindings of backend calls into operations.
//!
//! Paginated resources produce a [`PageOperation`](crate::PageOperation) for
//! a [`Paginator`](crate::Paginator); single resources produce an
//! [`Operation`](crate::Operation) for a
//! [`FetchController`](crate::FetchController). Client errors become
//! [`FetchError`](crate::FetchError)s carrying their display message.

pub mod commands;
pub mod dashboard;
pub mod groups;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

pub use commands::{CommandState, ResetCommand, ResetKind};
pub use dashboard::{Dashboard, DashboardSnapshot};
