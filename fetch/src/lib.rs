//! Race-safe asynchronous data fetching for portal views.
//!
//! A [`FetchController`] runs one operation and exposes its
//! [`FetchState`]; a [`Paginator`] adds page and sort state on top of one.
//! The [`accessors`] bind backend calls into operations for both.

pub mod accessors;
mod controller;
mod error;
mod operation;
mod pagination;
pub mod spawn;
mod state;

pub use controller::{FetchController, Refresh};
pub use error::FetchError;
pub use operation::{Operation, OperationFuture, PageOperation};
pub use pagination::{PageSnapshot, Paginator};
pub use spawn::{Spawner, spawner};
pub use state::FetchState;

pub use payloads::{PageQuery, Paginated, PaginationState, SortDirection};
