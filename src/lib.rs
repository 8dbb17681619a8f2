//! Tracker - a small record-keeping web service for exercise logs.
//!
//! Clients create user records and append timestamped exercise sessions to
//! each user's log, then query the log with optional date-range and count
//! filters. Everything is a single request/response round trip against a
//! document store; there is no retained state between calls.
//!
//! # Key Concepts
//!
//! - **User**: a named record owning an append-only log of sessions,
//!   identified by a store-assigned opaque id.
//! - **Session**: one exercise occurrence (description, duration, date),
//!   embedded in exactly one user's log and immutable once appended.
//! - **Log filter**: the query logic behind log retrieval - an inclusive
//!   date range composed with a prefix limit, filter applied first.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use tracker::{LogQuery, StoreConfig, create_store, filter_log};
//!
//! // Open a store
//! let store = create_store(&StoreConfig::InMemory).await?;
//!
//! // Create a user and log a session
//! let user = store.insert_user("alice".to_string()).await?;
//! store.append_session(&user.id, session).await?;
//!
//! // Query the log
//! let user = store.find_user(&user.id).await?.unwrap();
//! let view = filter_log(user.log, &LogQuery::default());
//! ```

mod clock;
mod config;
mod error;
mod filter;
mod model;
#[cfg(feature = "http-server")]
pub mod server;
mod store;

pub use clock::{Clock, MockClock, SystemClock};
pub use config::{Config, load_config};
pub use error::{Error, Result};
pub use filter::{LogQuery, filter_log};
pub use model::{Session, User, UserId};
pub use store::{FileStore, FileStoreConfig, InMemoryStore, StoreConfig, UserStore, create_store};
