//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - reqwest client for the career API
//! - `auth` - Bearer credential sources
//! - `memory` - In-memory API and notifier for tests
//! - `terminal` - Colored rendering and interactive confirmations

pub mod auth;
pub mod http;
pub mod memory;
pub mod terminal;

pub use auth::StaticTokenProvider;
pub use http::HttpCareerApi;
pub use memory::{ApiCall, MockCareerApi, RecordingNotifier};
pub use terminal::{render_dashboard, TerminalNotifier};
