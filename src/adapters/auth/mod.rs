//! Authentication adapters.
//!
//! Implementations of the `TokenProvider` port:
//!
//! - `static_token` - A credential fixed at startup

mod static_token;

pub use static_token::StaticTokenProvider;
