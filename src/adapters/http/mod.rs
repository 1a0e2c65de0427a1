//! HTTP adapters - the reqwest client for the career API and its wire types.

mod client;
pub mod wire;

pub use client::{
    HttpCareerApi, PROFILE_PATH, PROGRESS_ADAPT_PATH, PROGRESS_UPDATE_PATH, ROADMAP_PATH,
};
