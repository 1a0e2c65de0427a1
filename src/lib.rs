//! SkillRoute - career roadmap dashboard client
//!
//! This crate derives everything a career-roadmap dashboard shows (phase
//! status, progress and pace, career summary, recommendations, resource
//! buckets) from the server's roadmap snapshot, and drives the API calls that
//! change it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
