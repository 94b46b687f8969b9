//! Core types for the U.S. natural disaster prediction app.
//!
//! This crate has no UI dependency. It holds the disaster category
//! enumeration, calendar-year helpers, and the request/response/state
//! lifecycle that the web app and CLI both build on.

pub mod category;
pub mod dates;
pub mod view_state;
