//! Home-screen surfaces and the native voice bridge for Hisabi.
//!
//! - [`surface`] projects the host's latest snapshot into per-surface
//!   view-models.
//! - [`bridge`] brokers the single in-flight voice capture request.
//! - [`routing`] maps deep links from surface taps to app routes.

pub mod bridge;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod mvi;
pub mod routing;
pub mod snapshot;
pub mod store;
pub mod surface;
pub mod theme;
pub mod visibility;
