//! Typed client and terminal console for the vehicle rental REST backend.
//!
//! The crate is layered bottom-up:
//!
//! - [`api`]: one HTTP round trip per call, JSON in and out, plus multipart
//!   uploads and binary downloads.
//! - [`hooks`]: tri-state (loading / data / error) wrappers around async
//!   reads and writes.
//! - [`resources`]: one typed endpoint map per entity.
//! - [`console`]: page controllers, dialogs, form checks and table rendering.
//! - [`session`]: the explicit login context handed to the layers above.

pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod hooks;
pub mod logging;
pub mod mvi;
pub mod resources;
pub mod session;
