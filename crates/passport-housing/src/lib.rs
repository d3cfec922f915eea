//! Core library for the Passport Student Housing rental site.
//!
//! Three concerns live here: the static property catalog and its pure
//! query layer, the multi-step rental application wizard, and the
//! remote site-configuration provider with its hardcoded fallback.
//! The HTTP service and CLI in `services/web` are thin layers over
//! these modules.

pub mod catalog;
pub mod config;
pub mod error;
pub mod siteconfig;
pub mod telemetry;
pub mod wizard;
