//! Report renderers for license check results.
//!
//! - [`terminal`] — grouped detailed report and condensed summary with symbolic markers.
//! - [`json`] — pretty-printed, machine-readable dump of the full result.

pub mod json;
pub mod terminal;
