//! License classification and deny-list matching.
//!
//! - [`classifier`] — maps a declared license string to a
//!   [`LicenseCategory`](crate::models::LicenseCategory) and matches it against
//!   user-supplied deny patterns.

pub mod classifier;
