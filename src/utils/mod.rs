//! Shared utilities.
//!
//! - [`date`]: UTC clock and calendar year for the page footer
//! - [`hash`]: content fingerprints for asset filenames
//! - [`html`]: HTML escaping
//! - [`mime`]: Content-Type detection for the dev server
//! - [`path`]: filesystem path normalization
//! - [`plural`]: count + noun formatting

pub mod date;
pub mod hash;
pub mod html;
pub mod mime;
pub mod path;
pub mod plural;
