//! # Kinfolk
//!
//! A small utility for browsing person records.
//!
//! A person record is a YAML property map plus a free-text body template.
//! Kinfolk renders records to markdown or HTML, resolves references to
//! related records (mother, father, siblings, children) by filename, and
//! hands those filenames to external collaborators that launch new viewer
//! instances or the user's browser.
//!
//! ## Architecture
//!
//! - **Record Store**: load/serialize boundary between document text and
//!   [`PropertyMap`]
//! - **Body Template**: restricted placeholder substitution (lookup and
//!   stringify only, never expression evaluation)
//! - **Person Renderer**: markdown/HTML rendering plus relative navigation
//! - **Collaborators**: process launch, browser launch, and file lookup
//!   behind small seams so the core stays a pure function of its data

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod launch;
pub mod lookup;
pub mod person;
pub mod property;
pub mod relatives;
pub mod store;
pub mod template;

// Re-export main types
pub use error::{KinfolkError, Result};
pub use launch::{Launcher, SystemLauncher};
pub use person::PersonRecord;
pub use property::{Property, PropertyMap};
pub use relatives::Relationship;
pub use template::BodyTemplate;

/// Kinfolk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
