//! Relative references between person records
//!
//! A relative reference is a weak pointer: it names another record's
//! backing file, nothing more. The core never loads or owns the referenced
//! record; it only resolves filenames and hands them to the launch
//! collaborator.

use std::fmt;

use crate::error::{KinfolkError, Result};
use crate::property::{Property, PropertyMap};

/// The relationships a record can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// Single record reference
    Mother,
    /// Single record reference
    Father,
    /// Ordered sequence of record references
    Siblings,
    /// Ordered sequence of record references
    Children,
}

impl Relationship {
    /// All relationships, in display order.
    pub const ALL: [Relationship; 4] = [
        Relationship::Mother,
        Relationship::Father,
        Relationship::Siblings,
        Relationship::Children,
    ];

    /// The property key this relationship is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Relationship::Mother => "Mother",
            Relationship::Father => "Father",
            Relationship::Siblings => "Siblings",
            Relationship::Children => "Children",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Resolve the filenames a relative property references.
///
/// Accepted shapes:
/// - text: one filename
/// - sequence: one filename per element, where each element is either text
///   or a mapping whose `file` entry holds the filename
/// - mapping: its `file` entry holds the filename
pub fn reference_files(value: &Property) -> Result<Vec<String>> {
    match value {
        Property::Text(file) => Ok(vec![file.clone()]),
        Property::Sequence(items) => items.iter().map(entry_file).collect(),
        Property::Map(map) => Ok(vec![map_file(map)?]),
    }
}

fn entry_file(item: &Property) -> Result<String> {
    match item {
        Property::Text(file) => Ok(file.clone()),
        Property::Map(map) => map_file(map),
        Property::Sequence(_) => Err(KinfolkError::ParseError {
            message: "a relative reference cannot contain a nested sequence".to_string(),
        }),
    }
}

fn map_file(map: &PropertyMap) -> Result<String> {
    match map.get("file") {
        Some(Property::Text(file)) => Ok(file.clone()),
        Some(other) => Err(KinfolkError::ParseError {
            message: format!("a relative's 'file' entry must be a filename, got {}", other),
        }),
        None => Err(KinfolkError::MissingFieldError {
            field: "file".to_string(),
        }),
    }
}
