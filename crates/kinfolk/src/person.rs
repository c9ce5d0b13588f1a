//! Person records and their rendering contract

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{html, Options, Parser};

use crate::error::{KinfolkError, Result};
use crate::launch::Launcher;
use crate::property::{Property, PropertyMap};
use crate::relatives::{self, Relationship};
use crate::store;
use crate::template::BodyTemplate;

/// A single person record: one property map plus one body template.
///
/// Constructed once, immutable thereafter. The property map is the single
/// source of truth; the serialized document form is recomputed on demand
/// via [`PersonRecord::document`]. Every render is a pure function of the
/// constructed data.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonRecord {
    properties: PropertyMap,
    body: String,
}

impl PersonRecord {
    /// Construct a record from exactly one of a raw document or a property
    /// map, plus a body template.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::ConfigurationError`] when both or neither
    /// source is given, and [`KinfolkError::ParseError`] when the document
    /// is malformed.
    pub fn new(
        document: Option<&str>,
        properties: Option<PropertyMap>,
        body: impl Into<String>,
    ) -> Result<Self> {
        let properties = match (document, properties) {
            (Some(document), None) => store::load_from_document(document)?,
            (None, Some(properties)) => properties,
            (Some(_), Some(_)) => {
                return Err(KinfolkError::ConfigurationError(
                    "a record takes either a document or a property map, not both".to_string(),
                ));
            }
            (None, None) => {
                return Err(KinfolkError::ConfigurationError(
                    "a record needs a document or a property map".to_string(),
                ));
            }
        };

        Ok(Self {
            properties,
            body: body.into(),
        })
    }

    /// Construct a record from a raw document string.
    pub fn from_document(document: &str, body: impl Into<String>) -> Result<Self> {
        Self::new(Some(document), None, body)
    }

    /// Construct a record from an already-built property map.
    pub fn from_properties(properties: PropertyMap, body: impl Into<String>) -> Result<Self> {
        Self::new(None, Some(properties), body)
    }

    /// Load a record from a person file: YAML frontmatter between `---`
    /// fences, body template after.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let (frontmatter, body) = store::split_document(&text)?;
        Self::from_document(frontmatter, body)
    }

    /// The record's properties.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// The raw body template.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serialized document form, recomputed from the property map.
    pub fn document(&self) -> Result<String> {
        store::dump(&self.properties)
    }

    /// Path of the record's photo, when it has one.
    pub fn photo(&self) -> Option<&str> {
        self.properties.get("Photo").and_then(Property::as_text)
    }

    /// Resolve the body template against the record's properties.
    pub fn render_body(&self) -> Result<String> {
        BodyTemplate::parse(&self.body)?.resolve(&self.properties)
    }

    /// Render the record as markdown: a level-2 heading with the record's
    /// name, a blank line, then the resolved body.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::MissingFieldError`] when the record has no
    /// `Name` property.
    pub fn render_markdown(&self) -> Result<String> {
        let name = self.properties.get("Name").ok_or_else(|| {
            KinfolkError::MissingFieldError {
                field: "Name".to_string(),
            }
        })?;
        let body = self.render_body()?;
        Ok(format!("## {}\n\n{}\n", name, body))
    }

    /// Render the record as an HTML5 fragment.
    ///
    /// The markdown rendering goes through pulldown-cmark with tables,
    /// footnotes, and strikethrough enabled.
    pub fn render_html(&self) -> Result<String> {
        let markdown = self.render_markdown()?;

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let mut out = String::new();
        html::push_html(&mut out, Parser::new_ext(&markdown, options));
        Ok(out)
    }

    /// The relationships this record references, in display order.
    pub fn relationships(&self) -> Vec<Relationship> {
        Relationship::ALL
            .into_iter()
            .filter(|relationship| self.properties.contains(relationship.key()))
            .collect()
    }

    /// The record files a relationship references.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::MissingFieldError`] when the relationship is
    /// not present on this record.
    pub fn relative_files(&self, relationship: Relationship) -> Result<Vec<String>> {
        let value = self.properties.get(relationship.key()).ok_or_else(|| {
            KinfolkError::MissingFieldError {
                field: relationship.key().to_string(),
            }
        })?;
        relatives::reference_files(value)
    }

    /// Request a viewer launch for every record a relationship references.
    ///
    /// Fire-and-forget: launches are requested in reference order and never
    /// awaited.
    pub fn open_relatives(
        &self,
        relationship: Relationship,
        launcher: &dyn Launcher,
    ) -> Result<()> {
        for file in self.relative_files(relationship)? {
            launcher.launch_viewer(Path::new(&file))?;
        }
        Ok(())
    }

    /// Write the HTML rendering next to the source document (same base
    /// name, `.html` extension, UTF-8), then ask the browser collaborator
    /// to open it. Returns the path written.
    pub fn export_html(&self, source: &Path, launcher: &dyn Launcher) -> Result<PathBuf> {
        let target = source.with_extension("html");
        fs::write(&target, self.render_html()?)?;
        launcher.open_browser(&target)?;
        Ok(target)
    }
}
