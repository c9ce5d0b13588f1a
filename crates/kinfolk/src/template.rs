//! Restricted body-template substitution
//!
//! A body template is free text with embedded property references:
//!
//! ```text
//! Hello, {Name}! Your mother is {Mother}.
//! ```
//!
//! Resolution is pure lookup-and-stringify. A placeholder names a property
//! and nothing more; there is no expression evaluation, so a template can
//! never execute code. `{{` and `}}` escape literal braces.
//!
//! Unresolvable references fail loudly with
//! [`KinfolkError::TemplateResolutionError`] instead of producing empty
//! text, so data-entry mistakes surface at the first render.

use crate::error::{KinfolkError, Result};
use crate::property::PropertyMap;

/// A parsed body template.
///
/// Parsing splits the text into literal runs and placeholders; resolution
/// substitutes each placeholder with the string form of the named property.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyTemplate {
    segments: Vec<Segment>,
}

/// A segment of a parsed template.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Literal text, emitted as-is
    Literal(String),

    /// Property reference, substituted at resolution time
    ///
    /// The string is the property name to look up.
    Placeholder(String),
}

impl BodyTemplate {
    /// Parse template text into segments.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::TemplateResolutionError`] for malformed
    /// placeholders: an unclosed `{`, an empty `{}`, a nested `{`, a
    /// newline inside a placeholder, or an unmatched `}`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => {
                                return Err(template_error(
                                    "'{' is not allowed inside a placeholder".to_string(),
                                ));
                            }
                            Some('\n') => {
                                return Err(template_error(format!(
                                    "unterminated placeholder '{{{}'",
                                    name
                                )));
                            }
                            Some(ch) => name.push(ch),
                            None => {
                                return Err(template_error(format!(
                                    "unterminated placeholder '{{{}'",
                                    name
                                )));
                            }
                        }
                    }

                    if name.trim().is_empty() {
                        return Err(template_error("empty placeholder '{}'".to_string()));
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }

                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(template_error(
                            "single '}' outside a placeholder (use '}}' for a literal brace)"
                                .to_string(),
                        ));
                    }
                }

                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Substitute every placeholder with the string form of the named
    /// property.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::TemplateResolutionError`] if a placeholder
    /// names a property absent from the map.
    pub fn resolve(&self, properties: &PropertyMap) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),

                Segment::Placeholder(name) => {
                    let value = properties.get(name).ok_or_else(|| {
                        template_error(format!("body references unknown property '{}'", name))
                    })?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(out)
    }

    /// Names of all placeholders, in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

fn template_error(message: String) -> KinfolkError {
    KinfolkError::TemplateResolutionError { message }
}
