//! Record Store: load/serialize boundary between document text and property maps
//!
//! Documents are YAML. Loading stringifies every scalar, so a round trip
//! through [`dump`] and [`load_from_document`] always reproduces the same
//! [`PropertyMap`] (stringified scalars are re-emitted quoted, which keeps
//! them strings on the way back in).

use serde_yaml::Value as Yaml;

use crate::error::{KinfolkError, Result};
use crate::property::{Property, PropertyMap};

/// Parse a YAML document into a property map.
///
/// The document root must be a mapping. Malformed YAML, a non-mapping
/// root, a non-scalar key, or a tagged value fails with
/// [`KinfolkError::ParseError`].
pub fn load_from_document(text: &str) -> Result<PropertyMap> {
    let value: Yaml = serde_yaml::from_str(text).map_err(|e| KinfolkError::ParseError {
        message: e.to_string(),
    })?;

    match value {
        Yaml::Mapping(mapping) => mapping_to_properties(mapping),
        other => Err(parse_error(format!(
            "expected a mapping at the document root, got {}",
            yaml_kind(&other)
        ))),
    }
}

/// Serialize a property map back to document form.
///
/// Output is deterministic: block style, iteration order = insertion order.
pub fn dump(properties: &PropertyMap) -> Result<String> {
    let value = properties_to_yaml(properties);
    serde_yaml::to_string(&value).map_err(|e| KinfolkError::ParseError {
        message: e.to_string(),
    })
}

/// Split a person file into its frontmatter document and body template.
///
/// The file format is YAML frontmatter between `---` fences followed by the
/// body:
///
/// ```text
/// ---
/// Name: Alice
/// ---
/// Hello, {Name}!
/// ```
pub fn split_document(text: &str) -> Result<(&str, &str)> {
    let trimmed = text.trim_start();
    let rest = trimmed.strip_prefix("---").ok_or_else(|| {
        parse_error("person file must start with a --- frontmatter fence".to_string())
    })?;
    let end = rest.find("\n---").ok_or_else(|| {
        parse_error("person file is missing the closing --- frontmatter fence".to_string())
    })?;

    let frontmatter = rest[..end].trim();

    // Only the fence's own line break is stripped from the front of the
    // body, so a template that opens with indented markdown keeps its
    // indentation.
    let mut body = &rest[end + 4..];
    body = body.strip_prefix('\r').unwrap_or(body);
    body = body.strip_prefix('\n').unwrap_or(body);
    Ok((frontmatter, body.trim_end()))
}

fn mapping_to_properties(mapping: serde_yaml::Mapping) -> Result<PropertyMap> {
    let mut properties = PropertyMap::new();
    for (key, value) in mapping {
        let key = scalar_to_string(&key).ok_or_else(|| {
            parse_error(format!(
                "mapping keys must be scalars, got {}",
                yaml_kind(&key)
            ))
        })?;
        properties.insert(key, yaml_to_property(value)?);
    }
    Ok(properties)
}

fn yaml_to_property(value: Yaml) -> Result<Property> {
    match value {
        Yaml::Null => Ok(Property::Text(String::new())),
        Yaml::Bool(b) => Ok(Property::Text(b.to_string())),
        Yaml::Number(n) => Ok(Property::Text(n.to_string())),
        Yaml::String(s) => Ok(Property::Text(s)),

        Yaml::Sequence(items) => items
            .into_iter()
            .map(yaml_to_property)
            .collect::<Result<Vec<_>>>()
            .map(Property::Sequence),

        Yaml::Mapping(mapping) => mapping_to_properties(mapping).map(Property::Map),

        Yaml::Tagged(tagged) => Err(parse_error(format!(
            "unsupported tagged value {}",
            tagged.tag
        ))),
    }
}

fn properties_to_yaml(properties: &PropertyMap) -> Yaml {
    let mut mapping = serde_yaml::Mapping::new();
    for (key, value) in properties.iter() {
        mapping.insert(Yaml::String(key.clone()), property_to_yaml(value));
    }
    Yaml::Mapping(mapping)
}

fn property_to_yaml(property: &Property) -> Yaml {
    match property {
        Property::Text(s) => Yaml::String(s.clone()),
        Property::Sequence(items) => Yaml::Sequence(items.iter().map(property_to_yaml).collect()),
        Property::Map(map) => properties_to_yaml(map),
    }
}

fn scalar_to_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn yaml_kind(value: &Yaml) -> &'static str {
    match value {
        Yaml::Null => "null",
        Yaml::Bool(_) => "a boolean",
        Yaml::Number(_) => "a number",
        Yaml::String(_) => "a string",
        Yaml::Sequence(_) => "a sequence",
        Yaml::Mapping(_) => "a mapping",
        Yaml::Tagged(_) => "a tagged value",
    }
}

fn parse_error(message: String) -> KinfolkError {
    KinfolkError::ParseError { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_simple_document() {
        let props = load_from_document("Name: Alice\nPhoto: alice.png\n").unwrap();
        assert_eq!(props.get("Name"), Some(&Property::text("Alice")));
        assert_eq!(props.get("Photo"), Some(&Property::text("alice.png")));
    }

    #[test]
    fn test_load_stringifies_scalars() {
        let props = load_from_document("Born: 1953\nLiving: true\nNotes:\n").unwrap();
        assert_eq!(props.get("Born"), Some(&Property::text("1953")));
        assert_eq!(props.get("Living"), Some(&Property::text("true")));
        assert_eq!(props.get("Notes"), Some(&Property::text("")));
    }

    #[test]
    fn test_load_sequence_of_maps() {
        let props = load_from_document("Siblings:\n- file: sis.yaml\n- file: bro.yaml\n").unwrap();
        let siblings = props.get("Siblings").unwrap();
        match siblings {
            Property::Sequence(items) => assert_eq!(items.len(), 2),
            other => panic!("expected a sequence, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let err = load_from_document("Name: [unclosed").unwrap_err();
        assert!(matches!(err, KinfolkError::ParseError { .. }));
    }

    #[test]
    fn test_load_rejects_non_mapping_root() {
        let err = load_from_document("- just\n- a\n- list\n").unwrap_err();
        assert!(matches!(err, KinfolkError::ParseError { .. }));
    }

    #[test]
    fn test_dump_preserves_insertion_order() {
        let mut props = PropertyMap::new();
        props.insert("Zed", Property::text("last name first"));
        props.insert("Abel", Property::text("first name last"));

        let text = dump(&props).unwrap();
        let zed = text.find("Zed").unwrap();
        let abel = text.find("Abel").unwrap();
        assert!(zed < abel);
    }

    #[test]
    fn test_round_trip_law() {
        let mut child = PropertyMap::new();
        child.insert("file", Property::text("kid.yaml"));

        let mut props = PropertyMap::new();
        props.insert("Name", Property::text("Alice"));
        props.insert("Born", Property::text("1953"));
        props.insert("Empty", Property::text(""));
        props.insert("Children", Property::Sequence(vec![Property::Map(child)]));

        let reloaded = load_from_document(&dump(&props).unwrap()).unwrap();
        assert_eq!(reloaded, props);
    }

    #[test]
    fn test_split_document() {
        let text = "---\nName: Alice\n---\nHello, {Name}!\n";
        let (frontmatter, body) = split_document(text).unwrap();
        assert_eq!(frontmatter, "Name: Alice");
        assert_eq!(body, "Hello, {Name}!");
    }

    #[test]
    fn test_split_document_keeps_leading_indentation() {
        let text = "---\nName: Alice\n---\n    indented code\nplain\n";
        let (_, body) = split_document(text).unwrap();
        assert_eq!(body, "    indented code\nplain");
    }

    #[test]
    fn test_split_document_missing_fences() {
        assert!(matches!(
            split_document("Name: Alice\n"),
            Err(KinfolkError::ParseError { .. })
        ));
        assert!(matches!(
            split_document("---\nName: Alice\n"),
            Err(KinfolkError::ParseError { .. })
        ));
    }
}
