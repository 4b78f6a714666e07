//! Style catalog
//!
//! Ordered, read-only collection of named styles loaded from a versioned
//! style-set document. The compiled-in document lives in `data/style_sets.yaml`.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Load external style sets from YAML or JSON files
//! - 1.0.0: Initial release with the embedded style sets

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

/// Style-set document format understood by this build
pub const SUPPORTED_VERSION: u32 = 1;

const EMBEDDED_STYLE_SETS: &str = include_str!("../../../data/style_sets.yaml");

const ALPHABET_LEN: usize = 26;

/// Lookup failure surfaced to users
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Style '{0}' not found.")]
    NotFound(String),
}

/// Problems with a style-set document, raised only while loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read style sets: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid style sets YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid style sets JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported style sets version {found} (expected {})", SUPPORTED_VERSION)]
    UnsupportedVersion { found: u32 },
    #[error("style name must not be empty")]
    EmptyName,
    #[error("duplicate style name '{0}'")]
    DuplicateName(String),
    #[error("style '{style}' has invalid key '{key}' (expected a single letter a-z)")]
    InvalidKey { style: String, key: String },
    #[error("style '{style}' maps '{key}' to an empty glyph")]
    EmptyGlyph { style: String, key: char },
}

#[derive(Debug, Deserialize)]
struct StyleSetDocument {
    version: u32,
    styles: Vec<StyleDefinition>,
}

#[derive(Debug, Deserialize)]
struct StyleDefinition {
    name: String,
    #[serde(default)]
    glyphs: BTreeMap<String, String>,
}

/// A named mapping from lowercase Latin letters to display glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    name: String,
    glyphs: [Option<String>; ALPHABET_LEN],
}

impl Style {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph for a lowercase ASCII letter, `None` when the letter is unmapped
    pub fn glyph(&self, letter: char) -> Option<&str> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let slot = (letter as u8 - b'a') as usize;
        self.glyphs[slot].as_deref()
    }

    /// Number of letters with a glyph
    pub fn mapped_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }

    fn from_definition(def: StyleDefinition) -> Result<Self, CatalogError> {
        if def.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let mut glyphs: [Option<String>; ALPHABET_LEN] = Default::default();
        for (key, glyph) in def.glyphs {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_lowercase() => c,
                _ => {
                    return Err(CatalogError::InvalidKey {
                        style: def.name,
                        key,
                    })
                }
            };
            if glyph.is_empty() {
                return Err(CatalogError::EmptyGlyph {
                    style: def.name,
                    key: letter,
                });
            }
            glyphs[(letter as u8 - b'a') as usize] = Some(glyph);
        }

        Ok(Style {
            name: def.name,
            glyphs,
        })
    }
}

/// Ordered collection of styles, immutable after load
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: Vec<Style>,
    index: HashMap<String, usize>,
}

impl StyleCatalog {
    /// Catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml_str(EMBEDDED_STYLE_SETS)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let document: StyleSetDocument = serde_yaml::from_str(source)?;
        Self::from_document(document)
    }

    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let document: StyleSetDocument = serde_json::from_str(source)?;
        Self::from_document(document)
    }

    /// Load a style-set file. A `.json` extension selects JSON, anything else is parsed as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    fn from_document(document: StyleSetDocument) -> Result<Self, CatalogError> {
        if document.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: document.version,
            });
        }

        let mut styles = Vec::with_capacity(document.styles.len());
        let mut index = HashMap::with_capacity(document.styles.len());
        for def in document.styles {
            let style = Style::from_definition(def)?;
            if index.contains_key(style.name()) {
                return Err(CatalogError::DuplicateName(style.name));
            }
            index.insert(style.name.clone(), styles.len());
            styles.push(style);
        }

        Ok(Self { styles, index })
    }

    /// Style names in catalog order
    pub fn list_style_names(&self) -> Vec<&str> {
        self.styles.iter().map(Style::name).collect()
    }

    pub fn get_style(&self, name: &str) -> Result<&Style, StyleError> {
        self.index
            .get(name)
            .map(|&i| &self.styles[i])
            .ok_or_else(|| StyleError::NotFound(name.to_string()))
    }

    pub fn styles(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STYLES: &str = r#"
version: 1
styles:
  - name: squared_black
    glyphs: {"a": "🅰", "b": "🅱"}
  - name: fullwidth
    glyphs: {"a": "ａ", "z": "ｚ"}
"#;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = StyleCatalog::embedded().unwrap();
        assert!(catalog.len() > 25, "embedded catalog should span more than one page");
        assert!(catalog.get_style("fullwidth").is_ok());
        assert!(catalog.get_style("bubble").is_ok());
        assert!(catalog.get_style("script").is_ok());
    }

    #[test]
    fn test_embedded_catalog_order_is_file_order() {
        let catalog = StyleCatalog::embedded().unwrap();
        let names = catalog.list_style_names();
        assert_eq!(names[0], "bold");
        assert_eq!(names[1], "italic");
        assert_eq!(names.last(), Some(&"regional"));
    }

    #[test]
    fn test_embedded_catalog_names_unique() {
        let catalog = StyleCatalog::embedded().unwrap();
        let mut names = catalog.list_style_names();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total, "Duplicate style names found");
    }

    #[test]
    fn test_list_preserves_order() {
        let catalog = StyleCatalog::from_yaml_str(TWO_STYLES).unwrap();
        assert_eq!(catalog.list_style_names(), vec!["squared_black", "fullwidth"]);
    }

    #[test]
    fn test_get_style_not_found() {
        let catalog = StyleCatalog::from_yaml_str(TWO_STYLES).unwrap();
        let err = catalog.get_style("nonexistent-style").unwrap_err();
        assert_eq!(err, StyleError::NotFound("nonexistent-style".to_string()));
        assert_eq!(err.to_string(), "Style 'nonexistent-style' not found.");
    }

    #[test]
    fn test_glyph_lookup() {
        let catalog = StyleCatalog::from_yaml_str(TWO_STYLES).unwrap();
        let style = catalog.get_style("fullwidth").unwrap();
        assert_eq!(style.glyph('a'), Some("ａ"));
        assert_eq!(style.glyph('z'), Some("ｚ"));
        assert_eq!(style.glyph('b'), None);
        assert_eq!(style.glyph('A'), None);
        assert_eq!(style.mapped_count(), 2);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let source = r#"
version: 1
styles:
  - name: bold
    glyphs: {"a": "x"}
  - name: bold
    glyphs: {"b": "y"}
"#;
        let err = StyleCatalog::from_yaml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "bold"));
    }

    #[test]
    fn test_rejects_uppercase_key() {
        let source = r#"
version: 1
styles:
  - name: loud
    glyphs: {"A": "x"}
"#;
        let err = StyleCatalog::from_yaml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidKey { .. }));
    }

    #[test]
    fn test_rejects_multi_char_key() {
        let source = r#"
version: 1
styles:
  - name: pairs
    glyphs: {"ab": "x"}
"#;
        assert!(matches!(
            StyleCatalog::from_yaml_str(source),
            Err(CatalogError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_glyph() {
        let source = r#"
version: 1
styles:
  - name: blank
    glyphs: {"a": ""}
"#;
        assert!(matches!(
            StyleCatalog::from_yaml_str(source),
            Err(CatalogError::EmptyGlyph { key: 'a', .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let source = "version: 2\nstyles: []\n";
        assert!(matches!(
            StyleCatalog::from_yaml_str(source),
            Err(CatalogError::UnsupportedVersion { found: 2 })
        ));
    }

    #[test]
    fn test_rejects_empty_name() {
        let source = "version: 1\nstyles:\n  - name: \"  \"\n";
        assert!(matches!(
            StyleCatalog::from_yaml_str(source),
            Err(CatalogError::EmptyName)
        ));
    }

    #[test]
    fn test_from_json() {
        let source = r#"{"version": 1, "styles": [{"name": "bubble", "glyphs": {"a": "ⓐ"}}]}"#;
        let catalog = StyleCatalog::from_json_str(source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_style("bubble").unwrap().glyph('a'), Some("ⓐ"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StyleCatalog::load("/definitely/not/here/style_sets.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("style_sets_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"version": 1, "styles": [{"name": "mono", "glyphs": {"m": "𝚖"}}]}"#,
        )
        .unwrap();

        let catalog = StyleCatalog::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog.list_style_names(), vec!["mono"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = StyleCatalog::from_yaml_str("version: 1\nstyles: []\n").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_style_names().is_empty());
    }
}
