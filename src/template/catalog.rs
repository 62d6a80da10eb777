//! Catalog of stock document templates
//!
//! A catalog is an ordered list of `{key, name, content}` records loaded
//! from TOML. The embedded default carries the portal's standard Nepali
//! letter templates; users can point the CLI at their own catalog file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Error reading the catalog file
    #[error("error reading catalog file {path}: {message}")]
    IoError { path: PathBuf, message: String },

    /// Error parsing catalog TOML
    #[error("error parsing catalog TOML: {message}")]
    ParseError { message: String },

    /// Two templates share the same key
    #[error("duplicate template key: {key}")]
    DuplicateKey { key: String },
}

/// A single stock template
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateEntry {
    /// Stable lookup key (e.g. "citizenship")
    pub key: String,
    /// Human-readable name shown in the template picker
    pub name: String,
    /// Template body containing `{{name}}` placeholders
    pub content: String,
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

/// The stock templates shipped with the editor
const DEFAULT_CATALOG: &str = r##"
[[templates]]
key = "citizenship"
name = "नागरिकता सिफारिस"
content = """
श्री वडा अध्यक्ष ज्यू,
{{वडा_कार्यालय}}

विषय: नागरिकता सिफारिस सम्बन्धमा।

महोदय,
उपरोक्त सम्बन्धमा म {{नाम}}, {{ठेगाना}} स्थायी बासिन्दा, नेपाली नागरिकताको प्रमाणपत्र लिनका लागि सिफारिस पाउन यो निवेदन पेश गरेको छु। मेरो जन्म मिति {{जन्म_मिति}} हो। मेरो बुबाको नाम {{बुबाको_नाम}} र आमाको नाम {{आमाको_नाम}} हो।

उल्लेखित व्यहोरा ठीक साँचो हो, झुट्टा ठहरे कानून बमोजिम सहुँला बुझाउँला।

निवेदक,
नाम: {{नाम}}
मिति: {{मिति}}
"""

[[templates]]
key = "application"
name = "निवेदन"
content = """
श्रीमान् {{पद}} ज्यू,
{{कार्यालय}}

विषय: {{विषय}}।

महोदय,
{{व्यहोरा}}

अतः उपरोक्त व्यहोरा अनुसार आवश्यक कारबाहीका लागि अनुरोध गर्दछु।

निवेदक,
नाम: {{नाम}}
ठेगाना: {{ठेगाना}}
मिति: {{मिति}}
"""

[[templates]]
key = "leave"
name = "बिदा निवेदन"
content = """
श्रीमान् {{पद}} ज्यू,
{{कार्यालय}}

विषय: बिदा स्वीकृति सम्बन्धमा।

महोदय,
म {{नाम}}, {{पद_निवेदक}} पदमा कार्यरत कर्मचारी, {{कारण}} भएकाले मिति {{सुरु_मिति}} देखि {{अन्त्य_मिति}} सम्म बिदा स्वीकृत गरिदिनुहुन अनुरोध गर्दछु।

निवेदक,
नाम: {{नाम}}
मिति: {{मिति}}
"""

[[templates]]
key = "certificate"
name = "प्रमाणपत्र सिफारिस"
content = """
श्री वडा अध्यक्ष ज्यू,
{{वडा_कार्यालय}}

विषय: {{प्रमाणपत्र_प्रकार}} प्रमाणपत्र सिफारिस सम्बन्धमा।

महोदय,
म {{नाम}}, {{ठेगाना}} बासिन्दा, {{प्रयोजन}} प्रयोजनका लागि {{प्रमाणपत्र_प्रकार}} प्रमाणपत्रको सिफारिस पाउन यो निवेदन गरेको छु।

निवेदक,
नाम: {{नाम}}
मिति: {{मिति}}
"""
"##;

/// An ordered, key-unique collection of stock templates
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog =
            toml::from_str(content).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        for entry in &parsed.templates {
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }
        }

        Ok(Catalog {
            entries: parsed.templates,
        })
    }

    /// Get a template by key
    pub fn get(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// All templates, in catalog order
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// All template keys, in catalog order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Number of templates in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no templates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("embedded catalog should be valid TOML")
    }
}
