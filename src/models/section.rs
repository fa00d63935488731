use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::DocId;

/// A single content block belonging to one page. The `content` payload is an
/// open JSON object whose shape is conventionally determined by
/// `section_type` but is not validated against it unless content validation
/// is enabled in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: DocId,
    pub page_id: DocId,
    #[serde(rename = "type")]
    pub section_type: String,
    pub name: String,
    /// Zero-based dense position within the parent page
    pub order: i64,
    pub is_active: bool,
    pub content: Value,
    pub style: SectionStyle,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Visual overrides applied on top of a section's default presentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Overlay opacity in 0..=1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_overlay: Option<f64>,
}

impl SectionStyle {
    pub fn is_empty(&self) -> bool {
        *self == SectionStyle::default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSection {
    pub page_id: DocId,
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub style: Option<SectionStyle>,
    /// When set, `content` is seeded from the template's default content
    #[serde(default)]
    pub from_template: bool,
}

/// Partial section update. `order` and `pageId` are not mutable through
/// this path; reparenting a section across pages is unsupported.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub style: Option<SectionStyle>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
