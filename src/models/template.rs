use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::DocId;

/// Catalog definition of a section kind: the default content new instances
/// start from, plus the field schema an editor UI renders its form with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTemplate {
    pub id: DocId,
    #[serde(rename = "type")]
    pub template_type: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub thumbnail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub default_content: Value,
    #[serde(rename = "schema")]
    pub field_schema: Vec<FieldSpec>,
    /// Catalog display order in the section picker
    pub order: i64,
    pub is_active: bool,
    pub created_at: i64,
}

/// One edit-form field of a template's schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Allowed values for `Select` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Wysiwyg,
    Image,
    Select,
    Repeater,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_tags() {
        assert_eq!(
            serde_json::to_value(FieldKind::Wysiwyg).unwrap(),
            serde_json::json!("wysiwyg")
        );
        let kind: FieldKind = serde_json::from_value(serde_json::json!("repeater")).unwrap();
        assert_eq!(kind, FieldKind::Repeater);
    }
}
