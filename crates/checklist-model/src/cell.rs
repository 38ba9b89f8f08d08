use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::CellId;
use crate::style::CellStyle;

/// One row's content for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub id: CellId,
    /// Primary text.
    pub value: String,
    /// Free-form bullet annotations, in display order.
    #[serde(default)]
    pub sub_fields: Vec<String>,
    #[serde(default)]
    pub style: CellStyle,
    /// Embedded image payload. Format and encoding belong to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Cell {
    /// A blank cell with a fresh identifier and default style.
    pub fn empty() -> Self {
        Self {
            id: CellId::generate(),
            value: String::new(),
            sub_fields: Vec::new(),
            style: CellStyle::default(),
            image: None,
        }
    }

    /// Deep copy of this cell under a new identifier.
    pub fn duplicate(&self) -> Self {
        Self {
            id: CellId::generate(),
            ..self.clone()
        }
    }

    /// Merge the fields present in `update` into this cell.
    pub fn apply(&mut self, update: CellUpdate) {
        if let Some(value) = update.value {
            self.value = value;
        }
        if let Some(sub_fields) = update.sub_fields {
            self.sub_fields = sub_fields;
        }
        if let Some(style) = update.style {
            self.style = style;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.sub_fields.is_empty() && self.image.is_none()
    }
}

/// Partial cell update. Absent fields are left untouched.
///
/// `image` distinguishes "leave as is" (`None`) from "clear" (`Some(None)`);
/// on the wire an explicit `null` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<String>>,
}

impl CellUpdate {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_sub_fields(mut self, sub_fields: Vec<String>) -> Self {
        self.sub_fields = Some(sub_fields);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.sub_fields.is_none()
            && self.style.is_none()
            && self.image.is_none()
    }
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_present_fields() {
        let mut cell = Cell::empty();
        cell.sub_fields = vec!["keep".to_string()];
        let id = cell.id.clone();

        cell.apply(CellUpdate::value("Check oil"));

        assert_eq!(cell.id, id);
        assert_eq!(cell.value, "Check oil");
        assert_eq!(cell.sub_fields, vec!["keep".to_string()]);
    }

    #[test]
    fn explicit_null_image_clears() {
        let mut cell = Cell::empty();
        cell.image = Some("data:image/png;base64,AAAA".to_string());

        let update: CellUpdate = serde_json::from_str(r#"{"image": null}"#).expect("parse");
        assert_eq!(update.image, Some(None));
        cell.apply(update);
        assert!(cell.image.is_none());

        let untouched: CellUpdate = serde_json::from_str(r#"{"value": "x"}"#).expect("parse");
        assert_eq!(untouched.image, None);
    }

    #[test]
    fn duplicate_changes_only_the_id() {
        let mut cell = Cell::empty();
        cell.value = "Tyres".to_string();
        cell.style.bold = true;
        let copy = cell.duplicate();
        assert_ne!(copy.id, cell.id);
        assert_eq!(copy.value, cell.value);
        assert_eq!(copy.style, cell.style);
    }
}
