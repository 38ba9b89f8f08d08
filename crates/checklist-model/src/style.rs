use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: &str = "14px";
pub const DEFAULT_FONT_COLOR: &str = "#000000";

/// Flat display attributes for a column header or a single cell.
///
/// Columns and cells each own their own instance; a cell never inherits the
/// style of its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    /// Font size token, e.g. `"14px"`.
    pub font_size: String,
    /// Font color, e.g. `"#000000"`.
    pub font_color: String,
    pub bold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE.to_string(),
            font_color: DEFAULT_FONT_COLOR.to_string(),
            bold: false,
            background_color: None,
        }
    }
}
