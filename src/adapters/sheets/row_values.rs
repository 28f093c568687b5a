use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait IntoTextRows {
    fn into_text_rows(self) -> Vec<Vec<String>>;
}

/// Strings are taken as-is, `null` becomes an empty cell and anything else keeps its JSON text.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl IntoTextRows for Vec<Vec<Value>> {
    fn into_text_rows(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}

/// Rows of a `values.get` response. The API leaves `values` out entirely for an empty range.
pub fn value_range_rows(value_range: ValueRange) -> Vec<Vec<String>> {
    value_range.values.unwrap_or_default().into_text_rows()
}
