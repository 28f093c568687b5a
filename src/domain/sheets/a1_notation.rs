use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

/// Prefixes `cells` with a quoted sheet title when one is given, e.g. `'Links'!A2:B`.
pub(crate) fn qualify(cells: &str, sheet_name: Option<&str>) -> A1Notation {
    match sheet_name {
        Some(sheet_name) => A1Notation(format!("'{}'!{}", sheet_name, cells)),
        None => A1Notation(cells.to_owned()),
    }
}
