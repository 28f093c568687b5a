use super::a1_notation::{qualify, A1Notation, ToA1Notation};

/// The two alias/target columns read from the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRange {
    /// `A2:B`, leaving out the header row.
    SkipHeader,
    /// `A:B`, every row including the first.
    IncludeHeader,
}

impl SheetRange {
    pub fn from_skip_first_row(skip_first_row: bool) -> Self {
        if skip_first_row {
            SheetRange::SkipHeader
        } else {
            SheetRange::IncludeHeader
        }
    }

    pub fn cells(&self) -> &'static str {
        match self {
            SheetRange::SkipHeader => "A2:B",
            SheetRange::IncludeHeader => "A:B",
        }
    }
}

impl ToA1Notation for SheetRange {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        qualify(self.cells(), sheet_name)
    }
}

impl std::fmt::Display for SheetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_first_row_selects_a2_b() {
        let range = SheetRange::from_skip_first_row(true);
        assert_eq!(range, SheetRange::SkipHeader);
        assert_eq!(range.to_a1_notation(None).as_ref(), "A2:B");
    }

    #[test]
    fn test_include_first_row_selects_a_b() {
        let range = SheetRange::from_skip_first_row(false);
        assert_eq!(range, SheetRange::IncludeHeader);
        assert_eq!(range.to_a1_notation(None).as_ref(), "A:B");
    }

    #[test]
    fn test_range_on_named_sheet() {
        let range = SheetRange::SkipHeader.to_a1_notation(Some("Short links"));
        assert_eq!(range.as_ref(), "'Short links'!A2:B");
    }
}
