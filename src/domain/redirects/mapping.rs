use std::collections::HashMap;

/// Alias → target pairs in the order the aliases first appeared.
///
/// Inserting an alias that is already present replaces its target in place, so the
/// manifest keeps the position of the first row while the last row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RedirectMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from raw spreadsheet rows. Rows with fewer than two cells,
    /// or with an empty alias or target, are dropped.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<C>>,
        C: Into<String>,
    {
        let mut mapping = RedirectMapping::new();
        for row in rows {
            let mut cells = row.into_iter().map(Into::into);
            let (Some(alias), Some(target)) = (cells.next(), cells.next()) else {
                continue;
            };
            if alias.is_empty() || target.is_empty() {
                continue;
            }
            mapping.insert(alias, target);
        }
        mapping
    }

    pub fn insert(&mut self, alias: String, target: String) {
        match self.index.get(&alias) {
            Some(&position) => self.entries[position].1 = target,
            None => {
                self.index.insert(alias.clone(), self.entries.len());
                self.entries.push((alias, target));
            }
        }
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.index
            .get(alias)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<String>, T: Into<String>> FromIterator<(A, T)> for RedirectMapping {
    fn from_iter<I: IntoIterator<Item = (A, T)>>(iter: I) -> Self {
        let mut mapping = RedirectMapping::new();
        for (alias, target) in iter {
            mapping.insert(alias.into(), target.into());
        }
        mapping
    }
}
