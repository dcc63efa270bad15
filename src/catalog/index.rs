/// Case-folded view of a product name, computed once per catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedName {
    /// Lowercased full name
    pub lowered: String,

    /// First whitespace-delimited token of `lowered`, if the name has one
    pub first_token: Option<String>,
}

impl IndexedName {
    pub fn new(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let first_token = lowered.split_whitespace().next().map(str::to_string);
        Self {
            lowered,
            first_token,
        }
    }

    /// Does a (lowercased) search term match this name?
    ///
    /// Either the name contains the term, or the term contains the name's
    /// first token. Empty terms never match.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }
        self.lowered.contains(term)
            || self
                .first_token
                .as_deref()
                .is_some_and(|token| term.contains(token))
    }
}

/// Lowercase name index, parallel to the catalog's product list
#[derive(Debug, Default)]
pub struct NameIndex {
    names: Vec<IndexedName>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str) {
        self.names.push(IndexedName::new(name));
    }

    /// Indexed names in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &IndexedName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
