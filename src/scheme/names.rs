//! Industry code to label tables

/// Short label and long description for one industry code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryName {
    /// Industry code within the scheme
    pub code: u8,
    /// Short label, e.g. `Hlth`
    pub label: &'static str,
    /// Long description from the published classification
    pub description: &'static str,
}

impl IndustryName {
    #[must_use]
    pub const fn new(code: u8, label: &'static str, description: &'static str) -> Self {
        Self {
            code,
            label,
            description,
        }
    }
}

/// Code to label mapping for one scheme
#[derive(Debug, Clone, Copy)]
pub struct NameTable {
    entries: &'static [IndustryName],
}

impl NameTable {
    #[must_use]
    pub const fn new(entries: &'static [IndustryName]) -> Self {
        Self { entries }
    }

    /// Look up the entry for `code`
    #[must_use]
    pub fn get(&self, code: u8) -> Option<&'static IndustryName> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in code order
    #[must_use]
    pub const fn entries(&self) -> &'static [IndustryName] {
        self.entries
    }
}
