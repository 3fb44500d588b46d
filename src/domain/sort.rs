//! Price sort direction for catalog queries.

/// Direction for price-ordered catalog listings.
///
/// Descending is the default: any value other than the literal
/// `"ascending"` sorts from most to least expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// MongoDB sort order value (1 ascending, -1 descending).
    pub fn order(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

impl From<Option<&str>> for SortDirection {
    fn from(param: Option<&str>) -> Self {
        match param {
            Some("ascending") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}
