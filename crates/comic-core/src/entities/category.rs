//! Category entity - a browsable genre shelf

/// A comic category with a display color used by the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
}
