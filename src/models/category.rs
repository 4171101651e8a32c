/// Label shown for transactions whose category id has no match.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Color used when a category is missing or has no color of its own.
pub const DEFAULT_COLOR: &str = "#808080";

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. "#ff8800".
    pub color: String,
}

impl Category {
    pub fn new(id: String, name: String, color: String) -> Self {
        Self { id, name, color }
    }

    /// Find a category by ID in a slice.
    pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }

    /// Display name for `id`, falling back to the placeholder label.
    pub fn label_for<'a>(categories: &'a [Category], id: &str) -> &'a str {
        Self::find_by_id(categories, id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Display color for `id`, falling back to the default color.
    pub fn color_for<'a>(categories: &'a [Category], id: &str) -> &'a str {
        Self::find_by_id(categories, id)
            .map(|c| c.color.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COLOR)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
