//! Storage keys under which the draft fields are persisted.

/// Key for the draft title.
pub const TITLE_KEY: &str = "blogTitle";

/// Key for the draft category.
pub const CATEGORY_KEY: &str = "blogType";

/// Key for the draft content markup.
pub const CONTENT_KEY: &str = "blogContent";

/// All keys owned by a draft, in hydration order.
pub const DRAFT_KEYS: [&str; 3] = [TITLE_KEY, CATEGORY_KEY, CONTENT_KEY];
