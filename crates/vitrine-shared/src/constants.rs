/// Storage slot holding the JSON-serialized image collection
pub const IMAGES_SLOT: &str = "gallery-images";

/// Storage slot holding the theme flag (`"dark"` or `"light"`)
pub const THEME_SLOT: &str = "theme";

/// Number of random base36 characters appended to a record id
pub const ID_SUFFIX_LEN: usize = 9;

/// Content types starting with this prefix are accepted for ingestion
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Declared content type by lowercase file extension.
pub const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
];
