pub mod image;

use std::path::Path;

/// Stores a media to a file
pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}

pub(crate) fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
