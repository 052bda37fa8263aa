use crate::utils::extension;
use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Raster image extensions, compared case-sensitively.
    static ref IMAGE_EXTENSIONS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert(".png");
        s.insert(".jpg");
        s.insert(".jpeg");
        s.insert(".gif");
        s.insert(".ico");
        s.insert(".bmp");
        s.insert(".webp");
        s
    };
}

pub fn is_image(path: &str) -> bool {
    IMAGE_EXTENSIONS.contains(extension(path))
}

pub fn is_jsx(path: &str) -> bool {
    extension(path) == ".jsx"
}

/// Matches `.ts` exactly: `.tsx` files are not counted, `.d.ts` declarations are.
pub fn is_typescript(path: &str) -> bool {
    extension(path) == ".ts"
}
