mod format;
mod json;

pub use format::save_png;
pub use json::write_manifest;
