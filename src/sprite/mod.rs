mod loader;
mod resizer;
mod scanner;

pub use loader::{basename, collect_png_files, load_image};
pub use resizer::{crop_window, normalize, scaled_width};
pub use scanner::{RowBand, find_bands};
