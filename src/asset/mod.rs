//! Image copying into the site's static directory.

mod copy;

pub use copy::{CopyOutcome, copy_image, ensure_static_dir};
