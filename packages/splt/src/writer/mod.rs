//! HCL output generation for split files.

mod render;
mod save;

pub use render::render_blocks;
pub use save::{ensure_parent_dir, output_path, save_file};
