pub mod environment;
pub mod files;

pub use environment::{get_history_path, get_home_dir, non_empty_var};
pub use files::{read_text_file, validate_file_size};
