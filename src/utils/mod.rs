pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{file_url_path, is_valid_url};
