pub mod utils;

pub use utils::{load_text_file, read_config_text, substitute_env_vars};
