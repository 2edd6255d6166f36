pub mod paths;

pub use paths::{default_config_path, workmate_home};
