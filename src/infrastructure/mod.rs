//! Infrastructure concerns: filesystem path resolution.

pub mod paths;

pub use paths::{expand_tilde, get_config_dir, get_data_dir};
