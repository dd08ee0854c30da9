//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{
    create_default_config, data_dir, default_config_path, default_db_path, partition_dir,
};
