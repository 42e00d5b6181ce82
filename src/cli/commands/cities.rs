use crate::config::Config;
use crate::data::registry;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};

/// Handle the `cities` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let data_dir = cfg.data_dir();
    header(format!("Datasets in {}", data_dir.display()));

    for (city, path, exists) in registry::inventory(&data_dir) {
        if exists {
            success(format!("{city:<15} {}", path.display()));
        } else {
            warning(format!("{city:<15} {} (missing)", path.display()));
        }
    }
    Ok(())
}
