//! Resolves a city to its dataset file inside the data directory.

use crate::models::City;
use std::path::{Path, PathBuf};

pub fn data_file(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Every city with its resolved file and whether that file exists.
pub fn inventory(data_dir: &Path) -> Vec<(City, PathBuf, bool)> {
    City::ALL
        .into_iter()
        .map(|city| {
            let path = data_file(data_dir, city);
            let exists = path.is_file();
            (city, path, exists)
        })
        .collect()
}
