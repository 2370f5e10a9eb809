use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::Result;

/// Load a catalog from a JSON file and validate it.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog: FoodCatalog = serde_json::from_str(&content)?;
    catalog.validate()?;

    info!(path = %path.display(), foods = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Save a catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
