use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::model::item::{BUILTIN_TITLE, Catalog, CatalogItem};

/// On-disk catalog format.
///
/// ```toml
/// title = "Cursos de Maquiagem"
///
/// [[items]]
/// id = 1
/// title = "Maquiagem - Basica"
/// price = 200.00
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

fn default_title() -> String {
    BUILTIN_TITLE.to_string()
}

/// Resolve the catalog to sell from.
///
/// Precedence: explicit path (errors are surfaced), then the user catalog
/// file if present, then the built-in course list. A missing user file is
/// not an error; a broken one is.
///
/// # Errors
///
/// Returns an error if a catalog file exists but cannot be read, parsed,
/// or validated.
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    if let Some(path) = user_catalog_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }

    debug!("using built-in catalog");
    Ok(Catalog::builtin())
}

/// `<config dir>/carrinho/catalog.toml`, if a config dir exists.
#[must_use]
pub fn user_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carrinho/catalog.toml"))
}

fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file: CatalogFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), items = file.items.len(), "loaded catalog file");

    Catalog::new(file.title, file.items)
        .with_context(|| format!("Invalid catalog in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::load_catalog;
    use crate::model::price::Price;
    use std::io::Write;

    fn write_catalog(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn explicit_file_loads() {
        let (_dir, path) = write_catalog(
            r#"
title = "Loja de Teste"

[[items]]
id = 10
title = "Curso A"
price = 99.90

[[items]]
id = 11
title = "Curso B"
price = 150
"#,
        );

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.title(), "Loja de Teste");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(10).map(|i| i.price), Some(Price::from_cents(9_990)));
        assert_eq!(catalog.get(11).map(|i| i.price), Some(Price::from_reais(150)));
    }

    #[test]
    fn title_defaults_when_omitted() {
        let (_dir, path) = write_catalog(
            r#"
[[items]]
id = 1
title = "Curso"
price = 10.0
"#,
        );
        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.title(), "Cursos de Maquiagem");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_catalog(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn duplicate_ids_are_rejected_at_load() {
        let (_dir, path) = write_catalog(
            r#"
[[items]]
id = 1
title = "Curso A"
price = 10.0

[[items]]
id = 1
title = "Curso B"
price = 20.0
"#,
        );
        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid catalog"));
    }

    #[test]
    fn negative_price_is_rejected_at_parse() {
        let (_dir, path) = write_catalog(
            r#"
[[items]]
id = 1
title = "Curso"
price = -5.0
"#,
        );
        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
