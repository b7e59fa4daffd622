//! YAML pillar catalog loader.
//!
//! The catalog file lists pillars under a top-level `pillars` key:
//!
//! ```yaml
//! pillars:
//!   - id: service
//!     name: Community Service
//!     period: 1
//!     pointsPerYear: 20
//!     duration: 3
//! ```

use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use super::InMemoryPillarCatalog;
use crate::adapters::storage::StorageError;
use crate::domain::activity::Pillar;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    pillars: Vec<Pillar>,
}

/// Parses catalog YAML into an in-memory catalog.
///
/// `source` names the origin in error messages.
pub fn parse_pillar_catalog(
    yaml: &str,
    source: impl AsRef<Path>,
) -> Result<InMemoryPillarCatalog, StorageError> {
    let file: CatalogFile = serde_yaml::from_str(yaml)
        .map_err(|e| StorageError::deserialization(source.as_ref(), e))?;
    Ok(InMemoryPillarCatalog::new(file.pillars))
}

/// Reads and parses a catalog file.
pub async fn load_pillar_catalog<P: AsRef<Path>>(
    path: P,
) -> Result<InMemoryPillarCatalog, StorageError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| StorageError::io(path, e))?;

    let catalog = parse_pillar_catalog(&yaml, path)?;
    tracing::info!(path = %path.display(), pillars = catalog.len(), "pillar catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PillarCatalog;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
pillars:
  - id: service
    name: Community Service
    period: 1
    pointsPerYear: 20
    duration: 3
  - id: research
    name: Research
    period: 2
    pointsPerYear: 12.5
    duration: 2
"#;

    #[tokio::test]
    async fn parses_camel_case_pillars() {
        let catalog = parse_pillar_catalog(CATALOG, "inline").unwrap();

        let all = catalog.all_pillars().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Community Service");
        assert_eq!(all[0].total_budget().value(), 60.0);
        assert_eq!(all[1].points_per_year.value(), 12.5);
    }

    #[test]
    fn missing_pillars_key_is_empty_catalog() {
        let catalog = parse_pillar_catalog("{}", "inline").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = parse_pillar_catalog("pillars: [ { id: ", "inline");
        assert!(matches!(result, Err(StorageError::DeserializationFailed { .. })));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pillars.yaml");
        tokio::fs::write(&path, CATALOG).await.unwrap();

        let catalog = load_pillar_catalog(&path).await.unwrap();

        assert_eq!(catalog.pillars_for_period(2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_pillar_catalog(temp_dir.path().join("none.yaml")).await;
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
