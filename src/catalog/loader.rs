use std::fs;
use std::path::Path;

use reqwest::Client;

use crate::catalog::error::CatalogError;
use crate::catalog::parser::parse_tle_text;
use crate::catalog::types::{Catalog, CatalogRecord};
use crate::web::config::{CatalogConfig, CatalogGroup};

/// Builds a fresh catalog from the configured remote groups and TLE folder.
pub struct CatalogFetcher {
    client: Client,
    config: CatalogConfig,
}

impl CatalogFetcher {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("orbit-risk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Download every group and merge the results, last write wins.
    ///
    /// A group that cannot be fetched is logged and skipped, so a complete
    /// outage produces an empty catalog rather than an error.
    pub async fn fetch_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();

        for (i, group) in self.config.groups.iter().enumerate() {
            if i > 0 && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }

            match self.fetch_group(group).await {
                Ok(records) => {
                    log::info!("Fetched {} objects from '{}'", records.len(), group.name);
                    catalog.extend(records);
                }
                Err(e) => {
                    log::warn!("Failed to fetch catalog group '{}': {}", group.name, e);
                    // Continue with other groups
                }
            }
        }

        if let Some(ref folder) = self.config.tle_folder {
            match load_folder(folder) {
                Ok(records) => {
                    log::info!(
                        "Loaded {} objects from {}",
                        records.len(),
                        folder.display()
                    );
                    catalog.extend(records);
                }
                Err(e) => log::warn!("Failed to load TLE folder: {}", e),
            }
        }

        if catalog.is_empty() {
            log::warn!("Catalog is empty, assessments will report zero occupancy");
        } else {
            log::info!("Catalog ready: {} unique objects", catalog.len());
        }
        catalog
    }

    async fn fetch_group(&self, group: &CatalogGroup) -> Result<Vec<CatalogRecord>, CatalogError> {
        let url = group_url(&self.config.base_url, group);
        log::debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status {
                source_name: group.name.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(valid_records(&group.name, &body))
    }
}

fn group_url(base_url: &str, group: &CatalogGroup) -> String {
    format!("{}?{}&FORMAT=tle", base_url, group.query)
}

/// Load all `.tle` and `.txt` files from a directory.
pub fn load_folder(dir: &Path) -> Result<Vec<CatalogRecord>, CatalogError> {
    if !dir.exists() {
        return Err(CatalogError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_tle = path
            .extension()
            .map(|ext| ext == "tle" || ext == "txt")
            .unwrap_or(false);
        if !is_tle {
            continue;
        }

        match fs::read_to_string(&path) {
            Ok(content) => {
                let source = path.display().to_string();
                records.extend(valid_records(&source, &content));
            }
            Err(e) => log::warn!("Failed to read TLE file {}: {}", path.display(), e),
        }
    }

    Ok(records)
}

fn valid_records(source: &str, content: &str) -> Vec<CatalogRecord> {
    parse_tle_text(content)
        .into_iter()
        .filter_map(|parsed| match parsed {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("Skipping TLE block from {}: {}", source, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{record_at, ISS_LINE1, ISS_LINE2};
    use std::path::PathBuf;
    use std::time::Duration;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("orbit-risk-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn offline_config(folder: Option<PathBuf>) -> CatalogConfig {
        CatalogConfig {
            groups: Vec::new(),
            tle_folder: folder,
            request_delay: Duration::ZERO,
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn group_url_appends_tle_format() {
        let group = CatalogGroup {
            name: "stations".into(),
            query: "GROUP=stations".into(),
        };
        assert_eq!(
            group_url("https://celestrak.org/NORAD/elements/gp.php", &group),
            "https://celestrak.org/NORAD/elements/gp.php?GROUP=stations&FORMAT=tle"
        );
    }

    #[test]
    fn folder_loader_reads_tle_and_txt_only() {
        let dir = scratch_dir("folder");
        let other = record_at(40000, 700.0, 98.0);
        fs::write(
            dir.join("iss.tle"),
            format!("ISS\n{}\n{}\n", ISS_LINE1, ISS_LINE2),
        )
        .unwrap();
        fs::write(
            dir.join("other.txt"),
            format!("{}\n{}\n{}\n", other.name, other.element_line_1, other.element_line_2),
        )
        .unwrap();
        fs::write(dir.join("notes.md"), format!("X\n{}\n{}\n", ISS_LINE1, ISS_LINE2)).unwrap();

        let mut ids: Vec<u32> = load_folder(&dir).unwrap().iter().map(|r| r.id).collect();
        ids.sort();
        assert_eq!(ids, vec![25544, 40000]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = std::env::temp_dir().join("orbit-risk-does-not-exist");
        assert!(matches!(
            load_folder(&dir),
            Err(CatalogError::DirectoryNotFound(_))
        ));
    }

    #[tokio::test]
    async fn fetcher_without_sources_yields_empty_catalog() {
        let fetcher = CatalogFetcher::new(offline_config(None)).unwrap();
        assert!(fetcher.fetch_catalog().await.is_empty());
    }

    #[tokio::test]
    async fn fetcher_deduplicates_folder_records() {
        let dir = scratch_dir("dedupe");
        let block = format!("ISS\n{}\n{}\n", ISS_LINE1, ISS_LINE2);
        fs::write(dir.join("a.tle"), &block).unwrap();
        fs::write(dir.join("b.tle"), &block).unwrap();
        fs::write(dir.join("broken.tle"), format!("BAD\n{}\n{}\n", ISS_LINE1, &ISS_LINE2[..50]))
            .unwrap();

        let fetcher = CatalogFetcher::new(offline_config(Some(dir.clone()))).unwrap();
        let catalog = fetcher.fetch_catalog().await;
        assert_eq!(catalog.len(), 1);

        let _ = fs::remove_dir_all(&dir);
    }
}
