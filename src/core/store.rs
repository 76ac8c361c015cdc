use crate::core::{
    AbbreviationRecord, CallingCodeRecord, ContinentRecord, CurrencyLinkRecord, CurrencyRecord,
    Storage,
};
use crate::utils::error::{PreviewError, Result};
use serde::de::DeserializeOwned;

pub const ABBREVIATION_FILE: &str = "country-by-abbreviation.json";
pub const CONTINENT_FILE: &str = "country-by-continent.json";
pub const CURRENCY_LINK_FILE: &str = "country-by-currency-code.json";
pub const CURRENCY_FILE: &str = "currency.json";
pub const CALLING_CODE_FILE: &str = "country-by-calling-code.json";

/// The five reference collections, in source order. Read-only input to the
/// assembler; an empty collection simply produces no matches.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub abbreviations: Vec<AbbreviationRecord>,
    pub continents: Vec<ContinentRecord>,
    pub currency_links: Vec<CurrencyLinkRecord>,
    pub currencies: Vec<CurrencyRecord>,
    pub calling_codes: Vec<CallingCodeRecord>,
}

pub struct ReferenceStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ReferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads all five collections. Every file is attempted even after a
    /// failure so the error names each broken collection, but a single
    /// failure fails the whole load; assembly never runs on partial data.
    pub async fn load(&self) -> Result<ReferenceData> {
        let mut failures = Vec::new();

        let abbreviations = self.load_collection(ABBREVIATION_FILE, &mut failures).await;
        let continents = self.load_collection(CONTINENT_FILE, &mut failures).await;
        let currency_links = self.load_collection(CURRENCY_LINK_FILE, &mut failures).await;
        let currencies = self.load_collection(CURRENCY_FILE, &mut failures).await;
        let calling_codes = self.load_collection(CALLING_CODE_FILE, &mut failures).await;

        if !failures.is_empty() {
            return Err(PreviewError::LoadError { failures });
        }

        Ok(ReferenceData {
            abbreviations,
            continents,
            currency_links,
            currencies,
            calling_codes,
        })
    }

    async fn load_collection<T: DeserializeOwned>(
        &self,
        file: &str,
        failures: &mut Vec<String>,
    ) -> Vec<T> {
        match self.try_load(file).await {
            Ok(records) => {
                tracing::debug!("Loaded {} records from {}", records.len(), file);
                records
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", file, e);
                failures.push(format!("{file}: {e}"));
                Vec::new()
            }
        }
    }

    async fn try_load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let bytes = self.storage.read_file(file).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PreviewError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PreviewError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    async fn populated_storage() -> MockStorage {
        let storage = MockStorage::new();
        storage
            .put(
                ABBREVIATION_FILE,
                r#"[{"country": "Japan", "abbreviation": "JP"}]"#,
            )
            .await;
        storage
            .put(
                CONTINENT_FILE,
                r#"[{"country": "Japan", "continent": "Asia"}]"#,
            )
            .await;
        storage
            .put(
                CURRENCY_LINK_FILE,
                r#"[{"country": "Japan", "currency_code": "JPY"}]"#,
            )
            .await;
        storage
            .put(CURRENCY_FILE, r#"[{"code": "JPY", "name": "Yen"}]"#)
            .await;
        storage
            .put(
                CALLING_CODE_FILE,
                r#"[{"country": "Japan", "calling_code": 81}]"#,
            )
            .await;
        storage
    }

    #[tokio::test]
    async fn test_load_all_collections() {
        let store = ReferenceStore::new(populated_storage().await);

        let data = store.load().await.unwrap();

        assert_eq!(data.abbreviations.len(), 1);
        assert_eq!(data.abbreviations[0].country, "Japan");
        assert_eq!(data.continents[0].continent, "Asia");
        assert_eq!(data.currency_links[0].currency_code, "JPY");
        assert_eq!(data.currencies[0].name, "Yen");
        assert_eq!(data.calling_codes[0].calling_code, 81);
    }

    #[tokio::test]
    async fn test_load_tolerates_currency_db_export_fields() {
        let storage = populated_storage().await;
        storage
            .put(
                CURRENCY_FILE,
                r#"[{"_id": "jpy0", "code": "JPY", "name": "Yen"}, {"code": "XXX"}]"#,
            )
            .await;
        let store = ReferenceStore::new(storage);

        let data = store.load().await.unwrap();

        assert_eq!(data.currencies.len(), 2);
        assert_eq!(data.currencies[0].id.as_deref(), Some("jpy0"));
        assert_eq!(data.currencies[1].name, "");
    }

    #[tokio::test]
    async fn test_load_empty_collections_is_not_an_error() {
        let storage = MockStorage::new();
        for file in [
            ABBREVIATION_FILE,
            CONTINENT_FILE,
            CURRENCY_LINK_FILE,
            CURRENCY_FILE,
            CALLING_CODE_FILE,
        ] {
            storage.put(file, "[]").await;
        }
        let store = ReferenceStore::new(storage);

        let data = store.load().await.unwrap();

        assert!(data.abbreviations.is_empty());
        assert!(data.currencies.is_empty());
    }

    #[tokio::test]
    async fn test_load_aggregates_every_failure() {
        let storage = MockStorage::new();
        storage
            .put(
                ABBREVIATION_FILE,
                r#"[{"country": "Japan", "abbreviation": "JP"}]"#,
            )
            .await;
        storage.put(CONTINENT_FILE, "not json").await;
        // The other three files are missing entirely.
        let store = ReferenceStore::new(storage);

        let err = store.load().await.unwrap_err();

        match err {
            PreviewError::LoadError { failures } => {
                assert_eq!(failures.len(), 4);
                assert!(failures[0].starts_with(CONTINENT_FILE));
                assert!(failures.iter().any(|f| f.starts_with(CURRENCY_FILE)));
            }
            other => panic!("expected LoadError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_malformed_json_fails() {
        let storage = populated_storage().await;
        storage
            .put(CURRENCY_LINK_FILE, r#"{"country": "Japan"}"#)
            .await;
        let store = ReferenceStore::new(storage);

        let err = store.load().await.unwrap_err();

        match err {
            PreviewError::LoadError { failures } => {
                assert_eq!(failures.len(), 1);
                assert!(failures[0].starts_with(CURRENCY_LINK_FILE));
            }
            other => panic!("expected LoadError, got {:?}", other),
        }
    }
}
