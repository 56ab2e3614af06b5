use std::collections::BTreeMap;

use serde::Serialize;

/// One tracked object as published in a TLE feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    pub id: u32,
    pub name: String,
    pub element_line_1: String,
    pub element_line_2: String,
}

/// Deduplicated set of records keyed by catalog number.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<u32, CatalogRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record with the same id.
    pub fn insert(&mut self, record: CatalogRecord) {
        self.records.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<CatalogRecord> {
        self.records.into_values().collect()
    }
}

impl Extend<CatalogRecord> for Catalog {
    fn extend<T: IntoIterator<Item = CatalogRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<CatalogRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogRecord>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}
