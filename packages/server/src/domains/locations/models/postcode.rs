use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domains::locations::LocationError;

pub const DEFAULT_LIMIT: usize = 10;

/// One row of the postcode asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub postcode: String,
    pub locality: String,
    pub state: String,
    #[serde(default, alias = "latitude", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(
        default,
        rename = "long",
        alias = "lng",
        alias = "longitude",
        skip_serializing_if = "Option::is_none"
    )]
    pub lng: Option<f64>,
}

impl LocationRecord {
    /// e.g. "Newtown NSW 2042"
    pub fn display_label(&self) -> String {
        format!("{} {} {}", self.locality, self.state, self.postcode)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }
}

/// Postcode records loaded once and searched in memory.
#[derive(Debug, Clone, Default)]
pub struct PostcodeIndex {
    records: Vec<LocationRecord>,
}

impl PostcodeIndex {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// Load from CSV with a header row naming at least `postcode`, `locality`
    /// and `state`. Extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LocationError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let records = csv
            .deserialize::<LocationRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LocationError> {
        let path = path.as_ref();
        let load_err = |source| LocationError::Load {
            path: path.to_path_buf(),
            source,
        };

        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(load_err)?;

        let records = csv
            .deserialize::<LocationRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(load_err)?;

        info!(path = %path.display(), count = records.len(), "Loaded postcodes");
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Case-insensitive lookup: postcode prefix or locality substring.
    ///
    /// Localities starting with the query rank first; otherwise file order is
    /// kept. Repeated `(postcode, locality)` rows are returned once. An empty
    /// query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&LocationRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut prefix = Vec::new();
        let mut other = Vec::new();

        for record in &self.records {
            let locality = record.locality.to_lowercase();
            let is_prefix = locality.starts_with(&needle);
            let matches = is_prefix
                || record.postcode.starts_with(&needle)
                || locality.contains(&needle);

            if !matches || !seen.insert((record.postcode.as_str(), locality)) {
                continue;
            }

            if is_prefix {
                prefix.push(record);
            } else {
                other.push(record);
            }
        }

        let results: Vec<_> = prefix.into_iter().chain(other).take(limit).collect();
        debug!(query = %query, matches = results.len(), "Postcode search");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,postcode,locality,state,long,lat
1,2042,NEWTOWN,NSW,151.179,-33.897
2,2042,ENMORE,NSW,151.173,-33.900
3,3065,FITZROY,VIC,144.978,-37.798
4,2042,NEWTOWN,NSW,151.179,-33.897
5,2010,SURRY HILLS,NSW,151.211,-33.886
6,6000,PERTH,WA,,
7,2795,BATHURST,NSW,149.578,-33.419
";

    fn index() -> PostcodeIndex {
        PostcodeIndex::from_reader(CSV.as_bytes()).unwrap()
    }

    fn localities(results: &[&LocationRecord]) -> Vec<String> {
        results.iter().map(|r| r.locality.clone()).collect()
    }

    #[test]
    fn loads_extra_columns_and_missing_coordinates() {
        let index = index();
        assert_eq!(index.len(), 7);
        assert_eq!(index.records()[0].coordinates(), Some((-33.897, 151.179)));
        assert_eq!(index.records()[5].coordinates(), None);
    }

    #[test]
    fn search_by_postcode_prefix_dedupes() {
        let index = index();
        let results = index.search("2042", 10);
        assert_eq!(localities(&results), vec!["NEWTOWN", "ENMORE"]);
    }

    #[test]
    fn locality_prefix_ranks_before_substring() {
        let index = index();
        assert_eq!(localities(&index.search("hurst", 10)), vec!["BATHURST"]);
        assert_eq!(localities(&index.search("Ba", 10)), vec!["BATHURST"]);
        assert_eq!(
            localities(&index.search("s", 10)),
            vec!["SURRY HILLS", "BATHURST"]
        );
    }

    #[test]
    fn empty_query_and_limit() {
        let index = index();
        assert!(index.search("   ", 10).is_empty());
        assert!(index.search("NSW", 10).is_empty());
        assert_eq!(index.search("2", 2).len(), 2);
    }

    #[test]
    fn display_label_format() {
        let index = index();
        let results = index.search("fitzroy", 1);
        assert_eq!(results[0].display_label(), "FITZROY VIC 3065");
        assert_eq!(index.records().iter().filter(|r| r.postcode == "2042").count(), 3);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = PostcodeIndex::from_reader("postcode,state\n2042,NSW\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LocationError::Parse(_)));
    }

    #[test]
    fn loads_from_file_and_reports_missing_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let index = PostcodeIndex::from_path(file.path()).unwrap();
        assert_eq!(index.len(), 7);

        let dir = tempfile::tempdir().unwrap();
        let err = PostcodeIndex::from_path(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LocationError::Load { .. }));
        assert_eq!(err.display_message(), "Failed to load locations");
    }
}
