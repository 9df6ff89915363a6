use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::domain::{PollingStationInfo, StaticData};
use super::repository::{ContentRepository, PollingStationRepository};
use super::{ApplicationDataSnapshot, DataLoadError, DataProvider};

/// Reads stations from a CSV export and static texts from a JSON document.
#[derive(Debug, Clone)]
pub struct FileDataProvider {
    stations_csv: PathBuf,
    content_json: PathBuf,
}

impl FileDataProvider {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(stations_csv: P, content_json: Q) -> Self {
        Self {
            stations_csv: stations_csv.as_ref().to_path_buf(),
            content_json: content_json.as_ref().to_path_buf(),
        }
    }
}

impl DataProvider for FileDataProvider {
    fn describe(&self) -> String {
        format!(
            "files (stations: {}, content: {})",
            self.stations_csv.display(),
            self.content_json.display()
        )
    }

    fn load(&self) -> Result<ApplicationDataSnapshot, DataLoadError> {
        let stations = parse_stations(open(&self.stations_csv)?)?;
        let content = parse_content(open(&self.content_json)?)?;
        debug!(
            stations = stations.len(),
            languages = content.entries().len(),
            "parsed application data files"
        );
        Ok(ApplicationDataSnapshot::new(content, stations))
    }
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a polling-station export with the header
/// `Id,County,Locality,Street,Number,Name,Address,Capacity`.
pub fn parse_stations<R: Read>(reader: R) -> Result<PollingStationRepository, DataLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut stations = Vec::new();

    for record in csv_reader.deserialize::<StationRow>() {
        stations.push(record?.into_station());
    }

    PollingStationRepository::new(stations)
}

/// Parses a JSON array of per-language static texts.
pub fn parse_content<R: Read>(reader: R) -> Result<ContentRepository, DataLoadError> {
    let entries: Vec<StaticData> = serde_json::from_reader(reader)?;
    ContentRepository::new(entries)
}

#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "County")]
    county: String,
    #[serde(rename = "Locality")]
    locality: String,
    #[serde(rename = "Street")]
    street: String,
    #[serde(rename = "Number", default)]
    number: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Address", default)]
    address: String,
    #[serde(rename = "Capacity", default, deserialize_with = "empty_string_as_none")]
    capacity: Option<String>,
}

impl StationRow {
    fn into_station(self) -> PollingStationInfo {
        let address = if self.address.is_empty() {
            format!("{} {}, {}", self.street, self.number, self.locality)
                .trim()
                .to_string()
        } else {
            self.address
        };

        PollingStationInfo {
            id: self.id,
            county: self.county,
            locality: self.locality,
            street: self.street,
            number: self.number,
            name: self.name,
            address,
            capacity: self.capacity.and_then(|raw| raw.parse().ok()),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
