use crate::dictionary::SpellingMap;
use crate::error::{ConvertError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const US_COLUMN: &str = "us";
const UK_COLUMN: &str = "uk";

/// Stands in for a file name when loading from a reader.
const READER_ORIGIN: &str = "<reader>";

/// Load a dictionary file. A missing or unreadable file is `ResourceNotFound`.
pub fn load(path: &Path) -> Result<SpellingMap> {
    let file = File::open(path).map_err(|source| ConvertError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse(BufReader::new(file)).map_err(|e| e.into_convert_error(Some(path)))?;
    log::debug!("Loaded {} spellings from {}", map.len(), path.display());

    Ok(map)
}

/// Parse a dictionary from an in-memory or streamed source.
pub fn from_reader<R: Read>(reader: R) -> Result<SpellingMap> {
    let map = parse(reader).map_err(|e| e.into_convert_error(None))?;
    log::debug!("Loaded {} spellings", map.len());

    Ok(map)
}

enum LoadError {
    MissingColumn(&'static str),
    Csv(csv::Error),
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

impl LoadError {
    fn into_convert_error(self, path: Option<&Path>) -> ConvertError {
        let origin = path
            .map(|p| format!("{}: ", p.display()))
            .unwrap_or_default();

        match self {
            LoadError::MissingColumn(column) => ConvertError::malformed_schema(format!(
                "{}header has no `{}` column",
                origin, column
            )),
            LoadError::Csv(e) if e.is_io_error() => {
                let message = e.to_string();
                let path = path.unwrap_or(Path::new(READER_ORIGIN)).to_path_buf();
                match e.into_kind() {
                    csv::ErrorKind::Io(source) => ConvertError::ResourceNotFound { path, source },
                    _ => ConvertError::malformed_schema(message),
                }
            }
            LoadError::Csv(e) => ConvertError::malformed_schema(format!("{}{}", origin, e)),
        }
    }
}

fn locate_column(headers: &StringRecord, name: &'static str) -> std::result::Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn parse<R: Read>(reader: R) -> std::result::Result<SpellingMap, LoadError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    let us_idx = locate_column(&headers, US_COLUMN)?;
    let uk_idx = locate_column(&headers, UK_COLUMN)?;

    let mut map = SpellingMap::new();
    for record in reader.records() {
        let record = record?;
        // Non-flexible readers reject rows shorter than the header.
        let (Some(us), Some(uk)) = (record.get(us_idx), record.get(uk_idx)) else {
            continue;
        };

        if let Some(previous) = map.insert(us, uk) {
            if previous != uk {
                log::warn!("Duplicate entry for '{}': '{}' replaced by '{}'", us, previous, uk);
            }
        }
    }

    Ok(map)
}
