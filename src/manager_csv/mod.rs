use std::fs::OpenOptions;
use log::info;
use thiserror::Error;
use crate::config::CsvParameters;
use crate::models::WeatherRecord;

/// Struct for appending weather records to a CSV file
pub struct CsvFile {
    path: String,
}

impl CsvFile {
    /// Returns a new instance of the CsvFile struct
    ///
    /// # Arguments
    ///
    /// * 'config' - CSV sink configuration
    pub fn new(config: &CsvParameters) -> CsvFile {
        CsvFile { path: config.file.clone() }
    }

    /// Appends records as rows to the file, without any header row
    ///
    /// The file is created if it doesn't exist. Existing rows are left as is.
    ///
    /// # Arguments
    ///
    /// * 'records' - the records to append, one row each
    pub fn append(&self, records: &[WeatherRecord]) -> Result<usize, CsvError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CsvError::FileError(format!("{}: {}", self.path, e)))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()
            .map_err(|e| CsvError::FileError(format!("{}: {}", self.path, e)))?;

        info!("appended {} rows to {}", records.len(), self.path);
        Ok(records.len())
    }
}

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("FileError: {0}")]
    FileError(String),
    #[error("WriteError: {0}")]
    WriteError(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(id: u64, city: &str) -> WeatherRecord {
        WeatherRecord {
            id,
            city: city.to_string(),
            longitude: 3.2247,
            latitude: 51.2093,
            weather: "Rain".to_string(),
            description: "light rain".to_string(),
            cloud_percentage: 100,
            temperature: 10.0,
            feels_like: 9.21,
            min_temp: 9.5,
            max_temp: 10.56,
            visibility: 9000,
            wind_speed: 20.38,
            wind_deg: 250,
            pressure: 1004,
            humidity: 91,
            date: "2023-11-14".to_string(),
            time: "23:13:20".to_string(),
            sunrise: "08:00:00".to_string(),
            sunset: "17:10:00".to_string(),
        }
    }

    fn sink(dir: &tempfile::TempDir) -> (CsvFile, std::path::PathBuf) {
        let path = dir.path().join("weather_data.csv");
        let sink = CsvFile::new(&CsvParameters { file: path.to_str().unwrap().to_string() });
        (sink, path)
    }

    #[test]
    fn writes_rows_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, path) = sink(&dir);

        assert_eq!(sink.append(&[record(2800931, "Bruges")]).unwrap(), 1);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "2800931,Bruges,3.2247,51.2093,Rain,light rain,100,10.0,9.21,9.5,10.56,9000,20.38,250,1004,91,2023-11-14,23:13:20,08:00:00,17:10:00\n"
        );
    }

    #[test]
    fn second_run_appends_another_batch() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, path) = sink(&dir);
        let batch = [record(2800931, "Bruges"), record(2800866, "Brussels")];

        sink.append(&batch).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        sink.append(&batch).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first.lines().count(), 2);
        assert_eq!(second.lines().count(), 4);
        assert!(second.starts_with(&first));
        assert_eq!(second.lines().nth(0), second.lines().nth(2));
    }

    #[test]
    fn empty_batch_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, path) = sink(&dir);

        assert_eq!(sink.append(&[]).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_directory_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("weather_data.csv");
        let sink = CsvFile::new(&CsvParameters { file: path.to_str().unwrap().to_string() });

        assert!(matches!(sink.append(&[record(1, "Ghent")]), Err(CsvError::FileError(_))));
    }
}
