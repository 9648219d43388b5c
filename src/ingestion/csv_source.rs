//! CSV source
//!
//! CSV → `RawRecord` → `Team` / `Match`.
//!
//! ## 数据格式
//! ```text
//! teams.csv:   city,team,team_id,type,geo,grouping
//! matches.csv: match_id,label,group,date,home,away,winner,home_score,away_score
//! ```

use crate::domain::collection::{TeamCollection, TEAM_CAPACITY};
use crate::domain::entities::{Match, RawRecord, Team};
use crate::domain::errors::RecordError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 读取器来源名称（无文件路径时用于错误信息）
const READER_ORIGIN: &str = "<reader>";

/// 摄取配置（路径由调用方提供）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    /// Team CSV file
    pub teams_path: PathBuf,

    /// Match CSV file (optional)
    pub matches_path: Option<PathBuf>,
}

impl IngestionConfig {
    pub fn new(teams_path: impl Into<PathBuf>) -> Self {
        Self {
            teams_path: teams_path.into(),
            matches_path: None,
        }
    }

    pub fn with_matches(mut self, matches_path: impl Into<PathBuf>) -> Self {
        self.matches_path = Some(matches_path.into());
        self
    }
}

/// 摄取错误
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {origin}: {source}")]
    Csv { origin: String, source: csv::Error },

    #[error("row {row} of {origin}: {source}")]
    Record {
        origin: String,
        /// 1-based data row (header excluded)
        row: usize,
        source: RecordError,
    },
}

/// Reads every data row of a headed CSV into raw records
pub fn read_raw_records<R: Read>(rdr: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.deserialize::<RawRecord>().collect()
}

/// 读取记录并逐行构造实体，第一处失败即返回
fn build_from_reader<R, T, F>(rdr: R, origin: &str, build: F) -> Result<Vec<T>, IngestionError>
where
    R: Read,
    F: Fn(&RawRecord) -> Result<T, RecordError>,
{
    let records = read_raw_records(rdr).map_err(|source| IngestionError::Csv {
        origin: origin.to_string(),
        source,
    })?;

    records
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            build(raw).map_err(|source| IngestionError::Record {
                origin: origin.to_string(),
                row: i + 1,
                source,
            })
        })
        .collect()
}

fn open(path: &Path) -> Result<File, IngestionError> {
    debug!("opening {}", path.display());
    File::open(path).map_err(|source| IngestionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds teams from CSV data
pub fn load_teams_from_reader<R: Read>(rdr: R) -> Result<Vec<Team>, IngestionError> {
    build_from_reader(rdr, READER_ORIGIN, Team::from_raw)
}

/// Builds matches from CSV data, in file order
pub fn load_matches_from_reader<R: Read>(rdr: R) -> Result<Vec<Match>, IngestionError> {
    build_from_reader(rdr, READER_ORIGIN, Match::from_raw)
}

/// Loads teams from a CSV file
pub fn load_teams(path: &Path) -> Result<Vec<Team>, IngestionError> {
    let origin = path.display().to_string();
    let teams = build_from_reader(open(path)?, &origin, Team::from_raw)?;
    info!("loaded {} teams from {}", teams.len(), origin);
    Ok(teams)
}

/// Loads matches from a CSV file, in file order
pub fn load_matches(path: &Path) -> Result<Vec<Match>, IngestionError> {
    let origin = path.display().to_string();
    let matches = build_from_reader(open(path)?, &origin, Match::from_raw)?;
    info!("loaded {} matches from {}", matches.len(), origin);
    Ok(matches)
}

/// Loads teams from a CSV file straight into a sorted `TeamCollection`
pub fn load_team_collection(path: &Path) -> Result<TeamCollection, IngestionError> {
    let teams = load_teams(path)?;
    if teams.len() > TEAM_CAPACITY {
        warn!(
            "{} teams exceed collection capacity {}, {} will be evicted",
            teams.len(),
            TEAM_CAPACITY,
            teams.len() - TEAM_CAPACITY
        );
    }
    Ok(TeamCollection::new(teams))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS_CSV: &str = "\
city,team,team_id,type,geo,grouping
Doha,Qatar,1,national,Asia,A
Quito,Ecuador,2,national,South America,A
London,England,5,national,Europe,B
";

    const MATCHES_CSV: &str = "\
match_id,label,group,date,home,away,winner,home_score,away_score
2,England x Iran,B,2022-11-21T13:00:00,5,6,5,6,2
1,Qatar x Ecuador,A,2022-11-20T16:00:00,1,2,2,0,2
";

    #[test]
    fn test_read_raw_records() {
        let records = read_raw_records(TEAMS_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("team").map(String::as_str), Some("Qatar"));
        assert_eq!(records[2].get("grouping").map(String::as_str), Some("B"));
    }

    #[test]
    fn test_load_teams_from_reader() {
        let teams = load_teams_from_reader(TEAMS_CSV.as_bytes()).unwrap();
        let names: Vec<_> = teams.iter().map(|t| t.team_name()).collect();
        assert_eq!(names, vec!["Qatar", "Ecuador", "England"]);
    }

    #[test]
    fn test_missing_column_reports_row() {
        let csv = "city,team,team_id,type,geo\nDoha,Qatar,1,national,Asia\n";
        let err = load_teams_from_reader(csv.as_bytes()).unwrap_err();

        match err {
            IngestionError::Record { row, source, .. } => {
                assert_eq!(row, 1);
                assert!(matches!(source, RecordError::MissingField { field: "grouping", .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_matches_from_reader() {
        let matches = load_matches_from_reader(MATCHES_CSV.as_bytes()).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].label(), Some("England x Iran"));
        assert_eq!(matches[1].score(), Some((0, 2)));
    }

    #[test]
    fn test_bad_match_date() {
        let csv = "label,date\nopener,2022-11-20\nbroken,20/11/2022\n";
        let err = load_matches_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestionError::Record { row: 2, source: RecordError::DateParse { .. }, .. }
        ));
    }

    #[test]
    fn test_ragged_csv() {
        let csv = "city,team\nDoha,Qatar,extra\n";
        assert!(matches!(
            load_teams_from_reader(csv.as_bytes()),
            Err(IngestionError::Csv { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_teams(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, IngestionError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn test_config_builder() {
        let config = IngestionConfig::new("data/teams.csv").with_matches("data/matches.csv");
        assert_eq!(config.teams_path, PathBuf::from("data/teams.csv"));
        assert_eq!(config.matches_path, Some(PathBuf::from("data/matches.csv")));
    }
}
