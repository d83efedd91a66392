use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::models::{Archive, Outcome};

/// Write a batch of outcomes as pretty JSON, stamped with the current time.
pub fn save_to_file(results: &[Outcome], path: &Path) -> Result<()> {
    let archive = Archive {
        archived_at: chrono::Utc::now().to_rfc3339(),
        results: results.to_vec(),
    };
    let json = serde_json::to_string_pretty(&archive)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ErrorBody, ExtractionResult, Source, Strategy};

    #[test]
    fn test_archive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");
        let results = vec![
            Outcome::Extracted(ExtractionResult {
                url: "https://www.pichau.com.br/x".into(),
                title: Some("Gabinete".into()),
                price_vista: Some(299.9),
                price_parcelado: Some(352.82),
                source: Source {
                    hostname: "www.pichau.com.br".into(),
                    strategy: Strategy::Pichau,
                    inferred: None,
                },
            }),
            Outcome::Failed(ErrorBody::collect_failed("HTTP 404")),
        ];

        save_to_file(&results, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let archive: Archive = serde_json::from_str(&text).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&archive.archived_at).is_ok());
        assert_eq!(archive.results, results);
    }
}
