use std::path::{Path, PathBuf};

use domain::dto::{EventReportFilters, UserReportFilters};
use tracing::info;
use uuid::Uuid;

use super::ApiClient;
use crate::error::Result;

/// A downloaded spreadsheet export.
#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Report {
    /// Named after the last path segment of the export endpoint.
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.name)
    }

    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        tokio::fs::write(&path, &self.bytes).await?;
        info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

impl ApiClient {
    pub async fn users_report(&self, filters: &UserReportFilters) -> Result<Report> {
        let bytes = self.bytes(self.get_with("/reports/users", filters)).await?;
        Ok(report("/reports/users", bytes))
    }

    pub async fn events_report(&self, filters: &EventReportFilters) -> Result<Report> {
        let bytes = self.bytes(self.get_with("/reports/events", filters)).await?;
        Ok(report("/reports/events", bytes))
    }

    pub async fn event_report(&self, event_id: Uuid) -> Result<Report> {
        let path = format!("/reports/events/{}", event_id);
        let bytes = self.bytes(self.get(&path)).await?;
        Ok(report(&path, bytes))
    }
}

fn report(path: &str, bytes: Vec<u8>) -> Report {
    let name = path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("report")
        .to_string();
    Report { name, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_named_after_endpoint() {
        assert_eq!(report("/reports/users", vec![]).file_name(), "users.xlsx");

        let id = Uuid::new_v4();
        let named = report(&format!("/reports/events/{}", id), vec![1, 2]);
        assert_eq!(named.file_name(), format!("{}.xlsx", id));
    }

    #[tokio::test]
    async fn test_write_to_directory() {
        let dir = std::env::temp_dir();
        let report = Report {
            name: format!("report-{}", Uuid::new_v4()),
            bytes: b"PK\x03\x04".to_vec(),
        };

        let path = report.write_to(&dir).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), report.bytes);
        std::fs::remove_file(path).unwrap();
    }
}
