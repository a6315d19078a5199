use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::info;

/// One job advertisement. Identified by its position in the loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "job_title")]
    pub title: String,
    #[serde(rename = "company_name")]
    pub company: String,
    pub location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub salary: Option<String>,
    #[serde(
        rename = "job_description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub description: Option<String>,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            salary: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    /// Lower-cased title and description joined by spaces. A missing
    /// description contributes nothing.
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        text.push(' ');
        if let Some(description) = &self.description {
            text.push_str(&description.to_lowercase());
            text.push(' ');
        }
        text
    }
}

#[derive(Debug, Error)]
pub enum PostingLoadError {
    #[error("failed to open postings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed postings CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads postings from CSV with headers
/// `job_title, company_name, location[, salary][, job_description]`.
pub fn parse_postings<R: Read>(reader: R) -> Result<Vec<JobPosting>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<JobPosting>().collect()
}

/// Loads the postings table from a CSV file on disk.
pub fn load_postings(path: &Path) -> Result<Vec<JobPosting>, PostingLoadError> {
    let file = File::open(path).map_err(|source| PostingLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let postings = parse_postings(file)?;
    info!("Loaded {} job postings from {}", postings.len(), path.display());
    Ok(postings)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
