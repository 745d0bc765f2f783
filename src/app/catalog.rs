use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// One published deck in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
}

#[derive(Serialize)]
struct NewEntry<'a> {
    title: &'a str,
}

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the deck-catalog REST collaborator. Callers re-fetch the full
/// list after every create/delete instead of patching it locally.
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full collection.
    pub fn list(&self) -> Result<Vec<CatalogEntry>> {
        let response = minreq::get(self.collection_url())
            .with_timeout(REQUEST_TIMEOUT_SECS)
            .send()?;
        Self::check_status("list", &response)?;
        Ok(response.json::<Vec<CatalogEntry>>()?)
    }

    /// Publish one entry.
    pub fn create(&self, title: &str) -> Result<()> {
        let response = minreq::post(self.collection_url())
            .with_timeout(REQUEST_TIMEOUT_SECS)
            .with_json(&NewEntry { title })?
            .send()?;
        Self::check_status("publish", &response)
    }

    /// Remove one entry by identifier.
    pub fn delete(&self, id: &str) -> Result<()> {
        let response = minreq::delete(self.entry_url(id))
            .with_timeout(REQUEST_TIMEOUT_SECS)
            .send()?;
        Self::check_status("delete", &response)
    }

    fn collection_url(&self) -> String {
        format!("{}/decks", self.base_url)
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/decks/{}", self.base_url, id)
    }

    fn check_status(action: &str, response: &minreq::Response) -> Result<()> {
        if (200..300).contains(&response.status_code) {
            Ok(())
        } else {
            Err(AppError::Catalog(format!(
                "{} failed: server returned {} {}",
                action, response.status_code, response.reason_phrase
            )))
        }
    }
}
