use crate::error::Result;
use crate::github::types::RawRepository;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;

/// Page size of the repository listing. Only the first page is ever read.
pub const PAGE_SIZE: u8 = 6;

#[derive(Serialize)]
struct ListQuery {
    sort: &'static str,
    per_page: u8,
}

/// Unauthenticated reader for one account's public repositories.
#[derive(Clone)]
pub struct ProfileClient {
    octo: Octocrab,
    account: String,
}

impl ProfileClient {
    pub fn new(api_base: &str, account: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .base_uri(api_base)?
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self {
            octo,
            account: account.to_string(),
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn route(&self) -> String {
        format!("/users/{}/repos", self.account)
    }

    /// Most recently updated repositories, newest first.
    pub async fn recent_repos(&self) -> Result<Vec<RawRepository>> {
        let query = ListQuery {
            sort: "updated",
            per_page: PAGE_SIZE,
        };
        let repos: Vec<RawRepository> = self.octo.get(self.route(), Some(&query)).await?;
        Ok(repos)
    }
}
