use serde::Deserialize;

/// One entry of `GET /users/{account}/repos`, reduced to the fields we display.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u64,
}
