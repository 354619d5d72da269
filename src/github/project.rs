use crate::github::types::RawRepository;

/// Badge shown for repositories that carry no topics.
pub const PLACEHOLDER_TECH: &str = "Write-up";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub tech: Vec<String>,
    pub stars: u64,
}

impl From<RawRepository> for ProjectCard {
    fn from(repo: RawRepository) -> Self {
        let tech = if repo.topics.is_empty() {
            vec![PLACEHOLDER_TECH.to_string()]
        } else {
            repo.topics
        };

        Self {
            title: repo.name,
            description: repo.description,
            url: repo.html_url,
            tech,
            stars: repo.stargazers_count,
        }
    }
}

pub fn map_repositories(repos: Vec<RawRepository>) -> Vec<ProjectCard> {
    repos.into_iter().map(ProjectCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_repo;

    #[test]
    fn empty_topics_get_placeholder() {
        let body = r#"[{"name":"foo","description":null,"html_url":"https://x/foo","topics":[],"stargazers_count":0}]"#;
        let repos: Vec<RawRepository> = serde_json::from_str(body).unwrap();
        let cards = map_repositories(repos);

        assert_eq!(
            cards,
            vec![ProjectCard {
                title: "foo".to_string(),
                description: None,
                url: "https://x/foo".to_string(),
                tech: vec!["Write-up".to_string()],
                stars: 0,
            }]
        );
    }

    #[test]
    fn topics_pass_through_unchanged() {
        let body = r#"[{"name":"bar","description":"d","html_url":"https://x/bar","topics":["rust","cli"],"stargazers_count":12}]"#;
        let repos: Vec<RawRepository> = serde_json::from_str(body).unwrap();
        let cards = map_repositories(repos);

        assert_eq!(
            cards,
            vec![ProjectCard {
                title: "bar".to_string(),
                description: Some("d".to_string()),
                url: "https://x/bar".to_string(),
                tech: vec!["rust".to_string(), "cli".to_string()],
                stars: 12,
            }]
        );
    }

    #[test]
    fn topic_order_is_kept() {
        let card = ProjectCard::from(make_repo("r", &["zeta", "alpha", "mid"], 1));
        assert_eq!(card.tech, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn length_and_order_preserved_up_to_page_size() {
        for n in 0..=6 {
            let repos: Vec<RawRepository> = (0..n)
                .map(|i| make_repo(&format!("repo-{i}"), &[], i as u64))
                .collect();
            let cards = map_repositories(repos.clone());

            assert_eq!(cards.len(), n);
            for (repo, card) in repos.iter().zip(&cards) {
                assert_eq!(card.title, repo.name);
                assert_eq!(card.url, repo.html_url);
                assert_eq!(card.description, repo.description);
                assert_eq!(card.stars, repo.stargazers_count);
            }
        }
    }

    #[test]
    fn duplicates_are_not_merged() {
        let repo = make_repo("same", &["x"], 3);
        let cards = map_repositories(vec![repo.clone(), repo]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], cards[1]);
    }

    #[test]
    fn large_star_counts_pass_through() {
        let card = ProjectCard::from(make_repo("big", &[], u64::MAX));
        assert_eq!(card.stars, u64::MAX);
    }
}
