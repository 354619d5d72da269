use crate::event::AppEvent;
use crate::github::client::ProfileClient;
use crate::github::project::{map_repositories, ProjectCard};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Posts `FetchFinished` when dropped, whichever way the fetch task ends.
struct LoadingGuard {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(AppEvent::FetchFinished);
    }
}

/// Fetches and maps the project list. Failures are logged and yield `None`.
pub async fn load_projects(client: &ProfileClient) -> Option<Vec<ProjectCard>> {
    match client.recent_repos().await {
        Ok(repos) => {
            info!(account = client.account(), count = repos.len(), "fetched repositories");
            Some(map_repositories(repos))
        }
        Err(e) => {
            error!(account = client.account(), error = %e, "failed to fetch repositories");
            None
        }
    }
}

/// Runs one fetch in the background. Not cancelled on shutdown: once the
/// receiver is gone the sends below fail silently.
pub fn spawn_fetch(client: ProfileClient, tx: mpsc::UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _guard = LoadingGuard { tx: tx.clone() };
        if let Some(cards) = load_projects(&client).await {
            let _ = tx.send(AppEvent::ProjectsLoaded(cards));
        }
    })
}
