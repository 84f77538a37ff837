//! Catalog fetch lifecycle
//!
//! A fetch is triggered on every edit of the search term and on explicit
//! submit. In-flight fetches are never aborted; each carries the token it
//! was issued with and the model drops any result that is no longer the
//! latest, so a slow stale response cannot overwrite a newer one.

use super::AppController;

impl AppController {
    /// Kick off a fetch for the current search term in the background.
    pub async fn refresh_results(&self) {
        let term = self.model.search_term().await;
        let token = self.model.begin_search().await;

        let controller = self.clone();
        tokio::spawn(async move {
            controller.run_search(token, term).await;
        });
    }

    async fn run_search(&self, token: u64, term: String) {
        match self.catalog.search(&term).await {
            Ok(tracks) => {
                tracing::debug!(token, count = tracks.len(), "Search results received");
                if self.model.apply_search_results(token, tracks).await {
                    // Selection snapped back to track 0, stopped; bring
                    // the worker in line with that.
                    self.sync_player().await;
                }
            }
            Err(e) => {
                // Swallowed by design: the prior list stays on screen and
                // the failure is visible only on the diagnostic channel.
                tracing::error!(term = %term, error = %e, "Error fetching songs");
                self.model.search_failed(token).await;
            }
        }
    }
}
