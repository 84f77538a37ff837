//! Playback sync and transport/volume control methods

use crate::audio::PlayerHandle;
use crate::model::PlaybackTarget;

use super::AppController;

/// Observer over the selected track and play flag. Diffs the model's
/// desired state against what was last applied to the worker and issues
/// the minimal imperative commands.
#[derive(Default)]
pub(crate) struct PlayerSync {
    applied: Option<PlaybackTarget>,
}

impl PlayerSync {
    pub(crate) fn sync(&mut self, player: &PlayerHandle, target: Option<&PlaybackTarget>) {
        let Some(target) = target else {
            // Nothing loaded yet; the worker has nothing to do.
            return;
        };

        // A replaced track list can leave the selection at the same
        // index while pointing at a different clip, so track identity
        // is the (index, preview URL) pair, not the index alone.
        let track_changed = self
            .applied
            .as_ref()
            .is_none_or(|a| a.index != target.index || a.preview_url != target.preview_url);
        let flag_changed = self
            .applied
            .as_ref()
            .is_none_or(|a| a.is_playing != target.is_playing);
        if !track_changed && !flag_changed {
            return;
        }

        match &target.preview_url {
            Some(url) => {
                if track_changed {
                    player.load(url);
                }
                if target.is_playing {
                    player.play();
                } else {
                    player.pause();
                }
            }
            None => {
                // Catalog entries without a preview clip stay selectable
                // but disabled: never loaded, never played.
                tracing::warn!(index = target.index, "Selected track has no preview clip");
                player.pause();
            }
        }

        self.applied = Some(target.clone());
    }
}

impl AppController {
    /// Play/pause toggle on the current track.
    pub async fn toggle_playback(&self) {
        let index = self.model.current_index().await;
        self.model.select_and_toggle(index).await;
        tracing::debug!(is_playing = self.model.is_playing().await, "Toggled playback");
        self.sync_player().await;
    }

    /// Select the track under the results cursor; same-index selection
    /// toggles play/pause.
    pub async fn select_highlighted(&self) {
        let index = self.model.highlight().await;
        self.model.select_and_toggle(index).await;
        self.sync_player().await;
    }

    pub async fn next_track(&self) {
        self.model.next_track().await;
        self.sync_player().await;
    }

    pub async fn previous_track(&self) {
        self.model.previous_track().await;
        self.sync_player().await;
    }

    /// Volume is routed to the worker directly; it never goes through
    /// the playback diff and never touches selection or the play flag.
    pub async fn volume_up(&self) {
        let volume = self.model.volume_up().await;
        self.player.set_volume(volume);
    }

    pub async fn volume_down(&self) {
        let volume = self.model.volume_down().await;
        self.player.set_volume(volume);
    }
}
