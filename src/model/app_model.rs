//! Main application model with state management
//!
//! Single source of truth for one UI session. All mutation goes through
//! the named transition methods here; the view only ever sees read-only
//! snapshots. Nothing is persisted.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::types::{ActiveSection, PlaybackTarget, Snapshot, Track};

pub const DEFAULT_SEARCH_TERM: &str = "Hindi";
pub const DEFAULT_VOLUME: f32 = 1.0;
pub const VOLUME_STEP: f32 = 0.1;

struct SessionState {
    search_term: String,
    tracks: Vec<Track>,
    current_index: usize,
    highlight: usize,
    is_playing: bool,
    volume: f32,
    loading: bool,
    active_section: ActiveSection,
    // Monotonic token for in-flight searches. Results carrying an older
    // token are dropped so a slow stale response never overwrites a
    // newer one.
    search_generation: u64,
}

/// Main application model containing all state
pub struct AppModel {
    session: Arc<Mutex<SessionState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(search_term: String, volume: f32) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState {
                search_term,
                tracks: Vec::new(),
                current_index: 0,
                highlight: 0,
                is_playing: false,
                volume: volume.clamp(0.0, 1.0),
                loading: false,
                active_section: ActiveSection::default(),
                search_generation: 0,
            })),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Search term & fetch lifecycle
    // ========================================================================

    pub async fn search_term(&self) -> String {
        self.session.lock().await.search_term.clone()
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.session.lock().await;
        state.search_term.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.session.lock().await;
        state.search_term.pop();
    }

    pub async fn clear_search(&self) {
        let mut state = self.session.lock().await;
        state.search_term.clear();
    }

    /// Issue a new request token. Every fetch must carry the token it was
    /// issued with; only the latest one is allowed to land.
    pub async fn begin_search(&self) -> u64 {
        let mut state = self.session.lock().await;
        state.search_generation += 1;
        state.loading = true;
        state.search_generation
    }

    /// Apply a fetch result. Returns false (and changes nothing) when the
    /// token is stale. On success the whole list is replaced, selection
    /// returns to track 0 and playback stops.
    pub async fn apply_search_results(&self, token: u64, tracks: Vec<Track>) -> bool {
        let mut state = self.session.lock().await;
        if token != state.search_generation {
            tracing::warn!(token, latest = state.search_generation, "Discarding stale search result");
            return false;
        }
        state.tracks = tracks;
        state.current_index = 0;
        state.highlight = 0;
        state.is_playing = false;
        state.loading = false;
        true
    }

    /// A fetch failed: prior list, selection and play state stay as they
    /// were. Only the loading flag is released, and only for the latest
    /// request.
    pub async fn search_failed(&self, token: u64) {
        let mut state = self.session.lock().await;
        if token == state.search_generation {
            state.loading = false;
        }
    }

    // ========================================================================
    // Selection & playback flags
    // ========================================================================

    /// Same index: toggle play/pause. Different index: move there and
    /// force playing. Out-of-range indices are ignored.
    pub async fn select_and_toggle(&self, index: usize) {
        let mut state = self.session.lock().await;
        if index >= state.tracks.len() {
            return;
        }
        if index == state.current_index {
            state.is_playing = !state.is_playing;
        } else {
            state.current_index = index;
            state.is_playing = true;
        }
    }

    /// Advance with wraparound and force playing. No-op on an empty list.
    pub async fn next_track(&self) {
        let mut state = self.session.lock().await;
        let n = state.tracks.len();
        if n == 0 {
            return;
        }
        state.current_index = (state.current_index + 1) % n;
        state.is_playing = true;
    }

    /// Retreat with wraparound and force playing. No-op on an empty list.
    pub async fn previous_track(&self) {
        let mut state = self.session.lock().await;
        let n = state.tracks.len();
        if n == 0 {
            return;
        }
        state.current_index = (state.current_index + n - 1) % n;
        state.is_playing = true;
    }

    pub async fn current_index(&self) -> usize {
        self.session.lock().await.current_index
    }

    pub async fn is_playing(&self) -> bool {
        self.session.lock().await.is_playing
    }

    /// Desired worker state, or None while no tracks are loaded.
    pub async fn playback_target(&self) -> Option<PlaybackTarget> {
        let state = self.session.lock().await;
        let track = state.tracks.get(state.current_index)?;
        Some(PlaybackTarget {
            index: state.current_index,
            is_playing: state.is_playing,
            preview_url: track.preview_url.clone().filter(|u| !u.is_empty()),
        })
    }

    // ========================================================================
    // Volume
    // ========================================================================

    pub async fn volume(&self) -> f32 {
        self.session.lock().await.volume
    }

    /// Clamp to [0, 1]. Never touches selection or the play flag.
    pub async fn set_volume(&self, volume: f32) -> f32 {
        let mut state = self.session.lock().await;
        state.volume = volume.clamp(0.0, 1.0);
        state.volume
    }

    pub async fn volume_up(&self) -> f32 {
        let mut state = self.session.lock().await;
        state.volume = (state.volume + VOLUME_STEP).clamp(0.0, 1.0);
        state.volume
    }

    pub async fn volume_down(&self) -> f32 {
        let mut state = self.session.lock().await;
        state.volume = (state.volume - VOLUME_STEP).clamp(0.0, 1.0);
        state.volume
    }

    // ========================================================================
    // UI focus & results cursor
    // ========================================================================

    pub async fn active_section(&self) -> ActiveSection {
        self.session.lock().await.active_section
    }

    pub async fn cycle_section(&self) {
        let mut state = self.session.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn highlight(&self) -> usize {
        self.session.lock().await.highlight
    }

    pub async fn move_highlight_up(&self) {
        let mut state = self.session.lock().await;
        if state.highlight > 0 {
            state.highlight -= 1;
        }
    }

    pub async fn move_highlight_down(&self) {
        let mut state = self.session.lock().await;
        if state.highlight < state.tracks.len().saturating_sub(1) {
            state.highlight += 1;
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn snapshot(&self) -> Snapshot {
        let state = self.session.lock().await;
        Snapshot {
            search_term: state.search_term.clone(),
            tracks: state.tracks.clone(),
            current_index: state.current_index,
            highlight: state.highlight,
            is_playing: state.is_playing,
            volume: state.volume,
            loading: state.loading,
            active_section: state.active_section,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TERM.to_string(), DEFAULT_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str) -> Track {
        Track {
            track_name: Some(name.to_string()),
            artist_name: Some("artist".to_string()),
            artwork_url100: Some("https://example.com/art.jpg".to_string()),
            preview_url: Some(format!("https://example.com/{name}.m4a")),
        }
    }

    async fn loaded_model(n: usize) -> AppModel {
        let model = AppModel::default();
        let token = model.begin_search().await;
        let tracks = (0..n).map(|i| track(&format!("t{i}"))).collect();
        assert!(model.apply_search_results(token, tracks).await);
        model
    }

    #[tokio::test]
    async fn test_fetch_resets_selection_and_play_state() {
        let model = loaded_model(5).await;
        model.select_and_toggle(3).await;
        assert_eq!(model.current_index().await, 3);
        assert!(model.is_playing().await);

        let token = model.begin_search().await;
        assert!(model.apply_search_results(token, vec![track("a"), track("b")]).await);
        assert_eq!(model.current_index().await, 0);
        assert!(!model.is_playing().await);
    }

    #[tokio::test]
    async fn test_next_then_previous_round_trips() {
        for n in [1, 2, 7] {
            let model = loaded_model(n).await;
            model.select_and_toggle(n - 1).await;
            let start = model.current_index().await;
            model.next_track().await;
            model.previous_track().await;
            assert_eq!(model.current_index().await, start);
        }
    }

    #[tokio::test]
    async fn test_n_nexts_return_to_start() {
        let n = 4;
        let model = loaded_model(n).await;
        for _ in 0..n {
            model.next_track().await;
        }
        assert_eq!(model.current_index().await, 0);
    }

    #[tokio::test]
    async fn test_next_on_last_track_wraps_to_zero_and_plays() {
        let model = loaded_model(3).await;
        model.select_and_toggle(2).await;
        model.next_track().await;
        assert_eq!(model.current_index().await, 0);
        assert!(model.is_playing().await);
    }

    #[tokio::test]
    async fn test_double_toggle_restores_play_flag() {
        let model = loaded_model(3).await;
        for initial in [false, true] {
            if model.is_playing().await != initial {
                model.select_and_toggle(0).await;
            }
            model.select_and_toggle(0).await;
            model.select_and_toggle(0).await;
            assert_eq!(model.is_playing().await, initial);
        }
    }

    #[tokio::test]
    async fn test_select_different_index_forces_playing() {
        let model = loaded_model(3).await;
        model.select_and_toggle(1).await;
        assert_eq!(model.current_index().await, 1);
        assert!(model.is_playing().await);

        // Selecting another index while playing keeps playing.
        model.select_and_toggle(2).await;
        assert_eq!(model.current_index().await, 2);
        assert!(model.is_playing().await);
    }

    #[tokio::test]
    async fn test_select_out_of_range_is_noop() {
        let model = loaded_model(2).await;
        model.select_and_toggle(9).await;
        assert_eq!(model.current_index().await, 0);
        assert!(!model.is_playing().await);
    }

    #[tokio::test]
    async fn test_empty_list_guards() {
        let model = AppModel::default();
        model.next_track().await;
        model.previous_track().await;
        model.select_and_toggle(0).await;
        assert_eq!(model.current_index().await, 0);
        assert!(!model.is_playing().await);
        assert!(model.playback_target().await.is_none());
    }

    #[tokio::test]
    async fn test_volume_clamps_and_leaves_playback_alone() {
        let model = loaded_model(3).await;
        model.select_and_toggle(1).await;

        assert_eq!(model.set_volume(1.7).await, 1.0);
        assert_eq!(model.set_volume(-0.3).await, 0.0);
        assert_eq!(model.set_volume(0.5).await, 0.5);
        model.volume_up().await;
        assert!((model.volume().await - 0.6).abs() < f32::EPSILON);
        model.volume_down().await;
        model.volume_down().await;
        assert!((model.volume().await - 0.4).abs() < 1e-6);

        assert_eq!(model.current_index().await, 1);
        assert!(model.is_playing().await);
    }

    #[tokio::test]
    async fn test_stale_search_result_is_discarded() {
        let model = AppModel::default();
        let old_token = model.begin_search().await;
        let new_token = model.begin_search().await;

        assert!(model.apply_search_results(new_token, vec![track("fresh")]).await);
        // The slower, older fetch lands afterwards and must not win.
        assert!(!model.apply_search_results(old_token, vec![track("stale")]).await);

        let snapshot = model.snapshot().await;
        assert_eq!(snapshot.tracks.len(), 1);
        assert_eq!(snapshot.tracks[0].title(), "fresh");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_prior_list() {
        let model = loaded_model(2).await;
        model.select_and_toggle(1).await;

        let token = model.begin_search().await;
        model.search_failed(token).await;

        let snapshot = model.snapshot().await;
        assert_eq!(snapshot.tracks.len(), 2);
        assert_eq!(snapshot.current_index, 1);
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn test_playback_target_omits_missing_preview() {
        let model = AppModel::default();
        let token = model.begin_search().await;
        let silent = Track {
            track_name: Some("no preview".to_string()),
            ..Track::default()
        };
        assert!(model.apply_search_results(token, vec![silent]).await);

        let target = model.playback_target().await.unwrap();
        assert_eq!(target.index, 0);
        assert!(target.preview_url.is_none());
    }

    #[tokio::test]
    async fn test_highlight_stays_in_bounds() {
        let model = loaded_model(2).await;
        model.move_highlight_up().await;
        assert_eq!(model.highlight().await, 0);
        model.move_highlight_down().await;
        model.move_highlight_down().await;
        assert_eq!(model.highlight().await, 1);
    }
}
