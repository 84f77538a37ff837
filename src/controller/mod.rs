//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model, the catalog client and the audio
//! worker. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Catalog fetch lifecycle
//! - `playback`: Playback sync and transport/volume methods

mod input;
mod playback;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audio::PlayerHandle;
use crate::model::{AppModel, CatalogClient};

use playback::PlayerSync;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) catalog: CatalogClient,
    pub(crate) player: PlayerHandle,
    sync: Arc<Mutex<PlayerSync>>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, catalog: CatalogClient, player: PlayerHandle) -> Self {
        Self {
            model,
            catalog,
            player,
            sync: Arc::new(Mutex::new(PlayerSync::default())),
        }
    }

    /// Re-derive the worker state from the model. Called after every
    /// transition that can change the selected track or the play flag.
    pub(crate) async fn sync_player(&self) {
        // Capture the target while holding the sync lock: concurrent
        // callers must not be able to apply an older target after a
        // newer one.
        let mut sync = self.sync.lock().await;
        let target = self.model.playback_target().await;
        sync.sync(&self.player, target.as_ref());
    }
}
