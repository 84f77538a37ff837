//! Audio worker - native playback primitive
//!
//! A dedicated OS thread owns the rodio output stream and sink; the rest
//! of the application talks to it through a fire-and-forget command
//! channel. Decoding, buffering and end-of-track behavior belong to
//! rodio and are not overridden here (no auto-advance).

use std::io::Cursor;
use std::sync::mpsc;
use std::time::Duration;

/// Commands accepted by the audio worker.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Fetch the preview clip at this URL and stage it, paused.
    Load(String),
    Play,
    Pause,
    SetVolume(f32),
    Shutdown,
}

/// Cheap, cloneable handle to the audio worker.
#[derive(Clone)]
pub struct PlayerHandle {
    tx: mpsc::Sender<PlayerCommand>,
}

impl PlayerHandle {
    pub(crate) fn new(tx: mpsc::Sender<PlayerCommand>) -> Self {
        Self { tx }
    }

    fn send(&self, command: PlayerCommand) {
        // The worker outlives the UI loop; a send failure means it died,
        // which is already logged from the worker side.
        if self.tx.send(command).is_err() {
            tracing::error!("Audio worker is gone; command dropped");
        }
    }

    pub fn load(&self, url: &str) {
        self.send(PlayerCommand::Load(url.to_string()));
    }

    pub fn play(&self) {
        self.send(PlayerCommand::Play);
    }

    pub fn pause(&self) {
        self.send(PlayerCommand::Pause);
    }

    pub fn set_volume(&self, volume: f32) {
        self.send(PlayerCommand::SetVolume(volume.clamp(0.0, 1.0)));
    }

    pub fn shutdown(&self) {
        self.send(PlayerCommand::Shutdown);
    }
}

/// Spawn the audio worker thread and return a handle to it.
///
/// The worker keeps running even if the audio device cannot be opened;
/// commands are then consumed and logged so the UI stays usable.
pub fn spawn_player(initial_volume: f32) -> PlayerHandle {
    let (tx, rx) = mpsc::channel();

    std::thread::Builder::new()
        .name("audio-worker".to_string())
        .spawn(move || run_worker(rx, initial_volume.clamp(0.0, 1.0)))
        .expect("failed to spawn audio worker thread");

    PlayerHandle::new(tx)
}

fn run_worker(rx: mpsc::Receiver<PlayerCommand>, initial_volume: f32) {
    let stream = match rodio::OutputStream::try_default() {
        Ok((stream, handle)) => Some((stream, handle)),
        Err(e) => {
            tracing::error!(error = %e, "No audio output device; playback disabled");
            None
        }
    };

    let http = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .ok();

    let mut sink: Option<rodio::Sink> = None;
    let mut volume = initial_volume;

    while let Ok(command) = rx.recv() {
        match command {
            PlayerCommand::Load(url) => {
                let Some((_, handle)) = stream.as_ref() else {
                    continue;
                };
                // Drop whatever was staged before; each track gets a
                // fresh sink so leftover queued audio never bleeds over.
                if let Some(old) = sink.take() {
                    old.stop();
                }
                match stage_preview(handle, http.as_ref(), &url) {
                    Ok(new_sink) => {
                        new_sink.set_volume(volume);
                        new_sink.pause();
                        sink = Some(new_sink);
                        tracing::debug!(url = %url, "Preview staged");
                    }
                    Err(e) => {
                        tracing::error!(url = %url, error = %e, "Failed to stage preview");
                    }
                }
            }
            PlayerCommand::Play => {
                if let Some(sink) = sink.as_ref() {
                    sink.play();
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = sink.as_ref() {
                    sink.pause();
                }
            }
            PlayerCommand::SetVolume(v) => {
                volume = v;
                if let Some(sink) = sink.as_ref() {
                    sink.set_volume(v);
                }
            }
            PlayerCommand::Shutdown => break,
        }
    }

    if let Some(sink) = sink.take() {
        sink.stop();
    }
    tracing::debug!("Audio worker stopped");
}

fn stage_preview(
    handle: &rodio::OutputStreamHandle,
    http: Option<&reqwest::blocking::Client>,
    url: &str,
) -> anyhow::Result<rodio::Sink> {
    let http = http.ok_or_else(|| anyhow::anyhow!("HTTP client unavailable"))?;
    let bytes = http
        .get(url)
        .send()?
        .error_for_status()?
        .bytes()?
        .to_vec();

    let source = rodio::Decoder::new(Cursor::new(bytes))?;
    let sink = rodio::Sink::try_new(handle)?;
    sink.append(source);
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_clamps_volume_commands() {
        let (tx, rx) = mpsc::channel();
        let handle = PlayerHandle::new(tx);

        handle.set_volume(2.5);
        handle.set_volume(-1.0);

        assert_eq!(rx.recv().unwrap(), PlayerCommand::SetVolume(1.0));
        assert_eq!(rx.recv().unwrap(), PlayerCommand::SetVolume(0.0));
    }

    #[test]
    fn test_handle_survives_dead_worker() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let handle = PlayerHandle::new(tx);
        // Must not panic.
        handle.play();
        handle.pause();
    }
}
