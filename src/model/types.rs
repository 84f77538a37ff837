//! Core type definitions for the application

use serde::Deserialize;

/// One catalog search result. All wire fields are optional: the iTunes
/// Search API omits them freely (tracks without artwork or without a
/// preview clip), and a record with missing display fields still
/// renders, just with blanks.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub preview_url: Option<String>,
}

impl Track {
    pub fn title(&self) -> &str {
        self.track_name.as_deref().unwrap_or("")
    }

    pub fn artist(&self) -> &str {
        self.artist_name.as_deref().unwrap_or("")
    }

    pub fn artwork(&self) -> &str {
        self.artwork_url100.as_deref().unwrap_or("")
    }

    pub fn has_preview(&self) -> bool {
        self.preview_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Top-level iTunes Search API response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_count: u32,
    pub results: Vec<Track>,
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// What the playback controller must make true on the audio worker.
/// `preview_url` is None when the selected track has no preview clip.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackTarget {
    pub index: usize,
    pub is_playing: bool,
    pub preview_url: Option<String>,
}

/// Read-only copy of session state handed to the view each frame.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub search_term: String,
    pub tracks: Vec<Track>,
    pub current_index: usize,
    pub highlight: usize,
    pub is_playing: bool,
    pub volume: f32,
    pub loading: bool,
    pub active_section: ActiveSection,
}
