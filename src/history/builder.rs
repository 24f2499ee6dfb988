use crate::cohort::Cohort;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Ordered, de-duplicated song identifiers for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    songs: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song unless it is already present; returns whether it was added
    pub fn push(&mut self, song: impl Into<String>) -> bool {
        let song = song.into();
        if self.seen.contains(&song) {
            return false;
        }
        self.seen.insert(song.clone());
        self.songs.push(song);
        true
    }

    pub fn contains(&self, song: &str) -> bool {
        self.seen.contains(song)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Songs in first-occurrence order
    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = History::new();
        for song in iter {
            history.push(song);
        }
        history
    }
}

/// Build a history from selected cohorts followed by manual picks
///
/// Cohort songs come first, in cohort-selection order, then the manual picks.
/// Duplicates keep their first position.
pub fn build_history<S: AsRef<str>>(cohorts: &[&Cohort], manual: &[S]) -> History {
    let history: History = cohorts
        .iter()
        .flat_map(|c| c.songs.iter().map(|s| s.as_str()))
        .chain(manual.iter().map(|s| s.as_ref()))
        .collect();

    debug!(
        cohorts = cohorts.len(),
        manual = manual.len(),
        songs = history.len(),
        "built listening history"
    );
    history
}
