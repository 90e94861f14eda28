//! Pure views over the mirrored mood list: filtering and the
//! mood-frequency histogram behind the timeline pie chart.
//!
//! Everything here is a total, synchronous function of its inputs — no
//! caching, no incremental state.

use serde::Serialize;

use crate::models::mood::MoodEntry;
use crate::palette;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MoodFilter {
    #[default]
    All,
    /// Keep only entries whose emotion equals this label exactly.
    Emotion(String),
}

/// The three independently combinable timeline filters (logical AND).
#[derive(Debug, Clone, Default)]
pub struct TimelineFilters {
    pub mood: MoodFilter,
    /// Keep only entries whose author equals the viewer's name,
    /// case-sensitively. An absent author counts as the empty name.
    pub only_mine: bool,
    /// Case-insensitive substring match on the note. Empty matches
    /// everything; entries without a note never match a non-empty search.
    pub search: String,
}

pub fn filter_logs<'a>(
    logs: &'a [MoodEntry],
    filters: &TimelineFilters,
    viewer: &str,
) -> Vec<&'a MoodEntry> {
    let needle = filters.search.to_lowercase();
    logs.iter()
        .filter(|log| {
            let matches_mood = match &filters.mood {
                MoodFilter::All => true,
                MoodFilter::Emotion(label) => log.emotion == *label,
            };
            let matches_author =
                !filters.only_mine || log.author.as_deref().unwrap_or("") == viewer;
            let matches_search = needle.is_empty()
                || log
                    .note
                    .as_deref()
                    .is_some_and(|note| note.to_lowercase().contains(&needle));
            matches_mood && matches_author && matches_search
        })
        .collect()
}

/// One pie-chart slice: a raw emotion label, how often it appears, and its
/// display color (neutral for labels outside the recognized set).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MoodSlice {
    pub emotion: String,
    pub count: usize,
    pub color: &'static str,
}

/// Frequency of each emotion among the given entries, in first-seen order.
pub fn mood_histogram<'a>(logs: impl IntoIterator<Item = &'a MoodEntry>) -> Vec<MoodSlice> {
    let mut slices: Vec<MoodSlice> = Vec::new();
    for log in logs {
        match slices.iter_mut().find(|slice| slice.emotion == log.emotion) {
            Some(slice) => slice.count += 1,
            None => slices.push(MoodSlice {
                emotion: log.emotion.clone(),
                count: 1,
                color: palette::color_for(&log.emotion),
            }),
        }
    }
    slices
}
