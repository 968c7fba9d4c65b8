use crate::playlist::Track;

/// A track placed on the absolute timeline, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedTrack {
    pub track: Track,
    pub start_seconds: u64,
    pub end_seconds: u64,
}

impl TimedTrack {
    pub fn duration_seconds(&self) -> u64 {
        self.end_seconds - self.start_seconds
    }
}

/// Lay the tracks end to end, the first one starting at `offset_seconds`.
pub fn compute_timeline(tracks: Vec<Track>, offset_seconds: u64) -> Vec<TimedTrack> {
    let mut cursor = offset_seconds;
    tracks
        .into_iter()
        .map(|track| {
            let start_seconds = cursor;
            cursor += track.duration.total_seconds();
            TimedTrack {
                track,
                start_seconds,
                end_seconds: cursor,
            }
        })
        .collect()
}
