use crate::timeline::TimedTrack;
use crate::util::format_clock;
use comfy_table::{Table, presets::UTF8_FULL};

/// Render the label file body: `start<TAB>end<TAB>name`, one line per track.
pub fn format_labels(timed: &[TimedTrack]) -> String {
    timed
        .iter()
        .map(|t| format!("{}\t{}\t{}\n", t.start_seconds, t.end_seconds, t.track.name))
        .collect()
}

pub fn labels_table(timed: &[TimedTrack]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Start (s)", "End (s)", "Duration", "Name"]);

    for (i, t) in timed.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            t.start_seconds.to_string(),
            t.end_seconds.to_string(),
            t.track.duration.to_string(),
            t.track.name.clone(),
        ]);
    }
    table
}

/// Total span covered by the labels, as `h:mm:ss`.
pub fn total_length(timed: &[TimedTrack]) -> String {
    let seconds: u64 = timed.iter().map(TimedTrack::duration_seconds).sum();
    format_clock(seconds)
}
