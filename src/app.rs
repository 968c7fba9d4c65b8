use crate::error::ConvertError;
use crate::labels::{format_labels, labels_table, total_length};
use crate::playlist::parse_playlist;
use crate::timeline::{TimedTrack, compute_timeline};
use crate::util::{read_lines, write_text};
use crate::{
    cli::{Args, DEFAULT_OUTPUT},
    task::Task,
};
use anyhow::{Result, bail};
use comfy_table::{Table, presets::UTF8_FULL};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Parse the playlist and place every track on the timeline.
pub fn build_timeline<S: AsRef<str>>(
    lines: &[S],
    offset_seconds: u64,
) -> Result<Vec<TimedTrack>, ConvertError> {
    let tracks = parse_playlist(lines)?;
    info!(tracks = tracks.len(), offset_seconds, "parsed playlist");
    Ok(compute_timeline(tracks, offset_seconds))
}

/// Playlist lines in, label file text out.
pub fn convert<S: AsRef<str>>(lines: &[S], offset_seconds: u64) -> Result<String, ConvertError> {
    let timed = build_timeline(lines, offset_seconds)?;
    Ok(format_labels(&timed))
}

pub fn run(args: Args) -> Result<()> {
    // Load task file if provided and merge with CLI args
    let task = Task::load(args.task.as_deref())?;
    let input = args
        .input
        .as_ref()
        .or_else(|| task.as_ref().and_then(|t| t.input.as_ref()))
        .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
    let output = args
        .output
        .as_ref()
        .or_else(|| task.as_ref().and_then(|t| t.output.as_ref()))
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUTPUT);
    if input == output {
        bail!("Input and output file cannot be the same.");
    }
    let offset = args
        .offset
        .or_else(|| task.as_ref().and_then(|t| t.offset))
        .unwrap_or(0);

    println!("ℹ️ Reading playlist {}", input);
    let lines = read_lines(Path::new(input))?;

    let timed = build_timeline(lines.as_slice(), offset)?;
    let text = format_labels(&timed);

    if !args.quiet {
        println!("\n▶️ Labels:");
        println!("{}", labels_table(&timed));

        let mut info_table = Table::new();
        info_table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Parameter", "Value"]);
        info_table
            .add_row(vec!["Input File", input])
            .add_row(vec!["Output File", output])
            .add_row(vec!["Offset", &format!("{} s", offset)])
            .add_row(vec!["Tracks", &timed.len().to_string()])
            .add_row(vec!["Total Length", &total_length(&timed)]);

        println!("\n▶️ Job Details:");
        println!("{info_table}");
    }

    if let Some(write_task_file) = &args.write_task_file {
        let out_path = task_file_path(input, write_task_file.as_deref());
        let resolved = Task {
            input: Some(input.to_string()),
            output: Some(output.to_string()),
            offset: Some(offset),
        };
        resolved.save(&out_path)?;
        println!("✅ Wrote task to {}", out_path.display());
    }

    if args.dry_run {
        println!("\n--dry-run flag provided, no label file written.");
        return Ok(());
    }

    let output_path = Path::new(output);
    if output_path.exists() {
        warn!(path = %output_path.display(), "overwriting existing label file");
    }
    write_text(output_path, &text)?;

    println!("✅ Conversion complete! Output: {}", output);
    Ok(())
}

/// Explicit path if given, otherwise the input path with a `.json` extension.
fn task_file_path(input: &str, explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => Path::new(input).with_extension("json"),
    }
}
