use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "audacity-labels";

const PLAYLIST_FORMAT_HELP: &str = "\
Playlist format, one track per line:
  Time(minutes:seconds) [TAB] Track name

Comments start with # or // and run to the end of the line.

Example:
  03:10\t1. Allegro in A major
  01:15\t2. Adagio in F minor
  05:25\t3. Allegro assai in A major";

/// Convert a human readable playlist into an Audacity label file
#[derive(Parser, Debug)]
#[command(author, version, about, after_long_help = PLAYLIST_FORMAT_HELP)]
pub struct Args {
    /// Input playlist file (mm:ss<TAB>name per line)
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Output label file
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Start time of the first track on the timeline, in seconds. Overrides the task file; defaults to 0.
    #[arg(short = 's', long)]
    pub offset: Option<u64>,

    /// Path to a JSON file describing the job (input, output, offset). CLI arguments override values in the task file.
    #[arg(short = 't', long = "task")]
    pub task: Option<String>,

    /// Write the resolved job to this file as JSON. If no file is provided, the input file name with a .json extension is used.
    #[arg(short = 'w', long = "write-task-file", num_args = 0..=1, value_name = "FILE")]
    pub write_task_file: Option<Option<String>>,

    /// Show the labels without writing the output file
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Do not print the label tables
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Show debug logs.
    #[arg(short = 'g', long)]
    pub debug: bool,
}
