use crate::error::ConvertError;
use crate::timecode::TimeCode;
use tracing::debug;

/// Markers that start a comment, anywhere in a line.
pub const COMMENT_MARKERS: [&str; 2] = ["//", "#"];

const FIELD_SEPARATOR: char = '\t';

/// How a raw playlist line should be treated.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Empty,
    CommentOnly,
    /// Candidate track entry, comment stripped and trimmed.
    Content(&'a str),
}

/// One playlist entry as written by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub duration: TimeCode,
    pub name: String,
}

impl Track {
    pub fn new(duration: TimeCode, name: impl Into<String>) -> Self {
        Track {
            duration,
            name: name.into(),
        }
    }
}

/// Cut the line at the earliest `#` or `//` and trim what is left.
pub fn remove_comment(line: &str) -> &str {
    let end = COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .unwrap_or(line.len());
    line[..end].trim()
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Empty;
    }
    let trimmed = line.trim_start();
    if COMMENT_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
    {
        return LineKind::CommentOnly;
    }
    LineKind::Content(remove_comment(line))
}

/// Turn the whole playlist into tracks, stopping at the first bad line.
pub fn parse_playlist<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Track>, ConvertError> {
    let mut tracks = Vec::new();
    for (idx, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line_number = idx + 1;
        let content = match classify_line(raw) {
            LineKind::Empty | LineKind::CommentOnly => {
                debug!(line_number, "skipping line");
                continue;
            }
            LineKind::Content(content) => content,
        };

        let mut fields = content.split(FIELD_SEPARATOR);
        let (Some(token), Some(name)) = (fields.next(), fields.next()) else {
            return Err(ConvertError::MalformedLine {
                line_number,
                line: raw.to_string(),
            });
        };
        let duration = TimeCode::parse(token).ok_or_else(|| ConvertError::BadTimeFormat {
            line_number,
            line: raw.to_string(),
            token: token.to_string(),
        })?;

        debug!(line_number, duration = %duration, track = name, "parsed track");
        tracks.push(Track::new(duration, name));
    }
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(duration: &str, name: &str) -> Track {
        Track::new(TimeCode::parse(duration).unwrap(), name)
    }

    #[test]
    fn remove_comment_trims_plain_line() {
        assert_eq!(remove_comment("0. abcd    "), "0. abcd");
    }

    #[test]
    fn remove_comment_strips_slashes() {
        assert_eq!(
            remove_comment("1. abcd    // separated by 4 spaces characters"),
            "1. abcd"
        );
    }

    #[test]
    fn remove_comment_strips_hash() {
        assert_eq!(remove_comment("2. def    # other example of comment"), "2. def");
    }

    #[test]
    fn remove_comment_earliest_marker_wins() {
        assert_eq!(remove_comment("3. gfk    # mixed example // of comments"), "3. gfk");
        assert_eq!(
            remove_comment("4. qtu    // mixed example # of comments in reverse order"),
            "4. qtu"
        );
    }

    #[test]
    fn remove_comment_ignores_single_slash() {
        assert_eq!(remove_comment("AC/DC live /"), "AC/DC live /");
        assert_eq!(remove_comment("a / b // c"), "a / b");
    }

    #[test]
    fn classify_detects_comment_lines() {
        assert_eq!(classify_line("// comment in single line"), LineKind::CommentOnly);
        assert_eq!(classify_line("# comment in single line"), LineKind::CommentOnly);
        assert_eq!(classify_line("   # indented"), LineKind::CommentOnly);
    }

    #[test]
    fn classify_detects_empty_lines() {
        assert_eq!(classify_line(""), LineKind::Empty);
        assert_eq!(classify_line("   "), LineKind::Content(""));
    }

    #[test]
    fn whitespace_only_line_is_malformed() {
        let err = parse_playlist(&["   "]).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedLine { line_number: 1, .. }));

        let err = parse_playlist(&["03:10\tA", " \t "]).unwrap_err();
        match err {
            ConvertError::MalformedLine { line_number, line } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, " \t ");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn classify_strips_inline_comment_from_content() {
        assert_eq!(
            classify_line("00:10\t1. abcd  # first"),
            LineKind::Content("00:10\t1. abcd")
        );
    }

    #[test]
    fn parses_tracks_skipping_comments_and_blanks() {
        let lines = [
            "# Sonata",
            "",
            "00:10\t1. abcd   // note",
            "05:15\t2. def",
            "   // interlude",
            "07:01\t3. ghk # live",
        ];
        let tracks = parse_playlist(&lines).unwrap();
        assert_eq!(
            tracks,
            vec![
                track("00:10", "1. abcd"),
                track("05:15", "2. def"),
                track("07:01", "3. ghk"),
            ]
        );
    }

    #[test]
    fn extra_tab_fields_are_ignored() {
        let tracks = parse_playlist(&["07:01\t1. audio\ttrack name\t"]).unwrap();
        assert_eq!(tracks, vec![track("07:01", "1. audio")]);
    }

    #[test]
    fn comment_is_stripped_before_splitting_fields() {
        let tracks = parse_playlist(&["03:00\tSong #2\tremix"]).unwrap();
        assert_eq!(tracks, vec![track("03:00", "Song")]);
    }

    #[test]
    fn line_without_tab_is_malformed() {
        let err = parse_playlist(&["03:10\tok", "abcdeuo"]).unwrap_err();
        match err {
            ConvertError::MalformedLine { line_number, line } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "abcdeuo");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_time_aborts_parsing() {
        let err = parse_playlist(&["71:99\tTrack", "not even close"]).unwrap_err();
        match err {
            ConvertError::BadTimeFormat {
                line_number,
                line,
                token,
            } => {
                assert_eq!(line_number, 1);
                assert_eq!(line, "71:99\tTrack");
                assert_eq!(token, "71:99");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_playlist_has_no_tracks() {
        let lines: [&str; 0] = [];
        assert!(parse_playlist(&lines).unwrap().is_empty());
        assert!(parse_playlist(&["", "# only comments"]).unwrap().is_empty());
    }
}
