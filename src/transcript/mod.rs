//! Transcript model for meetflow
//!
//! A transcript is an ordered list of timestamped utterances attributed to
//! one of the meeting participants. Entries are constructed once and never
//! mutated; the pipeline only reads them when building the LLM prompt.

mod sample;

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// A single timestamped utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Display name of the speaker
    pub speaker: String,

    /// Start of the utterance, seconds from meeting start
    pub start_secs: u32,

    /// End of the utterance, seconds from meeting start
    pub end_secs: u32,

    /// What was said
    pub text: String,
}

/// A meeting transcript with its participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Participant display names, in speaking order
    pub participants: Vec<String>,

    /// Timestamped entries, in chronological order
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Built-in sample meeting used when no transcript file is given.
    pub fn sample() -> Self {
        sample::login_redesign_standup()
    }

    /// Load a transcript from a plain text file.
    ///
    /// One entry per line, in the format printed by `meetflow sample`:
    ///
    /// ```text
    /// [0-10s] Alex (Project Manager): Opens the meeting and states the goal.
    /// ```
    ///
    /// Blank lines are skipped.
    pub fn from_file(path: &Path, participants: Vec<String>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse_entry(line).with_context(|| {
                format!(
                    "Invalid transcript entry at {}:{}",
                    path.display(),
                    index + 1
                )
            })?;
            entries.push(entry);
        }

        if entries.is_empty() {
            anyhow::bail!("Transcript file is empty: {}", path.display());
        }

        // When no participant names are given, take the speakers in order of
        // first appearance.
        let participants = if participants.is_empty() {
            let mut seen = Vec::new();
            for entry in &entries {
                if !seen.contains(&entry.speaker) {
                    seen.push(entry.speaker.clone());
                }
            }
            seen
        } else {
            participants
        };

        Ok(Self {
            participants,
            entries,
        })
    }

    /// Join the entries into the text block embedded in the LLM prompt.
    pub fn to_prompt_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{}-{}s: {}: {}",
                entry.start_secs, entry.end_secs, entry.speaker, entry.text
            );
        }
        // No trailing newline; the prompt template controls spacing.
        let trimmed_len = out.trim_end().len();
        out.truncate(trimmed_len);
        out
    }

    /// Render the transcript in the line format `from_file` accepts.
    pub fn to_file_format(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "[{}-{}s] {}: {}",
                entry.start_secs, entry.end_secs, entry.speaker, entry.text
            );
        }
        out
    }
}

/// Parse one `[start-ends] speaker: text` line.
fn parse_entry(line: &str) -> Result<TranscriptEntry> {
    let line = line.trim();
    let rest = line
        .strip_prefix('[')
        .context("expected line to start with '[start-ends]'")?;
    let (range, rest) = rest
        .split_once(']')
        .context("missing closing ']' after time range")?;

    let range = range
        .strip_suffix('s')
        .context("time range must end with 's'")?;
    let (start, end) = range
        .split_once('-')
        .context("time range must be 'start-end'")?;
    let start_secs: u32 = start
        .trim()
        .parse()
        .with_context(|| format!("invalid start time '{}'", start.trim()))?;
    let end_secs: u32 = end
        .trim()
        .parse()
        .with_context(|| format!("invalid end time '{}'", end.trim()))?;

    let (speaker, text) = rest
        .split_once(':')
        .context("missing ':' between speaker and text")?;
    let speaker = speaker.trim();
    let text = text.trim();
    if speaker.is_empty() {
        anyhow::bail!("speaker name is empty");
    }
    if text.is_empty() {
        anyhow::bail!("utterance text is empty");
    }

    Ok(TranscriptEntry {
        speaker: speaker.to_string(),
        start_secs,
        end_secs,
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let entry =
            parse_entry("[0-10s] Alex (Project Manager): Opens the meeting.").expect("valid line");
        assert_eq!(entry.speaker, "Alex (Project Manager)");
        assert_eq!(entry.start_secs, 0);
        assert_eq!(entry.end_secs, 10);
        assert_eq!(entry.text, "Opens the meeting.");
    }

    #[test]
    fn colons_inside_text_are_preserved() {
        let entry = parse_entry("[0-10s] Alex: States the goal: faster logins.").expect("valid");
        assert_eq!(entry.text, "States the goal: faster logins.");
    }

    #[test]
    fn rejects_line_without_time_range() {
        let err = parse_entry("Alex: hello").unwrap_err();
        assert!(err.to_string().contains("start-ends"));
    }

    #[test]
    fn rejects_non_numeric_times() {
        assert!(parse_entry("[a-10s] Alex: hello").is_err());
        assert!(parse_entry("[0-bs] Alex: hello").is_err());
    }

    #[test]
    fn sample_round_trips_through_file_format() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("transcript.txt");
        let sample = Transcript::sample();
        std::fs::write(&path, sample.to_file_format()).expect("write transcript");

        let loaded =
            Transcript::from_file(&path, sample.participants.clone()).expect("load transcript");
        assert_eq!(loaded, sample);
    }

    #[test]
    fn participants_default_to_speakers_in_order_of_appearance() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("transcript.txt");
        std::fs::write(
            &path,
            "[0-10s] Alex: opens\n[10-20s] Sarah: agrees\n[20-30s] Alex: asks\n",
        )
        .expect("write transcript");

        let loaded = Transcript::from_file(&path, vec![]).expect("load transcript");
        assert_eq!(loaded.participants, vec!["Alex", "Sarah"]);
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n\n").expect("write file");

        let err = Transcript::from_file(&path, vec![]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn file_errors_carry_line_numbers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, "[0-10s] Alex: fine\nnot a transcript line\n").expect("write file");

        let err = Transcript::from_file(&path, vec![]).unwrap_err();
        assert!(format!("{:#}", err).contains(":2"));
    }

    #[test]
    fn prompt_text_contains_every_entry() {
        let transcript = Transcript::sample();
        let prompt_text = transcript.to_prompt_text();
        for entry in &transcript.entries {
            assert!(prompt_text.contains(&entry.text));
            assert!(prompt_text.contains(&entry.speaker));
        }
    }
}
