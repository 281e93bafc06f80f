//! Built-in sample meeting fixture.

use super::{Transcript, TranscriptEntry};

const ALEX: &str = "Alex (Project Manager)";
const SARAH: &str = "Sarah (Lead Developer)";

/// A short two-person standup about reworking a login flow.
pub fn login_redesign_standup() -> Transcript {
    let entries = [
        (0, ALEX, "Opens the meeting by greeting Sarah and stating the goal: to improve the login process based on user feedback about slow times and confusing resets."),
        (10, SARAH, "Agrees and suggests simplifying the steps, like adding a \"remember me\" option without extra complications."),
        (20, ALEX, "Asks about priorities, mentioning integrating social media logins like Google or Apple."),
        (30, SARAH, "Prioritizes that and better error messages, estimating it could take 5-7 days to develop."),
        (40, ALEX, "Brings up potential risks, such as changes from third-party providers affecting the social logins."),
        (50, SARAH, "Notes they'll monitor those updates closely and suggests a mid-week check-in to track progress."),
        (60, ALEX, "Assigns action items: Sarah to start coding the \"remember me\" feature soon, and himself to check API docs."),
        (70, SARAH, "Confirms she's on it and asks if the design needs any tweaks for mobile."),
        (80, ALEX, "Says the current wireframes look good and user-friendly, no major changes needed."),
        (90, SARAH, "Wraps up by saying the plan feels solid and they're aligned."),
        (100, ALEX, "Agrees, schedules the next check-in, and ends the call positively."),
    ];

    Transcript {
        participants: vec![ALEX.to_string(), SARAH.to_string()],
        entries: entries
            .into_iter()
            .map(|(start, speaker, text)| TranscriptEntry {
                speaker: speaker.to_string(),
                start_secs: start,
                end_secs: start + 10,
                text: text.to_string(),
            })
            .collect(),
    }
}
