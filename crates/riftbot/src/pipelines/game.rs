//! Game Announcement Pipeline
//!
//! Pure: builds an announcement from the caller and the profile map, no
//! upstream calls. Everyone configured to receive game invites gets
//! mentioned, except the sender.

use crate::domain::Outcome;
use crate::profiles::ProfileMap;

pub fn run(
    profiles: &ProfileMap,
    caller_id: &str,
    display_name: &str,
    message: &str,
) -> Outcome {
    let mut text = if message.is_empty() {
        format!(
            "{} ({}) is looking for feeders for the rift!\n",
            display_name, caller_id
        )
    } else {
        format!("{} ({}): {}\n", display_name, caller_id, message)
    };

    for (id, profile) in profiles.iter() {
        if id != caller_id && profile.game_invites {
            text.push_str(&format!("@{} ", id));
        }
    }

    Outcome::Text(text)
}
