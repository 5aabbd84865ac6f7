//! Formatters
//!
//! Pure functions from validated upstream payloads (plus the reference data
//! store) to display strings. A missing catalog entry never aborts a reply:
//! formatters substitute the raw ID and carry on.

pub mod build;
pub mod mastery;
pub mod ranked;
pub mod recent;
pub mod twitch;

/// Render a count with `,` thousands separators, e.g. `123456` -> `123,456`.
pub(crate) fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
