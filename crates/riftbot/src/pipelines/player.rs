//! Player Lookup
//!
//! The mandatory first step of every identity-dependent pipeline: normalize
//! the display name to the canonical form the identity service requires,
//! validate it locally, then make exactly one upstream call. Identity is
//! re-resolved on every invocation by design; nothing here is cached.

use tracing::debug;

use crate::domain::{CommandError, ResolvedIdentity, Summoner, ValidationError};
use crate::ports::SummonerService;

/// Canonical form for the identity service: lowercase, internal spaces
/// stripped.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

// The identity service accepts ASCII alphanumerics plus a broad accented
// Latin and Greek letter range. Checked before any network call.
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, 'ª' | 'µ' | 'º' | 'ƒ')
        // Latin-1 letters, minus the multiplication and division signs.
        || (('\u{00C0}'..='\u{00FF}').contains(&c) && c != '×' && c != '÷')
        // Latin Extended-A.
        || ('\u{0100}'..='\u{017F}').contains(&c)
        || matches!(c, 'Ș' | 'ș' | 'Ț' | 'ț')
        // Greek and Coptic letters.
        || ('\u{0386}'..='\u{03CE}').contains(&c)
}

fn is_valid_name(normalized: &str) -> bool {
    !normalized.is_empty() && normalized.chars().all(is_allowed_char)
}

/// Resolve a display name to the upstream identity record.
///
/// `Ok(None)` means the upstream explicitly reported the player absent;
/// a name that fails local validation never reaches the network.
pub async fn lookup(
    service: &dyn SummonerService,
    identity: &ResolvedIdentity,
) -> Result<Option<Summoner>, CommandError> {
    let normalized = normalize_name(&identity.player_name);
    if !is_valid_name(&normalized) {
        return Err(ValidationError::InvalidName.into());
    }

    debug!(region = %identity.region, name = %normalized, "looking up summoner");
    let summoner = service.by_name(identity.region, &normalized).await?;
    Ok(summoner)
}
