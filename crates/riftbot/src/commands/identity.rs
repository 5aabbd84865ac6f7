//! Identity Resolver
//!
//! Combines parsed arguments with the caller's configured profile into a
//! validated `(region, player name)` pair. Pure and synchronous; every
//! rejection here happens before any network I/O.

use std::str::FromStr;

use crate::domain::{Region, ResolvedIdentity, ValidationError};
use crate::profiles::CallerProfile;

/// Resolve the target identity for an identity-dependent command.
///
/// - no arguments: the caller's profile verbatim
/// - one argument: that player name on the default region
/// - two arguments: an explicit region code (validated) plus a player name
pub fn resolve_identity(
    args: &[String],
    profile: Option<&CallerProfile>,
) -> Result<ResolvedIdentity, ValidationError> {
    match args {
        [] => {
            // The allow-list gate normally guarantees a profile, but this
            // path must hold on its own.
            let profile = profile.ok_or(ValidationError::ProfileMissing)?;
            Ok(ResolvedIdentity {
                region: profile.region,
                player_name: profile.player_name.clone(),
            })
        }
        [name] => Ok(ResolvedIdentity {
            region: Region::DEFAULT,
            player_name: name.clone(),
        }),
        [region, name] => {
            let region = Region::from_str(region).map_err(|_| ValidationError::InvalidRegion {
                supplied: region.clone(),
                valid: Region::valid_codes(),
            })?;
            Ok(ResolvedIdentity {
                region,
                player_name: name.clone(),
            })
        }
        _ => Err(ValidationError::InvalidArgumentCount),
    }
}
