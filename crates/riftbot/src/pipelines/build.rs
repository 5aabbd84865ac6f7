//! Recommended-Build Pipeline
//!
//! No player identity involved. Arguments are order-tolerant: the first
//! token is tried as a role; when it is not one, the whole argument text is
//! re-read as the champion name with the role omitted. The ambiguity is
//! deliberate, so it is an explicit two-branch decision rather than one
//! overloaded parse.

use crate::domain::{CommandError, Outcome, Role, UpstreamError, ValidationError};
use crate::domain::CatalogKind;
use crate::formatters;
use crate::pipelines::Services;
use crate::staticdata::{aliases, StaticDataHandle};

/// Parsed build request: optional role plus the raw champion text.
#[derive(Debug, PartialEq, Eq)]
pub struct BuildRequest {
    pub role: Option<Role>,
    pub champion_text: String,
}

/// `args` is the arity-2 token pair: `[first_token, remainder]`.
pub fn parse_request(args: &[String]) -> BuildRequest {
    let first = args.first().map(String::as_str).unwrap_or_default();
    let rest = args.get(1).map(String::as_str).unwrap_or_default();

    match Role::from_alias(first) {
        Some(role) => BuildRequest {
            role: Some(role),
            champion_text: rest.to_string(),
        },
        None => {
            // Role omitted: the champion name starts in first position.
            let champion = [first, rest]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            BuildRequest {
                role: None,
                champion_text: champion,
            }
        }
    }
}

pub async fn run(
    services: &Services,
    statics: &StaticDataHandle,
    args: &[String],
) -> Result<Outcome, CommandError> {
    let request = parse_request(args);
    if request.champion_text.is_empty() {
        return Err(ValidationError::InvalidArgumentCount.into());
    }

    // Alias-normalize, then validate against the real champion catalog.
    // Catalog keys carry no spaces, so "aurelion sol" matches "AurelionSol".
    let key = aliases::canonical_champion(&request.champion_text).replace(' ', "");
    let champion = statics
        .find_by_key(CatalogKind::Champions, &key)
        .ok_or_else(|| ValidationError::UnknownChampion(request.champion_text.clone()))?;
    let champion_name = champion.name.clone();
    let champion_key = champion.key.clone();

    let Some(payload) = services
        .builds
        .winrate_build(&champion_key, request.role)
        .await?
    else {
        return Ok(Outcome::Empty(format!(
            "No build data for {}",
            champion_name
        )));
    };

    match formatters::build::format(&payload, &champion_name, statics) {
        Some(text) => Ok(Outcome::Text(text)),
        // Every section failed to decode: treat the payload as unusable.
        None => Err(UpstreamError::Payload {
            service: "build",
            detail: "no build section decoded".to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(first: &str, rest: &str) -> Vec<String> {
        vec![first.to_string(), rest.to_string()]
    }

    #[test]
    fn test_role_first_parses_as_role_plus_name() {
        let request = parse_request(&args("mid", "yasuo"));
        assert_eq!(request.role, Some(Role::Middle));
        assert_eq!(request.champion_text, "yasuo");
    }

    #[test]
    fn test_non_role_first_token_reinterprets_as_name() {
        let request = parse_request(&args("master", "yi"));
        assert_eq!(request.role, None);
        assert_eq!(request.champion_text, "master yi");
    }

    #[test]
    fn test_single_token_name_with_no_role() {
        let request = parse_request(&args("yasuo", ""));
        assert_eq!(request.role, None);
        assert_eq!(request.champion_text, "yasuo");
    }
}
