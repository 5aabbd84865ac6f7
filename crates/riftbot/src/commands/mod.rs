//! Command Surface
//!
//! The dispatcher the chat transport hands incoming messages to: allow-list
//! gate, audit log, command routing, and the error unifier that turns every
//! pipeline outcome into exactly one outbound reply.

pub mod identity;
pub mod tokenizer;

use tracing::{error, info};

use crate::domain::{CommandError, Outcome};
use crate::pipelines::{self, Services};
use crate::profiles::ProfileMap;
use crate::staticdata::StaticDataHandle;

/// Generic apology for failures whose detail stays server-side.
pub const SAD_MESSAGE: &str = "Something went wrong :(";

/// One incoming command message, as the transport delivers it.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub raw_text: String,
    /// Transport-level caller identity, the profile-map key.
    pub caller_id: String,
    /// Caller's human display name, used in announcements.
    pub display_name: String,
    pub chat: ChatContext,
}

/// Where the message came from, for the audit log.
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    /// Chat kind, e.g. "private" or "group".
    pub kind: String,
    /// Group title, when there is one.
    pub title: Option<String>,
}

/// Markup mode the transport should render the reply with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    Markdown,
    Html,
}

/// The single outbound reply for an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
    pub markup: Markup,
    /// Set for link-heavy replies so the transport skips link previews.
    pub disable_web_preview: bool,
}

impl BotReply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Plain,
            disable_web_preview: false,
        }
    }
}

/// The bot core: profiles, reference data and upstream services, wired once.
pub struct Bot {
    services: Services,
    statics: StaticDataHandle,
    profiles: ProfileMap,
}

impl Bot {
    pub fn new(services: Services, statics: StaticDataHandle, profiles: ProfileMap) -> Self {
        Self {
            services,
            statics,
            profiles,
        }
    }

    /// Handle one incoming message. `None` means no reply at all: the caller
    /// is not on the allow-list, or the text is not a known command.
    pub async fn handle(&self, invocation: &Invocation) -> Option<BotReply> {
        // The transport-side gate should already have checked this; enforced
        // again so the core stands alone.
        if !self.profiles.contains(&invocation.caller_id) {
            return None;
        }

        info!(
            text = %invocation.raw_text,
            caller = %invocation.caller_id,
            chat_kind = %invocation.chat.kind,
            chat_title = invocation.chat.title.as_deref().unwrap_or(""),
            "command received"
        );

        let command = command_name(&invocation.raw_text)?;
        let profile = self.profiles.get(&invocation.caller_id);

        let reply = match command {
            "ranked" | "mastery" | "recent" => {
                let args = tokenizer::split_arguments(&invocation.raw_text, 2);
                let args = tokenizer::present_arguments(&args);
                let identity = match identity::resolve_identity(args, profile) {
                    Ok(identity) => identity,
                    Err(e) => return Some(unify(Err(e.into()), Markup::Markdown)),
                };
                let result = match command {
                    "ranked" => pipelines::ranked::run(&self.services, identity).await,
                    "mastery" => {
                        pipelines::mastery::run(&self.services, &self.statics, identity).await
                    }
                    _ => pipelines::recent::run(&self.services, &self.statics, identity).await,
                };
                unify(result, Markup::Markdown)
            }
            "build" => {
                let args = tokenizer::split_arguments(&invocation.raw_text, 2);
                let result = pipelines::build::run(&self.services, &self.statics, &args).await;
                unify(result, Markup::Markdown)
            }
            "twitch" => {
                let args = tokenizer::split_arguments(&invocation.raw_text, 1);
                let result = pipelines::twitch::run(&self.services, &args[0]).await;
                let mut reply = unify(result, Markup::Html);
                if reply.markup == Markup::Html {
                    reply.disable_web_preview = true;
                }
                reply
            }
            "game" => {
                let args = tokenizer::split_arguments(&invocation.raw_text, 1);
                let outcome = pipelines::game::run(
                    &self.profiles,
                    &invocation.caller_id,
                    &invocation.display_name,
                    &args[0],
                );
                unify(Ok(outcome), Markup::Plain)
            }
            _ => return None,
        };

        Some(reply)
    }
}

/// First token of the message, without the leading `/` and without the
/// `@botname` group-chat suffix.
fn command_name(text: &str) -> Option<&str> {
    let token = text.split_whitespace().next()?;
    let token = token.strip_prefix('/')?;
    let token = token.split('@').next().unwrap_or(token);
    (!token.is_empty()).then_some(token)
}

/// The error unifier: every pipeline outcome becomes exactly one reply.
///
/// Validation failures and empty results carry their own user-facing text.
/// Upstream and parse failures are logged in full and collapse to the
/// generic apology; the caller never sees internal diagnostics.
fn unify(result: Result<Outcome, CommandError>, markup: Markup) -> BotReply {
    match result {
        Ok(Outcome::Text(text)) => BotReply {
            text,
            markup,
            disable_web_preview: false,
        },
        Ok(Outcome::Empty(reason)) => BotReply::plain(reason),
        Err(e) if !e.is_internal() => BotReply::plain(e.to_string()),
        Err(e) => {
            error!(error = %e, "pipeline failed");
            BotReply::plain(SAD_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UpstreamError, ValidationError};

    #[test]
    fn test_command_name_strips_prefix_and_bot_suffix() {
        assert_eq!(command_name("/ranked na Wakafa"), Some("ranked"));
        assert_eq!(command_name("/twitch@riftbot 3"), Some("twitch"));
        assert_eq!(command_name("hello there"), None);
        assert_eq!(command_name("/"), None);
        assert_eq!(command_name(""), None);
    }

    #[test]
    fn test_unify_shows_validation_messages_verbatim() {
        let reply = unify(
            Err(ValidationError::InvalidName.into()),
            Markup::Markdown,
        );
        assert_eq!(reply.text, "Invalid summoner name.");
        assert_eq!(reply.markup, Markup::Plain);
    }

    #[test]
    fn test_unify_hides_upstream_detail() {
        let reply = unify(
            Err(UpstreamError::Transport("connection refused to 10.0.0.1".into()).into()),
            Markup::Markdown,
        );
        assert_eq!(reply.text, SAD_MESSAGE);
        assert!(!reply.text.contains("10.0.0.1"));
    }

    #[test]
    fn test_unify_passes_empty_reason_through() {
        let reply = unify(
            Ok(Outcome::Empty("No ranked data for Wakafa".into())),
            Markup::Markdown,
        );
        assert_eq!(reply.text, "No ranked data for Wakafa");
    }
}
