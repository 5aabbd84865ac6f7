//! Command route
//!
//! The chat transport posts `(rawText, callerId, chatContext)` here and gets
//! back at most one reply. `reply: null` means stay silent (unknown command
//! or a caller outside the allow-list).

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use riftbot::{BotReply, ChatContext, Invocation, Markup};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/commands", post(handle_command))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    pub text: String,
    pub caller_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub chat_kind: String,
    #[serde(default)]
    pub chat_title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub reply: Option<ReplyBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyBody {
    pub text: String,
    pub markup: &'static str,
    pub disable_web_preview: bool,
}

impl From<BotReply> for ReplyBody {
    fn from(reply: BotReply) -> Self {
        let markup = match reply.markup {
            Markup::Plain => "plain",
            Markup::Markdown => "markdown",
            Markup::Html => "html",
        };
        Self {
            text: reply.text,
            markup,
            disable_web_preview: reply.disable_web_preview,
        }
    }
}

pub async fn handle_command(
    State(state): State<AppState>,
    Json(payload): Json<CommandRequest>,
) -> Json<CommandResponse> {
    let invocation = Invocation {
        raw_text: payload.text,
        caller_id: payload.caller_id,
        display_name: payload.display_name,
        chat: ChatContext {
            kind: payload.chat_kind,
            title: payload.chat_title,
        },
    };

    let reply = state.bot.handle(&invocation).await;
    Json(CommandResponse {
        reply: reply.map(ReplyBody::from),
    })
}
