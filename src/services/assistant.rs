use tracing::{debug, warn};

use super::completion::{Completion, CompletionClient, Role, Turn, UpstreamError};
use super::persona::{
    PERSONA_PROMPT, QUOTA_FALLBACK_REPLY, SITE_CONTEXT, SITE_CONTEXT_LABEL, default_suggestions,
};
use crate::message::ChatResponse;

/// Persona first, site reference second, the caller's message last and untouched.
pub fn compose_turns(message: &str) -> Vec<Turn> {
    vec![
        Turn::new(Role::System, PERSONA_PROMPT),
        Turn::new(Role::System, format!("{SITE_CONTEXT_LABEL}{SITE_CONTEXT}")),
        Turn::new(Role::User, message),
    ]
}

/// Map a completion outcome onto the response sent back to the caller.
pub fn build_response(outcome: Completion) -> ChatResponse {
    let reply = match outcome {
        Completion::Reply(text) => text,
        Completion::QuotaExhausted => QUOTA_FALLBACK_REPLY.to_string(),
    };
    ChatResponse { reply, suggestions: Some(default_suggestions()) }
}

pub async fn handle_assistant_request(
    client: &CompletionClient,
    message: &str,
) -> Result<ChatResponse, UpstreamError> {
    let turns = compose_turns(message);
    debug!(model = client.model(), bytes = message.len(), "forwarding assistant request");

    let outcome = client.complete(&turns).await?;
    if outcome == Completion::QuotaExhausted {
        warn!("completion service reported exhausted quota, sending fallback reply");
    }
    Ok(build_response(outcome))
}
