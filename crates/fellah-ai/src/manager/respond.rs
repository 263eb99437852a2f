//! Turn orchestration around the completion call.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::{AiClient, AiError, Message, TokenUsage};

use super::prompt::request_context;
use super::window::trim;
use super::ConversationManager;

/// Result of one turn.
#[derive(Debug)]
pub enum Outcome {
    /// Localized assistant reply.
    Reply(String),
    /// The provider call failed; history was left untouched.
    Failed(AiError),
}

/// Updated history plus what happened on this turn.
#[derive(Debug)]
pub struct Exchange {
    pub history: Vec<Message>,
    pub outcome: Outcome,
    /// Provider token usage, when the call succeeded.
    pub usage: Option<TokenUsage>,
}

impl Exchange {
    pub fn is_reply(&self) -> bool {
        matches!(self.outcome, Outcome::Reply(_))
    }

    pub fn error(&self) -> Option<&AiError> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            Outcome::Reply(_) => None,
        }
    }

    /// Text to show the user: the reply, or a formatted error line.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.outcome {
            Outcome::Reply(text) => Cow::Borrowed(text),
            Outcome::Failed(e) => {
                Cow::Owned(format!("Khata fi l-internet: {e} (Error in processing)"))
            }
        }
    }
}

impl ConversationManager {
    /// Run one conversation turn.
    ///
    /// The user text is framed and decorated, appended to a trimmed copy
    /// of the history, and sent with the domain preamble (plus
    /// `extra_context`, verbatim). On success the returned history is the
    /// full input history followed by the user and assistant messages. On
    /// failure it is the input history unchanged. This never returns an
    /// error or panics on provider failure.
    pub async fn respond(
        &self,
        client: &dyn AiClient,
        history: Vec<Message>,
        user_text: &str,
        extra_context: Option<&str>,
    ) -> Exchange {
        let user_message = Message::user(self.prepare_prompt(user_text));

        let mut window = history.clone();
        window.push(user_message.clone());
        let window = trim(window, self.max_context_tokens);
        let context = request_context(&self.preamble, extra_context);

        debug!(
            history = history.len(),
            window = window.len(),
            has_extra_context = extra_context.is_some(),
            "sending conversation turn"
        );

        match client.send_message(&window, &context).await {
            Ok(response) => {
                let reply = self.localize(&response.content);
                let mut history = history;
                history.push(user_message);
                history.push(Message::assistant(reply.clone()));
                Exchange {
                    history,
                    outcome: Outcome::Reply(reply),
                    usage: Some(response.usage),
                }
            }
            Err(e) => {
                warn!(kind = e.kind(), "completion failed: {e}");
                Exchange {
                    history,
                    outcome: Outcome::Failed(e),
                    usage: None,
                }
            }
        }
    }
}
