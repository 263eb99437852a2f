//! Interactive line-based chat loop.

use std::io::{self, BufRead, Write};

use fellah_ai::{AiClient, ConversationManager, Message};
use tracing::{debug, warn};

const PROMPT: &str = "> ";

/// One chat session over a reader/writer pair. Owns the history.
pub struct Repl<'a> {
    manager: &'a ConversationManager,
    client: &'a dyn AiClient,
    extra_context: Option<String>,
    history: Vec<Message>,
}

impl<'a> Repl<'a> {
    pub fn new(manager: &'a ConversationManager, client: &'a dyn AiClient) -> Self {
        Self {
            manager,
            client,
            extra_context: None,
            history: Vec::new(),
        }
    }

    pub fn with_extra_context(mut self, context: Option<String>) -> Self {
        self.extra_context = context;
        self
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Read questions until EOF or `/quit`.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let text = line.trim();

            match text {
                "/quit" | "/exit" => break,
                "/clear" => {
                    self.history.clear();
                    writeln!(output, "(history cleared)")?;
                }
                "" => {
                    warn!("empty input ignored");
                    writeln!(output, "أدخل رسالة من فضلك (Please enter a message)")?;
                }
                _ => {
                    let history = std::mem::take(&mut self.history);
                    let exchange = self
                        .manager
                        .respond(self.client, history, text, self.extra_context.as_deref())
                        .await;
                    if let Some(usage) = exchange.usage {
                        debug!(total_tokens = usage.total_tokens(), "turn complete");
                    }
                    writeln!(output, "{}\n", exchange.text())?;
                    self.history = exchange.history;
                }
            }

            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        Ok(())
    }
}
