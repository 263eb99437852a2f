//! Word-budget trimming of the history window.

use tracing::debug;

use crate::Message;

/// Sum of word counts across `messages`.
pub fn total_words(messages: &[Message]) -> usize {
    messages.iter().map(Message::word_count).sum()
}

/// Drop messages from the oldest end until the word count fits `max_tokens`.
///
/// The newest message is never dropped, even when it alone exceeds the
/// budget; in that case the result is exactly that one message.
pub fn trim(mut history: Vec<Message>, max_tokens: usize) -> Vec<Message> {
    let mut total = total_words(&history);
    let mut dropped = 0;

    while total > max_tokens && dropped + 1 < history.len() {
        total -= history[dropped].word_count();
        dropped += 1;
    }

    if dropped > 0 {
        debug!(dropped, remaining_words = total, max_tokens, "trimmed history");
        history.drain(..dropped);
    }
    history
}
