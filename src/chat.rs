use crate::models::{ChatConversation, ChatMessage, ConversationId, StudentId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub type Threads = HashMap<ConversationId, Vec<ChatMessage>>;

/// Sum of the unread counters, shown on the chat tab. Opening a thread does
/// not reset a counter.
pub fn total_unread(conversations: &[ChatConversation]) -> u32 {
    conversations.iter().map(|c| c.unread).sum()
}

pub fn messages_for<'a>(threads: &'a Threads, id: &ConversationId) -> &'a [ChatMessage] {
    threads.get(id).map(Vec::as_slice).unwrap_or(&[])
}

pub fn send_message(
    threads: &Threads,
    conversation: &ConversationId,
    sender: &StudentId,
    text: &str,
    message_id: String,
    now: DateTime<Utc>,
) -> Threads {
    let mut threads = threads.clone();
    if text.trim().is_empty() {
        return threads;
    }

    threads.entry(conversation.clone()).or_default().push(ChatMessage {
        id: message_id,
        sender_id: sender.clone(),
        content: text.to_owned(),
        timestamp: now,
        is_own: true,
    });
    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    #[test]
    fn unread_badge_sums_conversations() {
        let seed = Seed::embedded().unwrap();
        assert_eq!(total_unread(&seed.conversations), 3);
    }

    #[test]
    fn message_is_appended_to_its_thread() {
        let threads = Seed::embedded().unwrap().messages;
        let id = ConversationId::from("chat3");
        let after = send_message(&threads, &id, &StudentId::current(), "Let's pair on it tonight", "99".into(), Utc::now());

        let thread = messages_for(&after, &id);
        assert_eq!(thread.len(), 4);
        let last = thread.last().unwrap();
        assert!(last.is_own);
        assert_eq!(last.content, "Let's pair on it tonight");
        assert_eq!(messages_for(&after, &ConversationId::from("chat1")), messages_for(&threads, &ConversationId::from("chat1")));
    }

    #[test]
    fn blank_message_is_dropped() {
        let threads = Seed::embedded().unwrap().messages;
        let after = send_message(&threads, &ConversationId::from("chat1"), &StudentId::current(), " \n", "1".into(), Utc::now());
        assert_eq!(after, threads);
    }

    #[test]
    fn first_message_starts_a_thread() {
        let id = ConversationId::from("chat9");
        let after = send_message(&Threads::new(), &id, &StudentId::current(), "hi", "1".into(), Utc::now());
        assert_eq!(messages_for(&after, &id).len(), 1);
        assert!(messages_for(&Threads::new(), &id).is_empty());
    }
}
