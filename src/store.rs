//! Application state shared by every view.
//!
//! Each collection sits behind an `Arc` and is swapped for a new one whenever
//! an operation changes it. Anyone holding an older snapshot keeps a
//! consistent view and can tell the state moved on with [`Arc::ptr_eq`].
//! Operations that change nothing leave the old `Arc` in place.

use crate::{
    chat::{self, Threads},
    clubs, feed, network,
    models::{
        ChatConversation, ChatMessage, Club, ClubId, ConversationId, Opportunity, OpportunityId,
        Student, StudentId,
    },
    profile::{self, ProfileUpdate},
    seed::Seed,
    session::Session,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("student `{0}` does not exist")]
    StudentNotFound(StudentId),
    #[error("opportunity `{0}` does not exist")]
    OpportunityNotFound(OpportunityId),
    #[error("club `{0}` does not exist")]
    ClubNotFound(ClubId),
    #[error("conversation `{0}` does not exist")]
    ConversationNotFound(ConversationId),
}

/// Hands out ids derived from the wall clock, strictly increasing even when
/// several are requested within the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        self.last = now.timestamp_millis().max(self.last + 1);
        self.last.to_string()
    }
}

fn replace<T: PartialEq>(slot: &mut Arc<[T]>, next: Vec<T>) -> bool {
    if **slot == *next {
        return false;
    }
    *slot = next.into();
    true
}

pub struct Store {
    pub session: Session,
    students: Arc<[Student]>,
    opportunities: Arc<[Opportunity]>,
    clubs: Arc<[Club]>,
    conversations: Arc<[ChatConversation]>,
    threads: Arc<Threads>,
    ids: IdGenerator,
}

impl Store {
    pub fn new(seed: Seed) -> Self {
        Self {
            session: Session::default(),
            students: seed.students.into(),
            opportunities: seed.opportunities.into(),
            clubs: seed.clubs.into(),
            conversations: seed.conversations.into(),
            threads: Arc::new(seed.messages),
            ids: IdGenerator::default(),
        }
    }

    pub fn students(&self) -> &Arc<[Student]> {
        &self.students
    }

    pub fn opportunities(&self) -> &Arc<[Opportunity]> {
        &self.opportunities
    }

    pub fn clubs(&self) -> &Arc<[Club]> {
        &self.clubs
    }

    pub fn conversations(&self) -> &Arc<[ChatConversation]> {
        &self.conversations
    }

    pub fn threads(&self) -> &Arc<Threads> {
        &self.threads
    }

    pub fn student(&self, id: &StudentId) -> Result<&Student, StoreError> {
        self.students
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoreError::StudentNotFound(id.clone()))
    }

    pub fn opportunity(&self, id: &OpportunityId) -> Result<&Opportunity, StoreError> {
        self.opportunities
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| StoreError::OpportunityNotFound(id.clone()))
    }

    pub fn club(&self, id: &ClubId) -> Result<&Club, StoreError> {
        self.clubs
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::ClubNotFound(id.clone()))
    }

    pub fn conversation(&self, id: &ConversationId) -> Result<&ChatConversation, StoreError> {
        self.conversations
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::ConversationNotFound(id.clone()))
    }

    pub fn messages(&self, id: &ConversationId) -> Result<&[ChatMessage], StoreError> {
        self.conversation(id)?;
        Ok(chat::messages_for(&self.threads, id))
    }

    pub fn send_connection_request(&mut self, requester: &StudentId, target: &StudentId) -> Result<bool, StoreError> {
        self.student(requester)?;
        self.student(target)?;
        let next = network::send_connection_request(&self.students, requester, target);
        let changed = replace(&mut self.students, next);
        if changed {
            info!(%requester, %target, "connection request sent");
        } else {
            debug!(%requester, %target, "connection request ignored");
        }
        Ok(changed)
    }

    pub fn accept_connection_request(&mut self, self_id: &StudentId, requester: &StudentId) -> Result<bool, StoreError> {
        self.student(self_id)?;
        self.student(requester)?;
        let next = network::accept_connection_request(&self.students, self_id, requester);
        let changed = replace(&mut self.students, next);
        if changed {
            info!(student = %self_id, %requester, "connection request accepted");
        }
        Ok(changed)
    }

    pub fn reject_connection_request(&mut self, self_id: &StudentId, requester: &StudentId) -> Result<bool, StoreError> {
        self.student(self_id)?;
        let next = network::reject_connection_request(&self.students, self_id, requester);
        let changed = replace(&mut self.students, next);
        if changed {
            info!(student = %self_id, %requester, "connection request rejected");
        }
        Ok(changed)
    }

    pub fn toggle_like(&mut self, id: &OpportunityId, user: &StudentId) -> Result<bool, StoreError> {
        self.opportunity(id)?;
        let next = feed::toggle_like(&self.opportunities, id, user);
        replace(&mut self.opportunities, next);
        let liked = self.opportunity(id)?.likes.contains(user);
        debug!(opportunity = %id, %user, liked, "like toggled");
        Ok(liked)
    }

    pub fn toggle_save(&mut self, id: &OpportunityId, user: &StudentId) -> Result<bool, StoreError> {
        self.opportunity(id)?;
        let next = feed::toggle_save(&self.opportunities, id, user);
        replace(&mut self.opportunities, next);
        let saved = self.opportunity(id)?.saved.contains(user);
        debug!(opportunity = %id, %user, saved, "save toggled");
        Ok(saved)
    }

    pub fn add_comment(&mut self, id: &OpportunityId, user: &StudentId, text: &str) -> Result<bool, StoreError> {
        self.opportunity(id)?;
        if text.trim().is_empty() {
            debug!(opportunity = %id, "blank comment dropped");
            return Ok(false);
        }
        let author = self.student(user)?.author();
        let now = Utc::now();
        let comment_id = self.ids.next_id(now);
        let next = feed::add_comment(&self.opportunities, id, author, text, comment_id, now);
        let changed = replace(&mut self.opportunities, next);
        info!(opportunity = %id, %user, "comment added");
        Ok(changed)
    }

    pub fn join_club(&mut self, id: &ClubId, user: &StudentId) -> Result<bool, StoreError> {
        self.club(id)?;
        let next = clubs::join_club(&self.clubs, id, user);
        let changed = replace(&mut self.clubs, next);
        if changed {
            info!(club = %id, %user, "joined club");
        }
        Ok(changed)
    }

    pub fn leave_club(&mut self, id: &ClubId, user: &StudentId) -> Result<bool, StoreError> {
        let club = self.club(id)?;
        if &club.admin == user {
            debug!(club = %id, %user, "club admin is leaving");
        }
        let next = clubs::leave_club(&self.clubs, id, user);
        let changed = replace(&mut self.clubs, next);
        if changed {
            info!(club = %id, %user, "left club");
        }
        Ok(changed)
    }

    pub fn edit_profile(&mut self, user: &StudentId, changes: ProfileUpdate) -> Result<bool, StoreError> {
        self.student(user)?;
        let next = profile::edit_profile(&self.students, user, changes);
        let changed = replace(&mut self.students, next);
        if changed {
            info!(%user, "profile updated");
        }
        Ok(changed)
    }

    pub fn add_skill(&mut self, user: &StudentId, skill: &str) -> Result<bool, StoreError> {
        self.student(user)?;
        let next = profile::add_skill(&self.students, user, skill);
        Ok(replace(&mut self.students, next))
    }

    pub fn remove_skill(&mut self, user: &StudentId, skill: &str) -> Result<bool, StoreError> {
        self.student(user)?;
        let next = profile::remove_skill(&self.students, user, skill);
        Ok(replace(&mut self.students, next))
    }

    pub fn send_message(&mut self, id: &ConversationId, sender: &StudentId, text: &str) -> Result<bool, StoreError> {
        self.conversation(id)?;
        if text.trim().is_empty() {
            debug!(conversation = %id, "blank message dropped");
            return Ok(false);
        }
        let now = Utc::now();
        let message_id = self.ids.next_id(now);
        self.threads = Arc::new(chat::send_message(&self.threads, id, sender, text, message_id, now));
        info!(conversation = %id, %sender, "message sent");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store() -> Store {
        Store::new(Seed::embedded().unwrap())
    }

    #[test]
    fn ids_increase_within_one_millisecond() {
        let mut ids = IdGenerator::default();
        let now = Utc.with_ymd_and_hms(2025, 11, 1, 9, 0, 0).unwrap();
        let a: i64 = ids.next_id(now).parse().unwrap();
        let b: i64 = ids.next_id(now).parse().unwrap();
        assert_eq!(a, now.timestamp_millis());
        assert_eq!(b, a + 1);
    }

    #[test]
    fn changes_swap_the_collection() {
        let mut store = store();
        let before = store.students().clone();

        assert!(store.send_connection_request(&StudentId::current(), &StudentId::from("6")).unwrap());
        assert!(!Arc::ptr_eq(&before, store.students()));
        assert!(before[5].pending_requests.is_empty());
        assert_eq!(store.student(&StudentId::from("6")).unwrap().pending_requests, [StudentId::current()]);
    }

    #[test]
    fn no_ops_keep_the_collection() {
        let mut store = store();
        let before = store.clubs().clone();
        assert!(!store.join_club(&ClubId::from("club1"), &StudentId::current()).unwrap());
        assert!(Arc::ptr_eq(&before, store.clubs()));

        let before = store.opportunities().clone();
        assert!(!store.add_comment(&OpportunityId::from("o1"), &StudentId::current(), "  ").unwrap());
        assert!(Arc::ptr_eq(&before, store.opportunities()));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut store = store();
        let me = StudentId::current();
        assert_eq!(
            store.toggle_like(&OpportunityId::from("o9"), &me),
            Err(StoreError::OpportunityNotFound(OpportunityId::from("o9")))
        );
        assert_eq!(
            store.join_club(&ClubId::from("club9"), &me),
            Err(StoreError::ClubNotFound(ClubId::from("club9")))
        );
        assert_eq!(
            store.send_connection_request(&me, &StudentId::from("99")),
            Err(StoreError::StudentNotFound(StudentId::from("99")))
        );
        assert!(store.messages(&ConversationId::from("chat9")).is_err());
    }

    #[test]
    fn comments_get_distinct_ids_and_author() {
        let mut store = store();
        let id = OpportunityId::from("o3");
        let me = StudentId::current();
        store.add_comment(&id, &me, "first").unwrap();
        store.add_comment(&id, &me, "second").unwrap();

        let comments = &store.opportunity(&id).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_ne!(comments[0].id, comments[1].id);
        assert_eq!(comments[1].content, "second");
        assert_eq!(comments[1].author.name, "You");
    }

    #[test]
    fn toggles_report_new_state() {
        let mut store = store();
        let id = OpportunityId::from("o5");
        let me = StudentId::current();
        assert!(store.toggle_like(&id, &me).unwrap());
        assert!(!store.toggle_like(&id, &me).unwrap());
        assert!(store.toggle_save(&id, &me).unwrap());
    }

    #[test]
    fn messages_append_to_thread() {
        let mut store = store();
        let id = ConversationId::from("chat2");
        assert!(store.send_message(&id, &StudentId::current(), "Yes please!").unwrap());
        assert!(!store.send_message(&id, &StudentId::current(), "").unwrap());
        assert_eq!(store.messages(&id).unwrap().len(), 4);
        // the preview and unread counter are display-only
        assert_eq!(store.conversation(&id).unwrap().unread, 0);
    }
}
