use crate::models::{Author, Comment, Opportunity, OpportunityId, OpportunityKind, StudentId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

fn toggle(set: &mut Vec<StudentId>, user: &StudentId) {
    if set.contains(user) {
        set.retain(|id| id != user);
    } else {
        set.push(user.clone());
    }
}

fn update(
    opportunities: &[Opportunity],
    id: &OpportunityId,
    patch: impl Fn(&mut Opportunity),
) -> Vec<Opportunity> {
    opportunities
        .iter()
        .map(|opportunity| {
            let mut opportunity = opportunity.clone();
            if &opportunity.id == id {
                patch(&mut opportunity);
            }
            opportunity
        })
        .collect()
}

pub fn toggle_like(opportunities: &[Opportunity], id: &OpportunityId, user: &StudentId) -> Vec<Opportunity> {
    update(opportunities, id, |o| toggle(&mut o.likes, user))
}

pub fn toggle_save(opportunities: &[Opportunity], id: &OpportunityId, user: &StudentId) -> Vec<Opportunity> {
    update(opportunities, id, |o| toggle(&mut o.saved, user))
}

/// Appends a comment unless `text` is blank. The text is kept as typed.
pub fn add_comment(
    opportunities: &[Opportunity],
    id: &OpportunityId,
    author: Author,
    text: &str,
    comment_id: String,
    now: DateTime<Utc>,
) -> Vec<Opportunity> {
    if text.trim().is_empty() {
        return opportunities.to_vec();
    }

    let comment = Comment {
        id: comment_id,
        author,
        content: text.to_owned(),
        timestamp: now,
    };
    update(opportunities, id, |o| o.comments.push(comment.clone()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFilter {
    #[default]
    All,
    Only(OpportunityKind),
}

#[derive(Debug, Error)]
#[error("unknown feed category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for FeedFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(FeedFilter::All);
        }
        OpportunityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .map(FeedFilter::Only)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

impl FeedFilter {
    pub fn admits(self, opportunity: &Opportunity) -> bool {
        match self {
            FeedFilter::All => true,
            FeedFilter::Only(kind) => opportunity.kind == kind,
        }
    }
}

/// Opportunities passing `filter`, in feed order.
pub fn filter_feed(opportunities: &[Opportunity], filter: FeedFilter) -> Vec<&Opportunity> {
    opportunities.iter().filter(|o| filter.admits(o)).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityView<'a> {
    #[serde(flatten)]
    pub opportunity: &'a Opportunity,
    pub liked: bool,
    pub is_saved: bool,
    pub like_count: usize,
    pub comment_count: usize,
}

impl<'a> OpportunityView<'a> {
    pub fn new(opportunity: &'a Opportunity, viewer: &StudentId) -> Self {
        Self {
            opportunity,
            liked: opportunity.likes.contains(viewer),
            is_saved: opportunity.saved.contains(viewer),
            like_count: opportunity.likes.len(),
            comment_count: opportunity.comments.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;
    use chrono::TimeZone;

    fn feed() -> Vec<Opportunity> {
        Seed::embedded().unwrap().opportunities
    }

    fn me() -> Author {
        Author {
            id: StudentId::current(),
            name: "You".into(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=You".into(),
        }
    }

    #[test]
    fn like_twice_is_identity() {
        let opportunities = feed();
        let id = OpportunityId::from("o4");
        let user = StudentId::current();

        let once = toggle_like(&opportunities, &id, &user);
        assert!(once[3].likes.contains(&user));
        let twice = toggle_like(&once, &id, &user);
        assert_eq!(twice, opportunities);
    }

    #[test]
    fn unlike_removes_existing_like() {
        let opportunities = feed();
        let after = toggle_like(&opportunities, &OpportunityId::from("o1"), &StudentId::current());
        assert_eq!(after[0].likes, vec![StudentId::from("1"), StudentId::from("3"), StudentId::from("4")]);
    }

    #[test]
    fn save_is_independent_of_like() {
        let opportunities = feed();
        let id = OpportunityId::from("o3");
        let user = StudentId::from("2");

        let after = toggle_save(&opportunities, &id, &user);
        assert_eq!(after[2].saved, vec![user.clone()]);
        assert_eq!(after[2].likes, opportunities[2].likes);
        assert_eq!(toggle_save(&after, &id, &user), opportunities);
    }

    #[test]
    fn blank_comment_is_ignored() {
        let opportunities = feed();
        let id = OpportunityId::from("o3");
        for text in ["", "   ", "\n\t"] {
            let after = add_comment(&opportunities, &id, me(), text, "1".into(), Utc::now());
            assert_eq!(after[2].comments.len(), 0);
        }
    }

    #[test]
    fn comment_is_appended_last() {
        let opportunities = feed();
        let now = Utc.with_ymd_and_hms(2025, 11, 2, 8, 0, 0).unwrap();
        let after = add_comment(&opportunities, &OpportunityId::from("o1"), me(), "hello", "42".into(), now);

        assert_eq!(after[0].comments.len(), opportunities[0].comments.len() + 1);
        let last = after[0].comments.last().unwrap();
        assert_eq!(last.id, "42");
        assert_eq!(last.content, "hello");
        assert_eq!(last.author.id, StudentId::current());
        assert_eq!(last.timestamp, now);
        assert_eq!(after[1..], opportunities[1..]);
    }

    #[test]
    fn unknown_opportunity_is_untouched() {
        let opportunities = feed();
        let id = OpportunityId::from("o99");
        assert_eq!(toggle_like(&opportunities, &id, &StudentId::current()), opportunities);
        assert_eq!(add_comment(&opportunities, &id, me(), "hi", "1".into(), Utc::now()), opportunities);
    }

    #[test]
    fn internship_filter_keeps_order() {
        let opportunities = feed();
        let filter: FeedFilter = "internship".parse().unwrap();
        let ids: Vec<_> = filter_feed(&opportunities, filter).into_iter().map(|o| o.id.0.as_str()).collect();
        assert_eq!(ids, ["o1"]);

        let all: Vec<_> = filter_feed(&opportunities, FeedFilter::All).into_iter().map(|o| o.id.0.as_str()).collect();
        assert_eq!(all, ["o1", "o2", "o3", "o4", "o5"]);
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("all".parse::<FeedFilter>().unwrap(), FeedFilter::All);
        assert_eq!("club".parse::<FeedFilter>().unwrap(), FeedFilter::Only(OpportunityKind::Club));
        assert!("Internship".parse::<FeedFilter>().is_err());
        assert!("jobs".parse::<FeedFilter>().is_err());
    }

    #[test]
    fn view_reports_viewer_flags() {
        let opportunities = feed();
        let view = OpportunityView::new(&opportunities[0], &StudentId::current());
        assert!(view.liked);
        assert!(view.is_saved);
        assert_eq!(view.like_count, 4);
        assert_eq!(view.comment_count, 2);

        let view = OpportunityView::new(&opportunities[4], &StudentId::current());
        assert!(!view.liked);
        assert!(!view.is_saved);
    }
}
