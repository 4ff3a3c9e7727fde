use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_type!(StudentId);
id_type!(OpportunityId);
id_type!(ClubId);
id_type!(ConversationId);

// reserved id of whoever is signed in
const CURRENT_USER: &str = "current";

impl StudentId {
    pub fn current() -> Self {
        Self(CURRENT_USER.to_owned())
    }

    pub fn is_current(&self) -> bool {
        self.0 == CURRENT_USER
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: u8,
    pub avatar: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub connections: Vec<StudentId>,
    pub pending_requests: Vec<StudentId>,
}

impl Student {
    pub fn author(&self) -> Author {
        Author {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn is_connected_to(&self, other: &StudentId) -> bool {
        self.connections.contains(other)
    }

    pub fn has_pending_from(&self, other: &StudentId) -> bool {
        self.pending_requests.contains(other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Internship,
    Hackathon,
    Event,
    Contest,
    Club,
}

impl OpportunityKind {
    pub const ALL: [OpportunityKind; 5] = [
        OpportunityKind::Internship,
        OpportunityKind::Hackathon,
        OpportunityKind::Event,
        OpportunityKind::Contest,
        OpportunityKind::Club,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityKind::Internship => "internship",
            OpportunityKind::Hackathon => "hackathon",
            OpportunityKind::Event => "event",
            OpportunityKind::Contest => "contest",
            OpportunityKind::Club => "club",
        }
    }
}

/// Who wrote a post or comment, copied at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "authorId")]
    pub id: StudentId,
    #[serde(rename = "authorName")]
    pub name: String,
    #[serde(rename = "authorAvatar")]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(flatten)]
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: OpportunityId,
    #[serde(flatten)]
    pub author: Author,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: Vec<StudentId>,
    pub comments: Vec<Comment>,
    pub saved: Vec<StudentId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub members: Vec<StudentId>,
    pub admin: StudentId,
    pub posts: Vec<OpportunityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "participantId")]
    pub id: StudentId,
    #[serde(rename = "participantName")]
    pub name: String,
    #[serde(rename = "participantAvatar")]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConversation {
    pub id: ConversationId,
    #[serde(flatten)]
    pub participant: Participant,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    pub unread: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: StudentId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_own: bool,
}
