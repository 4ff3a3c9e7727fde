use crate::models::{ChatConversation, ChatMessage, Club, ConversationId, Opportunity, Student};
use anyhow::Context;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/seed/campus.json"));

/// The fixed dataset every store starts from.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub students: Vec<Student>,
    pub opportunities: Vec<Opportunity>,
    pub clubs: Vec<Club>,
    pub conversations: Vec<ChatConversation>,
    #[serde(default)]
    pub messages: HashMap<ConversationId, Vec<ChatMessage>>,
}

impl Seed {
    pub fn embedded() -> anyhow::Result<Seed> {
        serde_json::from_str(EMBEDDED).context("embedded seed dataset is malformed")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Seed> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("seed file {} is malformed", path.display()))
    }
}
