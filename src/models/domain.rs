use serde::{Deserialize, Serialize};

/// Directory member profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub designation: String,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: String,
    #[serde(rename = "projectsCount", default)]
    pub projects_count: u32,
    #[serde(rename = "likesCount", default)]
    pub likes_count: u32,
    #[serde(rename = "isCore", default)]
    pub is_core: bool,
}

impl Member {
    /// Case-insensitive exact comparison against a free-text name
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Signed adjustment applied to a member's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountDelta {
    pub likes: i64,
    pub projects: i64,
}

impl CountDelta {
    pub fn likes(delta: i64) -> Self {
        Self { likes: delta, projects: 0 }
    }

    pub fn projects(delta: i64) -> Self {
        Self { likes: 0, projects: delta }
    }
}

/// Showcase project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "sourceCode", default)]
    pub source_code: String,
    #[serde(default)]
    pub components: Vec<String>,
    /// Member display names
    #[serde(rename = "doneBy", default)]
    pub done_by: Vec<String>,
    #[serde(rename = "circuitDiagramUrl", default)]
    pub circuit_diagram_url: String,
    #[serde(rename = "circuitDiagramImageHint", default)]
    pub circuit_diagram_image_hint: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "creatorId", default)]
    pub creator_id: Option<String>,
}

impl Project {
    pub fn is_done_by(&self, member: &Member) -> bool {
        self.done_by.iter().any(|name| member.has_name(name))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceType {
    Hackathon,
    Internship,
    Workshop,
    Conference,
    Research,
    #[default]
    Other,
}

/// Experience entry on a member profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub location: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "likerUserId")]
    pub liker_user_id: String,
    #[serde(rename = "likedUserId")]
    pub liked_user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    #[serde(rename = "requesterUserId")]
    pub requester_user_id: String,
    #[serde(rename = "receiverUserId")]
    pub receiver_user_id: String,
    pub status: ConnectionStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Connection {
    /// True if the connection links the two users in either direction
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.requester_user_id == a && self.receiver_user_id == b)
            || (self.requester_user_id == b && self.receiver_user_id == a)
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.requester_user_id == user_id || self.receiver_user_id == user_id
    }

    /// The other side of the connection, as seen from `user_id`
    pub fn counterpart(&self, user_id: &str) -> &str {
        if self.requester_user_id == user_id {
            &self.receiver_user_id
        } else {
            &self.requester_user_id
        }
    }
}

/// Deduplicated, ordered search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<Member>);

impl MatchSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.0.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<Member> {
        self.0
    }

    pub(crate) fn from_deduplicated(members: Vec<Member>) -> Self {
        Self(members)
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Presenting,
}

/// Observable state of one search session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub status: SearchStatus,
    pub query: Option<String>,
    pub results: MatchSet,
    pub generation: u64,
}
