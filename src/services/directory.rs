use crate::models::{CountDelta, Member};
use serde::Deserialize;
use std::path::Path;
use std::sync::RwLock;
use thiserror::Error;

/// Errors that can occur when reading or updating the member directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Unknown member: {0}")]
    UnknownMember(String),

    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    SeedFormat(#[from] toml::de::Error),

    #[error("Duplicate member id in seed: {0}")]
    DuplicateId(String),
}

/// Read-only source of known members
///
/// Reads are synchronous and side-effect free. `list_members` returns the
/// directory's native order, which the search pipeline preserves.
pub trait DirectoryStore: Send + Sync {
    fn list_members(&self) -> Vec<Member>;

    fn get_member(&self, id: &str) -> Option<Member> {
        self.list_members().into_iter().find(|m| m.id == id)
    }
}

/// Counter mutation for like and project side effects
pub trait ProfileStore: Send + Sync {
    fn mutate_counts(&self, user_id: &str, delta: CountDelta) -> Result<Member, DirectoryError>;
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    members: Vec<Member>,
}

/// In-memory directory seeded at start-up
pub struct InMemoryDirectory {
    members: RwLock<Vec<Member>>,
}

impl InMemoryDirectory {
    pub fn new(members: Vec<Member>) -> Result<Self, DirectoryError> {
        let mut seen = std::collections::HashSet::new();
        for member in &members {
            if !seen.insert(member.id.as_str()) {
                return Err(DirectoryError::DuplicateId(member.id.clone()));
            }
        }

        Ok(Self {
            members: RwLock::new(members),
        })
    }

    /// Directory with the built-in LGC roster
    pub fn seeded() -> Self {
        Self {
            members: RwLock::new(default_members()),
        }
    }

    /// Load members from a TOML file of `[[members]]` tables
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, DirectoryError> {
        let seed: SeedFile = toml::from_str(raw)?;
        tracing::debug!("Parsed {} members from seed", seed.members.len());
        Self::new(seed.members)
    }

    pub fn core_members(&self) -> Vec<Member> {
        self.list_members().into_iter().filter(|m| m.is_core).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Member>> {
        self.members.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl DirectoryStore for InMemoryDirectory {
    fn list_members(&self) -> Vec<Member> {
        self.read().clone()
    }

    fn get_member(&self, id: &str) -> Option<Member> {
        self.read().iter().find(|m| m.id == id).cloned()
    }
}

impl ProfileStore for InMemoryDirectory {
    fn mutate_counts(&self, user_id: &str, delta: CountDelta) -> Result<Member, DirectoryError> {
        let mut members = self.members.write().unwrap_or_else(|e| e.into_inner());
        let member = members
            .iter_mut()
            .find(|m| m.id == user_id)
            .ok_or_else(|| DirectoryError::UnknownMember(user_id.to_string()))?;

        member.likes_count = apply_delta(member.likes_count, delta.likes);
        member.projects_count = apply_delta(member.projects_count, delta.projects);

        tracing::debug!(
            "Updated counts for {}: likes={}, projects={}",
            user_id,
            member.likes_count,
            member.projects_count
        );

        Ok(member.clone())
    }
}

/// Counters never go below zero
fn apply_delta(count: u32, delta: i64) -> u32 {
    (count as i64).saturating_add(delta).clamp(0, u32::MAX as i64) as u32
}

fn seed_member(
    id: &str,
    name: &str,
    designation: &str,
    photo_seed: u32,
    projects_count: u32,
    likes_count: u32,
    is_core: bool,
) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        photo_url: format!("https://picsum.photos/seed/{}/400/400", photo_seed),
        projects_count,
        likes_count,
        is_core,
    }
}

/// The LGC roster: five core members followed by the wider membership
pub fn default_members() -> Vec<Member> {
    vec![
        seed_member("harsha-sai", "HARSHA SAI", "Founder, Hardware Specialist", 101, 5, 35, true),
        seed_member("hemanth-venkat", "HEMANTH VENKAT", "Circuit Designer, IoT Specialist", 102, 4, 28, true),
        seed_member("kanishk-k", "KANISHK K", "Co-Founder, Software Specialist", 103, 6, 42, true),
        seed_member("shalini", "SHALINI", "Chip Designer, Exhibitor", 104, 3, 22, true),
        seed_member("shivani", "SHIVANI", "Research Specialist, Marketing", 105, 2, 18, true),
        seed_member("rahul-verma", "Rahul Verma", "Embedded Systems Intern", 106, 1, 10, false),
        seed_member("priya-sharma", "Priya Sharma", "PCB Designer", 107, 2, 15, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_directory_order() {
        let directory = InMemoryDirectory::seeded();
        let ids: Vec<String> = directory.list_members().into_iter().map(|m| m.id).collect();
        assert_eq!(ids.first().map(String::as_str), Some("harsha-sai"));
        assert_eq!(ids.len(), 7);
        assert_eq!(directory.core_members().len(), 5);
    }

    #[test]
    fn test_mutate_counts_saturates_at_zero() {
        let directory = InMemoryDirectory::seeded();
        let updated = directory
            .mutate_counts("shivani", CountDelta::likes(-100))
            .unwrap();
        assert_eq!(updated.likes_count, 0);

        let updated = directory
            .mutate_counts("shivani", CountDelta::projects(1))
            .unwrap();
        assert_eq!(updated.projects_count, 3);
        assert_eq!(directory.get_member("shivani").unwrap().projects_count, 3);
    }

    #[test]
    fn test_mutate_counts_extreme_deltas() {
        let directory = InMemoryDirectory::seeded();
        let updated = directory
            .mutate_counts("shivani", CountDelta::likes(i64::MAX))
            .unwrap();
        assert_eq!(updated.likes_count, u32::MAX);

        let updated = directory
            .mutate_counts("shivani", CountDelta::likes(i64::MIN))
            .unwrap();
        assert_eq!(updated.likes_count, 0);
    }

    #[test]
    fn test_mutate_unknown_member() {
        let directory = InMemoryDirectory::seeded();
        let err = directory.mutate_counts("nobody", CountDelta::likes(1)).unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownMember(id) if id == "nobody"));
    }

    #[test]
    fn test_from_toml() {
        let raw = r#"
            [[members]]
            id = "a"
            name = "Alpha One"
            designation = "Tester"
            isCore = true

            [[members]]
            id = "b"
            name = "Beta Two"
            designation = "Tester"
            likesCount = 3
        "#;

        let directory = InMemoryDirectory::from_toml(raw).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get_member("b").unwrap().likes_count, 3);
        assert_eq!(directory.core_members().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut members = default_members();
        members.push(members[0].clone());
        assert!(matches!(
            InMemoryDirectory::new(members),
            Err(DirectoryError::DuplicateId(_))
        ));
    }
}
