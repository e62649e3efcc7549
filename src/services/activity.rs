use crate::models::{Connection, ConnectionStatus, CountDelta, Like, Member};
use crate::services::directory::{DirectoryError, ProfileStore};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Cannot {0} your own profile")]
    SelfAction(&'static str),
}

/// Failure of a like toggle that also updates the liked member's count
#[derive(Debug, Error)]
pub enum LikeError {
    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error(transparent)]
    Profile(#[from] DirectoryError),
}

/// Likes and connections between members
///
/// Connections are undirected: a link requested by A to B is the same
/// connection as one requested by B to A.
#[derive(Default)]
pub struct ActivityStore {
    likes: Mutex<Vec<Like>>,
    connections: Mutex<Vec<Connection>>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_liked(&self, liker_user_id: &str, liked_user_id: &str) -> bool {
        self.lock_likes()
            .iter()
            .any(|l| l.liker_user_id == liker_user_id && l.liked_user_id == liked_user_id)
    }

    /// Flip the like from `liker` to `liked`, returning whether it is now liked
    pub fn toggle_like(&self, liker_user_id: &str, liked_user_id: &str) -> Result<bool, ActivityError> {
        if liker_user_id == liked_user_id {
            return Err(ActivityError::SelfAction("like"));
        }

        let mut likes = self.lock_likes();
        let before = likes.len();
        likes.retain(|l| !(l.liker_user_id == liker_user_id && l.liked_user_id == liked_user_id));

        if likes.len() < before {
            tracing::debug!("Like removed: {} -> {}", liker_user_id, liked_user_id);
            return Ok(false);
        }

        likes.push(Like {
            liker_user_id: liker_user_id.to_string(),
            liked_user_id: liked_user_id.to_string(),
            created_at: chrono::Utc::now(),
        });
        tracing::debug!("Like added: {} -> {}", liker_user_id, liked_user_id);
        Ok(true)
    }

    /// Toggle a like and move the liked member's `likesCount` with it
    ///
    /// If the count update fails the toggle is undone.
    pub fn toggle_like_counted(
        &self,
        profiles: &dyn ProfileStore,
        liker_user_id: &str,
        liked_user_id: &str,
    ) -> Result<(bool, Member), LikeError> {
        let liked = self.toggle_like(liker_user_id, liked_user_id)?;
        let delta = CountDelta::likes(if liked { 1 } else { -1 });

        match profiles.mutate_counts(liked_user_id, delta) {
            Ok(member) => Ok((liked, member)),
            Err(e) => {
                tracing::warn!("Reverting like {} -> {}: {}", liker_user_id, liked_user_id, e);
                self.toggle_like(liker_user_id, liked_user_id)?;
                Err(e.into())
            }
        }
    }

    pub fn like_count(&self, user_id: &str) -> usize {
        self.lock_likes()
            .iter()
            .filter(|l| l.liked_user_id == user_id)
            .count()
    }

    pub fn is_connected(&self, a: &str, b: &str) -> bool {
        self.lock_connections().iter().any(|c| c.links(a, b))
    }

    /// Flip the connection between two users, returning whether they are now connected
    pub fn toggle_connection(&self, requester_user_id: &str, receiver_user_id: &str) -> Result<bool, ActivityError> {
        if requester_user_id == receiver_user_id {
            return Err(ActivityError::SelfAction("connect with"));
        }

        let mut connections = self.lock_connections();
        let before = connections.len();
        connections.retain(|c| !c.links(requester_user_id, receiver_user_id));

        if connections.len() < before {
            tracing::debug!("Connection removed: {} <-> {}", requester_user_id, receiver_user_id);
            return Ok(false);
        }

        connections.push(Connection {
            requester_user_id: requester_user_id.to_string(),
            receiver_user_id: receiver_user_id.to_string(),
            status: ConnectionStatus::Connected,
            created_at: chrono::Utc::now(),
        });
        tracing::debug!("Connection added: {} <-> {}", requester_user_id, receiver_user_id);
        Ok(true)
    }

    pub fn connections_for(&self, user_id: &str) -> Vec<Connection> {
        self.lock_connections()
            .iter()
            .filter(|c| c.involves(user_id))
            .cloned()
            .collect()
    }

    pub fn connection_count(&self, user_id: &str) -> usize {
        self.lock_connections()
            .iter()
            .filter(|c| c.involves(user_id))
            .count()
    }

    fn lock_likes(&self) -> std::sync::MutexGuard<'_, Vec<Like>> {
        self.likes.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_connections(&self) -> std::sync::MutexGuard<'_, Vec<Connection>> {
        self.connections.lock().unwrap_or_else(|e| e.into_inner())
    }
}
