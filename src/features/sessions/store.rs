//! Per-user picker sessions
//!
//! Holds the last text each user sent and the picker page they are on.
//! Entries expire after a period without use, and the store is bounded:
//! inserting a new user at capacity first drops expired entries, then the
//! least recently used one.

use dashmap::DashMap;
use log::debug;
use std::time::{Duration, Instant};

/// Discord user ID
pub type UserKey = u64;

/// The text being styled and the picker page it was last shown on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRequest {
    pub text: String,
    pub page: usize,
}

struct SessionEntry {
    request: StyledRequest,
    touched: Instant,
}

impl SessionEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.touched.elapsed() >= ttl
    }
}

pub struct SessionStore {
    sessions: DashMap<UserKey, SessionEntry>,
    capacity: usize,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        SessionStore {
            sessions: DashMap::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Start (or restart) a session with fresh text on page 0.
    ///
    /// Capacity is a soft bound when many users start sessions concurrently.
    pub fn start(&self, user: UserKey, text: impl Into<String>) -> StyledRequest {
        if !self.sessions.contains_key(&user) && self.sessions.len() >= self.capacity {
            self.make_room();
        }

        let request = StyledRequest {
            text: text.into(),
            page: 0,
        };
        self.sessions.insert(
            user,
            SessionEntry {
                request: request.clone(),
                touched: Instant::now(),
            },
        );
        request
    }

    /// Current session for `user`, or `None` if there is none or it expired
    pub fn get(&self, user: UserKey) -> Option<StyledRequest> {
        self.update(user, |_| {})
    }

    /// Move an existing session to `page`
    pub fn set_page(&self, user: UserKey, page: usize) -> Option<StyledRequest> {
        self.update(user, |request| request.page = page)
    }

    fn update(&self, user: UserKey, f: impl FnOnce(&mut StyledRequest)) -> Option<StyledRequest> {
        if self
            .sessions
            .remove_if(&user, |_, entry| entry.is_expired(self.ttl))
            .is_some()
        {
            debug!("Session for user {user} expired");
            return None;
        }

        let mut entry = self.sessions.get_mut(&user)?;
        f(&mut entry.request);
        entry.touched = Instant::now();
        Some(entry.request.clone())
    }

    /// Drop every expired session, returning how many were removed
    pub fn sweep_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !entry.is_expired(self.ttl));
        before.saturating_sub(self.sessions.len())
    }

    fn make_room(&self) {
        let swept = self.sweep_expired();
        if swept > 0 {
            debug!("Swept {swept} expired sessions to make room");
        }
        if self.sessions.len() < self.capacity {
            return;
        }

        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().touched)
            .map(|entry| *entry.key());
        if let Some(user) = oldest {
            self.sessions.remove(&user);
            debug!("Evicted least recently used session for user {user}");
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
