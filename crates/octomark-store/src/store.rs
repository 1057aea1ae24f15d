//! The bookmark store: two id-unique, insertion-ordered collections of
//! whole Profile/Repository copies, mirrored to durable storage.
//!
//! Every mutation re-serializes the affected collection and writes it
//! synchronously, so storage is never behind what callers can observe.
//! Storage failures and corrupt data are logged and recovered locally;
//! the store stays usable (empty in the worst case) and never bubbles
//! an error up to display code.

use crate::backend::StorageBackend;
use crate::notify::{LogNotifier, Notifier};
use octomark_core::{Profile, Repository};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Storage key for the profile collection
pub const PROFILE_BOOKMARKS_KEY: &str = "github-bookmarks";
/// Storage key for the repository collection
pub const REPO_BOOKMARKS_KEY: &str = "github-repo-bookmarks";

/// Which of the two collections a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkKind {
    Profile,
    Repository,
}

/// Emitted to listeners after each successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkChange {
    Added(BookmarkKind, u64),
    Removed(BookmarkKind, u64),
}

type Listener = Box<dyn Fn(&BookmarkChange)>;

/// Owns the bookmarked profiles and repositories for one session
///
/// Hydrates from the backend once at construction; afterwards the
/// in-memory vectors are authoritative and storage just mirrors them.
pub struct BookmarkStore {
    backend: Box<dyn StorageBackend>,
    notifier: Box<dyn Notifier>,
    listeners: Vec<Listener>,
    profiles: Vec<Profile>,
    repos: Vec<Repository>,
}

impl BookmarkStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self::with_notifier(backend, Box::new(LogNotifier))
    }

    pub fn with_notifier(backend: Box<dyn StorageBackend>, notifier: Box<dyn Notifier>) -> Self {
        let profiles = hydrate(backend.as_ref(), PROFILE_BOOKMARKS_KEY);
        let repos = hydrate(backend.as_ref(), REPO_BOOKMARKS_KEY);

        Self {
            backend,
            notifier,
            listeners: Vec::new(),
            profiles,
            repos,
        }
    }

    /// Register a callback invoked after every successful mutation
    ///
    /// Display code re-queries the read operations from inside the
    /// callback; the change value just says what moved.
    pub fn subscribe(&mut self, listener: impl Fn(&BookmarkChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Bookmarked profiles in insertion order
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Bookmarked repositories in insertion order
    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    pub fn is_profile_bookmarked(&self, id: u64) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }

    pub fn is_repo_bookmarked(&self, id: u64) -> bool {
        self.repos.iter().any(|r| r.id == id)
    }

    /// Append a profile unless its id is already bookmarked
    ///
    /// Returns whether the collection changed. Duplicate adds are a
    /// no-op, keeping the id-uniqueness invariant.
    pub fn add_profile(&mut self, profile: Profile) -> bool {
        if self.is_profile_bookmarked(profile.id) {
            debug!(id = profile.id, "profile already bookmarked, ignoring add");
            return false;
        }

        let id = profile.id;
        let message = format!("Added {} to bookmarks", profile.display_name());
        self.profiles.push(profile);
        self.persist(PROFILE_BOOKMARKS_KEY, BookmarkKind::Profile);
        self.notifier.success(&message);
        self.emit(BookmarkChange::Added(BookmarkKind::Profile, id));
        true
    }

    /// Remove a profile by id; notification and persistence only happen
    /// when something was actually removed
    pub fn remove_profile(&mut self, id: u64) -> bool {
        let Some(pos) = self.profiles.iter().position(|p| p.id == id) else {
            return false;
        };

        let removed = self.profiles.remove(pos);
        self.persist(PROFILE_BOOKMARKS_KEY, BookmarkKind::Profile);
        self.notifier
            .info(&format!("Removed {} from bookmarks", removed.display_name()));
        self.emit(BookmarkChange::Removed(BookmarkKind::Profile, id));
        true
    }

    /// Toggle membership; returns whether the profile is bookmarked now
    ///
    /// A re-add lands at the end of the collection, not at the item's
    /// old position.
    pub fn toggle_profile(&mut self, profile: Profile) -> bool {
        if self.is_profile_bookmarked(profile.id) {
            self.remove_profile(profile.id);
            false
        } else {
            self.add_profile(profile);
            true
        }
    }

    /// Append a repository unless its id is already bookmarked
    pub fn add_repo(&mut self, repo: Repository) -> bool {
        if self.is_repo_bookmarked(repo.id) {
            debug!(id = repo.id, "repository already bookmarked, ignoring add");
            return false;
        }

        let id = repo.id;
        let message = format!("Added {} to bookmarks", repo.name);
        self.repos.push(repo);
        self.persist(REPO_BOOKMARKS_KEY, BookmarkKind::Repository);
        self.notifier.success(&message);
        self.emit(BookmarkChange::Added(BookmarkKind::Repository, id));
        true
    }

    /// Remove a repository by id if present
    pub fn remove_repo(&mut self, id: u64) -> bool {
        let Some(pos) = self.repos.iter().position(|r| r.id == id) else {
            return false;
        };

        let removed = self.repos.remove(pos);
        self.persist(REPO_BOOKMARKS_KEY, BookmarkKind::Repository);
        self.notifier
            .info(&format!("Removed {} from bookmarks", removed.name));
        self.emit(BookmarkChange::Removed(BookmarkKind::Repository, id));
        true
    }

    /// Toggle membership; returns whether the repository is bookmarked now
    pub fn toggle_repo(&mut self, repo: Repository) -> bool {
        if self.is_repo_bookmarked(repo.id) {
            self.remove_repo(repo.id);
            false
        } else {
            self.add_repo(repo);
            true
        }
    }

    fn persist(&self, key: &str, kind: BookmarkKind) {
        let serialized = match kind {
            BookmarkKind::Profile => serde_json::to_string(&self.profiles),
            BookmarkKind::Repository => serde_json::to_string(&self.repos),
        };

        let serialized = match serialized {
            Ok(s) => s,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize bookmarks");
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &serialized) {
            // Storage trouble never propagates to callers; the in-memory
            // state is still good for this session.
            warn!(key, error = %e, "failed to persist bookmarks");
        }
    }

    fn emit(&self, change: BookmarkChange) {
        for listener in &self.listeners {
            listener(&change);
        }
    }
}

/// Best-effort read of one collection at startup
///
/// Missing key means a fresh install; corrupt data gets logged and
/// treated as empty rather than crashing the session.
fn hydrate<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Vec<T> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read bookmarks from storage");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "stored bookmarks are corrupt, starting empty");
            Vec::new()
        }
    }
}
