//! In-memory resolver.
//!
//! Keeps the forward and reverse mappings in process, guarded by a single
//! lock so both directions always change together. Useful for tests and
//! development; nothing is persisted.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use guide_id::{Guide, GuideOwner};
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

use crate::{ResolveError, Resolver};

#[derive(Debug, Default)]
struct Directory {
    by_guide: HashMap<Guide, Url>,
    by_url: HashMap<Url, Guide>,
}

impl Directory {
    /// Returns the GUIDE other than `guide` that already holds `url`.
    fn url_holder(&self, url: &Url, guide: &Guide) -> Option<&Guide> {
        self.by_url.get(url).filter(|holder| *holder != guide)
    }
}

/// Resolver backed by in-process maps.
///
/// Mutations are only allowed for GUIDEs whose prefix belongs to one of the
/// owners the resolver was created with. Each URL maps to at most one GUIDE.
#[derive(Debug)]
pub struct MemoryResolver {
    owned_prefixes: HashSet<i32>,
    directory: RwLock<Directory>,
    online: AtomicBool,
}

impl MemoryResolver {
    /// Creates an empty resolver that accepts writes for `owners`.
    pub fn new(owners: impl IntoIterator<Item = GuideOwner>) -> Self {
        Self {
            owned_prefixes: owners.into_iter().map(|o| o.prefix()).collect(),
            directory: RwLock::new(Directory::default()),
            online: AtomicBool::new(true),
        }
    }

    /// Creates an empty resolver that accepts writes for a single owner.
    pub fn for_owner(owner: GuideOwner) -> Self {
        Self::new([owner])
    }

    /// Marks the store reachable or unreachable.
    ///
    /// While offline every operation fails with [`ResolveError::Io`].
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
        info!(online, "Resolver availability changed");
    }

    /// Returns true if the store is reachable.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Returns true if writes are allowed for `prefix`.
    pub fn owns_prefix(&self, prefix: i32) -> bool {
        self.owned_prefixes.contains(&prefix)
    }

    /// Number of registered GUIDEs.
    pub async fn len(&self) -> usize {
        self.directory.read().await.by_guide.len()
    }

    /// Returns true if nothing is registered.
    pub async fn is_empty(&self) -> bool {
        self.directory.read().await.by_guide.is_empty()
    }

    fn ensure_online(&self) -> Result<(), ResolveError> {
        if self.is_online() {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotConnected, "resolver store is offline").into())
        }
    }

    fn authorize(&self, guide: &Guide) -> Result<(), ResolveError> {
        if self.owns_prefix(guide.prefix()) {
            Ok(())
        } else {
            Err(ResolveError::NotPrefixOwner {
                prefix: guide.prefix(),
            })
        }
    }
}

#[async_trait]
impl Resolver for MemoryResolver {
    async fn lookup(&self, guide: &Guide) -> Result<Url, ResolveError> {
        self.ensure_online()?;
        let directory = self.directory.read().await;
        let url = directory
            .by_guide
            .get(guide)
            .cloned()
            .ok_or_else(|| ResolveError::Unknown(guide.to_string()))?;
        debug!(guide = %guide, url = %url, "Resolved GUIDE");
        Ok(url)
    }

    async fn lookup_url(&self, url: &Url) -> Result<Guide, ResolveError> {
        self.ensure_online()?;
        let directory = self.directory.read().await;
        let guide = directory
            .by_url
            .get(url)
            .cloned()
            .ok_or_else(|| ResolveError::Unknown(url.to_string()))?;
        debug!(guide = %guide, url = %url, "Reverse-resolved URL");
        Ok(guide)
    }

    async fn register(&self, guide: &Guide, url: &Url) -> Result<(), ResolveError> {
        self.ensure_online()?;
        self.authorize(guide)?;

        let mut directory = self.directory.write().await;
        if directory.by_guide.contains_key(guide) {
            return Err(ResolveError::AlreadyExists {
                guide: guide.clone(),
            });
        }
        if let Some(holder) = directory.url_holder(url, guide) {
            return Err(ResolveError::AlreadyExists {
                guide: holder.clone(),
            });
        }

        directory.by_guide.insert(guide.clone(), url.clone());
        directory.by_url.insert(url.clone(), guide.clone());
        info!(guide = %guide, url = %url, "Registered GUIDE");
        Ok(())
    }

    async fn update(&self, guide: &Guide, url: &Url) -> Result<(), ResolveError> {
        self.ensure_online()?;
        self.authorize(guide)?;

        let mut directory = self.directory.write().await;
        if !directory.by_guide.contains_key(guide) {
            return Err(ResolveError::Unknown(guide.to_string()));
        }
        if let Some(holder) = directory.url_holder(url, guide) {
            return Err(ResolveError::AlreadyExists {
                guide: holder.clone(),
            });
        }

        if let Some(previous) = directory.by_guide.insert(guide.clone(), url.clone()) {
            directory.by_url.remove(&previous);
        }
        directory.by_url.insert(url.clone(), guide.clone());
        info!(guide = %guide, url = %url, "Updated GUIDE");
        Ok(())
    }

    async fn delete(&self, guide: &Guide) -> Result<(), ResolveError> {
        self.ensure_online()?;
        self.authorize(guide)?;

        let mut directory = self.directory.write().await;
        let url = directory
            .by_guide
            .remove(guide)
            .ok_or_else(|| ResolveError::Unknown(guide.to_string()))?;
        directory.by_url.remove(&url);
        info!(guide = %guide, url = %url, "Deleted GUIDE");
        Ok(())
    }
}
