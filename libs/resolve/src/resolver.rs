//! The resolver interface.

use async_trait::async_trait;
use guide_id::Guide;
use url::Url;

use crate::ResolveError;

/// Resolves GUIDEs to temporal URLs and back.
///
/// A GUIDE is permanent; the URL it resolves to may change over time.
/// Every operation may fail with [`ResolveError::Io`] when the backing store
/// cannot be reached.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Looks up the temporal URL of `guide`.
    ///
    /// Fails with [`ResolveError::Unknown`] if no URL is registered.
    async fn lookup(&self, guide: &Guide) -> Result<Url, ResolveError>;

    /// Looks up the temporal URL of `guide`, reporting absence as `None`.
    async fn find(&self, guide: &Guide) -> Result<Option<Url>, ResolveError> {
        match self.lookup(guide).await {
            Ok(url) => Ok(Some(url)),
            Err(ResolveError::Unknown(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Looks up the GUIDE registered for `url` (reverse lookup).
    ///
    /// Fails with [`ResolveError::Unknown`] if no GUIDE is registered.
    async fn lookup_url(&self, url: &Url) -> Result<Guide, ResolveError>;

    /// Looks up the GUIDE registered for `url`, reporting absence as `None`.
    async fn find_url(&self, url: &Url) -> Result<Option<Guide>, ResolveError> {
        match self.lookup_url(url).await {
            Ok(guide) => Ok(Some(guide)),
            Err(ResolveError::Unknown(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Registers `guide` with the temporal URL `url`.
    ///
    /// Fails with [`ResolveError::AlreadyExists`] if the GUIDE is already
    /// registered, or [`ResolveError::NotPrefixOwner`] if the caller does not
    /// own its prefix.
    async fn register(&self, guide: &Guide, url: &Url) -> Result<(), ResolveError>;

    /// Replaces the temporal URL of an already registered `guide`.
    ///
    /// Fails with [`ResolveError::Unknown`] if the GUIDE is not registered,
    /// or [`ResolveError::NotPrefixOwner`] if the caller does not own its
    /// prefix.
    async fn update(&self, guide: &Guide, url: &Url) -> Result<(), ResolveError>;

    /// Removes the registration of `guide`.
    ///
    /// Fails with [`ResolveError::Unknown`] if the GUIDE is not registered,
    /// or [`ResolveError::NotPrefixOwner`] if the caller does not own its
    /// prefix.
    async fn delete(&self, guide: &Guide) -> Result<(), ResolveError>;
}
