//! Integration tests for the resolver contract.
//!
//! These exercise [`MemoryResolver`] through `dyn Resolver`, the way a
//! caller holding an arbitrary implementation would.

use std::sync::Arc;

use guide_id::{Guide, GuideOwner};
use guide_resolve::{MemoryResolver, ResolveError, Resolver, Url};

/// Helper to build a temporal URL for a suffix
fn temporal_url(suffix: &str) -> Url {
    Url::parse(&format!("https://archive.example.net/items/{suffix}")).unwrap()
}

#[tokio::test]
async fn test_full_lifecycle() {
    let owner = GuideOwner::test_owner();
    let resolver: Arc<dyn Resolver> = Arc::new(MemoryResolver::for_owner(owner));
    let guide = owner.random_guide();

    assert!(resolver.find(&guide).await.unwrap().is_none());

    resolver
        .register(&guide, &temporal_url("v1"))
        .await
        .unwrap();
    assert_eq!(resolver.lookup(&guide).await.unwrap(), temporal_url("v1"));

    resolver.update(&guide, &temporal_url("v2")).await.unwrap();
    assert_eq!(
        resolver.find(&guide).await.unwrap(),
        Some(temporal_url("v2"))
    );
    assert_eq!(
        resolver.find_url(&temporal_url("v2")).await.unwrap(),
        Some(guide.clone())
    );

    resolver.delete(&guide).await.unwrap();
    assert!(matches!(
        resolver.lookup(&guide).await,
        Err(ResolveError::Unknown(_))
    ));
}

#[tokio::test]
async fn test_parsed_guides_resolve_like_minted_ones() {
    let owner = GuideOwner::new(123).unwrap();
    let resolver = MemoryResolver::for_owner(owner);
    let minted = owner.with_suffix("abc").unwrap();

    resolver
        .register(&minted, &temporal_url("abc"))
        .await
        .unwrap();

    let parsed = Guide::parse("guide://123/abc").unwrap();
    assert_eq!(resolver.lookup(&parsed).await.unwrap(), temporal_url("abc"));

    // Suffixes compare case-sensitively
    let shouted = Guide::parse("guide://123/ABC").unwrap();
    assert!(resolver.find(&shouted).await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_registration_of_same_guide() {
    let owner = GuideOwner::new(7).unwrap();
    let resolver = Arc::new(MemoryResolver::for_owner(owner));
    let guide = owner.with_suffix("contended").unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let resolver = Arc::clone(&resolver);
        let guide = guide.clone();
        handles.push(tokio::spawn(async move {
            resolver
                .register(&guide, &temporal_url(&format!("copy-{i}")))
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(err) => assert_eq!(err.existing_guide(), Some(&guide)),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(resolver.len().await, 1);
}

#[tokio::test]
async fn test_distinct_owners_do_not_cross() {
    let alice = GuideOwner::new(1).unwrap();
    let bob = GuideOwner::new(2).unwrap();
    let alice_resolver = MemoryResolver::for_owner(alice);

    let err = alice_resolver
        .register(&bob.random_guide(), &temporal_url("bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::NotPrefixOwner { prefix: 2 }));
    assert!(err.is_definitive());
}
