//! Section styles move one way: absent, then draft, then published.
//!
//! Public reads never create rows. Admin reads and writes materialize a draft
//! named after the matching section (or the key itself).

use sea_orm::{ConnectionTrait, TransactionTrait};
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::domain::prelude::{SectionStylePatch, StyleView};
use site_cms_repository::{SectionRepository, StyleRepository};
use std::collections::HashSet;
use tracing::{info, instrument};

use crate::SectionService;

pub struct StyleService;

impl StyleService {
    pub async fn list<C>(db: &C) -> StorageResult<Vec<StyleView>>
    where
        C: ConnectionTrait,
    {
        let styles = StyleRepository::find_all(db).await?;
        Ok(styles.into_iter().map(StyleView::from).collect())
    }

    /// With `published_only` the row is returned only once published and
    /// never created; otherwise a missing row is created as a draft.
    #[instrument(name = "get-style", skip(db))]
    pub async fn get<C>(db: &C, key: &str, published_only: bool) -> StorageResult<Option<StyleView>>
    where
        C: ConnectionTrait,
    {
        if published_only {
            return Ok(StyleRepository::find_published(db, key)
                .await?
                .map(StyleView::from));
        }
        let name = Self::section_name(db, key).await?;
        let (style, created) = StyleRepository::find_or_create_draft(db, key, name).await?;
        if created {
            info!("Created draft style for section `{key}`");
        }
        Ok(Some(style.into()))
    }

    /// Apply the fields present in `patch`. Publishing state is left alone.
    #[instrument(name = "upsert-style", skip(db, patch))]
    pub async fn upsert<C>(db: &C, key: &str, patch: SectionStylePatch) -> StorageResult<StyleView>
    where
        C: ConnectionTrait,
    {
        let name = Self::section_name(db, key).await?;
        let (style, _) = StyleRepository::upsert(db, key, name, patch).await?;
        Ok(style.into())
    }

    /// Fails with `EntityNotFound` when the key has no style row. Idempotent.
    #[instrument(name = "publish-style", skip(db))]
    pub async fn publish<C>(db: &C, key: &str) -> StorageResult<StyleView>
    where
        C: ConnectionTrait,
    {
        let style = StyleRepository::publish(db, key).await?;
        info!("Published style for section `{key}`");
        Ok(style.into())
    }

    /// Publish, in one transaction, every style whose key is a known section.
    /// Rows for keys missing from the section table are left as they are.
    ///
    /// Returns the published keys.
    #[instrument(name = "publish-all-styles", skip(db))]
    pub async fn publish_all<C>(db: &C) -> StorageResult<Vec<String>>
    where
        C: TransactionTrait,
    {
        let published = db
            .transaction::<_, Vec<String>, StorageError>(|txn| {
                Box::pin(async move {
                    SectionService::ensure_seeded(txn).await?;
                    let sections: HashSet<String> =
                        SectionRepository::keys(txn).await?.into_iter().collect();
                    let keys: Vec<String> = StyleRepository::find_all(txn)
                        .await?
                        .into_iter()
                        .map(|style| style.section_key)
                        .filter(|key| sections.contains(key))
                        .collect();
                    StyleRepository::publish_keys(txn, &keys).await?;
                    Ok(keys)
                })
            })
            .await?;
        info!("Published {} section styles", published.len());
        Ok(published)
    }

    async fn section_name<C>(db: &C, key: &str) -> StorageResult<String>
    where
        C: ConnectionTrait,
    {
        Ok(SectionRepository::find_by_key(db, key)
            .await?
            .map(|section| section.section_name)
            .unwrap_or_else(|| key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use site_cms_models::domain::prelude::Background;

    fn color(value: &str) -> SectionStylePatch {
        SectionStylePatch {
            background_color: Some(Some(value.into())),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn published_read_is_empty_until_publish() {
        let db = memory_db().await;
        StyleService::upsert(&db, "hero", color("#111")).await.unwrap();
        assert!(StyleService::get(&db, "hero", true).await.unwrap().is_none());

        StyleService::publish(&db, "hero").await.unwrap();
        let view = StyleService::get(&db, "hero", true).await.unwrap().unwrap();
        assert!(view.style.is_published);
        assert_eq!(view.style.background_color.as_deref(), Some("#111"));
        assert_eq!(view.background, Some(Background::Solid { color: "#111".into() }));
    }

    #[tokio::test]
    async fn public_read_never_creates_rows() {
        let db = memory_db().await;
        assert!(StyleService::get(&db, "about", true).await.unwrap().is_none());
        assert!(StyleService::list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn admin_read_creates_named_draft() {
        let db = memory_db().await;
        SectionService::list(&db, false).await.unwrap();

        let view = StyleService::get(&db, "testimonials", false).await.unwrap().unwrap();
        assert_eq!(view.style.section_name, "Testimonials");
        assert!(!view.style.is_published);

        let orphan = StyleService::get(&db, "promo", false).await.unwrap().unwrap();
        assert_eq!(orphan.style.section_name, "promo");
    }

    #[tokio::test]
    async fn publish_missing_key_is_not_found() {
        let db = memory_db().await;
        let err = StyleService::publish(&db, "nope").await.unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn publish_is_idempotent_and_edits_keep_it_published() {
        let db = memory_db().await;
        StyleService::upsert(&db, "hero", color("#111")).await.unwrap();
        StyleService::publish(&db, "hero").await.unwrap();
        let again = StyleService::publish(&db, "hero").await.unwrap();
        assert!(again.style.is_published);

        let edited = StyleService::upsert(&db, "hero", color("#222")).await.unwrap();
        assert!(edited.style.is_published);
    }

    #[tokio::test]
    async fn upsert_leaves_absent_fields_and_clears_nulls() {
        let db = memory_db().await;
        let first = SectionStylePatch {
            background_color: Some(Some("#111".into())),
            text_color: Some(Some("#eee".into())),
            ..Default::default()
        };
        StyleService::upsert(&db, "hero", first).await.unwrap();

        let second = SectionStylePatch {
            heading_color: Some(Some("#fff".into())),
            text_color: Some(None),
            ..Default::default()
        };
        let view = StyleService::upsert(&db, "hero", second).await.unwrap();
        assert_eq!(view.style.background_color.as_deref(), Some("#111"));
        assert_eq!(view.style.heading_color.as_deref(), Some("#fff"));
        assert_eq!(view.style.text_color, None);
    }

    #[tokio::test]
    async fn publish_all_skips_orphan_keys() {
        let db = memory_db().await;
        SectionService::list(&db, false).await.unwrap();
        StyleService::upsert(&db, "hero", color("#111")).await.unwrap();
        StyleService::upsert(&db, "gallery", color("#222")).await.unwrap();
        StyleService::upsert(&db, "legacy-banner", color("#333")).await.unwrap();

        let mut published = StyleService::publish_all(&db).await.unwrap();
        published.sort();
        assert_eq!(published, vec!["gallery", "hero"]);
        assert!(StyleService::get(&db, "legacy-banner", true).await.unwrap().is_none());
    }
}
