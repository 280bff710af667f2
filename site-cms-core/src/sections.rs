use futures::future::try_join_all;
use sea_orm::ConnectionTrait;
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::{
    domain::prelude::{ReorderSectionItem, UpsertSection},
    entities::prelude::SectionVisibilityModel,
};
use site_cms_repository::SectionRepository;
use tracing::{info, instrument};

pub struct SectionService;

impl SectionService {
    /// Seed the default sections when the table is still empty.
    pub async fn ensure_seeded<C>(db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        if SectionRepository::count(db).await? == 0 {
            info!("Section table is empty, seeding defaults");
            SectionRepository::seed_defaults(db).await?;
        }
        Ok(())
    }

    /// Sections in display order. An empty table is seeded first.
    #[instrument(name = "list-sections", skip(db))]
    pub async fn list<C>(db: &C, visible_only: bool) -> StorageResult<Vec<SectionVisibilityModel>>
    where
        C: ConnectionTrait,
    {
        Self::ensure_seeded(db).await?;
        SectionRepository::list(db, visible_only).await
    }

    pub async fn upsert<C>(
        db: &C,
        key: &str,
        upsert: UpsertSection,
    ) -> StorageResult<SectionVisibilityModel>
    where
        C: ConnectionTrait,
    {
        SectionRepository::upsert(db, key, upsert)
            .await
            .map(|(section, _)| section)
    }

    /// Apply a bulk reorder and return the resulting list.
    ///
    /// Entries with a `section_key` are upserted by key, entries with only an
    /// `id` patch that row. Writes run concurrently without a transaction.
    #[instrument(name = "reorder-sections", skip_all, fields(count = items.len()))]
    pub async fn reorder<C>(
        db: &C,
        items: Vec<ReorderSectionItem>,
    ) -> StorageResult<Vec<SectionVisibilityModel>>
    where
        C: ConnectionTrait,
    {
        if let Some(pos) = items
            .iter()
            .position(|item| item.id.is_none() && item.section_key.is_none())
        {
            return Err(StorageError::InvalidArgument(format!(
                "sections[{pos}] needs an id or a section_key"
            )));
        }
        Self::ensure_seeded(db).await?;

        try_join_all(items.into_iter().map(|item| async move {
            let upsert = UpsertSection {
                section_name: item.section_name,
                visible: item.visible,
                order_index: Some(item.order_index),
            };
            match (item.section_key, item.id) {
                (Some(key), _) => Self::upsert(db, &key, upsert).await,
                (None, Some(id)) => SectionRepository::update_by_id(db, id, upsert).await,
                (None, None) => Err(StorageError::InvalidArgument(
                    "section needs an id or a section_key".into(),
                )),
            }
        }))
        .await?;

        Self::list(db, false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    fn by_id(id: i32, order_index: i32) -> ReorderSectionItem {
        ReorderSectionItem {
            id: Some(id),
            section_key: None,
            order_index,
            visible: None,
            section_name: None,
        }
    }

    #[tokio::test]
    async fn first_read_seeds_nine_sections_in_order() {
        let db = memory_db().await;
        let keys: Vec<String> = SectionService::list(&db, false)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.section_key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "hero",
                "about",
                "videos",
                "Services",
                "partners",
                "stats",
                "testimonials",
                "gallery",
                "contact"
            ]
        );

        // second read does not seed again
        assert_eq!(SectionService::list(&db, false).await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn reorder_by_id_keeps_untouched_relative_order() {
        let db = memory_db().await;
        let before = SectionService::list(&db, false).await.unwrap();
        let (first, third) = (before[0].id, before[2].id);

        let after = SectionService::reorder(&db, vec![by_id(third, 0), by_id(first, 1)])
            .await
            .unwrap();
        let keys: Vec<&str> = after.iter().map(|s| s.section_key.as_str()).collect();
        // about keeps index 1 and sorts after hero by id
        assert_eq!(&keys[..4], &["videos", "hero", "about", "Services"]);
    }

    #[tokio::test]
    async fn reorder_by_key_creates_missing_sections() {
        let db = memory_db().await;
        let items = vec![ReorderSectionItem {
            id: None,
            section_key: Some("faq".into()),
            order_index: 20,
            visible: Some(false),
            section_name: Some("FAQ".into()),
        }];
        let sections = SectionService::reorder(&db, items).await.unwrap();
        let faq = sections.iter().find(|s| s.section_key == "faq").unwrap();
        assert_eq!(faq.section_name, "FAQ");
        assert!(!faq.visible);
        assert_eq!(sections.len(), 10);

        let visible = SectionService::list(&db, true).await.unwrap();
        assert!(visible.iter().all(|s| s.section_key != "faq"));
    }

    #[tokio::test]
    async fn reorder_repeating_a_new_key_creates_it_once() {
        let db = memory_db().await;
        let faq = |order_index| ReorderSectionItem {
            id: None,
            section_key: Some("faq".into()),
            order_index,
            visible: None,
            section_name: None,
        };
        let sections = SectionService::reorder(&db, vec![faq(3), faq(4)])
            .await
            .unwrap();
        assert_eq!(sections.len(), 10);
        let faqs: Vec<_> = sections.iter().filter(|s| s.section_key == "faq").collect();
        assert_eq!(faqs.len(), 1);
        assert!([3, 4].contains(&faqs[0].order_index));
    }

    #[tokio::test]
    async fn reorder_rejects_entries_without_id_or_key() {
        let db = memory_db().await;
        let items = vec![ReorderSectionItem {
            id: None,
            section_key: None,
            order_index: 0,
            visible: None,
            section_name: None,
        }];
        let err = SectionService::reorder(&db, items).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn reorder_unknown_id_is_not_found() {
        let db = memory_db().await;
        let err = SectionService::reorder(&db, vec![by_id(999, 0)])
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }
}
