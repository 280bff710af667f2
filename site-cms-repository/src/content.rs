use crate::generic::{delete_by_key, find_by_key, not_found, upsert_by_key};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::{ContentEntry, UpsertContent},
    entities::prelude::{SiteContent, SiteContentActiveModel, SiteContentColumn, SiteContentModel},
};

const DEFAULT_CONTENT_TYPE: &str = "text";

pub struct ContentRepository;

impl ContentRepository {
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<SiteContentModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SiteContent::find()
            .order_by_asc(SiteContentColumn::ContentKey)
            .all(db)
            .await?)
    }

    pub async fn find_by_key<C>(db: &C, key: &str) -> StorageResult<SiteContentModel>
    where
        C: ConnectionTrait,
    {
        find_by_key::<SiteContent, C>(db, key)
            .await?
            .ok_or_else(|| not_found::<SiteContent>(key))
    }

    pub async fn upsert<C>(
        db: &C,
        key: &str,
        upsert: UpsertContent,
    ) -> StorageResult<(SiteContentModel, bool)>
    where
        C: ConnectionTrait,
    {
        let defaults = SiteContentActiveModel {
            content_key: Set(key.to_string()),
            content_value: Set(None),
            content_type: Set(DEFAULT_CONTENT_TYPE.to_string()),
            ..Default::default()
        };
        upsert_by_key::<SiteContent, _, C, _>(db, key, defaults, |active| {
            if let Some(value) = &upsert.content_value {
                active.content_value = Set(value.clone());
            }
            if let Some(kind) = &upsert.content_type {
                active.content_type = Set(kind.clone());
            }
            if let Some(section) = &upsert.section {
                active.section = Set(section.clone());
            }
        })
        .await
    }

    pub async fn bulk_upsert<C>(
        db: &C,
        entries: Vec<ContentEntry>,
    ) -> StorageResult<Vec<SiteContentModel>>
    where
        C: ConnectionTrait,
    {
        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let (model, _) = Self::upsert(db, &entry.content_key, entry.upsert).await?;
            saved.push(model);
        }
        Ok(saved)
    }

    pub async fn delete<C>(db: &C, key: &str) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        delete_by_key::<SiteContent, C>(db, key).await
    }
}
