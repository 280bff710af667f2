use crate::generic::{delete_by_key, find_by_key, not_found, upsert_by_key};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::{SettingEntry, SettingType, UpsertSetting},
    entities::prelude::{SiteSetting, SiteSettingActiveModel, SiteSettingColumn, SiteSettingModel},
};

pub struct SettingRepository;

impl SettingRepository {
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<SiteSettingModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SiteSetting::find()
            .order_by_asc(SiteSettingColumn::SettingKey)
            .all(db)
            .await?)
    }

    pub async fn find_by_key<C>(db: &C, key: &str) -> StorageResult<SiteSettingModel>
    where
        C: ConnectionTrait,
    {
        find_by_key::<SiteSetting, C>(db, key)
            .await?
            .ok_or_else(|| not_found::<SiteSetting>(key))
    }

    /// Returns the row and whether it was created. New rows default to `text`.
    pub async fn upsert<C>(
        db: &C,
        key: &str,
        upsert: UpsertSetting,
    ) -> StorageResult<(SiteSettingModel, bool)>
    where
        C: ConnectionTrait,
    {
        let defaults = SiteSettingActiveModel {
            setting_key: Set(key.to_string()),
            setting_value: Set(None),
            setting_type: Set(SettingType::Text.as_str().to_string()),
            ..Default::default()
        };
        upsert_by_key::<SiteSetting, _, C, _>(db, key, defaults, |active| {
            if let Some(value) = &upsert.setting_value {
                active.setting_value = Set(value.clone());
            }
            if let Some(kind) = upsert.setting_type {
                active.setting_type = Set(kind.as_str().to_string());
            }
            if let Some(category) = &upsert.category {
                active.category = Set(category.clone());
            }
            if let Some(description) = &upsert.description {
                active.description = Set(description.clone());
            }
        })
        .await
    }

    /// Upserts entries one after another; a failure leaves earlier entries written.
    pub async fn bulk_upsert<C>(
        db: &C,
        entries: Vec<SettingEntry>,
    ) -> StorageResult<Vec<SiteSettingModel>>
    where
        C: ConnectionTrait,
    {
        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let (model, _) = Self::upsert(db, &entry.setting_key, entry.upsert).await?;
            saved.push(model);
        }
        Ok(saved)
    }

    pub async fn delete<C>(db: &C, key: &str) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        delete_by_key::<SiteSetting, C>(db, key).await
    }
}
