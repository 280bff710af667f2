use crate::generic::{delete_by_key, find_by_key, not_found, upsert_by_key};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::{
    domain::prelude::{ColorEntry, UpsertColor},
    entities::prelude::{ThemeColor, ThemeColorActiveModel, ThemeColorColumn, ThemeColorModel},
};

pub struct ColorRepository;

impl ColorRepository {
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<ThemeColorModel>>
    where
        C: ConnectionTrait,
    {
        Ok(ThemeColor::find()
            .order_by_asc(ThemeColorColumn::ColorKey)
            .all(db)
            .await?)
    }

    pub async fn find_by_key<C>(db: &C, key: &str) -> StorageResult<ThemeColorModel>
    where
        C: ConnectionTrait,
    {
        find_by_key::<ThemeColor, C>(db, key)
            .await?
            .ok_or_else(|| not_found::<ThemeColor>(key))
    }

    /// `color_value` is required when the key does not exist yet.
    pub async fn upsert<C>(
        db: &C,
        key: &str,
        upsert: UpsertColor,
    ) -> StorageResult<(ThemeColorModel, bool)>
    where
        C: ConnectionTrait,
    {
        if upsert.color_value.is_none() && find_by_key::<ThemeColor, C>(db, key).await?.is_none() {
            return Err(StorageError::InvalidArgument(format!(
                "color_value is required for new color {key}"
            )));
        }
        let defaults = ThemeColorActiveModel {
            color_key: Set(key.to_string()),
            ..Default::default()
        };
        upsert_by_key::<ThemeColor, _, C, _>(db, key, defaults, |active| {
            if let Some(value) = &upsert.color_value {
                active.color_value = Set(value.clone());
            }
            if let Some(name) = &upsert.color_name {
                active.color_name = Set(name.clone());
            }
            if let Some(category) = &upsert.category {
                active.category = Set(category.clone());
            }
        })
        .await
    }

    pub async fn bulk_upsert<C>(
        db: &C,
        entries: Vec<ColorEntry>,
    ) -> StorageResult<Vec<ThemeColorModel>>
    where
        C: ConnectionTrait,
    {
        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let (model, _) = Self::upsert(db, &entry.color_key, entry.upsert).await?;
            saved.push(model);
        }
        Ok(saved)
    }

    pub async fn delete<C>(db: &C, key: &str) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        delete_by_key::<ThemeColor, C>(db, key).await
    }
}
