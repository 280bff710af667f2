use crate::generic::{find_by_key, find_or_create, not_found, save_changes, upsert_by_key};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::{Patch, SectionStylePatch},
    entities::prelude::{
        SectionStyle, SectionStyleActiveModel, SectionStyleColumn, SectionStyleModel,
    },
};

pub struct StyleRepository;

impl StyleRepository {
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<SectionStyleModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SectionStyle::find()
            .order_by_asc(SectionStyleColumn::SectionKey)
            .all(db)
            .await?)
    }

    pub async fn find_all_published<C>(db: &C) -> StorageResult<Vec<SectionStyleModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SectionStyle::find()
            .filter(SectionStyleColumn::IsPublished.eq(true))
            .order_by_asc(SectionStyleColumn::SectionKey)
            .all(db)
            .await?)
    }

    pub async fn find_by_key<C>(db: &C, key: &str) -> StorageResult<Option<SectionStyleModel>>
    where
        C: ConnectionTrait,
    {
        find_by_key::<SectionStyle, C>(db, key).await
    }

    pub async fn find_published<C>(db: &C, key: &str) -> StorageResult<Option<SectionStyleModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SectionStyle::find()
            .filter(SectionStyleColumn::SectionKey.eq(key))
            .filter(SectionStyleColumn::IsPublished.eq(true))
            .one(db)
            .await?)
    }

    /// Existing row, or a fresh unpublished draft named `section_name`.
    pub async fn find_or_create_draft<C>(
        db: &C,
        key: &str,
        section_name: String,
    ) -> StorageResult<(SectionStyleModel, bool)>
    where
        C: ConnectionTrait,
    {
        find_or_create::<SectionStyle, _, C>(db, key, draft(key, section_name)).await
    }

    /// Patch the row, or create a draft with the patch merged over the defaults.
    pub async fn upsert<C>(
        db: &C,
        key: &str,
        section_name: String,
        patch: SectionStylePatch,
    ) -> StorageResult<(SectionStyleModel, bool)>
    where
        C: ConnectionTrait,
    {
        upsert_by_key::<SectionStyle, _, C, _>(db, key, draft(key, section_name), |active| {
            patch.clone().apply(active)
        })
        .await
    }

    pub async fn publish<C>(db: &C, key: &str) -> StorageResult<SectionStyleModel>
    where
        C: ConnectionTrait,
    {
        let style = find_by_key::<SectionStyle, C>(db, key)
            .await?
            .ok_or_else(|| not_found::<SectionStyle>(key))?;
        let mut active = style.clone().into_active_model();
        active.is_published = Set(true);
        save_changes(db, style, active).await
    }

    /// Flag every row whose key is in `keys`. Returns the number of rows touched.
    pub async fn publish_keys<C>(db: &C, keys: &[String]) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        if keys.is_empty() {
            return Ok(0);
        }
        let result = SectionStyle::update_many()
            .col_expr(SectionStyleColumn::IsPublished, Expr::value(true))
            .filter(SectionStyleColumn::SectionKey.is_in(keys.iter().map(String::as_str)))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_published<C>(db: &C, published: bool) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(SectionStyle::find()
            .filter(SectionStyleColumn::IsPublished.eq(published))
            .count(db)
            .await?)
    }
}

fn draft(key: &str, section_name: String) -> SectionStyleActiveModel {
    SectionStyleActiveModel {
        section_key: Set(key.to_string()),
        section_name: Set(section_name),
        is_published: Set(false),
        ..Default::default()
    }
}
