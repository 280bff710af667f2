use crate::generic::{find_by_id, find_by_key, list_ordered, save_changes, upsert_by_key};
use sea_orm::{
    sea_query::OnConflict, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QuerySelect, Set,
};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::{UpsertSection, DEFAULT_SECTIONS},
    entities::prelude::{
        SectionVisibility, SectionVisibilityActiveModel, SectionVisibilityColumn,
        SectionVisibilityModel,
    },
};
use tracing::info;

pub struct SectionRepository;

impl SectionRepository {
    /// Sections by `order_index` then `id`; `visible_only` drops hidden ones.
    pub async fn list<C>(db: &C, visible_only: bool) -> StorageResult<Vec<SectionVisibilityModel>>
    where
        C: ConnectionTrait,
    {
        list_ordered::<SectionVisibility, C>(db, visible_only).await
    }

    pub async fn count<C>(db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(SectionVisibility::find().count(db).await?)
    }

    /// Insert the default section set. Keys that already exist are skipped.
    pub async fn seed_defaults<C>(db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let rows = DEFAULT_SECTIONS
            .iter()
            .zip(0..)
            .map(|((key, name), order_index)| SectionVisibilityActiveModel {
                section_key: Set((*key).to_string()),
                section_name: Set((*name).to_string()),
                visible: Set(true),
                order_index: Set(order_index),
                ..Default::default()
            });
        let inserted = SectionVisibility::insert_many(rows)
            .on_conflict(
                OnConflict::column(SectionVisibilityColumn::SectionKey)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        info!("Seeded {inserted} default sections");
        Ok(())
    }

    pub async fn find_by_key<C>(db: &C, key: &str) -> StorageResult<Option<SectionVisibilityModel>>
    where
        C: ConnectionTrait,
    {
        find_by_key::<SectionVisibility, C>(db, key).await
    }

    pub async fn keys<C>(db: &C) -> StorageResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        Ok(SectionVisibility::find()
            .select_only()
            .column(SectionVisibilityColumn::SectionKey)
            .into_tuple::<String>()
            .all(db)
            .await?)
    }

    /// New sections take the key as name, are visible and sort first unless told otherwise.
    pub async fn upsert<C>(
        db: &C,
        key: &str,
        upsert: UpsertSection,
    ) -> StorageResult<(SectionVisibilityModel, bool)>
    where
        C: ConnectionTrait,
    {
        let defaults = SectionVisibilityActiveModel {
            section_key: Set(key.to_string()),
            section_name: Set(key.to_string()),
            visible: Set(true),
            order_index: Set(0),
            ..Default::default()
        };
        upsert_by_key::<SectionVisibility, _, C, _>(db, key, defaults, |active| {
            apply_upsert(&upsert, active)
        })
        .await
    }

    pub async fn update_by_id<C>(
        db: &C,
        id: i32,
        upsert: UpsertSection,
    ) -> StorageResult<SectionVisibilityModel>
    where
        C: ConnectionTrait,
    {
        let section = find_by_id::<SectionVisibility, C>(db, id).await?;
        let mut active = section.clone().into_active_model();
        apply_upsert(&upsert, &mut active);
        save_changes(db, section, active).await
    }
}

fn apply_upsert(upsert: &UpsertSection, active: &mut SectionVisibilityActiveModel) {
    if let Some(name) = &upsert.section_name {
        active.section_name = Set(name.clone());
    }
    if let Some(visible) = upsert.visible {
        active.visible = Set(visible);
    }
    if let Some(order_index) = upsert.order_index {
        active.order_index = Set(order_index);
    }
}
