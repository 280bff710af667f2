//! Operations shared by every table with a business key or an `order_index`.

use futures::future::try_join_all;
use sea_orm::{
    sea_query::Expr, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait,
    EntityName, EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::{
    domain::prelude::{Patch, ReorderItem},
    entities::prelude::*,
};
use std::fmt::Display;
use validator::Validate;

/// An entity identified by a unique string business key.
pub trait KeyedEntity: EntityTrait {
    fn key_column() -> Self::Column;
}

/// An entity listed by `order_index`, ties broken by `id`.
pub trait OrderedEntity: EntityTrait {
    fn id_column() -> Self::Column;

    fn order_column() -> Self::Column;

    /// Flag public listings filter on, if the table has one.
    fn active_column() -> Option<Self::Column> {
        None
    }
}

macro_rules! keyed_entity {
    ($($entity:ty => $column:expr),* $(,)?) => {
        $(
            impl KeyedEntity for $entity {
                fn key_column() -> Self::Column {
                    $column
                }
            }
        )*
    };
}

macro_rules! ordered_entity {
    ($($entity:ty => $column:ident $(, active = $active:ident)?);* $(;)?) => {
        $(
            impl OrderedEntity for $entity {
                fn id_column() -> Self::Column {
                    $column::Id
                }

                fn order_column() -> Self::Column {
                    $column::OrderIndex
                }

                fn active_column() -> Option<Self::Column> {
                    None $(.or(Some($column::$active)))?
                }
            }
        )*
    };
}

keyed_entity! {
    SiteSetting => SiteSettingColumn::SettingKey,
    SiteContent => SiteContentColumn::ContentKey,
    ThemeColor => ThemeColorColumn::ColorKey,
    SectionVisibility => SectionVisibilityColumn::SectionKey,
    SectionStyle => SectionStyleColumn::SectionKey,
    Tour => TourColumn::Slug,
    Admin => AdminColumn::Username,
}

ordered_entity! {
    Feature => FeatureColumn, active = IsActive;
    NavbarItem => NavbarItemColumn, active = IsActive;
    GalleryItem => GalleryItemColumn, active = IsActive;
    SectionVisibility => SectionVisibilityColumn, active = Visible;
    Tour => TourColumn, active = IsActive;
    Guide => GuideColumn, active = IsActive;
    Partner => PartnerColumn, active = IsActive;
    Video => VideoColumn, active = IsActive;
    Achievement => AchievementColumn, active = IsActive;
    Testimonial => TestimonialColumn, active = IsActive;
}

pub(crate) fn not_found<E: EntityTrait>(what: impl Display) -> StorageError {
    StorageError::EntityNotFound(format!("{} {}", E::default().table_name(), what))
}

pub async fn find_by_key<E, C>(db: &C, key: &str) -> StorageResult<Option<E::Model>>
where
    E: KeyedEntity,
    C: ConnectionTrait,
{
    Ok(E::find().filter(E::key_column().eq(key)).one(db).await?)
}

/// Return the row for `key`, inserting `defaults` when there is none.
///
/// The flag is `true` when the row was created by this call. Losing an insert
/// race on the unique key falls back to reading the winner's row.
pub async fn find_or_create<E, A, C>(
    db: &C,
    key: &str,
    defaults: A,
) -> StorageResult<(E::Model, bool)>
where
    E: KeyedEntity,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if let Some(model) = find_by_key::<E, C>(db, key).await? {
        return Ok((model, false));
    }
    match defaults.insert(db).await {
        Ok(model) => Ok((model, true)),
        Err(e) => {
            let err = StorageError::from(e);
            if !err.is_unique_violation() {
                return Err(err);
            }
            find_by_key::<E, C>(db, key)
                .await?
                .map(|model| (model, false))
                .ok_or(err)
        }
    }
}

/// Patch the row for `key`, or insert `defaults` with the patch applied on top.
///
/// Losing an insert race on the unique key applies `patch` to the winner's
/// row instead, so `patch` may run twice.
pub async fn upsert_by_key<E, A, C, F>(
    db: &C,
    key: &str,
    defaults: A,
    patch: F,
) -> StorageResult<(E::Model, bool)>
where
    E: KeyedEntity,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
    F: Fn(&mut A),
{
    if let Some(model) = find_by_key::<E, C>(db, key).await? {
        return Ok((patch_model::<A, C, F>(db, model, &patch).await?, false));
    }
    let mut active = defaults;
    patch(&mut active);
    match active.insert(db).await {
        Ok(model) => Ok((model, true)),
        Err(e) => {
            let err = StorageError::from(e);
            if !err.is_unique_violation() {
                return Err(err);
            }
            match find_by_key::<E, C>(db, key).await? {
                Some(model) => Ok((patch_model::<A, C, F>(db, model, &patch).await?, false)),
                None => Err(err),
            }
        }
    }
}

async fn patch_model<A, C, F>(
    db: &C,
    model: <A::Entity as EntityTrait>::Model,
    patch: &F,
) -> StorageResult<<A::Entity as EntityTrait>::Model>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
    F: Fn(&mut A),
{
    let mut active: A = model.clone().into_active_model();
    patch(&mut active);
    save_changes(db, model, active).await
}

/// Write `active` back unless nothing was touched.
pub(crate) async fn save_changes<A, C>(
    db: &C,
    original: <A::Entity as EntityTrait>::Model,
    active: A,
) -> StorageResult<<A::Entity as EntityTrait>::Model>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if !active.is_changed() {
        return Ok(original);
    }
    Ok(active.update(db).await?)
}

pub async fn delete_by_key<E, C>(db: &C, key: &str) -> StorageResult<()>
where
    E: KeyedEntity,
    C: ConnectionTrait,
{
    let result = E::delete_many()
        .filter(E::key_column().eq(key))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found::<E>(key));
    }
    Ok(())
}

/// Rows sorted by `order_index` then `id`. `active_only` drops inactive rows
/// on tables that carry an activity flag.
pub async fn list_ordered<E, C>(db: &C, active_only: bool) -> StorageResult<Vec<E::Model>>
where
    E: OrderedEntity,
    C: ConnectionTrait,
{
    Ok(E::find()
        .apply_if(E::active_column().filter(|_| active_only), |q, col| {
            q.filter(col.eq(true))
        })
        .order_by_asc(E::order_column())
        .order_by_asc(E::id_column())
        .all(db)
        .await?)
}

pub async fn find_by_id<E, C>(db: &C, id: i32) -> StorageResult<E::Model>
where
    E: OrderedEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .ok_or_else(|| not_found::<E>(id))
}

pub async fn update_by_id<E, A, P, C>(db: &C, id: i32, patch: P) -> StorageResult<E::Model>
where
    E: OrderedEntity,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<A>,
    P: Patch<A>,
    C: ConnectionTrait,
{
    let model = find_by_id::<E, C>(db, id).await?;
    let mut active: A = model.clone().into_active_model();
    patch.apply(&mut active);
    save_changes(db, model, active).await
}

/// Hard delete. Fails with `EntityNotFound` when no row matched.
pub async fn delete_by_id<E, C>(db: &C, id: i32) -> StorageResult<()>
where
    E: OrderedEntity,
    C: ConnectionTrait,
{
    let result = E::delete_many()
        .filter(E::id_column().eq(id))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found::<E>(id));
    }
    Ok(())
}

/// One `UPDATE` per item, issued concurrently and without a transaction.
///
/// A failure part-way leaves the rows written so far in place. Unknown ids
/// are skipped.
pub async fn reorder<E, C>(db: &C, items: &[ReorderItem]) -> StorageResult<()>
where
    E: OrderedEntity,
    C: ConnectionTrait,
{
    try_join_all(items.iter().map(|item| {
        E::update_many()
            .col_expr(E::order_column(), Expr::value(item.order_index))
            .filter(E::id_column().eq(item.id))
            .exec(db)
    }))
    .await?;
    Ok(())
}

/// Ordered CRUD over one table, driven by its create and update payloads.
///
/// Implementors only name their types; every operation has a default built
/// on the helpers above and may be overridden.
#[allow(async_fn_in_trait)]
pub trait ResourceRepository {
    type Entity: OrderedEntity<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;
    type New: IntoActiveModel<Self::ActiveModel> + DeserializeOwned + Validate + 'static;
    type Update: Patch<Self::ActiveModel> + DeserializeOwned + Validate + 'static;

    async fn list<C: ConnectionTrait>(db: &C, active_only: bool) -> StorageResult<Vec<Self::Model>> {
        list_ordered::<Self::Entity, C>(db, active_only).await
    }

    async fn find<C: ConnectionTrait>(db: &C, id: i32) -> StorageResult<Self::Model> {
        find_by_id::<Self::Entity, C>(db, id).await
    }

    async fn create<C: ConnectionTrait>(db: &C, new: Self::New) -> StorageResult<Self::Model> {
        Ok(new.into_active_model().insert(db).await?)
    }

    async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        patch: Self::Update,
    ) -> StorageResult<Self::Model> {
        update_by_id::<Self::Entity, Self::ActiveModel, Self::Update, C>(db, id, patch).await
    }

    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> StorageResult<()> {
        delete_by_id::<Self::Entity, C>(db, id).await
    }

    async fn reorder<C: ConnectionTrait>(db: &C, items: &[ReorderItem]) -> StorageResult<()> {
        reorder::<Self::Entity, C>(db, items).await
    }

    async fn count<C: ConnectionTrait>(db: &C, active_only: bool) -> StorageResult<u64> {
        Ok(Self::Entity::find()
            .apply_if(
                <Self::Entity as OrderedEntity>::active_column().filter(|_| active_only),
                |q, col| q.filter(col.eq(true)),
            )
            .count(db)
            .await?)
    }
}

macro_rules! resource_repository {
    ($($repo:ident: $entity:ty, $model:ty, $active:ty, $new:ty, $update:ty;)*) => {
        $(
            pub struct $repo;

            impl $crate::generic::ResourceRepository for $repo {
                type Entity = $entity;
                type Model = $model;
                type ActiveModel = $active;
                type New = $new;
                type Update = $update;
            }
        )*
    };
}

pub(crate) use resource_repository;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeatureRepository, GalleryRepository, MediaRepository};
    use sea_orm::{DatabaseConnection, Set};
    use site_cms_models::{
        domain::prelude::{NewFeature, NewGalleryItem, NewMedia, UpdateFeature},
        settings::Sqlite,
    };
    use site_cms_storage::connect_and_migrate;

    async fn memory_db() -> DatabaseConnection {
        connect_and_migrate(&Sqlite {
            path: ":memory:".into(),
            ..Default::default()
        })
        .await
        .unwrap()
    }

    fn feature(title: &str, order_index: i32) -> NewFeature {
        NewFeature {
            title: title.into(),
            description: None,
            icon: None,
            order_index,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn find_or_create_reports_creation_once() {
        let db = memory_db().await;
        let defaults = || SiteSettingActiveModel {
            setting_key: Set("hours".into()),
            setting_value: Set(Some("9-17".into())),
            setting_type: Set("text".into()),
            ..Default::default()
        };
        let (first, created) = find_or_create::<SiteSetting, _, _>(&db, "hours", defaults())
            .await
            .unwrap();
        assert!(created);
        let (second, created) = find_or_create::<SiteSetting, _, _>(&db, "hours", defaults())
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn concurrent_upserts_of_one_key_share_a_row() {
        let db = memory_db().await;
        let defaults = || SiteSettingActiveModel {
            setting_key: Set("hours".into()),
            setting_type: Set("text".into()),
            ..Default::default()
        };
        let upsert = |value: &'static str| {
            upsert_by_key::<SiteSetting, _, _, _>(&db, "hours", defaults(), move |active| {
                active.setting_value = Set(Some(value.into()));
            })
        };
        let (a, b) = futures::future::join(upsert("9-17"), upsert("10-18")).await;
        let ((a, a_created), (b, b_created)) = (a.unwrap(), b.unwrap());

        assert_eq!(a.id, b.id);
        assert_eq!([a_created, b_created].iter().filter(|c| **c).count(), 1);
        let rows = SiteSetting::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(matches!(
            rows[0].setting_value.as_deref(),
            Some("9-17" | "10-18")
        ));
    }

    #[tokio::test]
    async fn reorder_moves_only_listed_rows() {
        let db = memory_db().await;
        for (title, order_index) in [("a", 0), ("b", 1), ("c", 2), ("d", 3)] {
            FeatureRepository::create(&db, feature(title, order_index))
                .await
                .unwrap();
        }
        let ids: Vec<i32> = FeatureRepository::list(&db, false)
            .await
            .unwrap()
            .iter()
            .map(|f| f.id)
            .collect();

        let items = [
            ReorderItem { id: ids[2], order_index: 0 },
            ReorderItem { id: ids[0], order_index: 1 },
        ];
        FeatureRepository::reorder(&db, &items).await.unwrap();

        let titles: Vec<String> = FeatureRepository::list(&db, false)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.title)
            .collect();
        // a and b share index 1, ties fall back to id
        assert_eq!(titles, vec!["c", "a", "b", "d"]);
    }

    #[tokio::test]
    async fn update_only_touches_sent_fields() {
        let db = memory_db().await;
        let mut new = feature("Guided tours", 0);
        new.icon = Some("map".into());
        let created = FeatureRepository::create(&db, new).await.unwrap();

        let patch = UpdateFeature {
            description: Some(Some("Local experts".into())),
            ..Default::default()
        };
        let updated = FeatureRepository::update(&db, created.id, patch).await.unwrap();
        assert_eq!(updated.icon.as_deref(), Some("map"));
        assert_eq!(updated.description.as_deref(), Some("Local experts"));

        let patch = UpdateFeature {
            icon: Some(None),
            ..Default::default()
        };
        let updated = FeatureRepository::update(&db, created.id, patch).await.unwrap();
        assert_eq!(updated.icon, None);
        assert_eq!(updated.title, "Guided tours");
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let db = memory_db().await;
        let err = FeatureRepository::delete(&db, 42).await.unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
        let err = FeatureRepository::find(&db, 42).await.unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn public_listing_hides_inactive_rows() {
        let db = memory_db().await;
        let mut hidden = feature("hidden", 0);
        hidden.is_active = false;
        FeatureRepository::create(&db, hidden).await.unwrap();
        FeatureRepository::create(&db, feature("shown", 1)).await.unwrap();

        assert_eq!(FeatureRepository::list(&db, true).await.unwrap().len(), 1);
        assert_eq!(FeatureRepository::list(&db, false).await.unwrap().len(), 2);
        assert_eq!(FeatureRepository::count(&db, true).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn gallery_delete_is_soft() {
        let db = memory_db().await;
        let media = MediaRepository::create(
            &db,
            NewMedia {
                filename: "dune.jpg".into(),
                original_name: None,
                url: "/uploads/dune.jpg".into(),
                mime_type: Some("image/jpeg".into()),
                size: Some(2048),
                alt_text: Some("Dunes".into()),
            },
        )
        .await
        .unwrap();
        let item = GalleryRepository::create(
            &db,
            NewGalleryItem {
                media_id: media.id,
                title: Some("Dunes at dusk".into()),
                description: None,
                category: None,
                order_index: 0,
                is_active: true,
            },
        )
        .await
        .unwrap();

        let listed = GalleryRepository::list_with_media(&db, true).await.unwrap();
        assert_eq!(listed[0].url.as_deref(), Some("/uploads/dune.jpg"));

        GalleryRepository::delete(&db, item.id).await.unwrap();
        assert!(GalleryRepository::list_with_media(&db, true).await.unwrap().is_empty());
        let kept = GalleryRepository::find(&db, item.id).await.unwrap();
        assert!(!kept.is_active);
    }

    #[tokio::test]
    async fn gallery_rejects_unknown_media() {
        let db = memory_db().await;
        let err = GalleryRepository::create(
            &db,
            NewGalleryItem {
                media_id: 99,
                title: None,
                description: None,
                category: None,
                order_index: 0,
                is_active: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }
}
