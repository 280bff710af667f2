use crate::generic::{
    delete_by_id, find_by_id, find_by_key, list_ordered, not_found, reorder, save_changes,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QuerySelect, QueryTrait, Set,
};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::{NewTour, Patch, ReorderItem, TourInfo, UpdateTour},
    entities::prelude::{Tour, TourActiveModel, TourColumn, TourModel},
};
use site_cms_utils::{
    images,
    slug::{slugify, unique_slug},
};

pub struct TourRepository;

impl TourRepository {
    pub async fn list<C>(db: &C, active_only: bool) -> StorageResult<Vec<TourInfo>>
    where
        C: ConnectionTrait,
    {
        let tours = list_ordered::<Tour, C>(db, active_only).await?;
        Ok(tours.into_iter().map(into_info).collect())
    }

    pub async fn find<C>(db: &C, id: i32) -> StorageResult<TourInfo>
    where
        C: ConnectionTrait,
    {
        find_by_id::<Tour, C>(db, id).await.map(into_info)
    }

    pub async fn find_by_slug<C>(db: &C, slug: &str) -> StorageResult<TourInfo>
    where
        C: ConnectionTrait,
    {
        find_by_key::<Tour, C>(db, slug)
            .await?
            .map(into_info)
            .ok_or_else(|| not_found::<Tour>(slug))
    }

    /// The slug is derived from `slug` or `title` and suffixed until unique.
    pub async fn create<C>(db: &C, new: NewTour) -> StorageResult<TourInfo>
    where
        C: ConnectionTrait,
    {
        let base = slugify(new.slug.as_deref().unwrap_or(&new.title));
        let slug = Self::free_slug(db, &base, None).await?;
        let tour = TourActiveModel {
            title: Set(new.title),
            slug: Set(slug),
            description: Set(new.description),
            short_description: Set(new.short_description),
            price: Set(new.price),
            duration: Set(new.duration),
            location: Set(new.location),
            images: Set(Some(images::encode(&images::normalize_value(&new.images)))),
            category: Set(new.category),
            is_featured: Set(new.is_featured),
            is_active: Set(new.is_active),
            order_index: Set(new.order_index),
            ..Default::default()
        };
        Ok(into_info(tour.insert(db).await?))
    }

    pub async fn update<C>(db: &C, id: i32, mut patch: UpdateTour) -> StorageResult<TourInfo>
    where
        C: ConnectionTrait,
    {
        let tour = find_by_id::<Tour, C>(db, id).await?;
        let mut active = tour.clone().into_active_model();
        if let Some(slug) = patch.slug.take() {
            let base = slugify(&slug);
            if base != tour.slug {
                active.slug = Set(Self::free_slug(db, &base, Some(id)).await?);
            }
        }
        if let Some(list) = patch.images.take() {
            active.images = Set(list.map(|value| images::encode(&images::normalize_value(&value))));
        }
        patch.apply(&mut active);
        save_changes(db, tour, active).await.map(into_info)
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        delete_by_id::<Tour, C>(db, id).await
    }

    pub async fn reorder<C>(db: &C, items: &[ReorderItem]) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        reorder::<Tour, C>(db, items).await
    }

    pub async fn count<C>(db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Tour::find().count(db).await?)
    }

    /// First of `base`, `base-2`, `base-3`, … not used by another tour.
    async fn free_slug<C>(db: &C, base: &str, exclude_id: Option<i32>) -> StorageResult<String>
    where
        C: ConnectionTrait,
    {
        let taken: Vec<String> = Tour::find()
            .select_only()
            .column(TourColumn::Slug)
            .filter(
                Condition::any()
                    .add(TourColumn::Slug.eq(base))
                    .add(TourColumn::Slug.starts_with(format!("{base}-"))),
            )
            .apply_if(exclude_id, |q, id| q.filter(TourColumn::Id.ne(id)))
            .into_tuple()
            .all(db)
            .await?;
        Ok(unique_slug(base, taken.iter().map(String::as_str)))
    }
}

fn into_info(tour: TourModel) -> TourInfo {
    let images = images::normalize_stored(tour.images.as_deref());
    TourInfo::new(tour, images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use site_cms_models::settings::Sqlite;
    use site_cms_storage::connect_and_migrate;

    fn new_tour(title: &str) -> NewTour {
        NewTour {
            title: title.into(),
            slug: None,
            description: None,
            short_description: None,
            price: Some(120.0),
            duration: None,
            location: None,
            images: json!(null),
            category: None,
            is_featured: false,
            is_active: true,
            order_index: 0,
        }
    }

    async fn memory_db() -> sea_orm::DatabaseConnection {
        connect_and_migrate(&Sqlite {
            path: ":memory:".into(),
            ..Default::default()
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_titles_get_numbered_slugs() {
        let db = memory_db().await;
        let first = TourRepository::create(&db, new_tour("Desert Safari")).await.unwrap();
        let second = TourRepository::create(&db, new_tour("Desert Safari")).await.unwrap();
        let third = TourRepository::create(&db, new_tour("desert  safari!")).await.unwrap();
        assert_eq!(first.slug, "desert-safari");
        assert_eq!(second.slug, "desert-safari-2");
        assert_eq!(third.slug, "desert-safari-3");

        let found = TourRepository::find_by_slug(&db, "desert-safari-2").await.unwrap();
        assert_eq!(found.id, second.id);
    }

    #[tokio::test]
    async fn renaming_to_own_slug_keeps_it() {
        let db = memory_db().await;
        let tour = TourRepository::create(&db, new_tour("City Walk")).await.unwrap();
        let patch = UpdateTour {
            slug: Some("City Walk".into()),
            ..Default::default()
        };
        let updated = TourRepository::update(&db, tour.id, patch).await.unwrap();
        assert_eq!(updated.slug, "city-walk");
    }

    #[tokio::test]
    async fn images_are_normalized_on_write_and_read() {
        let db = memory_db().await;
        let mut new = new_tour("Dunes");
        new.images = json!("[\"/a.jpg\", \"/b.jpg\"]");
        let tour = TourRepository::create(&db, new).await.unwrap();
        assert_eq!(tour.images, vec!["/a.jpg", "/b.jpg"]);

        let patch = UpdateTour {
            images: Some(Some(json!("/c.jpg"))),
            ..Default::default()
        };
        let tour = TourRepository::update(&db, tour.id, patch).await.unwrap();
        assert_eq!(tour.images, vec!["/c.jpg"]);

        let patch = UpdateTour {
            images: Some(Some(json!("[broken"))),
            ..Default::default()
        };
        let tour = TourRepository::update(&db, tour.id, patch).await.unwrap();
        assert!(tour.images.is_empty());
    }
}
