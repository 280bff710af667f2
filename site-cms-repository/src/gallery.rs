use crate::{
    generic::{not_found, update_by_id, ResourceRepository},
    media::MediaRepository,
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QueryTrait,
};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::{GalleryItemInfo, NewGalleryItem, UpdateGalleryItem},
    entities::prelude::{
        GalleryItem, GalleryItemActiveModel, GalleryItemColumn, GalleryItemModel, MediaLibrary,
    },
};

pub struct GalleryRepository;

impl GalleryRepository {
    /// Items joined with the URL and alt text of their media file.
    pub async fn list_with_media<C>(db: &C, active_only: bool) -> StorageResult<Vec<GalleryItemInfo>>
    where
        C: ConnectionTrait,
    {
        let rows = GalleryItem::find()
            .find_also_related(MediaLibrary)
            .apply_if(active_only.then_some(true), |q, active| {
                q.filter(GalleryItemColumn::IsActive.eq(active))
            })
            .order_by_asc(GalleryItemColumn::OrderIndex)
            .order_by_asc(GalleryItemColumn::Id)
            .all(db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(item, media)| match media {
                Some(media) => GalleryItemInfo::new(item, Some(media.url), media.alt_text),
                None => GalleryItemInfo::new(item, None, None),
            })
            .collect())
    }
}

impl ResourceRepository for GalleryRepository {
    type Entity = GalleryItem;
    type Model = GalleryItemModel;
    type ActiveModel = GalleryItemActiveModel;
    type New = NewGalleryItem;
    type Update = UpdateGalleryItem;

    async fn create<C: ConnectionTrait>(db: &C, new: NewGalleryItem) -> StorageResult<GalleryItemModel> {
        MediaRepository::find_by_id(db, new.media_id).await?;
        Ok(new.into_active_model().insert(db).await?)
    }

    async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        patch: UpdateGalleryItem,
    ) -> StorageResult<GalleryItemModel> {
        if let Some(media_id) = patch.media_id {
            MediaRepository::find_by_id(db, media_id).await?;
        }
        update_by_id::<GalleryItem, GalleryItemActiveModel, _, C>(db, id, patch).await
    }

    /// Soft delete: the row stays, `is_active` is cleared.
    async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> StorageResult<()> {
        let result = GalleryItem::update_many()
            .col_expr(GalleryItemColumn::IsActive, Expr::value(false))
            .filter(GalleryItemColumn::Id.eq(id))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(not_found::<GalleryItem>(id));
        }
        Ok(())
    }
}
