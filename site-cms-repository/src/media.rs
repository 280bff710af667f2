use crate::generic::not_found;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder};
use site_cms_error::StorageResult;
use site_cms_models::{
    domain::prelude::NewMedia,
    entities::prelude::{MediaLibrary, MediaLibraryColumn, MediaLibraryModel},
};

pub struct MediaRepository;

impl MediaRepository {
    /// Newest first.
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<MediaLibraryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(MediaLibrary::find()
            .order_by_desc(MediaLibraryColumn::CreatedAt)
            .order_by_desc(MediaLibraryColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<MediaLibraryModel>
    where
        C: ConnectionTrait,
    {
        MediaLibrary::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| not_found::<MediaLibrary>(id))
    }

    pub async fn create<C>(db: &C, media: NewMedia) -> StorageResult<MediaLibraryModel>
    where
        C: ConnectionTrait,
    {
        Ok(media.into_active_model().insert(db).await?)
    }

    /// Removes the row; gallery entries pointing at it go with it.
    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = MediaLibrary::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(not_found::<MediaLibrary>(id));
        }
        Ok(())
    }
}
