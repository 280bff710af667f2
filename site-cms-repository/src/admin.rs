use crate::generic::{find_by_key, not_found, save_changes};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::{
    constants::DEFAULT_ADMIN_ROLE,
    domain::prelude::{NewAdmin, Patch, UpdateAdmin},
    entities::prelude::{Admin, AdminActiveModel, AdminColumn, AdminModel},
};
use site_cms_utils::hash::bcrypt_hash;
use tracing::info;

pub struct AdminRepository;

impl AdminRepository {
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<AdminModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Admin::find().order_by_asc(AdminColumn::Id).all(db).await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<AdminModel>
    where
        C: ConnectionTrait,
    {
        Admin::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| not_found::<Admin>(id))
    }

    pub async fn find_by_username<C>(db: &C, username: &str) -> StorageResult<Option<AdminModel>>
    where
        C: ConnectionTrait,
    {
        find_by_key::<Admin, C>(db, username).await
    }

    pub async fn find_active_by_id<C>(db: &C, id: i32) -> StorageResult<Option<AdminModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Admin::find_by_id(id)
            .filter(AdminColumn::IsActive.eq(true))
            .one(db)
            .await?)
    }

    pub async fn count<C>(db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Admin::find().count(db).await?)
    }

    /// Fails with `Conflict` when the username is taken.
    pub async fn create<C>(db: &C, new: NewAdmin) -> StorageResult<AdminModel>
    where
        C: ConnectionTrait,
    {
        if Self::find_by_username(db, &new.username).await?.is_some() {
            return Err(StorageError::Conflict(format!(
                "username {} already exists",
                new.username
            )));
        }
        let admin = AdminActiveModel {
            username: Set(new.username),
            password_hash: Set(hash_password(&new.password)?),
            email: Set(new.email),
            full_name: Set(new.full_name),
            role: Set(new.role.unwrap_or_else(|| DEFAULT_ADMIN_ROLE.to_string())),
            is_active: Set(true),
            ..Default::default()
        };
        Ok(admin.insert(db).await?)
    }

    pub async fn update<C>(db: &C, id: i32, mut patch: UpdateAdmin) -> StorageResult<AdminModel>
    where
        C: ConnectionTrait,
    {
        let admin = Self::find_by_id(db, id).await?;
        let mut active = admin.clone().into_active_model();
        if let Some(password) = patch.password.take() {
            active.password_hash = Set(hash_password(&password)?);
        }
        patch.apply(&mut active);
        save_changes(db, admin, active).await
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = Admin::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(not_found::<Admin>(id));
        }
        Ok(())
    }

    pub async fn touch_last_login<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let admin = AdminActiveModel {
            id: Set(id),
            last_login: Set(Some(Utc::now())),
            ..Default::default()
        };
        admin.update(db).await?;
        Ok(())
    }

    /// Create the first admin when the table is empty. Returns it if created.
    pub async fn bootstrap<C>(
        db: &C,
        username: &str,
        password: &str,
        email: Option<String>,
    ) -> StorageResult<Option<AdminModel>>
    where
        C: ConnectionTrait,
    {
        if Self::count(db).await? > 0 {
            return Ok(None);
        }
        let admin = Self::create(
            db,
            NewAdmin {
                username: username.to_string(),
                password: password.to_string(),
                email,
                full_name: None,
                role: None,
            },
        )
        .await?;
        info!("Bootstrap admin `{}` created", admin.username);
        Ok(Some(admin))
    }
}

fn hash_password(password: &str) -> StorageResult<String> {
    bcrypt_hash(password).map_err(|e| StorageError::InvalidArgument(e.to_string()))
}
