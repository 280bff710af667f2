use crate::generic::save_changes;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Set};
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::{
    domain::prelude::{Patch, UpdateHero, HERO_ID},
    entities::prelude::{HeroSection, HeroSectionActiveModel, HeroSectionModel},
};

pub struct HeroRepository;

impl HeroRepository {
    /// The singleton hero row, inserted empty on first access.
    pub async fn get_or_create<C>(db: &C) -> StorageResult<HeroSectionModel>
    where
        C: ConnectionTrait,
    {
        if let Some(hero) = HeroSection::find_by_id(HERO_ID).one(db).await? {
            return Ok(hero);
        }
        let hero = HeroSectionActiveModel {
            id: Set(HERO_ID),
            is_active: Set(true),
            ..Default::default()
        };
        match hero.insert(db).await {
            Ok(hero) => Ok(hero),
            Err(e) => {
                let err = StorageError::from(e);
                if !err.is_unique_violation() {
                    return Err(err);
                }
                HeroSection::find_by_id(HERO_ID).one(db).await?.ok_or(err)
            }
        }
    }

    pub async fn update<C>(db: &C, patch: UpdateHero) -> StorageResult<HeroSectionModel>
    where
        C: ConnectionTrait,
    {
        let hero = Self::get_or_create(db).await?;
        let mut active = hero.clone().into_active_model();
        patch.apply(&mut active);
        save_changes(db, hero, active).await
    }
}
