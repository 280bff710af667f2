use sea_orm::ConnectionTrait;
use site_cms_error::StorageResult;
use site_cms_models::domain::prelude::{CmsDocument, StyleView};
use site_cms_repository::{
    ColorRepository, ContentRepository, FeatureRepository, HeroRepository, NavbarRepository,
    ResourceRepository, SettingRepository, StyleRepository,
};
use tracing::instrument;

use crate::{SectionService, SettingService};

pub struct CmsAggregator;

impl CmsAggregator {
    /// Read all eight CMS sources concurrently and reshape them into one
    /// document. The first failing read fails the whole document.
    #[instrument(name = "cms-document", skip_all)]
    pub async fn document<C>(db: &C) -> StorageResult<CmsDocument>
    where
        C: ConnectionTrait,
    {
        let (settings, content, colors, features, hero, sections, styles, navbar_items) = tokio::try_join!(
            SettingRepository::find_all(db),
            ContentRepository::find_all(db),
            ColorRepository::find_all(db),
            FeatureRepository::list(db, true),
            HeroRepository::get_or_create(db),
            SectionService::list(db, false),
            StyleRepository::find_all_published(db),
            NavbarRepository::list(db, true),
        )?;

        Ok(CmsDocument {
            settings: SettingService::decode_all(&settings)?,
            content: content
                .into_iter()
                .map(|row| (row.content_key, row.content_value))
                .collect(),
            colors: colors
                .into_iter()
                .map(|row| (row.color_key, row.color_value))
                .collect(),
            features,
            hero,
            sections,
            section_styles: styles
                .into_iter()
                .map(|style| (style.section_key.clone(), StyleView::from(style)))
                .collect(),
            navbar_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_support::memory_db, StyleService};
    use serde_json::json;
    use site_cms_error::storage::StorageError;
    use site_cms_models::domain::prelude::{
        SectionStylePatch, SettingType, UpdateNavbarItem, UpsertContent, UpsertSetting, HERO_ID,
    };

    fn setting(kind: SettingType, value: Option<&str>) -> UpsertSetting {
        UpsertSetting {
            setting_value: Some(value.map(str::to_string)),
            setting_type: Some(kind),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn document_on_fresh_database() {
        let db = memory_db().await;
        let doc = CmsAggregator::document(&db).await.unwrap();
        assert_eq!(doc.settings["site_name"], json!("Site CMS"));
        assert_eq!(doc.settings["maintenance_mode"], json!(false));
        assert_eq!(doc.colors.len(), 5);
        assert_eq!(doc.navbar_items.len(), 5);
        assert_eq!(doc.sections.len(), 9);
        assert_eq!(doc.hero.id, HERO_ID);
        assert!(doc.section_styles.is_empty());
    }

    #[tokio::test]
    async fn settings_are_coerced_by_type() {
        let db = memory_db().await;
        let rows = [
            ("flag_on", setting(SettingType::Boolean, Some("true"))),
            ("flag_off", setting(SettingType::Boolean, Some("True"))),
            ("max_guests", setting(SettingType::Number, Some("12.5"))),
            ("social", setting(SettingType::Json, None)),
            ("footer", setting(SettingType::Text, Some("Hello"))),
        ];
        for (key, upsert) in rows {
            SettingRepository::upsert(&db, key, upsert).await.unwrap();
        }
        let doc = CmsAggregator::document(&db).await.unwrap();
        assert_eq!(doc.settings["flag_on"], json!(true));
        assert_eq!(doc.settings["flag_off"], json!(false));
        assert_eq!(doc.settings["max_guests"], json!(12.5));
        assert_eq!(doc.settings["social"], json!({}));
        assert_eq!(doc.settings["footer"], json!("Hello"));
    }

    #[tokio::test]
    async fn malformed_json_setting_fails_document() {
        let db = memory_db().await;
        SettingRepository::upsert(&db, "social", setting(SettingType::Json, Some("{broken")))
            .await
            .unwrap();
        let err = CmsAggregator::document(&db).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[tokio::test]
    async fn only_published_styles_and_active_navbar_items() {
        let db = memory_db().await;
        let patch = SectionStylePatch {
            background_color: Some(Some("#111".into())),
            ..Default::default()
        };
        StyleService::upsert(&db, "hero", patch.clone()).await.unwrap();
        StyleService::upsert(&db, "about", patch).await.unwrap();
        StyleService::publish(&db, "hero").await.unwrap();

        let first = NavbarRepository::list(&db, true).await.unwrap()[0].id;
        let hide = UpdateNavbarItem {
            is_active: Some(false),
            ..Default::default()
        };
        NavbarRepository::update(&db, first, hide).await.unwrap();

        let content = UpsertContent {
            content_value: Some(Some("Welcome".into())),
            ..Default::default()
        };
        ContentRepository::upsert(&db, "hero_title", content).await.unwrap();

        let doc = CmsAggregator::document(&db).await.unwrap();
        assert_eq!(doc.section_styles.keys().collect::<Vec<_>>(), vec!["hero"]);
        assert_eq!(doc.navbar_items.len(), 4);
        assert_eq!(doc.content["hero_title"].as_deref(), Some("Welcome"));
    }
}
