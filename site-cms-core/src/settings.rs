use sea_orm::ConnectionTrait;
use serde_json::{Map, Value as Json};
use site_cms_error::{storage::StorageError, StorageResult};
use site_cms_models::{
    domain::prelude::{SettingType, SettingValue, SiteIdentity},
    entities::prelude::SiteSettingModel,
};
use site_cms_repository::SettingRepository;

pub struct SettingService;

impl SettingService {
    /// Decode one row according to its type tag. Unknown tags read as text.
    pub fn decode(row: &SiteSettingModel) -> StorageResult<Json> {
        let kind = row.setting_type.parse::<SettingType>().unwrap_or_default();
        SettingValue::decode(kind, row.setting_value.as_deref())
            .map(SettingValue::into_json)
            .map_err(|e| {
                StorageError::InvalidData(format!("setting `{}` is not valid JSON: {e}", row.setting_key))
            })
    }

    /// `setting_key` to typed value. One malformed JSON setting fails the whole map.
    pub fn decode_all(rows: &[SiteSettingModel]) -> StorageResult<Map<String, Json>> {
        rows.iter()
            .map(|row| Self::decode(row).map(|value| (row.setting_key.clone(), value)))
            .collect()
    }

    pub async fn typed_map<C>(db: &C) -> StorageResult<Map<String, Json>>
    where
        C: ConnectionTrait,
    {
        let rows = SettingRepository::find_all(db).await?;
        Self::decode_all(&rows)
    }

    pub async fn identity<C>(db: &C) -> StorageResult<SiteIdentity>
    where
        C: ConnectionTrait,
    {
        Ok(SiteIdentity::from_settings(&Self::typed_map(db).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use serde_json::json;
    use site_cms_models::domain::prelude::UpsertSetting;

    fn row(kind: &str, value: Option<&str>) -> SiteSettingModel {
        SiteSettingModel {
            id: 1,
            setting_key: "k".into(),
            setting_value: value.map(str::to_string),
            setting_type: kind.into(),
            category: None,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn boolean_only_true_for_exact_string() {
        assert_eq!(SettingService::decode(&row("boolean", Some("true"))).unwrap(), json!(true));
        assert_eq!(SettingService::decode(&row("boolean", Some("yes"))).unwrap(), json!(false));
        assert_eq!(SettingService::decode(&row("boolean", None)).unwrap(), json!(false));
    }

    #[test]
    fn json_null_is_empty_object() {
        assert_eq!(SettingService::decode(&row("json", None)).unwrap(), json!({}));
    }

    #[test]
    fn malformed_json_fails_the_map() {
        let rows = vec![row("text", Some("ok")), row("json", Some("{nope"))];
        let err = SettingService::decode_all(&rows).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[tokio::test]
    async fn identity_reads_seeded_settings() {
        let db = memory_db().await;
        let upsert = UpsertSetting {
            setting_value: Some(Some("true".into())),
            setting_type: Some(SettingType::Boolean),
            ..Default::default()
        };
        SettingRepository::upsert(&db, "maintenance_mode", upsert)
            .await
            .unwrap();
        let identity = SettingService::identity(&db).await.unwrap();
        assert_eq!(identity.site_name, "Site CMS");
        assert!(identity.maintenance_mode);
    }
}
