//! The CMS engine.
//!
//! * [`StyleService`]: per-section styling with a one-way draft to published flow
//! * [`SectionService`]: section order and visibility, lazily seeded
//! * [`SettingService`]: typed decoding of the key-value settings table
//! * [`CmsAggregator`]: the single document the public site loads on start
//! * [`DashboardService`]: admin counters

mod aggregate;
mod dashboard;
mod sections;
mod settings;
mod style;

pub use aggregate::CmsAggregator;
pub use dashboard::DashboardService;
pub use sections::SectionService;
pub use settings::SettingService;
pub use style::StyleService;

#[cfg(test)]
pub(crate) mod test_support {
    use sea_orm::DatabaseConnection;
    use site_cms_models::settings::Sqlite;
    use site_cms_storage::connect_and_migrate;

    pub async fn memory_db() -> DatabaseConnection {
        connect_and_migrate(&Sqlite {
            path: ":memory:".into(),
            ..Default::default()
        })
        .await
        .unwrap()
    }
}
