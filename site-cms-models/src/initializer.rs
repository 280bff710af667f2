use crate::idens;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    ActiveModelTrait, DatabaseBackend, DatabaseTransaction, DbErr, EntityTrait,
};

/// Schema and seed description of one table.
///
/// The migrator walks every initializer in `order()` to create tables, then
/// indexes, then `updated_at` triggers and finally seed rows.
#[async_trait]
pub trait CmsInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;

    async fn seeding_data(&self, transaction: &DatabaseTransaction) -> Result<(), DbErr>;
}

/// Insert `rows` in one statement, skipping empty seed sets.
pub async fn insert_seed_rows<A>(transaction: &DatabaseTransaction, rows: Vec<A>) -> Result<(), DbErr>
where
    A: ActiveModelTrait + Send,
{
    if rows.is_empty() {
        return Ok(());
    }
    <A::Entity as EntityTrait>::insert_many(rows)
        .exec(transaction)
        .await?;
    Ok(())
}

pub fn initializers() -> Vec<Box<dyn CmsInitializer>> {
    let mut initializers: Vec<Box<dyn CmsInitializer>> = vec![
        Box::new(idens::admin::Admin::Table),
        Box::new(idens::site_setting::SiteSetting::Table),
        Box::new(idens::site_content::SiteContent::Table),
        Box::new(idens::theme_color::ThemeColor::Table),
        Box::new(idens::feature::Feature::Table),
        Box::new(idens::hero_section::HeroSection::Table),
        Box::new(idens::section_visibility::SectionVisibility::Table),
        Box::new(idens::section_style::SectionStyle::Table),
        Box::new(idens::navbar_item::NavbarItem::Table),
        Box::new(idens::media_library::MediaLibrary::Table),
        Box::new(idens::gallery_item::GalleryItem::Table),
        Box::new(idens::tour::Tour::Table),
        Box::new(idens::guide::Guide::Table),
        Box::new(idens::partner::Partner::Table),
        Box::new(idens::video::Video::Table),
        Box::new(idens::achievement::Achievement::Table),
        Box::new(idens::testimonial::Testimonial::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializers_are_sorted_and_unique() {
        let inits = initializers();
        assert_eq!(inits.len(), 17);
        let orders: Vec<i32> = inits.iter().map(|i| i.order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);

        let mut names: Vec<&str> = inits.iter().map(|i| i.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn media_is_created_before_gallery() {
        let inits = initializers();
        let pos = |n: &str| inits.iter().position(|i| i.name() == n).unwrap();
        assert!(pos("media_library") < pos("gallery_item"));
    }
}
