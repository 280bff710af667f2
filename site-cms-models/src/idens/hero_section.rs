//! Hero banner table. The singleton row is created lazily by the repository.

use super::{created_at_col, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum HeroSection {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    BackgroundImage,
    BackgroundVideo,
    CtaText,
    CtaLink,
    SecondaryCtaText,
    SecondaryCtaLink,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    HeroSection,
    name = "hero_section",
    order = super::INIT_HERO_ORDER,
    create_table = create_hero_section_table,
);

fn create_hero_section_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(HeroSection::Table)
        .if_not_exists()
        .col(pk_auto(HeroSection::Id))
        .col(ColumnDef::new(HeroSection::Title).string_len(255).null())
        .col(ColumnDef::new(HeroSection::Subtitle).string_len(255).null())
        .col(ColumnDef::new(HeroSection::Description).text().null())
        .col(ColumnDef::new(HeroSection::BackgroundImage).string_len(512).null())
        .col(ColumnDef::new(HeroSection::BackgroundVideo).string_len(512).null())
        .col(ColumnDef::new(HeroSection::CtaText).string_len(128).null())
        .col(ColumnDef::new(HeroSection::CtaLink).string_len(512).null())
        .col(ColumnDef::new(HeroSection::SecondaryCtaText).string_len(128).null())
        .col(ColumnDef::new(HeroSection::SecondaryCtaLink).string_len(512).null())
        .col(
            ColumnDef::new(HeroSection::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(HeroSection::CreatedAt))
        .col(updated_at_col(HeroSection::UpdatedAt))
        .to_owned()
}
