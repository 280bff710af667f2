use super::{created_at_col, unique_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum SectionStyle {
    Table,
    Id,
    SectionKey,
    SectionName,
    BackgroundColor,
    BackgroundGradient,
    BackgroundImage,
    BackgroundOverlay,
    TextColor,
    HeadingColor,
    SubheadingColor,
    FontFamily,
    FontSize,
    CardBackground,
    CardBorder,
    CardRadius,
    CardShadow,
    CardTextColor,
    ButtonBackground,
    ButtonText,
    ButtonHover,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    SectionStyle,
    name = "section_style",
    order = super::INIT_STYLE_ORDER,
    create_table = create_section_style_table,
    create_indexes = create_section_style_indexes,
);

fn create_section_style_table(_backend: DatabaseBackend) -> TableCreateStatement {
    let mut stmt = Table::create()
        .table(SectionStyle::Table)
        .if_not_exists()
        .col(pk_auto(SectionStyle::Id))
        .col(
            ColumnDef::new(SectionStyle::SectionKey)
                .string_len(64)
                .not_null()
                .comment("Section key"),
        )
        .col(
            ColumnDef::new(SectionStyle::SectionName)
                .string_len(128)
                .not_null(),
        )
        .to_owned();

    for col in [
        SectionStyle::BackgroundColor,
        SectionStyle::BackgroundGradient,
        SectionStyle::BackgroundImage,
        SectionStyle::BackgroundOverlay,
        SectionStyle::TextColor,
        SectionStyle::HeadingColor,
        SectionStyle::SubheadingColor,
        SectionStyle::FontFamily,
        SectionStyle::FontSize,
        SectionStyle::CardBackground,
        SectionStyle::CardBorder,
        SectionStyle::CardRadius,
        SectionStyle::CardShadow,
        SectionStyle::CardTextColor,
        SectionStyle::ButtonBackground,
        SectionStyle::ButtonText,
        SectionStyle::ButtonHover,
    ] {
        stmt.col(ColumnDef::new(col).text().null());
    }

    stmt.col(
        ColumnDef::new(SectionStyle::IsPublished)
            .boolean()
            .not_null()
            .default(false)
            .comment("Draft until explicitly published"),
    )
    .col(created_at_col(SectionStyle::CreatedAt))
    .col(updated_at_col(SectionStyle::UpdatedAt))
    .to_owned()
}

fn create_section_style_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![unique_index(
        SectionStyle::Table,
        "section_style",
        SectionStyle::SectionKey,
        "section_key",
    )])
}
