use super::{created_at_col, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Testimonial {
    Table,
    Id,
    CustomerName,
    CustomerLocation,
    Content,
    Rating,
    Avatar,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Testimonial,
    name = "testimonial",
    order = super::INIT_TESTIMONIAL_ORDER,
    create_table = create_testimonial_table,
    create_indexes = create_testimonial_indexes,
);

fn create_testimonial_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Testimonial::Table)
        .if_not_exists()
        .col(pk_auto(Testimonial::Id))
        .col(ColumnDef::new(Testimonial::CustomerName).string_len(255).not_null())
        .col(ColumnDef::new(Testimonial::CustomerLocation).string_len(255).null())
        .col(ColumnDef::new(Testimonial::Content).text().not_null())
        .col(ColumnDef::new(Testimonial::Rating).integer().not_null().default(5))
        .col(ColumnDef::new(Testimonial::Avatar).string_len(512).null())
        .col(
            ColumnDef::new(Testimonial::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Testimonial::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(Testimonial::CreatedAt))
        .col(updated_at_col(Testimonial::UpdatedAt))
        .to_owned()
}

fn create_testimonial_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(Testimonial::Table, "testimonial", Testimonial::OrderIndex)])
}
