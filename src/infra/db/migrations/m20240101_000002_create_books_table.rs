//! Migration: Create the books table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Books::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Books::Title)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Books::Author).string().not_null())
                    .col(ColumnDef::new(Books::Category).string().null())
                    .col(ColumnDef::new(Books::Year).integer().not_null())
                    .col(ColumnDef::new(Books::Description).text().null())
                    .col(ColumnDef::new(Books::Image).string().null())
                    .col(ColumnDef::new(Books::Quota).integer().not_null())
                    .col(ColumnDef::new(Books::RackNumber).string().null())
                    .col(ColumnDef::new(Books::Isbn).string().not_null().unique_key())
                    .col(ColumnDef::new(Books::Language).string().null())
                    .col(ColumnDef::new(Books::AvailableCopies).integer().not_null())
                    .col(ColumnDef::new(Books::LateFee).double().null())
                    .col(
                        ColumnDef::new(Books::CanBorrow)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Books::Rating).double().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    Author,
    Category,
    Year,
    Description,
    Image,
    Quota,
    RackNumber,
    Isbn,
    Language,
    AvailableCopies,
    LateFee,
    CanBorrow,
    Rating,
}
