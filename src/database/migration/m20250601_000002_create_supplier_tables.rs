use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_fruit_tables::Fruits;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Suppliers::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Suppliers::Country).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Suppliers::ContactEmail)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Suppliers::Rating).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FruitSuppliers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FruitSuppliers::FruitId).integer().not_null())
                    .col(
                        ColumnDef::new(FruitSuppliers::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_fruit_suppliers")
                            .col(FruitSuppliers::FruitId)
                            .col(FruitSuppliers::SupplierId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fruit_suppliers_fruit_id")
                            .from(FruitSuppliers::Table, FruitSuppliers::FruitId)
                            .to(Fruits::Table, Fruits::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fruit_suppliers_supplier_id")
                            .from(FruitSuppliers::Table, FruitSuppliers::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FruitSuppliers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    #[sea_orm(iden = "suppliers")]
    Table,
    Id,
    Name,
    Country,
    ContactEmail,
    Rating,
}

#[derive(DeriveIden)]
enum FruitSuppliers {
    #[sea_orm(iden = "fruit_suppliers")]
    Table,
    FruitId,
    SupplierId,
}
