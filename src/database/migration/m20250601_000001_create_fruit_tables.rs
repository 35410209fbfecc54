use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fruits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fruits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fruits::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Fruits::Color).string_len(50).not_null())
                    .col(ColumnDef::new(Fruits::Taste).string_len(50).null())
                    .col(ColumnDef::new(Fruits::OriginCountry).string_len(100).null())
                    .col(ColumnDef::new(Fruits::PricePerKg).double().null())
                    .col(
                        ColumnDef::new(Fruits::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Fruits::UpdatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fruits_name")
                    .table(Fruits::Table)
                    .col(Fruits::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NutritionalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NutritionalInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NutritionalInfo::FruitId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(NutritionalInfo::Calories).integer().not_null())
                    .col(
                        ColumnDef::new(NutritionalInfo::Carbohydrates)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NutritionalInfo::Protein).double().not_null())
                    .col(ColumnDef::new(NutritionalInfo::Fat).double().not_null())
                    .col(ColumnDef::new(NutritionalInfo::Fiber).double().not_null())
                    .col(
                        ColumnDef::new(NutritionalInfo::Vitamins)
                            .string_len(200)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nutritional_info_fruit_id")
                            .from(NutritionalInfo::Table, NutritionalInfo::FruitId)
                            .to(Fruits::Table, Fruits::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NutritionalInfo::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Fruits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Fruits {
    #[sea_orm(iden = "fruits")]
    Table,
    Id,
    Name,
    Color,
    Taste,
    OriginCountry,
    PricePerKg,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum NutritionalInfo {
    #[sea_orm(iden = "nutritional_info")]
    Table,
    Id,
    FruitId,
    Calories,
    Carbohydrates,
    Protein,
    Fat,
    Fiber,
    Vitamins,
}
