use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fruit_suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fruit_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub supplier_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fruits::Entity",
        from = "Column::FruitId",
        to = "super::fruits::Column::Id",
        on_delete = "Cascade"
    )]
    Fruit,
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::SupplierId",
        to = "super::suppliers::Column::Id",
        on_delete = "Cascade"
    )]
    Supplier,
}

impl Related<super::fruits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fruit.def()
    }
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
