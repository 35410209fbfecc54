use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub country: String,
    pub contact_email: String,
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fruit_suppliers::Entity")]
    FruitSuppliers,
}

impl Related<super::fruit_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FruitSuppliers.def()
    }
}

impl Related<super::fruits::Entity> for Entity {
    fn to() -> RelationDef {
        super::fruit_suppliers::Relation::Fruit.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::fruit_suppliers::Relation::Supplier.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
