use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fruits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub color: String,
    pub taste: Option<String>,
    pub origin_country: Option<String>,
    pub price_per_kg: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::nutritional_info::Entity")]
    NutritionalInfo,
    #[sea_orm(has_many = "super::fruit_suppliers::Entity")]
    FruitSuppliers,
}

impl Related<super::nutritional_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NutritionalInfo.def()
    }
}

impl Related<super::fruit_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FruitSuppliers.def()
    }
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        super::fruit_suppliers::Relation::Supplier.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::fruit_suppliers::Relation::Fruit.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
