pub mod fruit_suppliers;
pub mod fruits;
pub mod nutritional_info;
pub mod suppliers;
