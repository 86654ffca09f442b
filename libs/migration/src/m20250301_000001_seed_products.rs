use sea_orm_migration::prelude::*;

use crate::m20250301_000000_create_products::Products;

/// Demo catalogue shared with the cart and review fixtures (ids 1-3).
const SEED: [(&str, &str, f64); 3] = [
    ("Product 1", "Product 1 description", 100.0),
    ("Product 2", "Product 2 description", 200.0),
    ("Product 3", "Product 3 description", 300.0),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Products::Table).columns([
            Products::Name,
            Products::Description,
            Products::Price,
        ]);
        for (name, description, price) in SEED {
            insert.values_panic([name.into(), description.into(), price.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = SEED.iter().map(|(name, _, _)| *name).collect();
        let delete = Query::delete()
            .from_table(Products::Table)
            .and_where(Expr::col(Products::Name).is_in(names))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
