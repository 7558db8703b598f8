pub use sea_orm_migration::prelude::*;

mod m20251101_000001_uls_license_header;
mod m20251101_000002_uls_license_entity;
mod m20251101_000003_uls_amateur;
mod m20251101_000004_uls_db_updates;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_uls_license_header::Migration),
            Box::new(m20251101_000002_uls_license_entity::Migration),
            Box::new(m20251101_000003_uls_amateur::Migration),
            Box::new(m20251101_000004_uls_db_updates::Migration),
        ]
    }
}
