use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Delegate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Delegate::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Delegate::TeamId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Delegate::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Delegate::Category)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Delegate::IsHead)
                            .boolean()
                            .not_null()
                            .default(false)
                    )
                    .col(ColumnDef::new(Delegate::Day1).boolean().not_null().default(false))
                    .col(ColumnDef::new(Delegate::Day2).boolean().not_null().default(false))
                    .col(ColumnDef::new(Delegate::Day3).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Delegate::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Delegate::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager.create_index(
            Index::create()
                .name("idx_delegate_team_id")
                .table(Delegate::Table)
                .col(Delegate::TeamId)
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_delegate_category")
                .table(Delegate::Table)
                .col(Delegate::Category)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Delegate::Table)
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Delegate {
    Table,
    Id,
    TeamId,
    Name,
    Category,
    IsHead,
    Day1,
    Day2,
    Day3,
    CreatedAt,
    UpdatedAt,
}
