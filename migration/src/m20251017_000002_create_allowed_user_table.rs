use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllowedUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AllowedUser::Email)
                            .string()
                            .not_null()
                            .primary_key()
                    )
                    .col(ColumnDef::new(AllowedUser::Name).string().null())
                    .col(
                        ColumnDef::new(AllowedUser::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(AllowedUser::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AllowedUser::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AllowedUser {
    Table,
    Email,
    Name,
    CreatedAt,
    UpdatedAt,
}
