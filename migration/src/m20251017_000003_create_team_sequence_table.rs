use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TeamSequence {
    Table,
    Id,
    Value,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(TeamSequence::Table)
                .if_not_exists()
                .col(ColumnDef::new(TeamSequence::Id).integer().not_null().primary_key())
                .col(ColumnDef::new(TeamSequence::Value).integer().not_null().default(0))
                .to_owned(),
        ).await?;

        // The allocator only ever updates row 1, it never inserts.
        m.exec_stmt(
            Query::insert()
                .into_table(TeamSequence::Table)
                .columns([TeamSequence::Id, TeamSequence::Value])
                .values_panic([1.into(), 0.into()])
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(TeamSequence::Table).to_owned()).await?;
        Ok(())
    }
}
