use entity::scores::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(scores::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(scores::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(scores::Column::PlayerId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(scores::Column::Score).integer().not_null())
                    .col(
                        ColumnDef::new(scores::Column::MaxCombo)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(scores::Column::PerfectCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(scores::Column::GreatCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(scores::Column::MissCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(scores::Column::PlayedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCORES_PLAYER_ID)
                    .table(scores::Entity)
                    .col(scores::Column::PlayerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(scores::Entity).to_owned())
            .await
    }
}
