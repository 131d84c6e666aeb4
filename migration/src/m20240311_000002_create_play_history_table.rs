use entity::play_history::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(play_history::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(play_history::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(play_history::Column::PlayerId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(play_history::Column::Score)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(play_history::Column::MaxCombo)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(play_history::Column::DurationSeconds)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(play_history::Column::PlayedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAY_HISTORY_PLAYER_ID)
                    .table(play_history::Entity)
                    .col(play_history::Column::PlayerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(play_history::Entity).to_owned())
            .await
    }
}
