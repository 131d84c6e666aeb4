use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const IDX_PLAY_HISTORY_PLAYER_ID: &str = "IDX_play_history_player_id";
}

/// One row per play session. Shares `player_id` with `scores` as a loose
/// correlation only, there is no foreign key and the two collections are
/// submitted independently.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "play_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: String,
    pub score: i32,
    pub max_combo: i32,
    pub duration_seconds: f64,
    pub played_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
