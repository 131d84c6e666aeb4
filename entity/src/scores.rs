use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const IDX_SCORES_PLAYER_ID: &str = "IDX_scores_player_id";
}

/// One row per completed play: the final result and its hit-judgment
/// breakdown. `player_id` is not unique, a player accumulates rows over time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: String,
    pub score: i32,
    pub max_combo: i32,
    pub perfect_count: i32,
    pub great_count: i32,
    pub miss_count: i32,
    pub played_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
