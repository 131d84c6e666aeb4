pub mod play_history;
pub mod scores;
