pub mod game_state;
pub mod scoring;
pub mod round_engine;
pub mod standings;
pub mod game_events;

// Re-export main components
pub use game_state::*;
pub use scoring::*;
pub use round_engine::*;
pub use game_events::*;
