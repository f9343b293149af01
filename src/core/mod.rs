pub mod backup;
pub mod engine;
pub mod export;
pub mod leaderboard;
pub mod policy;

pub use engine::AttendanceEngine;
pub use leaderboard::{Leader, Leaderboard, TopStats};
pub use policy::CutoffPolicy;
