pub mod api;
pub mod bounty;
pub mod community;
pub mod leaderboard;
pub mod signup;

pub use api::*;
pub use bounty::BountyEvent;
pub use community::{CommunityJoin, NewCommunityJoin};
pub use leaderboard::{LeaderboardCacheRow, LeaderboardEntry, ScoreBreakdown};
pub use signup::SignupRecord;
