// Database queries organized by table
// Each module contains focused queries for one table

pub mod bounty;
pub mod community;
pub mod leaderboard;
pub mod signups;

pub use bounty::get_active_bounty;
pub use community::insert_community_join;
pub use leaderboard::load_leaderboard_rows;
pub use signups::{
    find_signup_by_token, insert_signup, list_all_signups, list_signups_by_emails, mark_verified,
};
