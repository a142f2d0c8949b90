//! Aggregate statistics DTOs for the dashboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User table totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct UserStats {
    /// Total user rows.
    pub total: u64,
}

/// Friendship table totals. Pending and confirmed edges are not
/// distinguished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct FriendshipStats {
    /// Total edge rows, confirmed and pending alike.
    pub total: u64,
}

/// Combined stats payload for `GET /stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub users: UserStats,
    pub friendships: FriendshipStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_shape() {
        let stats = StatsResponse {
            users: UserStats { total: 10 },
            friendships: FriendshipStats { total: 4 },
        };

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["users"]["total"], 10);
        assert_eq!(json["friendships"]["total"], 4);
    }
}
