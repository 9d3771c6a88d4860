//! Study team roster and XP leaderboard.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TeamError;
use crate::progression::UserProfile;

pub const DEFAULT_INVITE_BASE_URL: &str = "https://productivitycoach.app/join";

/// Member id of the local user in the demo roster.
pub const SELF_MEMBER_ID: &str = "2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamVisibility {
    Private,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Leader,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub streak: u32,
    pub country: String,
    pub role: TeamRole,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub visibility: TeamVisibility,
    pub invite_code: String,
    pub members: Vec<TeamMember>,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    /// Rank 1 wears the crown.
    pub crowned: bool,
    #[serde(flatten)]
    pub member: TeamMember,
}

impl TeamMember {
    fn new(id: &str, name: &str, role: TeamRole) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            level: 1,
            xp: 0,
            streak: 0,
            country: "🌍".to_string(),
            role,
            avatar: "avatar-robot.png".to_string(),
        }
    }

    fn progress(mut self, level: u32, xp: u64, streak: u32) -> Self {
        self.level = level;
        self.xp = xp;
        self.streak = streak;
        self
    }

    fn from_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = avatar.to_string();
        self
    }
}

impl Team {
    /// The seeded "Focus Warriors" team.
    pub fn demo() -> Self {
        use TeamRole::*;
        Self {
            id: "team-1".to_string(),
            name: "Focus Warriors".to_string(),
            visibility: TeamVisibility::Private,
            invite_code: "FW2024".to_string(),
            members: vec![
                TeamMember::new("1", "Alex Chen", Leader)
                    .progress(25, 15420, 12)
                    .from_country("🇺🇸"),
                TeamMember::new(SELF_MEMBER_ID, "You", Member).progress(8, 4250, 5),
                TeamMember::new("3", "Sarah Kim", Member)
                    .progress(18, 9800, 8)
                    .from_country("🇰🇷")
                    .with_avatar("avatar-wizard.png"),
                TeamMember::new("4", "Miguel Torres", Member)
                    .progress(22, 12650, 15)
                    .from_country("🇲🇽"),
            ],
        }
    }

    /// Members ranked by XP, highest first. Ties keep roster order.
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut sorted = self.members.clone();
        sorted.sort_by(|a, b| b.xp.cmp(&a.xp));
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, member)| Standing {
                rank: i + 1,
                crowned: i == 0,
                member,
            })
            .collect()
    }

    pub fn invite_link(&self, base_url: &str) -> Result<Url, TeamError> {
        let invalid = |message: String| TeamError::InvalidInviteUrl {
            url: base_url.to_string(),
            message,
        };
        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&self.invite_code);
        Ok(url)
    }

    /// Mirror the profile's progress into the member row `member_id`.
    pub fn sync_member(&mut self, member_id: &str, profile: &UserProfile) -> Result<(), TeamError> {
        let row = self
            .members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| TeamError::UnknownMember(member_id.to_string()))?;
        row.level = profile.level();
        row.xp = profile.xp;
        row.streak = profile.streak;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_orders_by_xp() {
        let board = Team::demo().leaderboard();
        let names: Vec<_> = board.iter().map(|s| s.member.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Chen", "Miguel Torres", "Sarah Kim", "You"]);
        assert!(board[0].crowned);
        assert!(!board[1].crowned);
        assert_eq!(board[3].rank, 4);
    }

    #[test]
    fn demo_roster_rows() {
        let team = Team::demo();
        let sarah = &team.members[2];
        assert_eq!((sarah.level, sarah.xp, sarah.streak), (18, 9800, 8));
        assert_eq!(sarah.country, "🇰🇷");
        assert_eq!(sarah.avatar, "avatar-wizard.png");
        assert_eq!(team.members[0].role, TeamRole::Leader);
        assert_eq!(team.members[1].country, "🌍");
        assert_eq!(team.members[1].avatar, "avatar-robot.png");
    }

    #[test]
    fn leaderboard_ties_keep_roster_order() {
        let mut team = Team::demo();
        team.members[3].xp = 9800;
        let board = team.leaderboard();
        let names: Vec<_> = board.iter().map(|s| s.member.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Chen", "Sarah Kim", "Miguel Torres", "You"]);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn invite_link_appends_code() {
        let team = Team::demo();
        assert_eq!(
            team.invite_link(DEFAULT_INVITE_BASE_URL).unwrap().as_str(),
            "https://productivitycoach.app/join/FW2024"
        );
        assert_eq!(
            team.invite_link("https://example.com/join/").unwrap().as_str(),
            "https://example.com/join/FW2024"
        );
    }

    #[test]
    fn invite_link_rejects_bad_base() {
        let err = Team::demo().invite_link("not a url").unwrap_err();
        assert!(matches!(err, TeamError::InvalidInviteUrl { .. }));
    }

    #[test]
    fn sync_member_moves_self_up_the_board() {
        let mut team = Team::demo();
        let profile = UserProfile::new("You", 10_000, 0, 6);
        team.sync_member(SELF_MEMBER_ID, &profile).unwrap();

        let board = team.leaderboard();
        assert_eq!(board[2].member.name, "You");
        assert_eq!(board[2].member.level, 11);
        assert_eq!(board[2].member.streak, 6);

        assert_eq!(
            team.sync_member("99", &profile),
            Err(TeamError::UnknownMember("99".into()))
        );
    }
}
