/// Points per goal scored
pub const GOAL_FOR_WEIGHT: f64 = 0.2;

/// Points deducted per goal conceded
pub const GOAL_AGAINST_WEIGHT: f64 = 0.1;

/// Group stage matches are played on matchdays strictly below this value
pub const GROUP_STAGE_END: u32 = 4;

/// Finished group matches needed before a team's group is considered decided
pub const GROUP_MATCHES: usize = 3;

/// League points for a group stage win / draw
pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// Bonus for finishing 1st and 2nd in a group
pub const GROUP_PLACE_POINTS: [u8; 2] = [2, 1];

/// Matchday of each knockout round: round of 16, quarterfinal, semifinal, final
pub const KNOCKOUT_MATCHDAYS: [u32; 4] = [4, 5, 6, 7];

/// Points awarded for winning each knockout round
pub const ROUND_POINTS: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// Default fixtures endpoint (football-data.org v1, 2018 World Cup)
pub const DEFAULT_FIXTURES_URL: &str = "http://api.football-data.org/v1/competitions/467/fixtures";
