use crate::constants::{GOAL_AGAINST_WEIGHT, GOAL_FOR_WEIGHT};
use crate::fixture::Fixture;

/// Goals scored by `team` across every fixture, whatever its status.
///
/// Unplayed fixtures contribute nothing.
pub fn goals_for(team: &str, fixtures: &[Fixture]) -> u64 {
    fixtures.iter().map(|fixture| u64::from(fixture.goals(team).0)).sum()
}

/// Goals conceded by `team` across every fixture.
pub fn goals_against(team: &str, fixtures: &[Fixture]) -> u64 {
    fixtures.iter().map(|fixture| u64::from(fixture.goals(team).1)).sum()
}

/// Whole-tournament goal difference. Also used as the group tie-breaker.
pub fn goal_difference(team: &str, fixtures: &[Fixture]) -> i64 {
    goals_for(team, fixtures) as i64 - goals_against(team, fixtures) as i64
}

/// Goal contribution to a team's score: 0.2 per goal scored, -0.1 per goal conceded.
///
/// Not rounded; rounding only happens when contestant totals are built.
pub fn goal_points(team: &str, fixtures: &[Fixture]) -> f64 {
    GOAL_FOR_WEIGHT * goals_for(team, fixtures) as f64
        - GOAL_AGAINST_WEIGHT * goals_against(team, fixtures) as f64
}
