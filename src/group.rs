use std::cmp::Ordering;

use serde::Serialize;

use crate::constants::{DRAW_POINTS, GROUP_MATCHES, GROUP_PLACE_POINTS, WIN_POINTS};
use crate::fixture::{Fixture, Outcome};
use crate::stats::goal_difference;
use crate::team::TeamName;

/// One row of a group table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStanding {
    pub team: TeamName,
    pub points: u32,
    pub goal_difference: i64,
}

/// Points first, then goal difference, both descending.
fn compare_standings(a: &GroupStanding, b: &GroupStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
}

fn group_fixtures<'a>(team: &'a str, fixtures: &'a [Fixture]) -> impl Iterator<Item = &'a Fixture> {
    fixtures
        .iter()
        .filter(move |fixture| fixture.is_group_stage() && fixture.involves(team))
}

fn finished_group_fixtures<'a>(
    team: &'a str,
    fixtures: &'a [Fixture],
) -> impl Iterator<Item = &'a Fixture> {
    group_fixtures(team, fixtures).filter(|fixture| fixture.is_finished())
}

/// Every team `team` meets in the group stage, plus `team` itself.
///
/// Order of first appearance in the fixture list; empty if `team` has no
/// group fixtures.
pub fn group_teams(team: &str, fixtures: &[Fixture]) -> Vec<TeamName> {
    let mut teams: Vec<TeamName> = Vec::new();
    for fixture in group_fixtures(team, fixtures) {
        for name in [&fixture.home, &fixture.away] {
            if !teams.contains(name) {
                teams.push(name.clone());
            }
        }
    }
    teams
}

/// League points from finished group matches: 3 per win, 1 per draw.
pub fn group_points(team: &str, fixtures: &[Fixture]) -> u32 {
    finished_group_fixtures(team, fixtures)
        .map(|fixture| match fixture.outcome(team) {
            Some(Outcome::Win) => WIN_POINTS,
            Some(Outcome::Draw) => DRAW_POINTS,
            Some(Outcome::Loss) | None => 0,
        })
        .sum()
}

/// Group table for the group `team` plays in.
///
/// Sorted by points, then by whole-tournament goal difference. The sort is
/// stable, so full ties keep fixture order.
pub fn group_standings(team: &str, fixtures: &[Fixture]) -> Vec<GroupStanding> {
    let mut standings: Vec<GroupStanding> = group_teams(team, fixtures)
        .into_iter()
        .map(|name| GroupStanding {
            points: group_points(&name, fixtures),
            goal_difference: goal_difference(&name, fixtures),
            team: name,
        })
        .collect();
    standings.sort_by(compare_standings);
    standings
}

/// Whether `team` has finished all of its group matches.
pub fn group_stage_over(team: &str, fixtures: &[Fixture]) -> bool {
    finished_group_fixtures(team, fixtures).count() == GROUP_MATCHES
}

/// Group finish bonus: 2 for first, 1 for second, 0 otherwise.
///
/// Always 0 until the team's own group matches are all finished.
pub fn group_stage_points(team: &str, fixtures: &[Fixture]) -> u8 {
    if !group_stage_over(team, fixtures) {
        return 0;
    }

    group_standings(team, fixtures)
        .iter()
        .position(|standing| standing.team == team)
        .and_then(|rank| GROUP_PLACE_POINTS.get(rank).copied())
        .unwrap_or(0)
}
