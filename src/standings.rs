use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::competition::{breakdown, TeamScoreBreakdown};
use crate::fixture::Fixture;
use crate::roster::{Contestant, Roster};
use crate::team::TeamName;

/// Round to two decimals, half away from zero. Never returns `-0.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// One contestant's line in the league table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub name: String,
    pub points: f64,
    pub goal_points: f64,
    pub group_points: u32,
    pub round_of_16: u32,
    pub round_of_8: u32,
    pub round_of_4: u32,
    pub round_of_2: u32,
}

/// A drafted team annotated with what it has scored.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry {
    pub team: TeamName,
    pub salary: Option<f64>,
    pub points: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub name: String,
    /// Sum of the contestant's salaries; 0 without a salary list
    pub salary_total: f64,
    pub salaries: Vec<DetailEntry>,
}

/// Ranked table plus per-contestant detail, ready for presentation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Standings {
    pub standings: Vec<StandingsRow>,
    pub details: Vec<DetailRow>,
}

type ScoreTable<'a> = HashMap<&'a str, TeamScoreBreakdown>;

/// Score each distinct drafted team once.
fn score_drafted_teams<'a>(roster: &'a Roster, fixtures: &[Fixture]) -> ScoreTable<'a> {
    let mut teams: Vec<&'a str> = roster
        .contestants
        .iter()
        .flat_map(|contestant| {
            contestant
                .teams
                .iter()
                .chain(contestant.salaries.iter().map(|entry| &entry.team))
        })
        .map(|team| team.as_str())
        .collect();
    teams.sort_unstable();
    teams.dedup();

    teams
        .par_iter()
        .map(|&team| (team, breakdown(team, fixtures)))
        .collect()
}

fn standings_row(contestant: &Contestant, scores: &ScoreTable<'_>) -> StandingsRow {
    let mut points = 0.0;
    let mut row = StandingsRow {
        name: contestant.name.clone(),
        points: 0.0,
        goal_points: 0.0,
        group_points: 0,
        round_of_16: 0,
        round_of_8: 0,
        round_of_4: 0,
        round_of_2: 0,
    };

    for team in &contestant.teams {
        let Some(score) = scores.get(team.as_str()) else {
            continue;
        };
        points += score.total;
        row.goal_points += score.goal_points;
        row.group_points += score.group_points as u32;
        row.round_of_16 += score.round_of_16 as u32;
        row.round_of_8 += score.round_of_8 as u32;
        row.round_of_4 += score.round_of_4 as u32;
        row.round_of_2 += score.round_of_2 as u32;
    }

    row.points = round2(points);
    row.goal_points = round2(row.goal_points);
    row
}

/// Detail view for one contestant.
///
/// Uses the salary list when there is one, otherwise the drafted teams with
/// no salary.
fn detail_row(contestant: &Contestant, scores: &ScoreTable<'_>) -> DetailRow {
    let points_for = |team: &TeamName| {
        round2(scores.get(team.as_str()).map(|score| score.total).unwrap_or(0.0))
    };

    let salaries = if contestant.salaries.is_empty() {
        contestant
            .teams
            .iter()
            .map(|team| DetailEntry {
                team: team.clone(),
                salary: None,
                points: points_for(team),
            })
            .collect()
    } else {
        contestant
            .salaries
            .iter()
            .map(|entry| DetailEntry {
                team: entry.team.clone(),
                salary: Some(entry.salary),
                points: points_for(&entry.team),
            })
            .collect()
    };

    DetailRow {
        name: contestant.name.clone(),
        salary_total: round2(contestant.total_salary()),
        salaries,
    }
}

/// Sort by points, highest first. Stable: tied contestants keep roster order.
pub fn rank(rows: &mut [StandingsRow]) {
    rows.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal));
}

/// Compute the league table and detail view from a fixture snapshot.
///
/// Pure: the roster is only read.
pub fn compute_standings(fixtures: &[Fixture], roster: &Roster) -> Standings {
    let scores = score_drafted_teams(roster, fixtures);
    debug!(
        contestants = roster.len(),
        teams = scores.len(),
        fixtures = fixtures.len(),
        "computing standings"
    );

    let mut standings: Vec<StandingsRow> = roster
        .contestants
        .par_iter()
        .map(|contestant| standings_row(contestant, &scores))
        .collect();
    rank(&mut standings);

    let details = roster
        .contestants
        .par_iter()
        .map(|contestant| detail_row(contestant, &scores))
        .collect();

    Standings { standings, details }
}
