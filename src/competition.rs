use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::fixture::Fixture;
use crate::group::{group_stage_points, group_standings, GroupStanding};
use crate::knockout::{won_round, KnockoutRound};
use crate::stats::goal_points;
use crate::team::TeamName;

/// Everything that goes into one team's competition points.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreBreakdown {
    pub goal_points: f64,
    /// Group finish bonus (0, 1 or 2)
    pub group_points: u8,
    pub round_of_16: u8,
    pub round_of_8: u8,
    pub round_of_4: u8,
    pub round_of_2: u8,
    pub total: f64,
}

impl TeamScoreBreakdown {
    /// Win indicator for a knockout round.
    pub fn round(&self, round: KnockoutRound) -> u8 {
        match round {
            KnockoutRound::RoundOf16 => self.round_of_16,
            KnockoutRound::QuarterFinal => self.round_of_8,
            KnockoutRound::SemiFinal => self.round_of_4,
            KnockoutRound::Final => self.round_of_2,
        }
    }
}

/// Score `team` against a fixture snapshot.
pub fn breakdown(team: &str, fixtures: &[Fixture]) -> TeamScoreBreakdown {
    let mut score = TeamScoreBreakdown {
        goal_points: goal_points(team, fixtures),
        group_points: group_stage_points(team, fixtures),
        round_of_16: won_round(team, fixtures, KnockoutRound::RoundOf16),
        round_of_8: won_round(team, fixtures, KnockoutRound::QuarterFinal),
        round_of_4: won_round(team, fixtures, KnockoutRound::SemiFinal),
        round_of_2: won_round(team, fixtures, KnockoutRound::Final),
        total: 0.0,
    };

    let knockout_points: f64 = KnockoutRound::ALL
        .iter()
        .map(|&round| round.points() * score.round(round) as f64)
        .sum();
    score.total = score.goal_points + score.group_points as f64 + knockout_points;
    score
}

/// goal points + group bonus + 1/2/3/4 per knockout round won.
pub fn competition_points(team: &str, fixtures: &[Fixture]) -> f64 {
    breakdown(team, fixtures).total
}

/// A snapshot of one competition's fixtures.
#[derive(Clone, Debug, Default)]
pub struct Competition {
    pub fixtures: Vec<Fixture>,
}

impl Competition {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Competition { fixtures }
    }

    /// Parse a provider payload into a snapshot.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(Competition::new(crate::fixture::parse_fixtures(json)?))
    }

    /// All teams in the fixture list, in order of first appearance.
    pub fn teams(&self) -> Vec<TeamName> {
        let mut teams: Vec<TeamName> = Vec::new();
        for fixture in &self.fixtures {
            for name in [&fixture.home, &fixture.away] {
                if !teams.contains(name) {
                    teams.push(name.clone());
                }
            }
        }
        teams
    }

    pub fn breakdown(&self, team: &str) -> TeamScoreBreakdown {
        breakdown(team, &self.fixtures)
    }

    pub fn competition_points(&self, team: &str) -> f64 {
        competition_points(team, &self.fixtures)
    }

    pub fn group_standings(&self, team: &str) -> Vec<GroupStanding> {
        group_standings(team, &self.fixtures)
    }

    /// Score every team in the competition.
    pub fn team_scores(&self) -> Vec<(TeamName, TeamScoreBreakdown)> {
        let teams = self.teams();
        debug!(teams = teams.len(), fixtures = self.fixtures.len(), "scoring all teams");

        teams
            .into_par_iter()
            .map(|team| {
                let score = self.breakdown(&team);
                (team, score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Group of four played out, then A wins the round of 16 on penalties and
    /// loses the quarterfinal.
    fn make_competition() -> Competition {
        Competition::new(vec![
            Fixture::played("A", "B", 1, 2, 1).unwrap(),
            Fixture::played("C", "D", 1, 0, 0).unwrap(),
            Fixture::played("A", "C", 2, 1, 0).unwrap(),
            Fixture::played("D", "B", 2, 0, 2).unwrap(),
            Fixture::played("D", "A", 3, 0, 3).unwrap(),
            Fixture::played("B", "C", 3, 1, 0).unwrap(),
            Fixture::played("A", "E", 4, 1, 1).unwrap().with_shootout(5, 4),
            Fixture::played("F", "B", 4, 2, 0).unwrap(),
            Fixture::played("A", "F", 5, 0, 1).unwrap(),
        ])
    }

    #[test]
    fn test_breakdown() {
        let competition = make_competition();
        let a = competition.breakdown("A");

        // A: scored 2+1+3+1+0 = 7, conceded 1+0+0+1+1 = 3
        assert!((a.goal_points - (1.4 - 0.3)).abs() < 1e-10);
        assert_eq!(a.group_points, 2);
        assert_eq!(a.round_of_16, 1);
        assert_eq!(a.round_of_8, 0);
        assert_eq!(a.round_of_4, 0);
        assert_eq!(a.round_of_2, 0);
        assert!((a.total - (1.1 + 2.0 + 1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_rounds() {
        let fixtures = vec![
            Fixture::played("A", "B", 4, 1, 0).unwrap(),
            Fixture::played("A", "C", 5, 1, 0).unwrap(),
            Fixture::played("A", "D", 6, 1, 0).unwrap(),
            Fixture::played("A", "E", 7, 1, 0).unwrap(),
        ];
        // 4 goals = 0.8, rounds 1+2+3+4 = 10
        assert!((competition_points("A", &fixtures) - 10.8).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_team() {
        let competition = make_competition();
        assert!(!competition.teams().iter().any(|team| team == "Z"));
        assert_eq!(competition.breakdown("Z"), TeamScoreBreakdown::default());
    }

    #[test]
    fn test_teams_and_scores() {
        let competition = make_competition();
        let teams = competition.teams();
        assert_eq!(teams, vec!["A", "B", "C", "D", "E", "F"]);

        let scores = competition.team_scores();
        assert_eq!(scores.len(), 6);
        assert_eq!(scores[0].0, "A");
        for (team, score) in &scores {
            assert!((score.total - competition.competition_points(team)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"fixtures": [
            {"homeTeamName": "A", "awayTeamName": "B", "status": "FINISHED", "matchday": 1,
             "result": {"goalsHomeTeam": 2, "goalsAwayTeam": 0}}
        ]}"#;
        let competition = Competition::from_json(json).unwrap();
        assert!((competition.competition_points("A") - 0.4).abs() < 1e-10);
        assert_eq!(competition.breakdown("A").group_points, 0);
    }
}
