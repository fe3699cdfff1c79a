//! Typed fixture model and validation of the upstream JSON payload.
//!
//! The provider sends `{ "fixtures": [...] }` where each fixture looks like
//! `{ homeTeamName, awayTeamName, status, matchday, result: { goalsHomeTeam,
//! goalsAwayTeam, penaltyShootout?: { goalsHomeTeam, goalsAwayTeam } } }`.
//! Unplayed fixtures carry a missing or all-null `result`; a FINISHED
//! fixture without both regulation goals is rejected.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::team::TeamName;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Canceled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Goals of a match, home side first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
    /// Penalty shootout goals, only when both sides are reported.
    pub shootout: Option<(u32, u32)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub home: TeamName,
    pub away: TeamName,
    pub status: FixtureStatus,
    pub matchday: u32,
    pub score: Option<Score>,
}

impl Fixture {
    pub fn new(
        home: TeamName,
        away: TeamName,
        status: FixtureStatus,
        matchday: u32,
        score: Option<Score>,
    ) -> Self {
        Fixture {
            home,
            away,
            status,
            matchday,
            score,
        }
    }

    /// A finished fixture with the given regulation score.
    pub fn played(home: &str, away: &str, matchday: u32, home_goals: u32, away_goals: u32) -> Result<Self> {
        Ok(Fixture::new(
            TeamName::new(home)?,
            TeamName::new(away)?,
            FixtureStatus::Finished,
            matchday,
            Some(Score {
                home: home_goals,
                away: away_goals,
                shootout: None,
            }),
        ))
    }

    /// A fixture that has not been played yet.
    pub fn scheduled(home: &str, away: &str, matchday: u32) -> Result<Self> {
        Ok(Fixture::new(
            TeamName::new(home)?,
            TeamName::new(away)?,
            FixtureStatus::Scheduled,
            matchday,
            None,
        ))
    }

    /// Attach a penalty shootout result.
    pub fn with_shootout(mut self, home_goals: u32, away_goals: u32) -> Self {
        if let Some(score) = self.score.as_mut() {
            score.shootout = Some((home_goals, away_goals));
        }
        self
    }

    pub fn is_finished(&self) -> bool {
        self.status == FixtureStatus::Finished
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    pub fn is_group_stage(&self) -> bool {
        self.matchday < crate::constants::GROUP_STAGE_END
    }

    /// (goals scored, goals conceded) by `team`; zero when unplayed or not involved.
    pub fn goals(&self, team: &str) -> (u32, u32) {
        match self.score {
            Some(score) if self.home == team => (score.home, score.away),
            Some(score) if self.away == team => (score.away, score.home),
            _ => (0, 0),
        }
    }

    /// Regulation outcome for `team`, if the fixture is scored and involves it.
    pub fn outcome(&self, team: &str) -> Option<Outcome> {
        if !self.involves(team) || self.score.is_none() {
            return None;
        }
        let (scored, conceded) = self.goals(team);
        Some(match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        })
    }

    /// Whether `team` won the shootout that followed a drawn match.
    pub fn won_shootout(&self, team: &str) -> bool {
        let Some(Score {
            shootout: Some((home, away)),
            ..
        }) = self.score
        else {
            return false;
        };
        if self.home == team {
            home > away
        } else if self.away == team {
            away > home
        } else {
            false
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    fixtures: Option<Vec<RawFixture>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixture {
    #[serde(default)]
    home_team_name: String,
    #[serde(default)]
    away_team_name: String,
    #[serde(default)]
    status: FixtureStatus,
    #[serde(default)]
    matchday: Option<u32>,
    #[serde(default)]
    result: Option<RawResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    #[serde(default)]
    goals_home_team: Option<u32>,
    #[serde(default)]
    goals_away_team: Option<u32>,
    #[serde(default)]
    penalty_shootout: Option<RawGoals>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGoals {
    #[serde(default)]
    goals_home_team: Option<u32>,
    #[serde(default)]
    goals_away_team: Option<u32>,
}

impl RawFixture {
    fn validate(self, index: usize) -> Result<Fixture> {
        let invalid = |reason: String| Error::InvalidFixture { index, reason };

        let home = TeamName::new(&self.home_team_name)
            .map_err(|_| invalid("home team name is empty".to_string()))?;
        let away = TeamName::new(&self.away_team_name)
            .map_err(|_| invalid("away team name is empty".to_string()))?;

        let matchday = match self.matchday {
            Some(day) if day >= 1 => day,
            Some(day) => return Err(invalid(format!("matchday {day} is out of range"))),
            None => return Err(invalid("matchday is missing".to_string())),
        };

        let score = self.result.and_then(|result| {
            let shootout = result.penalty_shootout.and_then(|pens| {
                Some((pens.goals_home_team?, pens.goals_away_team?))
            });
            Some(Score {
                home: result.goals_home_team?,
                away: result.goals_away_team?,
                shootout,
            })
        });

        if self.status == FixtureStatus::Finished && score.is_none() {
            return Err(invalid(format!(
                "{home} vs {away} is FINISHED but has no final score"
            )));
        }

        Ok(Fixture::new(home, away, self.status, matchday, score))
    }
}

/// Parse and validate a `{ "fixtures": [...] }` payload.
pub fn parse_fixtures(json: &str) -> Result<Vec<Fixture>> {
    let payload: RawPayload = serde_json::from_str(json)
        .map_err(|e| Error::DataUnavailable(format!("malformed fixtures payload: {e}")))?;

    let raw = payload
        .fixtures
        .ok_or_else(|| Error::DataUnavailable("payload has no fixtures array".to_string()))?;

    let fixtures = raw
        .into_iter()
        .enumerate()
        .map(|(index, fixture)| fixture.validate(index))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = fixtures.len(), "parsed fixtures");
    Ok(fixtures)
}
