use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::fixture::Fixture;
use crate::team::TeamName;

/// Cost of one drafted team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub team: TeamName,
    pub salary: f64,
}

/// A fantasy league participant and the teams they drafted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub name: String,
    pub teams: Vec<TeamName>,
    #[serde(default)]
    pub salaries: Vec<SalaryEntry>,
}

impl Contestant {
    pub fn new(name: &str, teams: &[&str]) -> Result<Self> {
        Ok(Contestant {
            name: name.to_string(),
            teams: teams.iter().map(TeamName::new).collect::<Result<_>>()?,
            salaries: Vec::new(),
        })
    }

    pub fn with_salaries(mut self, salaries: &[(&str, f64)]) -> Result<Self> {
        self.salaries = salaries
            .iter()
            .map(|&(team, salary)| {
                Ok(SalaryEntry {
                    team: TeamName::new(team)?,
                    salary,
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn total_salary(&self) -> f64 {
        self.salaries.iter().map(|entry| entry.salary).sum()
    }
}

/// League configuration: every contestant with their roster.
///
/// Read from TOML:
///
/// ```toml
/// [[contestants]]
/// name = "dan"
/// teams = ["Germany", "Denmark"]
/// salaries = [{ team = "Germany", salary = 30.0 }]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub contestants: Vec<Contestant>,
}

impl Roster {
    pub fn new(contestants: Vec<Contestant>) -> Result<Self> {
        let roster = Roster { contestants };
        roster.validate()?;
        Ok(roster)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let roster: Roster = toml::from_str(raw)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }

    /// Reject rosters the aggregator cannot rank sensibly.
    pub fn validate(&self) -> Result<()> {
        let mut issues: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        if self.contestants.is_empty() {
            issues.push("roster must contain at least one contestant".into());
        }

        for contestant in &self.contestants {
            let name = contestant.name.trim();
            if name.is_empty() {
                issues.push("contestant name must not be empty".into());
                continue;
            }
            if !seen.insert(name) {
                issues.push(format!("duplicate contestant {name:?}"));
            }
            if contestant.teams.is_empty() {
                issues.push(format!("{name} has no teams"));
            }
            for entry in &contestant.salaries {
                if !entry.salary.is_finite() || entry.salary < 0.0 {
                    issues.push(format!("{name}: salary for {} must be a number >= 0", entry.team));
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Roster(issues.join("; ")))
        }
    }

    /// Roster teams that appear in no fixture. These score 0.
    ///
    /// Logs a warning for each, with a hint when a fixture team differs only by case.
    pub fn unknown_teams(&self, fixtures: &[Fixture]) -> Vec<TeamName> {
        let mut unknown: Vec<TeamName> = Vec::new();

        let drafted = self.contestants.iter().flat_map(|contestant| {
            contestant
                .teams
                .iter()
                .chain(contestant.salaries.iter().map(|entry| &entry.team))
        });

        for team in drafted {
            if unknown.contains(team) || fixtures.iter().any(|fixture| fixture.involves(team)) {
                continue;
            }

            let near_match = fixtures
                .iter()
                .flat_map(|fixture| [&fixture.home, &fixture.away])
                .find(|candidate| team.loosely_matches(candidate));
            match near_match {
                Some(candidate) => warn!(%team, %candidate, "roster team not in fixtures; names differ by case"),
                None => warn!(%team, "roster team not in fixtures"),
            }
            unknown.push(team.clone());
        }

        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[contestants]]
name = "dan"
teams = ["Germany", "Denmark", "Panama", "Saudi Arabia"]
salaries = [
    { team = "Germany", salary = 32.5 },
    { team = "Denmark", salary = 12.0 },
]

[[contestants]]
name = "joel"
teams = ["Uruguay", " Portugal ", "England", "Morocco"]
"#;

    #[test]
    fn test_from_toml() {
        let roster = Roster::from_toml_str(SAMPLE).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.contestants[0].teams.len(), 4);
        assert_eq!(roster.contestants[0].salaries[0].team, "Germany");
        assert!((roster.contestants[0].total_salary() - 44.5).abs() < 1e-10);
        assert!(roster.contestants[1].salaries.is_empty());
        assert_eq!(roster.contestants[1].teams[1], "Portugal");
    }

    #[test]
    fn test_bundled_roster_parses() {
        let roster = Roster::from_toml_str(include_str!("../rosters/worldcup2018.toml")).unwrap();
        assert_eq!(roster.len(), 6);
        assert!(roster.contestants.iter().all(|c| c.teams.len() == 4));
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(matches!(Roster::new(vec![]), Err(Error::Roster(_))));
    }

    #[test]
    fn test_duplicate_and_teamless_rejected() {
        let roster = Roster {
            contestants: vec![
                Contestant::new("tim", &["Brazil"]).unwrap(),
                Contestant::new("tim", &[]).unwrap(),
            ],
        };
        let Err(Error::Roster(msg)) = roster.validate() else {
            panic!("expected roster error");
        };
        assert!(msg.contains("duplicate"));
        assert!(msg.contains("no teams"));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let contestant = Contestant::new("phil", &["Uruguay"])
            .unwrap()
            .with_salaries(&[("Uruguay", -1.0)])
            .unwrap();
        assert!(Roster::new(vec![contestant]).is_err());
    }

    #[test]
    fn test_blank_team_rejected() {
        assert!(Contestant::new("shelly", &["Spain", " "]).is_err());
        assert!(Roster::from_toml_str("[[contestants]]\nname = \"x\"\nteams = [\"\"]\n").is_err());
    }

    #[test]
    fn test_unknown_teams() {
        let roster = Roster::new(vec![
            Contestant::new("phil", &["Columbia", "Uruguay", "uruguay"]).unwrap(),
        ])
        .unwrap();
        let fixtures = vec![
            Fixture::played("Uruguay", "Egypt", 1, 1, 0).unwrap(),
            Fixture::played("Colombia", "Japan", 1, 1, 2).unwrap(),
        ];

        let unknown = roster.unknown_teams(&fixtures);
        assert_eq!(unknown, vec!["Columbia", "uruguay"]);
    }
}
