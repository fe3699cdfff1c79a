//! Scoreboard Core - fantasy league scoring for knockout tournaments.
//!
//! Turns a competition's fixture list into per-team points (goals, group
//! finish, knockout progression) and ranks contestants by the teams they
//! drafted. Optional PyO3 bindings expose the same computation to Python.

pub mod competition;
pub mod constants;
pub mod error;
pub mod fixture;
pub mod group;
pub mod knockout;
pub mod roster;
#[cfg(feature = "fetch")]
pub mod source;
pub mod standings;
pub mod stats;
pub mod team;

pub use competition::{breakdown, competition_points, Competition, TeamScoreBreakdown};
pub use constants::{GROUP_PLACE_POINTS, KNOCKOUT_MATCHDAYS, ROUND_POINTS};
pub use error::{Error, Result};
pub use fixture::{parse_fixtures, Fixture, FixtureStatus, Outcome, Score};
pub use group::{
    group_points, group_stage_over, group_stage_points, group_standings, group_teams, GroupStanding,
};
pub use knockout::{
    won_matchday, won_round, won_round_of_16, won_round_of_2, won_round_of_4, won_round_of_8,
    KnockoutRound,
};
pub use roster::{Contestant, Roster, SalaryEntry};
#[cfg(feature = "fetch")]
pub use source::{FixtureClient, SourceConfig};
pub use standings::{compute_standings, round2, DetailEntry, DetailRow, Standings, StandingsRow};
pub use stats::{goal_difference, goal_points, goals_against, goals_for};
pub use team::TeamName;

#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::constants::{GROUP_PLACE_POINTS, KNOCKOUT_MATCHDAYS, ROUND_POINTS};
    use crate::{compute_standings, Competition, Error, Roster};

    fn to_py_err(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Standings and details as a JSON string.
    ///
    /// Takes the provider's fixtures payload and a TOML roster.
    #[pyfunction]
    fn compute_standings_json(fixtures_json: &str, roster_toml: &str) -> PyResult<String> {
        let competition = Competition::from_json(fixtures_json).map_err(to_py_err)?;
        let roster = Roster::from_toml_str(roster_toml).map_err(to_py_err)?;
        let standings = compute_standings(&competition.fixtures, &roster);
        serde_json::to_string(&standings).map_err(|e| to_py_err(e.into()))
    }

    /// Per-team breakdown for every team in the payload, as JSON.
    #[pyfunction]
    fn team_scores_json(fixtures_json: &str) -> PyResult<String> {
        let competition = Competition::from_json(fixtures_json).map_err(to_py_err)?;
        serde_json::to_string(&competition.team_scores()).map_err(|e| to_py_err(e.into()))
    }

    /// Python module definition
    #[pymodule]
    fn scoreboard_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(compute_standings_json, m)?)?;
        m.add_function(wrap_pyfunction!(team_scores_json, m)?)?;

        // Constants
        m.add("ROUND_POINTS", ROUND_POINTS.to_vec())?;
        m.add("KNOCKOUT_MATCHDAYS", KNOCKOUT_MATCHDAYS.to_vec())?;
        m.add("GROUP_PLACE_POINTS", GROUP_PLACE_POINTS.to_vec())?;

        Ok(())
    }
}
