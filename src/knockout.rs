use crate::constants::{KNOCKOUT_MATCHDAYS, ROUND_POINTS};
use crate::fixture::{Fixture, Outcome};

/// Single-elimination rounds, in playing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnockoutRound {
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    Final,
}

impl KnockoutRound {
    pub const ALL: [KnockoutRound; 4] = [
        KnockoutRound::RoundOf16,
        KnockoutRound::QuarterFinal,
        KnockoutRound::SemiFinal,
        KnockoutRound::Final,
    ];

    fn index(self) -> usize {
        match self {
            KnockoutRound::RoundOf16 => 0,
            KnockoutRound::QuarterFinal => 1,
            KnockoutRound::SemiFinal => 2,
            KnockoutRound::Final => 3,
        }
    }

    pub fn matchday(self) -> u32 {
        KNOCKOUT_MATCHDAYS[self.index()]
    }

    /// Multiplier applied to a win in this round.
    pub fn points(self) -> f64 {
        ROUND_POINTS[self.index()]
    }
}

/// 1 if `team` won its finished match on `matchday`, else 0.
///
/// A regulation draw counts as a win only when the team also won the
/// shootout. No fixture, an unfinished one, or more than one finished
/// fixture for the team on that matchday all yield 0.
pub fn won_matchday(team: &str, fixtures: &[Fixture], matchday: u32) -> u8 {
    let mut matches = fixtures
        .iter()
        .filter(|fixture| fixture.is_finished() && fixture.matchday == matchday && fixture.involves(team));

    let (Some(fixture), None) = (matches.next(), matches.next()) else {
        return 0;
    };

    match fixture.outcome(team) {
        Some(Outcome::Win) => 1,
        Some(Outcome::Draw) if fixture.won_shootout(team) => 1,
        _ => 0,
    }
}

pub fn won_round(team: &str, fixtures: &[Fixture], round: KnockoutRound) -> u8 {
    won_matchday(team, fixtures, round.matchday())
}

pub fn won_round_of_16(team: &str, fixtures: &[Fixture]) -> u8 {
    won_round(team, fixtures, KnockoutRound::RoundOf16)
}

pub fn won_round_of_8(team: &str, fixtures: &[Fixture]) -> u8 {
    won_round(team, fixtures, KnockoutRound::QuarterFinal)
}

pub fn won_round_of_4(team: &str, fixtures: &[Fixture]) -> u8 {
    won_round(team, fixtures, KnockoutRound::SemiFinal)
}

pub fn won_round_of_2(team: &str, fixtures: &[Fixture]) -> u8 {
    won_round(team, fixtures, KnockoutRound::Final)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_regulation_win() {
        let fixtures = vec![Fixture::played("France", "Argentina", 4, 4, 3).unwrap()];
        assert_eq!(won_round_of_16("France", &fixtures), 1);
        assert_eq!(won_round_of_16("Argentina", &fixtures), 0);
    }

    #[test]
    fn test_penalty_shootout() {
        let fixtures = vec![Fixture::played("A", "B", 4, 1, 1).unwrap().with_shootout(4, 2)];
        assert_eq!(won_round_of_16("A", &fixtures), 1);
        assert_eq!(won_round_of_16("B", &fixtures), 0);
    }

    #[test]
    fn test_away_shootout_winner() {
        let fixtures = vec![Fixture::played("Croatia", "Russia", 5, 2, 2).unwrap().with_shootout(4, 3)];
        assert_eq!(won_round_of_8("Croatia", &fixtures), 1);
        assert_eq!(won_round_of_8("Russia", &fixtures), 0);

        let flipped = vec![Fixture::played("Russia", "Croatia", 5, 2, 2).unwrap().with_shootout(3, 4)];
        assert_eq!(won_round_of_8("Croatia", &flipped), 1);
    }

    #[test]
    fn test_draw_without_shootout() {
        let fixtures = vec![Fixture::played("A", "B", 6, 0, 0).unwrap()];
        assert_eq!(won_round_of_4("A", &fixtures), 0);
        assert_eq!(won_round_of_4("B", &fixtures), 0);
    }

    #[test]
    fn test_unfinished_or_missing() {
        let fixtures = vec![Fixture::scheduled("A", "B", 7).unwrap()];
        assert_eq!(won_round_of_2("A", &fixtures), 0);
        assert_eq!(won_round_of_2("C", &fixtures), 0);
    }

    #[test]
    fn test_duplicate_fixtures_yield_zero() {
        let fixtures = vec![
            Fixture::played("A", "B", 4, 2, 0).unwrap(),
            Fixture::played("A", "C", 4, 2, 0).unwrap(),
        ];
        assert_eq!(won_round_of_16("A", &fixtures), 0);
        assert_eq!(won_round_of_16("B", &fixtures), 0);
    }

    #[test]
    fn test_rounds_by_matchday() {
        let fixtures = vec![
            Fixture::played("A", "B", 4, 1, 0).unwrap(),
            Fixture::played("A", "C", 5, 1, 0).unwrap(),
            Fixture::played("D", "A", 6, 1, 0).unwrap(),
        ];
        assert_eq!(won_round_of_16("A", &fixtures), 1);
        assert_eq!(won_round_of_8("A", &fixtures), 1);
        assert_eq!(won_round_of_4("A", &fixtures), 0);
        assert_eq!(won_round_of_2("A", &fixtures), 0);
    }

    #[test]
    fn test_round_constants() {
        let days: Vec<u32> = KnockoutRound::ALL.iter().map(|r| r.matchday()).collect();
        assert_eq!(days, vec![4, 5, 6, 7]);
        assert_eq!(KnockoutRound::Final.points(), 4.0);
    }

    proptest! {
        #[test]
        fn prop_indicator_domain(
            home in 0u32..6,
            away in 0u32..6,
            pens in proptest::option::of((0u32..6, 0u32..6)),
            day in 4u32..8,
        ) {
            let mut fixture = Fixture::played("A", "B", day, home, away).unwrap();
            if let Some((h, a)) = pens {
                fixture = fixture.with_shootout(h, a);
            }
            let fixtures = vec![fixture];
            let a = won_matchday("A", &fixtures, day);
            let b = won_matchday("B", &fixtures, day);
            prop_assert!(a <= 1 && b <= 1);
            prop_assert!(a + b <= 1);
            if home < away {
                prop_assert_eq!(a, 0);
            }
        }
    }
}
