//! Unit tests for the innings update processor

use super::*;
use crate::storage::{MemoryStore, PlayerRegistry};

fn player(name: &str) -> PlayerRecord {
    PlayerRecord::new(name).unwrap()
}

fn store_with(names: &[&str]) -> MemoryStore {
    MemoryStore::with_players(names.iter().map(|n| player(n))).unwrap()
}

#[cfg(test)]
mod batting_tests {
    use super::*;

    #[test]
    fn test_batting_entry_accumulates_counters() {
        let mut record = player("Rohit Sharma");
        record.runs_scored = Some(1000);
        record.innings_batted = Some(30);
        record.not_out = Some(3);
        record.matches = Some(20);
        record.high_score = Some(212);

        apply_batting(
            &mut record,
            &BattingEntry::new("Rohit Sharma", true, 26, 77, 3, 1),
        )
        .unwrap();

        assert_eq!(record.runs_scored, Some(1026));
        assert_eq!(record.balls_faced, Some(77));
        assert_eq!(record.fours_scored, Some(3));
        assert_eq!(record.sixes_scored, Some(1));
        assert_eq!(record.innings_batted, Some(31));
        assert_eq!(record.matches, Some(21));
        assert_eq!(record.not_out, Some(3));
        assert_eq!(record.high_score, Some(212));
        assert_eq!(record.centuries, Some(0));
        assert_eq!(record.half_centuries, Some(0));
    }

    #[test]
    fn test_not_out_increments_when_not_dismissed() {
        let mut record = player("Jasprit Bumrah");
        apply_batting(
            &mut record,
            &BattingEntry::new("Jasprit Bumrah", false, 0, 2, 0, 0),
        )
        .unwrap();

        assert_eq!(record.not_out, Some(1));
        assert_eq!(record.innings_batted, Some(1));
    }

    #[test]
    fn test_milestones_are_exclusive() {
        let cases = [(49, 0, 0), (50, 0, 1), (75, 0, 1), (99, 0, 1), (100, 1, 0), (120, 1, 0)];

        for (runs, hundreds, fifties) in cases {
            let mut record = player("Shubman Gill");
            apply_batting(
                &mut record,
                &BattingEntry::new("Shubman Gill", true, runs, 100, 0, 0),
            )
            .unwrap();

            assert_eq!(record.centuries, Some(hundreds), "runs = {}", runs);
            assert_eq!(record.half_centuries, Some(fifties), "runs = {}", runs);
        }
    }

    #[test]
    fn test_high_score_only_advances() {
        let mut record = player("Virat Kohli");
        record.high_score = Some(183);

        apply_batting(&mut record, &BattingEntry::new("Virat Kohli", true, 90, 80, 9, 1)).unwrap();
        assert_eq!(record.high_score, Some(183));

        apply_batting(&mut record, &BattingEntry::new("Virat Kohli", false, 254, 336, 33, 2))
            .unwrap();
        assert_eq!(record.high_score, Some(254));
    }

    #[test]
    fn test_missing_counter_leaves_record_untouched() {
        let mut record = player("Sachin Tendulkar");
        record.runs_scored = Some(15_921);
        record.balls_faced = None;
        let before = record.clone();

        let err = apply_batting(
            &mut record,
            &BattingEntry::new("Sachin Tendulkar", true, 80, 120, 10, 0),
        )
        .unwrap_err();

        match err {
            StatsError::IncompleteRecord { name, field } => {
                assert_eq!(name, "Sachin Tendulkar");
                assert_eq!(field, "balls_faced");
            }
            other => panic!("Expected IncompleteRecord error, got {:?}", other),
        }
        assert_eq!(record, before);
    }

    #[test]
    fn test_counter_overflow_leaves_record_untouched() {
        let mut record = player("Don Bradman");
        record.runs_scored = Some(u32::MAX - 5);
        let before = record.clone();

        let err = apply_batting(
            &mut record,
            &BattingEntry::new("Don Bradman", true, 10, 20, 1, 0),
        )
        .unwrap_err();

        match err {
            StatsError::CounterOverflow { name, field } => {
                assert_eq!(name, "Don Bradman");
                assert_eq!(field, "runs_scored");
            }
            other => panic!("Expected CounterOverflow error, got {:?}", other),
        }
        assert_eq!(record, before);
    }

    #[test]
    fn test_counter_may_reach_limit_exactly() {
        let mut record = player("Don Bradman");
        record.runs_scored = Some(u32::MAX - 10);

        apply_batting(
            &mut record,
            &BattingEntry::new("Don Bradman", true, 10, 20, 1, 0),
        )
        .unwrap();

        assert_eq!(record.runs_scored, Some(u32::MAX));
    }
}

#[cfg(test)]
mod bowling_tests {
    use super::*;

    #[test]
    fn test_bowling_entry_accumulates_counters() {
        let mut record = player("Mitchell Starc");
        record.matches = Some(5);

        apply_bowling(&mut record, &BowlingEntry::new("Mitchell Starc", 114, 7, 61, 1)).unwrap();

        assert_eq!(record.balls_bowled, Some(114));
        assert_eq!(record.runs_given, Some(61));
        assert_eq!(record.wickets_taken, Some(1));
        assert_eq!(record.innings_bowled, Some(1));
        assert_eq!(record.matches, Some(6));
    }

    #[test]
    fn test_maidens_are_not_accumulated() {
        let mut with_maidens = player("Josh Hazlewood");
        let mut without_maidens = player("Josh Hazlewood");

        apply_bowling(&mut with_maidens, &BowlingEntry::new("Josh Hazlewood", 126, 10, 43, 2))
            .unwrap();
        apply_bowling(&mut without_maidens, &BowlingEntry::new("Josh Hazlewood", 126, 0, 43, 2))
            .unwrap();

        assert_eq!(with_maidens, without_maidens);
    }

    #[test]
    fn test_bowling_overflow_is_not_persisted() {
        let mut store = store_with(&["Muttiah Muralitharan"]);
        let mut record = store.get("Muttiah Muralitharan").unwrap().clone();
        record.wickets_taken = Some(u32::MAX);
        store.persist(&record).unwrap();

        let err = update_innings(
            &mut store,
            &[],
            &[BowlingEntry::new("Muttiah Muralitharan", 120, 4, 40, 3)],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            StatsError::CounterOverflow {
                field: "wickets_taken",
                ..
            }
        ));
        let stored = store.get("Muttiah Muralitharan").unwrap();
        assert_eq!(stored.balls_bowled, Some(0));
        assert_eq!(stored.wickets_taken, Some(u32::MAX));
    }

    #[test]
    fn test_bowling_does_not_touch_batting_counters() {
        let mut record = player("Nathan Lyon");
        apply_bowling(&mut record, &BowlingEntry::new("Nathan Lyon", 180, 4, 70, 3)).unwrap();

        assert_eq!(record.innings_batted, Some(0));
        assert_eq!(record.runs_scored, Some(0));
    }
}

#[cfg(test)]
mod update_innings_tests {
    use super::*;

    #[test]
    fn test_update_innings_batting_then_bowling() {
        let mut store = store_with(&["Rohit Sharma", "Shubman Gill", "Mitchell Starc"]);

        let summary = update_innings(
            &mut store,
            &[
                BattingEntry::new("Rohit Sharma", true, 26, 77, 3, 1),
                BattingEntry::new("Shubman Gill", true, 50, 101, 8, 0),
            ],
            &[BowlingEntry::new("Mitchell Starc", 114, 7, 61, 1)],
        )
        .unwrap();

        assert_eq!(
            summary,
            InningsSummary {
                batters_updated: 2,
                bowlers_updated: 1
            }
        );
        assert_eq!(store.get("Rohit Sharma").unwrap().runs_scored, Some(26));
        assert_eq!(store.get("Shubman Gill").unwrap().half_centuries, Some(1));
        assert_eq!(store.get("Mitchell Starc").unwrap().wickets_taken, Some(1));
    }

    #[test]
    fn test_player_who_bats_and_bowls_counts_two_matches() {
        let mut store = store_with(&["Ravindra Jadeja", "Ravichandran Ashwin"]);

        update_innings(
            &mut store,
            &[
                BattingEntry::new("Ravindra Jadeja", false, 45, 60, 4, 1),
                BattingEntry::new("Ravichandran Ashwin", true, 12, 30, 1, 0),
            ],
            &[BowlingEntry::new("Ravindra Jadeja", 60, 3, 22, 2)],
        )
        .unwrap();

        let jadeja = store.get("Ravindra Jadeja").unwrap();
        assert_eq!(jadeja.matches, Some(2));
        assert_eq!(jadeja.innings_batted, Some(1));
        assert_eq!(jadeja.innings_bowled, Some(1));
        assert_eq!(jadeja.runs_scored, Some(45));
        assert_eq!(jadeja.wickets_taken, Some(2));
    }

    #[test]
    fn test_applying_twice_doubles_deltas() {
        let mut store = store_with(&["Rohit Sharma", "Shubman Gill"]);
        let batting = [
            BattingEntry::new("Rohit Sharma", false, 60, 40, 5, 2),
            BattingEntry::new("Shubman Gill", true, 10, 12, 1, 0),
        ];

        update_innings(&mut store, &batting, &[]).unwrap();
        let once = store.get("Rohit Sharma").unwrap().clone();
        assert_eq!(once.runs_scored, Some(60));
        assert_eq!(once.balls_faced, Some(40));
        assert_eq!(once.not_out, Some(1));
        assert_eq!(once.half_centuries, Some(1));

        update_innings(&mut store, &batting, &[]).unwrap();
        let twice = store.get("Rohit Sharma").unwrap();
        assert_ne!(&once, twice);
        assert_eq!(twice.runs_scored, Some(120));
        assert_eq!(twice.balls_faced, Some(80));
        assert_eq!(twice.not_out, Some(2));
        assert_eq!(twice.half_centuries, Some(2));
        assert_eq!(twice.high_score, Some(60));
    }

    #[test]
    fn test_unknown_player_mutates_nothing() {
        let mut store = store_with(&["Rohit Sharma"]);
        let before = store.clone();

        let err = update_innings(
            &mut store,
            &[BattingEntry::new("Unknown Player", true, 10, 20, 1, 0)],
            &[],
        )
        .unwrap_err();

        match err {
            StatsError::PlayerNotFound { name } => assert_eq!(name, "Unknown Player"),
            other => panic!("Expected PlayerNotFound error, got {:?}", other),
        }
        assert_eq!(store.get("Rohit Sharma"), before.get("Rohit Sharma"));
    }

    #[test]
    fn test_partial_commit_before_unknown_batter() {
        let mut store = store_with(&["Rohit Sharma", "Shubman Gill", "Mitchell Starc"]);

        let err = update_innings(
            &mut store,
            &[
                BattingEntry::new("Rohit Sharma", true, 26, 77, 3, 1),
                BattingEntry::new("Shubman Gill", true, 50, 101, 8, 0),
                BattingEntry::new("Nobody", true, 5, 9, 1, 0),
            ],
            &[BowlingEntry::new("Mitchell Starc", 114, 7, 61, 1)],
        )
        .unwrap_err();

        assert!(matches!(err, StatsError::PlayerNotFound { ref name } if name == "Nobody"));
        assert_eq!(store.get("Rohit Sharma").unwrap().runs_scored, Some(26));
        assert_eq!(store.get("Shubman Gill").unwrap().runs_scored, Some(50));
        // Bowling never started
        assert_eq!(store.get("Mitchell Starc").unwrap().innings_bowled, Some(0));
    }

    #[test]
    fn test_unknown_bowler_keeps_batting_committed() {
        let mut store = store_with(&["Rohit Sharma", "Shubman Gill"]);

        let err = update_innings(
            &mut store,
            &[
                BattingEntry::new("Rohit Sharma", true, 26, 77, 3, 1),
                BattingEntry::new("Shubman Gill", true, 50, 101, 8, 0),
            ],
            &[BowlingEntry::new("Pat Cummins", 100, 2, 50, 3)],
        )
        .unwrap_err();

        assert!(matches!(err, StatsError::PlayerNotFound { .. }));
        assert_eq!(store.get("Rohit Sharma").unwrap().innings_batted, Some(1));
        assert_eq!(store.get("Shubman Gill").unwrap().innings_batted, Some(1));
    }

    #[test]
    fn test_banned_player_is_not_found() {
        let mut store = store_with(&["Rohit Sharma", "Shubman Gill"]);
        store.ban_player("Shubman Gill").unwrap();

        let err = update_innings(
            &mut store,
            &[
                BattingEntry::new("Rohit Sharma", true, 26, 77, 3, 1),
                BattingEntry::new("Shubman Gill", true, 50, 101, 8, 0),
            ],
            &[],
        )
        .unwrap_err();

        assert!(matches!(err, StatsError::PlayerNotFound { ref name } if name == "Shubman Gill"));
    }

    #[test]
    fn test_empty_scorecards_are_a_no_op() {
        let mut store = store_with(&["Rohit Sharma"]);
        let summary = update_innings(&mut store, &[], &[]).unwrap();
        assert_eq!(summary, InningsSummary::default());
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut store = store_with(&["Rohit Sharma", "Shubman Gill"]);
        let dyn_store: &mut dyn PlayerStore = &mut store;

        update_innings(
            dyn_store,
            &[
                BattingEntry::new("Rohit Sharma", true, 101, 120, 12, 2),
                BattingEntry::new("Shubman Gill", true, 5, 9, 1, 0),
            ],
            &[],
        )
        .unwrap();

        assert_eq!(store.get("Rohit Sharma").unwrap().centuries, Some(1));
    }
}
