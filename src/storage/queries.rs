//! SQLite implementations of the store traits

use super::{models::*, schema::PlayerDatabase, PlayerRegistry, PlayerStore};
use crate::cli::types::Role;
use crate::error::{Result, StatsError};
use rusqlite::{params, ErrorCode, Row};

const SELECT_PLAYER: &str = "SELECT name, country, role, matches, innings_batted, not_out,
        runs_scored, balls_faced, fours_scored, sixes_scored, high_score,
        centuries, half_centuries, innings_bowled, balls_bowled, runs_given,
        wickets_taken
 FROM players
 WHERE name = ?";

impl PlayerStore for PlayerDatabase {
    fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let mut stmt = self.conn.prepare(SELECT_PLAYER)?;

        match stmt.query_row(params![name], row_to_record) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&mut self, record: &PlayerRecord) -> Result<()> {
        // A single UPDATE keeps each player's commit atomic
        let rows_affected = self.conn.execute(
            "UPDATE players SET
                country = ?, role = ?, matches = ?, innings_batted = ?, not_out = ?,
                runs_scored = ?, balls_faced = ?, fours_scored = ?, sixes_scored = ?,
                high_score = ?, centuries = ?, half_centuries = ?, innings_bowled = ?,
                balls_bowled = ?, runs_given = ?, wickets_taken = ?
             WHERE name = ?",
            params![
                record.country,
                record.role.map(|r| r.to_string()),
                record.matches,
                record.innings_batted,
                record.not_out,
                record.runs_scored,
                record.balls_faced,
                record.fours_scored,
                record.sixes_scored,
                record.high_score,
                record.centuries,
                record.half_centuries,
                record.innings_bowled,
                record.balls_bowled,
                record.runs_given,
                record.wickets_taken,
                record.name,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StatsError::PlayerNotFound {
                name: record.name.clone(),
            });
        }
        Ok(())
    }
}

impl PlayerRegistry for PlayerDatabase {
    fn create_player(&mut self, record: &PlayerRecord) -> Result<()> {
        record.validate()?;

        let result = self.conn.execute(
            "INSERT INTO players
             (name, country, role, matches, innings_batted, not_out, runs_scored,
              balls_faced, fours_scored, sixes_scored, high_score, centuries,
              half_centuries, innings_bowled, balls_bowled, runs_given, wickets_taken)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                record.name,
                record.country,
                record.role.map(|r| r.to_string()),
                record.matches,
                record.innings_batted,
                record.not_out,
                record.runs_scored,
                record.balls_faced,
                record.fours_scored,
                record.sixes_scored,
                record.high_score,
                record.centuries,
                record.half_centuries,
                record.innings_bowled,
                record.balls_bowled,
                record.runs_given,
                record.wickets_taken,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StatsError::DuplicatePlayer {
                    name: record.name.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn ban_player(&mut self, name: &str) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM players WHERE name = ?", params![name])?;

        if rows_affected == 0 {
            return Err(StatsError::PlayerNotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Helper to convert a database row to a PlayerRecord
fn row_to_record(row: &Row) -> rusqlite::Result<PlayerRecord> {
    let role_str: Option<String> = row.get(2)?;
    let role = role_str
        .map(|s| {
            s.parse::<Role>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    2,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })
        })
        .transpose()?;

    Ok(PlayerRecord {
        name: row.get(0)?,
        country: row.get(1)?,
        role,
        matches: row.get(3)?,
        innings_batted: row.get(4)?,
        not_out: row.get(5)?,
        runs_scored: row.get(6)?,
        balls_faced: row.get(7)?,
        fours_scored: row.get(8)?,
        sixes_scored: row.get(9)?,
        high_score: row.get(10)?,
        centuries: row.get(11)?,
        half_centuries: row.get(12)?,
        innings_bowled: row.get(13)?,
        balls_bowled: row.get(14)?,
        runs_given: row.get(15)?,
        wickets_taken: row.get(16)?,
    })
}
