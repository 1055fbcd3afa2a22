// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use boxcards_core::error::ErrorReport;
use boxcards_core::error::Fallible;
use boxcards_core::types::box_number::BoxNumber;
use boxcards_core::types::card::CardId;
use boxcards_core::types::card::Flashcard;
use rusqlite::Connection;
use rusqlite::params;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS flashcard (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    box_number INTEGER NOT NULL DEFAULT 1
);
";

/// The card store: one SQLite table behind one connection, opened once at
/// startup and closed once at shutdown. Every mutation commits
/// immediately; no transaction spans more than one card.
pub struct CardStore {
    conn: Connection,
}

fn sql_error(e: rusqlite::Error) -> ErrorReport {
    ErrorReport::new(format!("database error: {e}"))
}

impl CardStore {
    /// Opens the database at `db`, creating the table if needed. The
    /// rusqlite `:memory:` connection string is accepted.
    pub fn open(db: &str) -> Fallible<CardStore> {
        let conn = Connection::open(db).map_err(sql_error)?;
        conn.execute_batch(SCHEMA).map_err(sql_error)?;
        log::debug!("opened card store at {db}");
        Ok(CardStore { conn })
    }

    /// Inserts a new card in the first box and returns it with its
    /// store-assigned id.
    pub fn create(&self, question: &str, answer: &str) -> Fallible<Flashcard> {
        self.conn
            .execute(
                "INSERT INTO flashcard (question, answer, box_number) VALUES (?1, ?2, ?3)",
                params![question, answer, BoxNumber::FIRST.get()],
            )
            .map_err(sql_error)?;
        let id = CardId::new(self.conn.last_insert_rowid());
        log::debug!("created card {id}");
        Ok(Flashcard {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            box_number: BoxNumber::FIRST,
        })
    }

    /// Every stored card, in id order. Stable within a session.
    pub fn list_all(&self) -> Fallible<Vec<Flashcard>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, question, answer, box_number FROM flashcard ORDER BY id")
            .map_err(sql_error)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })
            .map_err(sql_error)?;
        let mut cards = Vec::new();
        for row in rows {
            let (id, question, answer, box_number) = row.map_err(sql_error)?;
            cards.push(Flashcard {
                id: CardId::new(id),
                question,
                answer,
                box_number: BoxNumber::new(box_number)?,
            });
        }
        Ok(cards)
    }

    /// Persists the card's question, answer, and box number.
    pub fn update(&self, card: &Flashcard) -> Fallible<()> {
        self.conn
            .execute(
                "UPDATE flashcard SET question = ?1, answer = ?2, box_number = ?3 WHERE id = ?4",
                params![
                    card.question,
                    card.answer,
                    card.box_number.get(),
                    card.id.into_inner()
                ],
            )
            .map_err(sql_error)?;
        log::debug!("updated card {}", card.id);
        Ok(())
    }

    /// Removes the card permanently.
    pub fn delete(&self, card: &Flashcard) -> Fallible<()> {
        self.conn
            .execute(
                "DELETE FROM flashcard WHERE id = ?1",
                params![card.id.into_inner()],
            )
            .map_err(sql_error)?;
        log::debug!("deleted card {}", card.id);
        Ok(())
    }

    /// Closes the connection. Called exactly once, from the End state.
    pub fn close(self) -> Fallible<()> {
        log::debug!("closing card store");
        self.conn.close().map_err(|(_, e)| sql_error(e))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_create_starts_in_first_box() -> Fallible<()> {
        let store = CardStore::open(":memory:")?;
        let card = store.create("2+2?", "4")?;
        assert_eq!(card.question, "2+2?");
        assert_eq!(card.answer, "4");
        assert_eq!(card.box_number, BoxNumber::FIRST);
        let cards = store.list_all()?;
        assert_eq!(cards, vec![card]);
        Ok(())
    }

    #[test]
    fn test_list_all_is_in_insertion_order() -> Fallible<()> {
        let store = CardStore::open(":memory:")?;
        let first = store.create("q1", "a1")?;
        let second = store.create("q2", "a2")?;
        assert_eq!(store.list_all()?, vec![first, second]);
        Ok(())
    }

    #[test]
    fn test_update_persists_exact_values() -> Fallible<()> {
        let store = CardStore::open(":memory:")?;
        let mut card = store.create("old question", "old answer")?;
        card.question = "new question".to_string();
        card.answer = "new answer".to_string();
        store.update(&card)?;
        let cards = store.list_all()?;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "new question");
        assert_eq!(cards[0].answer, "new answer");
        assert_eq!(cards[0].box_number, BoxNumber::FIRST);
        Ok(())
    }

    #[test]
    fn test_update_box_number() -> Fallible<()> {
        let store = CardStore::open(":memory:")?;
        let mut card = store.create("q", "a")?;
        card.box_number = BoxNumber::new(3)?;
        store.update(&card)?;
        assert_eq!(store.list_all()?[0].box_number, BoxNumber::new(3)?);
        Ok(())
    }

    #[test]
    fn test_delete_removes_from_listing() -> Fallible<()> {
        let store = CardStore::open(":memory:")?;
        let keep = store.create("keep", "me")?;
        let gone = store.create("delete", "me")?;
        store.delete(&gone)?;
        assert_eq!(store.list_all()?, vec![keep]);
        Ok(())
    }

    /// Cards survive closing and reopening a file-backed store.
    #[test]
    fn test_reopen() -> Fallible<()> {
        let dir = tempdir()?;
        let db = dir.path().join("cards.db");
        let db = db.to_str().unwrap();

        let store = CardStore::open(db)?;
        store.create("persistent?", "yes")?;
        store.close()?;

        let store = CardStore::open(db)?;
        let cards = store.list_all()?;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "persistent?");
        Ok(())
    }
}
