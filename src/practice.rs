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

//! The review session and the per-card edit menu.

use std::io::BufRead;
use std::io::Write;

use boxcards_core::error::Fallible;
use boxcards_core::leitner::BoxUpdate;
use boxcards_core::leitner::Grade;
use boxcards_core::leitner::next_box;
use boxcards_core::state::EditChoice;
use boxcards_core::state::PracticeAction;
use boxcards_core::state::State;
use boxcards_core::types::card::Flashcard;

use crate::console::Console;
use crate::store::CardStore;

const PRACTICE_PROMPT: &str =
    "press \"y\" to see the answer:\npress \"n\" to skip:\npress \"u\" to update:";
const GRADE_PROMPT: &str =
    "press \"y\" if your answer is correct:\npress \"n\" if your answer is wrong:";
const EDIT_PROMPT: &str =
    "press \"d\" to delete the flashcard:\npress \"e\" to edit the flashcard:";

/// Runs one review pass over every stored card, in listing order. Always
/// returns to the main menu, whether the pass completed or ended early.
pub fn practice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CardStore,
) -> Fallible<State> {
    let cards = store.list_all()?;
    if cards.is_empty() {
        console.say("There is no flashcard to practice!")?;
        return Ok(State::after_practice());
    }
    for card in cards {
        console.say(&format!("Question: {}", card.question))?;
        let input = console.prompt(PRACTICE_PROMPT)?;
        match PracticeAction::parse(&input) {
            Some(PracticeAction::Reveal) => {
                console.say(&format!("Answer: {}", card.answer))?;
                grade_card(console, store, card)?;
            }
            Some(PracticeAction::SkipAndGrade) => {
                // Grades the current card without revealing the answer,
                // then ends the whole pass, not just this card. Preserved
                // from the original behavior.
                grade_card(console, store, card)?;
                break;
            }
            Some(PracticeAction::Edit) => edit_menu(console, store, card)?,
            None => {
                console.say(&format!("There is no option {input}"))?;
                break;
            }
        }
    }
    Ok(State::after_practice())
}

/// Asks for a correctness grade until a valid one is given, then applies
/// the Leitner rule and persists the outcome. Graduated cards are deleted.
fn grade_card<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CardStore,
    card: Flashcard,
) -> Fallible<()> {
    let grade = loop {
        let input = console.prompt(GRADE_PROMPT)?;
        let input = input.trim();
        match Grade::parse(input) {
            Some(grade) => break grade,
            None => console.say(&format!("{input} is not an option!"))?,
        }
    };
    match next_box(card.box_number, grade) {
        BoxUpdate::Move(new_box) => {
            let card = Flashcard {
                box_number: new_box,
                ..card
            };
            store.update(&card)
        }
        BoxUpdate::Graduate => store.delete(&card),
    }
}

/// Lets the user delete the card or overwrite its text. Loops until one of
/// the two is chosen. Unlike creation, the new text is not validated and
/// may be blank; the box number is untouched.
fn edit_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CardStore,
    card: Flashcard,
) -> Fallible<()> {
    loop {
        let input = console.prompt(EDIT_PROMPT)?;
        match EditChoice::parse(&input) {
            Some(EditChoice::Delete) => return store.delete(&card),
            Some(EditChoice::Edit) => {
                console.say(&format!("current question: {}", card.question))?;
                let question = console.prompt("please write a new question:")?;
                console.say(&format!("current answer: {}", card.answer))?;
                let answer = console.prompt("please write a new answer:")?;
                let card = Flashcard {
                    question,
                    answer,
                    ..card
                };
                return store.update(&card);
            }
            None => console.say(&format!("There is no option {input}"))?,
        }
    }
}
