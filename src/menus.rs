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

//! The interactive loop: main menu, add-card menu, and the state machine
//! driving them.

use std::io::BufRead;
use std::io::Write;

use boxcards_core::error::Fallible;
use boxcards_core::state::AddCardChoice;
use boxcards_core::state::MainMenuChoice;
use boxcards_core::state::State;

use crate::console::Console;
use crate::practice::practice;
use crate::store::CardStore;

const MAIN_MENU_PROMPT: &str = "1. Add flashcards\n2. Practice flashcards\n3. Exit\n";
const ADD_MENU_PROMPT: &str = "1. Add a new flashcard\n2. Exit\n";

/// Runs the interactive loop from the main menu until the End state. The
/// store is owned here so that it is released on every exit path; on a
/// normal exit it is closed from the End state.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: CardStore) -> Fallible<()> {
    let mut state = State::MainMenu;
    loop {
        log::debug!("state: {state:?}");
        state = match state {
            State::MainMenu => main_menu(console)?,
            State::AddCard => add_card(console, &store)?,
            State::Practice => practice(console, &store)?,
            State::End => break,
        };
    }
    console.say("Bye!")?;
    store.close()
}

fn main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Fallible<State> {
    let input = console.prompt(MAIN_MENU_PROMPT)?;
    let choice = MainMenuChoice::parse(&input);
    if choice.is_none() {
        console.say(&format!("{input} is not an option"))?;
    }
    Ok(State::after_main_menu(choice))
}

fn add_card<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CardStore,
) -> Fallible<State> {
    let input = console.prompt(ADD_MENU_PROMPT)?;
    let choice = AddCardChoice::parse(&input);
    match choice {
        Some(AddCardChoice::AddOne) => {
            let question = read_non_blank(console, "Question:\n")?;
            let answer = read_non_blank(console, "Answer:\n")?;
            store.create(&question, &answer)?;
        }
        Some(AddCardChoice::Back) => {}
        None => console.say(&format!("{input} is not an option"))?,
    }
    Ok(State::after_add_card(choice))
}

/// Re-prompts until a non-blank line is entered. There is no way out of
/// this loop other than giving a non-blank answer.
fn read_non_blank<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Fallible<String> {
    loop {
        let input = console.prompt(prompt)?;
        if !input.is_empty() {
            return Ok(input);
        }
    }
}
