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

//! The menu state machine: states, menu choices, and pure transitions.
//!
//! The interactive loop in the binary matches on `State`, runs the
//! corresponding menu, and feeds the parsed choice back through the
//! transition functions here. Since the `match` over `State` is
//! exhaustive, there is no "unknown state" fallback to represent.

/// A state of the interactive loop. `End` is the sole terminal state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    MainMenu,
    AddCard,
    Practice,
    End,
}

/// A choice at the main menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MainMenuChoice {
    AddCards,
    Practice,
    Exit,
}

impl MainMenuChoice {
    pub fn parse(input: &str) -> Option<MainMenuChoice> {
        match input {
            "1" => Some(MainMenuChoice::AddCards),
            "2" => Some(MainMenuChoice::Practice),
            "3" => Some(MainMenuChoice::Exit),
            _ => None,
        }
    }
}

/// A choice at the add-card menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddCardChoice {
    AddOne,
    Back,
}

impl AddCardChoice {
    pub fn parse(input: &str) -> Option<AddCardChoice> {
        match input {
            "1" => Some(AddCardChoice::AddOne),
            "2" => Some(AddCardChoice::Back),
            _ => None,
        }
    }
}

/// An action on a card during a review pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PracticeAction {
    /// Show the answer, then grade.
    Reveal,
    /// Grade without seeing the answer. Ends the pass after this card.
    SkipAndGrade,
    /// Open the edit menu for this card.
    Edit,
}

impl PracticeAction {
    pub fn parse(input: &str) -> Option<PracticeAction> {
        match input {
            "y" => Some(PracticeAction::Reveal),
            "n" => Some(PracticeAction::SkipAndGrade),
            "u" => Some(PracticeAction::Edit),
            _ => None,
        }
    }
}

/// A choice at the edit menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditChoice {
    Delete,
    Edit,
}

impl EditChoice {
    pub fn parse(input: &str) -> Option<EditChoice> {
        match input {
            "d" => Some(EditChoice::Delete),
            "e" => Some(EditChoice::Edit),
            _ => None,
        }
    }
}

impl State {
    /// Transition out of the main menu. An unrecognized choice stays put.
    pub fn after_main_menu(choice: Option<MainMenuChoice>) -> State {
        match choice {
            Some(MainMenuChoice::AddCards) => State::AddCard,
            Some(MainMenuChoice::Practice) => State::Practice,
            Some(MainMenuChoice::Exit) => State::End,
            None => State::MainMenu,
        }
    }

    /// Transition out of the add-card menu. Adding a card stays in the
    /// menu, as does an unrecognized choice.
    pub fn after_add_card(choice: Option<AddCardChoice>) -> State {
        match choice {
            Some(AddCardChoice::Back) => State::MainMenu,
            Some(AddCardChoice::AddOne) | None => State::AddCard,
        }
    }

    /// A review pass always returns to the main menu, whatever happened.
    pub fn after_practice() -> State {
        State::MainMenu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The main menu transition table, including invalid input.
    #[test]
    fn test_main_menu_transitions() {
        let cases = [
            ("1", State::AddCard),
            ("2", State::Practice),
            ("3", State::End),
            ("4", State::MainMenu),
            ("", State::MainMenu),
            ("one", State::MainMenu),
        ];
        for (input, expected) in cases {
            assert_eq!(State::after_main_menu(MainMenuChoice::parse(input)), expected);
        }
    }

    /// The add-card menu transition table, including invalid input.
    #[test]
    fn test_add_card_transitions() {
        let cases = [
            ("1", State::AddCard),
            ("2", State::MainMenu),
            ("3", State::AddCard),
            ("", State::AddCard),
        ];
        for (input, expected) in cases {
            assert_eq!(State::after_add_card(AddCardChoice::parse(input)), expected);
        }
    }

    #[test]
    fn test_practice_returns_to_main_menu() {
        assert_eq!(State::after_practice(), State::MainMenu);
    }

    #[test]
    fn test_practice_action_tokens() {
        assert_eq!(PracticeAction::parse("y"), Some(PracticeAction::Reveal));
        assert_eq!(PracticeAction::parse("n"), Some(PracticeAction::SkipAndGrade));
        assert_eq!(PracticeAction::parse("u"), Some(PracticeAction::Edit));
        assert_eq!(PracticeAction::parse("q"), None);
    }

    #[test]
    fn test_edit_choice_tokens() {
        assert_eq!(EditChoice::parse("d"), Some(EditChoice::Delete));
        assert_eq!(EditChoice::parse("e"), Some(EditChoice::Edit));
        assert_eq!(EditChoice::parse("x"), None);
    }
}
