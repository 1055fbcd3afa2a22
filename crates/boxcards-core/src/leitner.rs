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

//! The Leitner box update rule.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;
use crate::types::box_number::BoxNumber;

/// The user's self-reported recall of a card.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Grade {
    Correct,
    Wrong,
}

impl Grade {
    /// Parses a console token: `y` is correct, `n` is wrong.
    pub fn parse(input: &str) -> Option<Grade> {
        match input {
            "y" => Some(Grade::Correct),
            "n" => Some(Grade::Wrong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Grade::Correct => "correct",
            Grade::Wrong => "wrong",
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "correct" => Ok(Grade::Correct),
            "wrong" => Ok(Grade::Wrong),
            _ => fail(format!("invalid grade string: {value}")),
        }
    }
}

/// The outcome of grading a card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoxUpdate {
    /// The card moves to this box.
    Move(BoxNumber),
    /// The card leaves the deck: it was answered correctly in the top box.
    Graduate,
}

/// The Leitner update rule. Correct answers promote a card by one box,
/// wrong answers demote it by one box, and a correct answer in the top box
/// graduates it. The result never leaves `[MIN_BOX, MAX_BOX]`.
pub fn next_box(current: BoxNumber, grade: Grade) -> BoxUpdate {
    match grade {
        Grade::Correct => {
            if current.is_top() {
                BoxUpdate::Graduate
            } else {
                BoxUpdate::Move(current.promoted())
            }
        }
        Grade::Wrong => BoxUpdate::Move(current.demoted()),
    }
}
