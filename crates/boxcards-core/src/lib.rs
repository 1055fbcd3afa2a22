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

//! boxcards-core: Core library for the boxcards flashcard trainer.
//!
//! This library provides the I/O-free parts of the program:
//! - The Leitner box update rule
//! - Card and box number types
//! - The menu state machine and its transition functions

pub mod error;
pub mod leitner;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use leitner::{BoxUpdate, Grade, next_box};
pub use state::{AddCardChoice, EditChoice, MainMenuChoice, PracticeAction, State};
pub use types::box_number::BoxNumber;
pub use types::card::{CardId, Flashcard};
