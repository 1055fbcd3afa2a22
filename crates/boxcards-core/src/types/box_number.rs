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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// The lowest Leitner box.
pub const MIN_BOX: i64 = 1;

/// The highest Leitner box. A correct answer here graduates the card.
pub const MAX_BOX: i64 = 3;

/// A card's Leitner box, always within `[MIN_BOX, MAX_BOX]`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BoxNumber(i64);

impl BoxNumber {
    /// The box every card starts in.
    pub const FIRST: BoxNumber = BoxNumber(MIN_BOX);

    pub fn new(n: i64) -> Fallible<Self> {
        Self::try_from(n)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Whether this is the highest box.
    pub fn is_top(self) -> bool {
        self.0 == MAX_BOX
    }

    /// The next box up, saturating at the top.
    pub fn promoted(self) -> BoxNumber {
        BoxNumber(i64::min(self.0 + 1, MAX_BOX))
    }

    /// The next box down, saturating at the bottom.
    pub fn demoted(self) -> BoxNumber {
        BoxNumber(i64::max(self.0 - 1, MIN_BOX))
    }
}

impl Display for BoxNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for BoxNumber {
    type Error = ErrorReport;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_BOX..=MAX_BOX).contains(&value) {
            Ok(BoxNumber(value))
        } else {
            Err(ErrorReport::new(format!("box number out of range: {value}")))
        }
    }
}

impl From<BoxNumber> for i64 {
    fn from(value: BoxNumber) -> i64 {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_bounds() {
        for n in MIN_BOX..=MAX_BOX {
            assert!(BoxNumber::new(n).is_ok());
        }
        for n in [0, -1, 4, 100] {
            assert!(BoxNumber::new(n).is_err());
        }
    }

    #[test]
    fn test_first_is_min() {
        assert_eq!(BoxNumber::FIRST.get(), MIN_BOX);
    }

    /// Promotion and demotion saturate at the bounds.
    #[test]
    fn test_saturation() -> Fallible<()> {
        assert_eq!(BoxNumber::new(MAX_BOX)?.promoted().get(), MAX_BOX);
        assert_eq!(BoxNumber::new(MIN_BOX)?.demoted().get(), MIN_BOX);
        assert_eq!(BoxNumber::new(2)?.promoted().get(), 3);
        assert_eq!(BoxNumber::new(2)?.demoted().get(), 1);
        Ok(())
    }

    #[test]
    fn test_is_top() -> Fallible<()> {
        assert!(BoxNumber::new(3)?.is_top());
        assert!(!BoxNumber::new(2)?.is_top());
        assert!(!BoxNumber::FIRST.is_top());
        Ok(())
    }

    #[test]
    fn test_serialization_format() -> Fallible<()> {
        let b = BoxNumber::new(2)?;
        assert_eq!(serde_json::to_string(&b)?, "2");
        Ok(())
    }

    #[test]
    fn test_deserialization_rejects_out_of_range() {
        let result: Result<BoxNumber, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }
}
