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

use std::io::BufRead;
use std::io::Write;

use boxcards_core::error::Fallible;
use boxcards_core::error::fail;

/// Line-oriented console I/O. Generic over the reader and writer so tests
/// can drive the menus with scripted input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints a line of text.
    pub fn say(&mut self, text: &str) -> Fallible<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes the prompt text as-is, then reads one line of input with
    /// the trailing newline stripped. End of input is an error: every
    /// prompt in the program blocks until a line arrives.
    pub fn prompt(&mut self, text: &str) -> Fallible<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return fail("unexpected end of input");
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt_strips_newline() -> Fallible<()> {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("hello\n"), &mut output);
        let line = console.prompt("say something:")?;
        assert_eq!(line, "hello");
        assert_eq!(String::from_utf8(output).unwrap(), "say something:");
        Ok(())
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() -> Fallible<()> {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("  spaced  \r\n"), &mut output);
        let line = console.prompt("")?;
        assert_eq!(line, "  spaced  ");
        Ok(())
    }

    #[test]
    fn test_prompt_at_end_of_input_is_an_error() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);
        assert!(console.prompt("anyone there?").is_err());
    }

    #[test]
    fn test_say_appends_newline() -> Fallible<()> {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);
        console.say("Bye!")?;
        assert_eq!(String::from_utf8(output).unwrap(), "Bye!\n");
        Ok(())
    }
}
