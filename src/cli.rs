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

use std::io::stdin;
use std::io::stdout;

use boxcards_core::error::Fallible;
use clap::Parser;

use crate::console::Console;
use crate::menus::run;
use crate::store::CardStore;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Connection string for the card store. The file is created if it
    /// does not exist.
    #[arg(long, default_value = "flashcard.db")]
    db: String,
}

pub fn entrypoint() -> Fallible<()> {
    let cli = Cli::parse();
    let store = CardStore::open(&cli.db)?;
    let mut console = Console::new(stdin().lock(), stdout().lock());
    run(&mut console, store)
}
