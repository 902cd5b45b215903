//! Terminal interaction layer
//!
//! - **`OutputWriter`** - status messages with severity levels
//! - **`UserInput`** - prompts (text, confirmation, single and multi select)
//!
//! Commands depend on the traits only. `StdoutWriter` and `DialoguerInput`
//! back the real CLI; `BufferedWriter` and `ScriptedInput` drive the same
//! code in tests.

pub mod input;
pub mod mock;
pub mod output;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::{Reply, ScriptedInput};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
