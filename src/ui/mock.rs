//! Scripted user input for testing

use super::input::{InputError, Result, UserInput};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// One prepared answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(Option<String>),
    Confirm(Option<bool>),
    Select(Option<usize>),
    MultiSelect(Option<Vec<usize>>),
}

/// Input that answers prompts from a fixed script, in order
///
/// Asking a prompt of a different kind than the next reply, or running past
/// the end of the script, is an `InputError::Invalid`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedInput {
    /// Input that answers prompts with `replies`, in order
    #[must_use]
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    /// Replies not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn next(&self, prompt: &str) -> Result<Reply> {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| InputError::Invalid(format!("no scripted reply for '{prompt}'")))
    }
}

fn mismatch(prompt: &str, reply: &Reply) -> InputError {
    InputError::Invalid(format!("unexpected reply {reply:?} for '{prompt}'"))
}

impl UserInput for ScriptedInput {
    fn prompt_text(
        &self,
        prompt: &str,
        _default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        match self.next(prompt)? {
            Reply::Text(text) => Ok(text),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt)? {
            Reply::Confirm(answer) => Ok(answer),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn prompt_select(
        &self,
        prompt: &str,
        _items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        match self.next(prompt)? {
            Reply::Select(index) => Ok(index),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn prompt_multi_select(
        &self,
        prompt: &str,
        _items: &[String],
        _checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        match self.next(prompt)? {
            Reply::MultiSelect(indices) => Ok(indices),
            other => Err(mismatch(prompt, &other)),
        }
    }
}
