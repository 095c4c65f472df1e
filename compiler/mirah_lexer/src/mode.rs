//! Lexing sub-modes and the mode stack.
//!
//! The stack is an owned vector of value frames. The bottom frame is always
//! [`Mode::Code`] and is never popped; strings, regexes, heredocs and
//! interpolations push frames above it.
//!
//! Each frame counts the `{` it has seen. A `}` at depth zero in a pushed
//! frame closes that frame (the `}` ending `#{...}`); at the bottom it is an
//! ordinary unbalanced brace and the depth stays at zero.

use std::collections::VecDeque;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

/// A heredoc whose marker has been scanned but whose body has not started.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Heredoc {
    /// Terminator text.
    pub marker: Arc<str>,
    /// `<<-`: the terminator may be preceded by blanks.
    pub indented: bool,
    /// `#{...}` and `#@var` are live in the body (not `<<'EOS'`).
    pub interpolate: bool,
}

/// One lexing sub-mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plain code.
    Code,
    /// Plain code for exactly one token, then pop (`#@var`).
    CodeOnce,
    /// Inside `'...'`.
    SingleQuoted,
    /// Inside `"..."`.
    DoubleQuoted,
    /// Inside `/.../`.
    Regex,
    /// Inside a heredoc body.
    Heredoc(Heredoc),
}

impl Mode {
    /// Code modes lex whitespace and comments as trivia.
    pub fn is_code(&self) -> bool {
        matches!(self, Mode::Code | Mode::CodeOnce)
    }
}

/// A mode plus its brace depth and its pending heredocs.
///
/// Queued heredocs belong to their frame. If the frame is popped before the
/// end of its line (`"#{<<A}"`), the queued bodies are dropped and the lines
/// that follow lex as code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    pub mode: Mode,
    pub brace_depth: u32,
    pub heredocs: VecDeque<Heredoc>,
}

impl Frame {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            brace_depth: 0,
            heredocs: VecDeque::new(),
        }
    }
}

/// Stack of frames, bottom first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModeStack {
    frames: SmallVec<[Frame; 4]>,
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeStack {
    /// A stack holding only the bottom code frame.
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame::new(Mode::Code));
        Self { frames }
    }

    /// A bottom code frame with a preset brace depth.
    pub(crate) fn with_brace_depth(brace_depth: u32) -> Self {
        let mut stack = Self::new();
        stack.top_mut().brace_depth = brace_depth;
        stack
    }

    /// Number of frames, including the bottom one.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The active frame.
    pub fn top(&self) -> &Frame {
        // The bottom frame is never removed.
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// The active mode.
    pub fn mode(&self) -> &Mode {
        &self.top().mode
    }

    /// Only the bottom frame, no pending heredocs, and a brace depth that
    /// fits a compact snapshot.
    pub(crate) fn is_trivial(&self, max_depth: u32) -> bool {
        self.frames.len() == 1 && self.top().heredocs.is_empty() && self.top().brace_depth < max_depth
    }

    pub(crate) fn push(&mut self, mode: Mode) {
        trace!(depth = self.frames.len(), mode = ?mode, "push mode");
        self.frames.push(Frame::new(mode));
    }

    /// Pop the active frame. The bottom frame stays.
    pub(crate) fn pop(&mut self) {
        if self.frames.len() > 1 {
            let Some(frame) = self.frames.pop() else {
                return;
            };
            if !frame.heredocs.is_empty() {
                trace!(
                    dropped = frame.heredocs.len(),
                    "popped frame with queued heredocs"
                );
            }
            trace!(depth = self.frames.len(), mode = ?frame.mode, "pop mode");
        }
    }

    /// Remove the one-shot frame at `index` once its token is done.
    ///
    /// Only a [`Mode::CodeOnce`] frame at that index is removed, so a frame
    /// that already closed itself is not popped twice.
    pub(crate) fn finish_one_shot(&mut self, index: usize) {
        if index > 0 && self.frames.get(index).is_some_and(|f| f.mode == Mode::CodeOnce) {
            self.frames.remove(index);
            trace!(index, "one-shot mode done");
        }
    }

    pub(crate) fn lbrace(&mut self) {
        self.top_mut().brace_depth += 1;
    }

    /// Account for a `}`. Returns `true` if it closed a pushed frame.
    pub(crate) fn rbrace(&mut self) -> bool {
        let top = self.top_mut();
        if top.brace_depth > 0 {
            top.brace_depth -= 1;
            false
        } else if self.frames.len() > 1 {
            self.pop();
            true
        } else {
            false
        }
    }

    /// Queue a heredoc on the active frame.
    pub(crate) fn queue_heredoc(&mut self, heredoc: Heredoc) {
        self.top_mut().heredocs.push_back(heredoc);
    }

    /// Take the next queued heredoc of the active frame.
    pub(crate) fn take_heredoc(&mut self) -> Option<Heredoc> {
        self.top_mut().heredocs.pop_front()
    }

    pub fn has_pending_heredoc(&self) -> bool {
        !self.top().heredocs.is_empty()
    }
}

#[cfg(test)]
mod tests;
