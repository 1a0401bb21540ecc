//! Comment extraction for JavaScript-like languages.
//!
//! A character-driven state machine. Unlike the C-family tokenizer it tracks
//! both `"` and `'` string literals and honors backslash escapes inside them,
//! so `'it\'s // here'` yields no comment.
//!
//! Template literals and regex literals are not modelled: a `//` or `/*` inside
//! `` `...` `` or `/.../` is read as a comment opener.

use crate::core::{Comment, ExtractResult, UnterminatedCommentError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    SlashSeen,
    LineComment,
    BlockComment,
    BlockCommentStarSeen,
    StringLiteral { quote: char },
    StringEscape { quote: char },
}

/// What the scanner does with the character that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Skip,
    Append(char),
    /// Append the `*` held back by `BlockCommentStarSeen`, then `Some` char.
    AppendStar(Option<char>),
    OpenBlock,
    MarkBlockEnd,
    EmitLine,
    EmitBlock,
}

fn transition(state: State, ch: char) -> (State, Action) {
    match (state, ch) {
        (State::Code, '/') => (State::SlashSeen, Action::Skip),
        (State::Code, '"' | '\'') => (State::StringLiteral { quote: ch }, Action::Skip),
        (State::Code, _) => (State::Code, Action::Skip),

        (State::SlashSeen, '/') => (State::LineComment, Action::Skip),
        (State::SlashSeen, '*') => (State::BlockComment, Action::OpenBlock),
        (State::SlashSeen, _) => (State::Code, Action::Skip),

        (State::LineComment, '\n') => (State::Code, Action::EmitLine),
        (State::LineComment, _) => (State::LineComment, Action::Append(ch)),

        (State::BlockComment, '*') => (State::BlockCommentStarSeen, Action::MarkBlockEnd),
        (State::BlockComment, _) => (State::BlockComment, Action::Append(ch)),

        (State::BlockCommentStarSeen, '/') => (State::Code, Action::EmitBlock),
        (State::BlockCommentStarSeen, '*') => {
            (State::BlockCommentStarSeen, Action::AppendStar(None))
        }
        (State::BlockCommentStarSeen, _) => (State::BlockComment, Action::AppendStar(Some(ch))),

        (State::StringLiteral { quote }, _) if ch == quote => (State::Code, Action::Skip),
        (State::StringLiteral { quote }, '\\') => (State::StringEscape { quote }, Action::Skip),
        (State::StringLiteral { quote }, _) => (State::StringLiteral { quote }, Action::Skip),

        (State::StringEscape { quote }, _) => (State::StringLiteral { quote }, Action::Skip),
    }
}

/// Working state of one extraction call.
struct Scanner {
    state: State,
    line: usize,
    block_start: usize,
    block_end: usize,
    buffer: String,
    comments: Vec<Comment>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Code,
            line: 1,
            block_start: 1,
            block_end: 1,
            buffer: String::new(),
            comments: Vec::new(),
        }
    }

    fn feed(&mut self, ch: char) {
        let (next, action) = transition(self.state, ch);
        self.state = next;

        match action {
            Action::Skip => {}
            Action::Append(c) => self.buffer.push(c),
            Action::AppendStar(c) => {
                self.buffer.push('*');
                if let Some(c) = c {
                    self.buffer.push(c);
                }
            }
            Action::OpenBlock => self.block_start = self.line,
            Action::MarkBlockEnd => self.block_end = self.line,
            Action::EmitLine => {
                let content = std::mem::take(&mut self.buffer);
                self.comments.push(Comment::single_line(content, self.line));
            }
            Action::EmitBlock => {
                let content = std::mem::take(&mut self.buffer);
                self.comments.push(Comment::multi_line(
                    content,
                    self.block_start,
                    self.block_end,
                ));
            }
        }

        if ch == '\n' {
            self.line += 1;
        }
    }

    fn finish(mut self) -> ExtractResult {
        match self.state {
            State::BlockComment | State::BlockCommentStarSeen => Err(UnterminatedCommentError),
            State::LineComment => {
                // End of input terminates a trailing `//` comment.
                self.comments
                    .push(Comment::single_line(self.buffer, self.line));
                Ok(self.comments)
            }
            State::Code
            | State::SlashSeen
            | State::StringLiteral { .. }
            | State::StringEscape { .. } => Ok(self.comments),
        }
    }
}

/// Extract all comments from JavaScript source code, in document order.
///
/// # Errors
///
/// Returns [`UnterminatedCommentError`] if the input ends inside a `/* ... */`
/// comment.
pub fn extract_comments(code: &str) -> ExtractResult {
    let mut scanner = Scanner::new();
    for ch in code.chars() {
        scanner.feed(ch);
    }
    scanner.finish()
}
