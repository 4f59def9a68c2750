use crate::report::Reporter;
use std::io::BufRead;

/// Line-oriented question/answer loop over any `BufRead`.
///
/// Production code hands it a locked stdin; tests drive it with a `Cursor`.
pub struct Prompter<'a, R: BufRead> {
    input: R,
    reporter: &'a Reporter,
}

impl<'a, R: BufRead> Prompter<'a, R> {
    pub fn new(input: R, reporter: &'a Reporter) -> Self {
        Prompter { input, reporter }
    }

    /// Ask one question and read one line.
    ///
    /// The answer is trimmed; a blank answer falls back to `default` when one
    /// is supplied. Read errors and EOF count as blank input, so a truncated
    /// answer stream degrades to the defaults instead of aborting.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> String {
        self.reporter.prompt(question, default);

        let mut line = String::new();
        if self.input.read_line(&mut line).is_err() {
            line.clear();
        }

        let answer = line.trim();
        if answer.is_empty() {
            default.unwrap_or_default().to_string()
        } else {
            answer.to_string()
        }
    }
}
