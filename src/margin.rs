//! Interactive margin configuration
//!
//! Collects the four page margins (in inches) from the user, one prompt per
//! side, then asks for a single yes/no confirmation. The four values are
//! committed together or not at all.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Page margins in inches, as entered by the user.
///
/// All four sides are always populated; there is no relationship between
/// them and no bounds checking (negative margins are accepted as typed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 0.75,
            bottom: 0.75,
            left: 0.5,
            right: 0.5,
        }
    }
}

impl fmt::Display for Margin {
    /// Summary form used in the confirmation prompt: "top bottom left right"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.top, self.bottom, self.left, self.right
        )
    }
}

impl Margin {
    /// Walk the user through the four margin values, then ask for
    /// confirmation.
    ///
    /// Each prompt shows the current value in parentheses and an empty
    /// response keeps it. The candidate values are collected first and
    /// committed wholesale only when the confirmation answer equals "yes"
    /// (case-insensitive; an empty answer defaults to "yes"). Any other
    /// answer returns the original margins untouched.
    ///
    /// A response that is neither empty nor a well-formed number aborts the
    /// whole attempt with [`Error::InvalidNumber`]; there is no retry.
    pub fn prompt<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Margin> {
        writeln!(out, "This utility will walk you through setting the page margins.")?;
        writeln!(out)?;
        writeln!(out, "Press ^C at any time to quit.")?;

        // Collect all four candidates before touching the result, so a
        // rejected confirmation cannot leave a partial update behind.
        let candidate = Margin {
            top: prompt_number(input, out, "margin top:", self.top)?,
            bottom: prompt_number(input, out, "margin bottom:", self.bottom)?,
            left: prompt_number(input, out, "margin left:", self.left)?,
            right: prompt_number(input, out, "margin right:", self.right)?,
        };

        writeln!(out, "The margin will be {}", candidate)?;
        writeln!(out)?;

        let confirmation = prompt_line(input, out, "Is this OK?", "yes")?;
        if confirmation.eq_ignore_ascii_case("yes") {
            Ok(candidate)
        } else {
            Ok(*self)
        }
    }
}

/// Ask a question showing the default in parentheses; an empty response
/// yields the default.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default: &str,
) -> Result<String> {
    write!(out, "{} ({}) ", question, default)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Numeric variant of [`prompt_line`]. A non-empty response must parse as a
/// real number; sign and magnitude are not checked.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default: f64,
) -> Result<f64> {
    let answer = prompt_line(input, out, question, &default.to_string())?;
    answer
        .parse()
        .map_err(|_| Error::InvalidNumber(answer.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drive a prompt session with canned input, discarding the transcript
    fn run(current: Margin, input: &str) -> Result<Margin> {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut sink = Vec::new();
        current.prompt(&mut reader, &mut sink)
    }

    /// Drive a prompt session and return the transcript as well
    fn run_with_transcript(current: Margin, input: &str) -> (Result<Margin>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut sink = Vec::new();
        let result = current.prompt(&mut reader, &mut sink);
        (result, String::from_utf8(sink).unwrap())
    }

    #[test]
    fn test_default_values() {
        let margin = Margin::default();
        assert_eq!(margin.top, 0.75);
        assert_eq!(margin.bottom, 0.75);
        assert_eq!(margin.left, 0.5);
        assert_eq!(margin.right, 0.5);
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(Margin::default().to_string(), "0.75 0.75 0.5 0.5");

        let margin = Margin {
            top: 1.0,
            bottom: 0.75,
            left: 0.5,
            right: 0.25,
        };
        assert_eq!(margin.to_string(), "1 0.75 0.5 0.25");
    }

    #[test]
    fn test_all_prompts_empty_keeps_defaults() {
        let result = run(Margin::default(), "\n\n\n\n\n").unwrap();
        assert_eq!(result, Margin::default());
    }

    #[test]
    fn test_empty_responses_keep_arbitrary_current_values() {
        let current = Margin {
            top: 1.25,
            bottom: 0.1,
            left: 2.0,
            right: 0.0,
        };
        let result = run(current, "\n\n\n\n\n").unwrap();
        assert_eq!(result, current);
    }

    #[test]
    fn test_single_override_commits_with_empty_confirmation() {
        // top="1.0", others empty, confirmation empty (defaults to "yes")
        let result = run(Margin::default(), "1.0\n\n\n\n\n").unwrap();
        assert_eq!(
            result,
            Margin {
                top: 1.0,
                bottom: 0.75,
                left: 0.5,
                right: 0.5,
            }
        );
    }

    #[test]
    fn test_rejected_confirmation_discards_all_four() {
        let original = Margin::default();
        let result = run(original, "1\n2\n3\n4\nno\n").unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn test_confirmation_is_case_insensitive() {
        for answer in ["yes", "Yes", "YES", "yEs"] {
            let input = format!("1\n2\n3\n4\n{}\n", answer);
            let result = run(Margin::default(), &input).unwrap();
            assert_eq!(
                result,
                Margin {
                    top: 1.0,
                    bottom: 2.0,
                    left: 3.0,
                    right: 4.0,
                },
                "answer {:?} should commit",
                answer
            );
        }
    }

    #[test]
    fn test_near_miss_answers_do_not_commit() {
        // Only the literal "yes" commits; "y" and "yeah" are rejections
        for answer in ["y", "yeah", "no", "ok", "yes please"] {
            let input = format!("1\n2\n3\n4\n{}\n", answer);
            let result = run(Margin::default(), &input).unwrap();
            assert_eq!(
                result,
                Margin::default(),
                "answer {:?} should leave the margins unchanged",
                answer
            );
        }
    }

    #[test]
    fn test_empty_confirmation_commits() {
        // Pressing enter at "Is this OK?" defaults to "yes" and commits.
        let result = run(Margin::default(), "1\n2\n3\n4\n\n").unwrap();
        assert_eq!(
            result,
            Margin {
                top: 1.0,
                bottom: 2.0,
                left: 3.0,
                right: 4.0,
            }
        );
    }

    #[test]
    fn test_malformed_number_aborts() {
        let result = run(Margin::default(), "abc\n\n\n\n\n");
        match result {
            Err(Error::InvalidNumber(s)) => assert_eq!(s, "abc"),
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_later_response_aborts() {
        let result = run(Margin::default(), "1.0\n0.75\nwide\n\n\n");
        assert!(matches!(result, Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn test_no_bounds_checking() {
        // Negative and oversized values pass straight through
        let result = run(Margin::default(), "-1\n100\n0\n2.5e1\n\n").unwrap();
        assert_eq!(
            result,
            Margin {
                top: -1.0,
                bottom: 100.0,
                left: 0.0,
                right: 25.0,
            }
        );
    }

    #[test]
    fn test_prompts_show_current_values() {
        let current = Margin {
            top: 1.25,
            bottom: 0.75,
            left: 0.5,
            right: 0.5,
        };
        let (_, transcript) = run_with_transcript(current, "\n\n\n\n\n");
        assert!(transcript.contains("margin top: (1.25) "));
        assert!(transcript.contains("margin bottom: (0.75) "));
        assert!(transcript.contains("margin left: (0.5) "));
        assert!(transcript.contains("margin right: (0.5) "));
        assert!(transcript.contains("Is this OK? (yes) "));
    }

    #[test]
    fn test_summary_shows_candidate_values() {
        let (_, transcript) = run_with_transcript(Margin::default(), "1\n2\n3\n4\nno\n");
        assert!(transcript.contains("The margin will be 1 2 3 4"));
    }
}
