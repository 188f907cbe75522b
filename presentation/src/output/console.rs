//! Console output formatter for command results

use super::report::{CommandReport, ErrorReport};
use colored::Colorize;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off; when enabled, terminal detection decides
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a successful result as human-readable text
    pub fn format(report: &CommandReport) -> String {
        match report {
            CommandReport::Ask { question, answer } => format!(
                "{} {}\n{} {}",
                "Q:".bold(),
                question,
                "A:".cyan().bold(),
                answer.as_str().green().bold()
            ),
            CommandReport::Fibonacci { n, terms } => {
                if terms.is_empty() {
                    format!("{} (none)", Self::label(&format!("First {n} Fibonacci numbers:")))
                } else {
                    format!(
                        "{}\n{}",
                        Self::label(&format!("First {n} Fibonacci numbers:")),
                        Self::join(terms)
                    )
                }
            }
            CommandReport::Primes { input, primes } => {
                let found = if primes.is_empty() {
                    "(none)".dimmed().to_string()
                } else {
                    Self::join(primes)
                };
                format!(
                    "{} {} of {}\n{}",
                    Self::label("Primes:"),
                    primes.len(),
                    input.len(),
                    found
                )
            }
            CommandReport::Hcf { input, hcf } => format!(
                "{} {} = {}",
                Self::label("HCF"),
                Self::join(input).dimmed(),
                hcf.to_string().green().bold()
            ),
            CommandReport::Lcm { input, lcm } => format!(
                "{} {} = {}",
                Self::label("LCM"),
                Self::join(input).dimmed(),
                lcm.to_string().green().bold()
            ),
        }
    }

    /// Format as JSON
    pub fn format_json(report: &CommandReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an error as text
    pub fn format_error(error: &ErrorReport) -> String {
        format!("{} {}", "Error:".red().bold(), error.message)
    }

    /// Format an error as JSON
    pub fn format_error_json(error: &ErrorReport) -> String {
        serde_json::json!({ "error": error }).to_string()
    }

    fn label(text: &str) -> String {
        text.cyan().bold().to_string()
    }

    fn join<T: ToString>(values: &[T]) -> String {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneword_domain::Answer;
    use serde_json::Value;

    #[test]
    fn test_format_ask() {
        colored::control::set_override(false);
        let report = CommandReport::Ask {
            question: "Capital of France?".to_string(),
            answer: Answer::from_reply("Paris.").unwrap(),
        };
        assert_eq!(
            ConsoleFormatter::format(&report),
            "Q: Capital of France?\nA: Paris"
        );
    }

    #[test]
    fn test_format_fibonacci() {
        colored::control::set_override(false);
        let report = CommandReport::Fibonacci {
            n: 5,
            terms: vec![0, 1, 1, 2, 3],
        };
        assert_eq!(
            ConsoleFormatter::format(&report),
            "First 5 Fibonacci numbers:\n0, 1, 1, 2, 3"
        );
    }

    #[test]
    fn test_format_lcm() {
        colored::control::set_override(false);
        let report = CommandReport::Lcm {
            input: vec![4, 6],
            lcm: 12,
        };
        assert_eq!(ConsoleFormatter::format(&report), "LCM 4, 6 = 12");
    }

    #[test]
    fn test_format_json_is_tagged() {
        let report = CommandReport::Hcf {
            input: vec![12, 18],
            hcf: 6,
        };
        let value: Value = serde_json::from_str(&ConsoleFormatter::format_json(&report)).unwrap();
        assert_eq!(value["command"], "hcf");
        assert_eq!(value["hcf"], 6);
        assert_eq!(value["input"], serde_json::json!([12, 18]));
    }

    #[test]
    fn test_ask_json_has_plain_answer() {
        let report = CommandReport::Ask {
            question: "Sky?".to_string(),
            answer: Answer::from_reply("blue sky today").unwrap(),
        };
        let value: Value = serde_json::from_str(&ConsoleFormatter::format_json(&report)).unwrap();
        assert_eq!(value["command"], "ask");
        assert_eq!(value["answer"], "blue");
    }

    #[test]
    fn test_format_error_json() {
        let error = ErrorReport::new("rate_limit", "AI service rate limit exceeded");
        let value: Value =
            serde_json::from_str(&ConsoleFormatter::format_error_json(&error)).unwrap();
        assert_eq!(value["error"]["kind"], "rate_limit");
        assert_eq!(value["error"]["message"], "AI service rate limit exceeded");
    }
}
