//! Console reporter: human-readable summary.

use std::io::IsTerminal;

use covenant_core::Outcome;

use super::Reporter;
use crate::enforcement::report::ComplianceReport;

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn symbol(&self, outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::DeterministicCompliance => "✓",
            Outcome::DeterministicViolation => "✗",
            Outcome::NoDeterministicOutcome => "⊘",
        }
    }

    fn color_start(&self, outcome: Outcome) -> &'static str {
        if !self.use_color {
            return "";
        }
        match outcome {
            Outcome::DeterministicCompliance => "\x1b[32m", // green
            Outcome::DeterministicViolation => "\x1b[31m",  // red
            Outcome::NoDeterministicOutcome => "\x1b[33m",  // yellow
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    /// Colour only when stdout is a terminal.
    fn default() -> Self {
        Self::new(std::io::stdout().is_terminal())
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &ComplianceReport) -> Result<String, String> {
        let mut output = String::new();

        output.push_str(&format!("Governance report ({})\n\n", report.timestamp()));

        for (rule, result) in report.checks() {
            let outcome = result.outcome();
            output.push_str(&format!(
                "{}{} [RULE {}] {}{}: {}\n    {}\n",
                self.color_start(outcome),
                self.symbol(outcome),
                rule.number(),
                rule,
                self.color_end(),
                outcome,
                result.message(),
            ));
        }

        let compliant = report
            .checks()
            .iter()
            .filter(|(_, r)| r.outcome().is_compliant())
            .count();
        output.push_str(&format!(
            "\n─── Summary: {compliant}/{} rules compliant ───\n",
            report.checks().len()
        ));
        output.push_str(&format!("FINAL OUTCOME: {}\n", report.outcome()));

        Ok(output)
    }
}
