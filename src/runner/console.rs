use super::state::{RunState, RunSummary};
use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

pub const BANNER_TITLE: &str = "🚀 Hugging Face Deployment Verification";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Status line with a pass/fail symbol
pub fn print_status(message: &str, success: bool) {
    if success {
        println!("✅ {}", message.green());
    } else {
        println!("❌ {}", message.red());
    }
}

/// Indented detail under a status line
pub fn print_detail(label: &str, value: &str) {
    println!("   {}: {}", label, value.dimmed());
}

pub fn print_banner(base_url: &str) {
    println!("{}", rule());
    println!("{}", BANNER_TITLE.bold());
    println!("   Backend URL: {}", base_url.cyan());
    println!("{}", rule());
}

pub fn print_section(number: usize, heading: &str) {
    println!("\n{}. {}...", number, heading.white().bold());
}

/// `Results: <passed>/<total> tests passed`
pub fn results_line(summary: &RunSummary) -> String {
    format!("Results: {}/{} tests passed", summary.passed, summary.total)
}

/// Results line, green only when the whole run passed
pub fn colored_results_line(summary: &RunSummary) -> ColoredString {
    let line = results_line(summary);
    if summary.all_passed() {
        line.green()
    } else {
        line.red()
    }
}

/// Closing verdict under the results line
pub fn closing_line(summary: &RunSummary) -> String {
    if summary.all_passed() {
        "All tests passed! Deployment is working correctly. 🎉".to_string()
    } else {
        format!(
            "{} test(s) failed. Check the logs above.",
            summary.not_passed()
        )
    }
}

/// Summary table, result count and closing verdict
pub fn print_summary(run: &RunState) {
    let summary = run.summary();
    let passed = summary.all_passed();

    println!("\n{}", rule());
    println!("{}", "📊 Test Summary".bold());
    println!("{}", rule());

    for probe in &run.probes {
        print_status(&probe.name, probe.status.is_passed());
    }

    println!("\n{}", rule());
    println!("{}", colored_results_line(&summary));
    if let Some(duration) = summary.total_duration_ms {
        println!("Duration: {}ms", duration);
    }

    print_status(&closing_line(&summary), passed);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(passed: u32, total: u32) -> RunSummary {
        RunSummary {
            session_id: "s".to_string(),
            total,
            passed,
            failed: total - passed,
            skipped: 0,
            total_duration_ms: None,
        }
    }

    #[test]
    fn test_results_line_all_failed() {
        assert_eq!(results_line(&summary(0, 6)), "Results: 0/6 tests passed");
    }

    #[test]
    fn test_results_line_all_passed() {
        assert_eq!(results_line(&summary(6, 6)), "Results: 6/6 tests passed");
    }

    #[test]
    fn test_results_line_passed_before_total() {
        assert_eq!(results_line(&summary(5, 6)), "Results: 5/6 tests passed");
    }

    #[test]
    fn test_results_line_color_follows_verdict() {
        assert_eq!(
            colored_results_line(&summary(6, 6)).fgcolor(),
            Some(colored::Color::Green)
        );
        assert_eq!(
            colored_results_line(&summary(5, 6)).fgcolor(),
            Some(colored::Color::Red)
        );
    }

    #[test]
    fn test_banner_title() {
        assert_eq!(BANNER_TITLE, "🚀 Hugging Face Deployment Verification");
    }

    #[test]
    fn test_closing_line() {
        assert_eq!(
            closing_line(&summary(6, 6)),
            "All tests passed! Deployment is working correctly. 🎉"
        );
        assert_eq!(
            closing_line(&summary(4, 6)),
            "2 test(s) failed. Check the logs above."
        );
        assert_eq!(
            closing_line(&summary(0, 6)),
            "6 test(s) failed. Check the logs above."
        );
    }
}
