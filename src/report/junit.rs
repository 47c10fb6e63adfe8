use super::types::VerificationResults;
use crate::runner::state::{ProbeStateReport, ProbeStatus};
use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use std::path::Path;

fn seconds(ms: u64) -> String {
    (ms as f64 / 1000.0).to_string()
}

/// Generate JUnit XML report string from VerificationResults
pub fn generate_junit_xml(results: &VerificationResults) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let summary = &results.summary;
    let total = summary.total.to_string();
    let failures = summary.failed.to_string();
    let skipped = summary.skipped.to_string();
    let time = seconds(summary.total_duration_ms.unwrap_or(0));

    let mut suites_start = BytesStart::new("testsuites");
    suites_start.push_attribute(("name", "deploy-verifier-run"));
    suites_start.push_attribute(("tests", total.as_str()));
    suites_start.push_attribute(("failures", failures.as_str()));
    suites_start.push_attribute(("skipped", skipped.as_str()));
    suites_start.push_attribute(("time", time.as_str()));
    writer.write_event(Event::Start(suites_start))?;

    // One suite per backend
    let mut suite_start = BytesStart::new("testsuite");
    suite_start.push_attribute(("name", results.base_url.as_str()));
    suite_start.push_attribute(("tests", total.as_str()));
    suite_start.push_attribute(("failures", failures.as_str()));
    suite_start.push_attribute(("skipped", skipped.as_str()));
    suite_start.push_attribute(("id", results.session_id.as_str()));
    suite_start.push_attribute(("time", time.as_str()));
    suite_start.push_attribute(("timestamp", results.generated_at.as_str()));
    writer.write_event(Event::Start(suite_start))?;

    for probe in &results.probes {
        write_test_case(&mut writer, probe)?;
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

    let xml = String::from_utf8(writer.into_inner().into_inner())?;
    Ok(xml)
}

fn write_test_case<W: std::io::Write>(
    writer: &mut Writer<W>,
    probe: &ProbeStateReport,
) -> Result<()> {
    let mut case_start = BytesStart::new("testcase");
    case_start.push_attribute(("name", probe.name.as_str()));
    case_start.push_attribute(("classname", "deployment"));
    case_start.push_attribute(("time", seconds(probe.duration_ms.unwrap_or(0)).as_str()));
    writer.write_event(Event::Start(case_start))?;

    match &probe.status {
        ProbeStatus::Failed { error } => {
            let mut fail_start = BytesStart::new("failure");
            fail_start.push_attribute(("message", error.as_str()));
            fail_start.push_attribute(("type", "ProbeFailure"));
            writer.write_event(Event::Start(fail_start))?;
            writer.write_event(Event::Text(BytesText::new(error)))?;
            writer.write_event(Event::End(BytesEnd::new("failure")))?;
        }
        ProbeStatus::Skipped { reason } => {
            let mut skip = BytesStart::new("skipped");
            skip.push_attribute(("message", reason.as_str()));
            writer.write_event(Event::Empty(skip))?;
        }
        _ => {}
    }

    writer.write_event(Event::End(BytesEnd::new("testcase")))?;
    Ok(())
}

/// Write `junit.xml` into `output_dir`
pub fn write_report(results: &VerificationResults, output_dir: &Path) -> Result<()> {
    let xml = generate_junit_xml(results)?;
    let path = output_dir.join("junit.xml");
    std::fs::write(&path, xml)?;
    println!("    Generated JUnit report: {}", path.display());
    Ok(())
}
