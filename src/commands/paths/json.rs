use super::PathsReport;
use pathladder_core::error::Result;

pub fn output_paths_json(report: &PathsReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
