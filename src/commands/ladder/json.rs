use super::LadderReport;
use pathladder_core::error::Result;

pub fn output_ladder_json(report: &LadderReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
