use super::LadderReport;

/// Header line, one `W` record per word, one `V` record per violation
pub fn output_ladder_records(report: &LadderReport) {
    println!(
        "H pathladder=1 records=1 mode=ladder begin={} end={} length={} violations={}",
        report.begin,
        report.end,
        report.length,
        report.violations.len()
    );
    for word in &report.ladder {
        println!("W {}", word);
    }
    for violation in &report.violations {
        println!("V {} {}", violation.kind(), violation);
    }
}
