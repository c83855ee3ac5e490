use super::LadderReport;

pub fn output_ladder_human(report: &LadderReport, quiet: bool) {
    println!("{}", report.ladder.join(" "));
    if quiet {
        return;
    }
    println!("Ladder length: {} words", report.length);
    for violation in &report.violations {
        eprintln!("warning: {}", violation);
    }
}
