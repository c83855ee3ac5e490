use super::PathsReport;
use pathladder_core::graph::Route;

fn route_record(route: &Route) -> String {
    match route.cost {
        Some(cost) => {
            let path: Vec<String> = route.path.iter().map(|v| v.to_string()).collect();
            format!("R dest={} cost={} path={}", route.destination, cost, path.join(","))
        }
        None => format!("R dest={} cost=inf path=-", route.destination),
    }
}

/// Header line, then one `R` record per route
pub fn output_paths_records(report: &PathsReport) {
    println!(
        "H pathladder=1 records=1 mode=paths source={} vertices={} edges={}",
        report.source, report.vertices, report.edges
    );
    for route in &report.routes {
        println!("{}", route_record(route));
    }
}
