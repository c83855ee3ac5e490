use super::{join_path, PathsReport};

/// One line of vertices, then the total cost, for every route
pub fn output_paths_human(report: &PathsReport) {
    for route in &report.routes {
        println!("{}", join_path(&route.path));
        match route.cost {
            Some(cost) => println!("Total cost is {}", cost),
            None => println!("Total cost is unreachable"),
        }
    }
}
