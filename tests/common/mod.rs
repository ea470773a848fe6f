use vee::lang::Line;
use vee::mach::{HostTable, Runtime};

pub fn program(lines: &[&str]) -> Vec<Line> {
    lines.iter().map(|s| Line::from_str(s)).collect()
}

pub fn runtime() -> Runtime {
    Runtime::new(10, Box::new(HostTable::new()))
}

pub fn run(r: &mut Runtime, lines: &[&str]) {
    r.run(&program(lines));
}
