pub mod add_orders;
pub mod match_pass;

// Import common benchmarks into the main bench group
pub fn register_benchmarks(c: &mut criterion::Criterion) {
    add_orders::register_benchmarks(c);
    match_pass::register_benchmarks(c);
}
