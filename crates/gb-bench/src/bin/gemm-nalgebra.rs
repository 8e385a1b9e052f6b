use gb_kernel::NalgebraKernel;

fn main() -> gb_bench::Result<()> {
    gb_bench::logging::init();
    gb_bench::run_default(&NalgebraKernel::new())
}
