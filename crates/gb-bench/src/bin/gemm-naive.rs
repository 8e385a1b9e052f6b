use gb_kernel::NaiveKernel;

fn main() -> gb_bench::Result<()> {
    gb_bench::logging::init();
    gb_bench::run_default(&NaiveKernel::new())
}
