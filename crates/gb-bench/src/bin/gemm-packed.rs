use gb_kernel::PackedKernel;

fn main() -> gb_bench::Result<()> {
    gb_bench::logging::init();
    gb_bench::run_default(&PackedKernel::new())
}
