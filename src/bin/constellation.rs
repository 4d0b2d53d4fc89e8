use clap::Parser;
use nominal_cli::constellation::{ConstellationArgs, run};

fn main() -> anyhow::Result<()> {
    nominal_cli::init_tracing();
    run(ConstellationArgs::parse())
}
