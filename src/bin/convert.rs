use clap::Parser;
use nominal_cli::convert::{ConvertArgs, run};

fn main() -> anyhow::Result<()> {
    nominal_cli::init_tracing();
    run(ConvertArgs::parse())
}
