use std::io;
use bench_cmn::init_logging;
use bench_runner::{BenchmarkRunner, DryRunLauncher, ProcessLauncher, RunnerArgs, resolve_config};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = RunnerArgs::parse();
    init_logging(args.verbose);

    let file_config = args.file_config()?;
    let config = resolve_config(&args, file_config, &mut io::stdin().lock(), &mut io::stdout())?;

    if args.dry_run {
        BenchmarkRunner::new(config, DryRunLauncher).run().await?;
    } else {
        BenchmarkRunner::new(config, ProcessLauncher).run().await?;
    }

    Ok(())
}
