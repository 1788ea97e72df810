use clap::Parser;
use filmpath::{Args, colors::ColorScheme, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {:#}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
