mod args;
mod build;
mod check;
mod debug;
mod error;
mod resolve;
mod snippet;

use std::io::Write as _;

use clap::Parser as _;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    init_logging(cli.verbose.log_level_filter());

    cli.command.run().map_err(|e| {
        log::error!("{e:#}");
        proc_exit::Code::FAILURE.as_exit()
    })?;

    Ok(())
}

fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);
    if level == log::LevelFilter::Trace || level == log::LevelFilter::Debug {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            let style = f.default_level_style(record.level());
            writeln!(
                f,
                "{style}[{}]{style:#} {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        });
    }
    builder.write_style(match colorchoice::ColorChoice::global() {
        colorchoice::ColorChoice::Never => env_logger::WriteStyle::Never,
        colorchoice::ColorChoice::Always | colorchoice::ColorChoice::AlwaysAnsi => {
            env_logger::WriteStyle::Always
        }
        colorchoice::ColorChoice::Auto => env_logger::WriteStyle::Auto,
    });
    builder.init();
}
