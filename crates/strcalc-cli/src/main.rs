use anyhow::Result;
use clap::Parser;
use strcalc_cli::escape::unescape;
use strcalc_cli::logging::init_logging;
use strcalc_cli::{Cli, Command, OutputFormat, Report, run, run_demo};
use strcalc_core::StringCalculator;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting string calculator"
    );

    // The demo's last step fails on purpose; only a failing `add` is an error exit.
    let exit_on_failure = matches!(cli.command, Command::Add { .. });

    let mut calculator = StringCalculator::new();
    let reports = match cli.command {
        Command::Demo => run_demo(&mut calculator),
        Command::Add { op, input, raw } => {
            let input = input.map(|s| if raw { s } else { unescape(&s) });
            vec![run(&mut calculator, op, input.as_deref())]
        }
    };

    print_reports(&reports, cli.format)?;
    if cli.format == OutputFormat::Text {
        println!("Called count: {}", calculator.called_count());
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    info!(calls = calculator.called_count(), failed, "Finished");

    if exit_on_failure && failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_reports(reports: &[Report], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json if reports.len() > 1 => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        }
        _ => {
            for report in reports {
                println!("{}", report.render(format)?);
            }
        }
    }
    Ok(())
}
