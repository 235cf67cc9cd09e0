use anyhow::Result;
use optic_core::{CliEngine, OptionSpec};

fn main() -> Result<()> {
    // Swallow Ctrl+C so an interrupted run still unwinds normally.
    let _ = ctrlc::set_handler(|| {});

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("OPTIC_LOG").unwrap_or_else(|_| "optic_core=warn".to_string()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut engine = CliEngine::new();
    engine
        .option(
            OptionSpec::new("-test", "help text is good").action(|ctx| println!("{}", ctx)),
        )?
        .option(
            OptionSpec::new("-param", "we like parameters")
                .required()
                .alias("-p")
                .action(|ctx| println!("{}", ctx)),
        )?
        .handle(&args)?;

    Ok(())
}
