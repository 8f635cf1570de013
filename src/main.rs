use std::io::Read;
use std::process::ExitCode;

use charge_regularization::config::{AppConfig, Config, LogFormat};
use charge_regularization::regularizations::{RegularizationCalculator, RegularizationInput};
use charge_regularization::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = match Config::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.app);

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Regularization failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays valid JSON
fn init_tracing(app: &AppConfig) {
    let json = app.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("charge_regularization={}", app.log_level).into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

/// Read a regularization input from stdin and render the result as JSON
fn run(config: &Config) -> Result<String> {
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Default calculation method: {}",
        config.calculation.method
    );

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let input: RegularizationInput = serde_json::from_str(&raw)?;

    let calculator = RegularizationCalculator::new(config.calculation.options());
    let result = calculator.calculate(&input)?;

    Ok(serde_json::to_string_pretty(&result)?)
}
