use crate::*;

/// Runs the size guard. Returns whether the build may proceed.
pub fn handle_check(cli: &Cli, config: &GuardConfig) -> anyhow::Result<bool> {
    let artifact = std::env::current_dir()?
        .join(&cli.root)
        .join(&config.artifact);
    tracing::debug!(path = %artifact.display(), "checking stylesheet size");

    let measurement = measure(&artifact)?;
    let report = evaluate(measurement, &config.budget);

    if cli.json {
        print_json(report.passed(), &report)?;
    } else {
        print_report(&report);
    }

    Ok(report.passed())
}
