use clap::Parser;
use gradebook::core::demo;
use gradebook::utils::{logger, validation::Validate};
use gradebook::{CliConfig, JsonStore, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gradebook CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config.validate()?;

    let store = JsonStore::new(LocalStorage::new());
    let mut gradebook = store.load(&config.data_path);

    if gradebook.is_empty() {
        gradebook = demo::seed()?;
        store.save(&config.data_path, &gradebook);
    }

    let student = "name1 surname1";

    tracing::info!(
        "{}",
        gradebook.average_student_total("school 2", student)?
    );
    tracing::info!(
        "{}",
        gradebook.average_student_in_course("school 2", "math", student)?
    );
    tracing::info!("{}", gradebook.average_course("school 1", "math")?);
    tracing::info!("{}", gradebook.average_school("school 1")?);

    Ok(())
}
