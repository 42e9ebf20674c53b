use std::path::Path;
use std::process;

use anyhow::{self, Context};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use gencsf::drivers::csf_generation::{CsfGenerationDriver, CsfGenerationParams};
use gencsf::drivers::GenCsfDriver;
use gencsf::interfaces::cli::{log_heading, Cli};
use gencsf::interfaces::input::Input;
use gencsf::interfaces::InputHandle;

/// Sets up the `gencsf-output` logger, writing to the console and optionally
/// also to a plain-text file.
fn setup_logging(output: Option<&Path>) -> Result<(), anyhow::Error> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let mut config_builder =
        Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut logger_builder = Logger::builder().appender("stdout").additive(false);
    if let Some(output_path) = output {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{m}{n}")))
            .append(false)
            .build(output_path)
            .with_context(|| {
                format!(
                    "Unable to create the output file `{}`",
                    output_path.display()
                )
            })?;
        config_builder =
            config_builder.appender(Appender::builder().build("output_file", Box::new(file)));
        logger_builder = logger_builder.appender("output_file");
    }
    let config = config_builder
        .logger(logger_builder.build("gencsf-output", LevelFilter::Info))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
        .with_context(|| "Unable to construct a logging configuration")?;
    log4rs::init_config(config).with_context(|| "Unable to initialise logging")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), anyhow::Error> {
    if let Some(config_path) = cli.config.as_ref() {
        let input = Input::from_yaml_file(config_path)?;
        input.handle()
    } else {
        let n_electrons = cli
            .n_electrons
            .ok_or_else(|| anyhow::format_err!("No number of unpaired electrons specified."))?;
        let total_spin = cli
            .total_spin
            .ok_or_else(|| anyhow::format_err!("No target total spin specified."))?;
        let projection = cli
            .projection
            .ok_or_else(|| anyhow::format_err!("No target spin projection specified."))?;
        let params = CsfGenerationParams::builder()
            .n_electrons(n_electrons)
            .total_spin(total_spin)
            .projection(projection)
            .write_distribution(!cli.no_distribution)
            .result_save_name(cli.save.clone())
            .build()
            .with_context(|| "Unable to construct a set of CSF generation parameters")?;
        let mut driver = CsfGenerationDriver::builder()
            .parameters(&params)
            .build()
            .with_context(|| "Unable to construct a CSF generation driver")?;
        driver.run()
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = setup_logging(cli.output.as_deref()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
    log_heading();
    if let Err(err) = run(&cli) {
        log::error!("{err:#}");
        process::exit(1);
    }
}
