use clap::{ArgMatches, Command};

use crate::config::Config;
use crate::rhai::ScriptEngine;
use crate::Error;

pub fn setup_command_line_args() -> Command {
    clap::command!()
        .arg(
            clap::Arg::new("kind")
                .short('k')
                .long("kind")
                .help("Pool to draw from: alpha, numeric or alphanumeric"),
        )
        .arg(
            clap::Arg::new("length")
                .short('l')
                .long("length")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .help("Number of characters per string"),
        )
        .arg(
            clap::Arg::new("case")
                .long("case")
                .help("Letter case: upper, lower or both"),
        )
        .arg(
            clap::Arg::new("count")
                .short('n')
                .long("count")
                .value_parser(clap::value_parser!(usize))
                .help("Number of strings to generate"),
        )
        .arg(
            clap::Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(clap::value_parser!(u64))
                .help("Seed for reproducible output"),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Use a config file (yaml, json or toml)"),
        )
        .arg(
            clap::Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format: text, json or yaml"),
        )
        .arg(
            clap::Arg::new("dump-config")
                .long("dump-config")
                .action(clap::ArgAction::SetTrue)
                .help("Print the effective config as YAML instead of generating"),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate a rhai expression with the generators available")
                .arg(
                    clap::Arg::new("expression")
                        .required(true)
                        .help("e.g. 'random_alpha(8, \"upper\")'"),
                ),
        )
}

/// Runs whatever the parsed command line asks for and returns the text to print.
pub fn run(matches: &ArgMatches) -> Result<String, Error> {
    match matches.subcommand() {
        Some(("eval", sub_matches)) => eval(sub_matches),
        None => generate(matches),
        Some((name, _)) => Err(Error::Config(format!("Unknown subcommand {}", name))),
    }
}

fn generate(matches: &ArgMatches) -> Result<String, Error> {
    let mut cfg = match matches.get_one::<String>("config") {
        Some(path) => {
            log::debug!("Loading config file {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    cfg.read_flags(matches)?;
    log::debug!("Effective config: {:?}", cfg);

    if matches.get_flag("dump-config") {
        return cfg.to_yaml().map_err(|e| Error::Output(e.to_string()));
    }

    cfg.render(&cfg.generate())
}

fn eval(sub_matches: &ArgMatches) -> Result<String, Error> {
    let expression = sub_matches
        .get_one::<String>("expression")
        .ok_or(Error::Script("No expression given".to_string()))?;
    let engine = ScriptEngine::new(sub_matches.get_one::<u64>("seed").copied());
    let result = engine.eval(expression)?;
    log::info!("Evaluated with seed {}", engine.seed());
    Ok(result)
}
