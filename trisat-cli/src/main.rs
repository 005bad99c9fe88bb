use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;

use anyhow::Error;
use clap::{values_t, App, AppSettings, Arg};
use env_logger::{fmt, Builder, Target};
use log::{error, info};
use log::{Level, LevelFilter, Record};

use trisat::config::{Procedure, SolverConfig, SolverConfigUpdate};
use trisat::solver::Solver;

fn main() {
    let exit_code = match main_with_err() {
        Err(err) => {
            error!("{}", err);
            1
        }
        Ok(exit_code) => exit_code,
    };
    std::process::exit(exit_code);
}

fn init_logging() {
    let format = |buf: &mut fmt::Formatter, record: &Record| {
        if record.level() == Level::Info {
            writeln!(buf, "c {}", record.args())
        } else {
            writeln!(buf, "c {}: {}", record.level(), record.args())
        }
    };

    let mut builder = Builder::new();
    builder
        .target(Target::Stdout)
        .format(format)
        .filter(None, LevelFilter::Info);

    if let Ok(ref env_var) = env::var("TRISAT_LOG") {
        builder.parse_filters(env_var);
    }

    builder.init();
}

fn banner() {
    info!("This is trisat {}", env!("TRISAT_VERSION"));
    info!(
        "  {} build - {}",
        env!("TRISAT_PROFILE"),
        env!("TRISAT_RUSTC_VERSION")
    );
}

fn procedure_from_name(name: &str) -> Procedure {
    match name {
        "dp" => Procedure::Dp,
        "dpll" => Procedure::Dpll,
        "resolution" => Procedure::Resolution,
        _ => unreachable!(),
    }
}

fn main_with_err() -> Result<i32, Error> {
    let matches = App::new("trisat")
        .version(env!("TRISAT_VERSION"))
        .setting(AppSettings::DisableHelpSubcommand)
        .arg_from_usage("[INPUT] 'The input file to use (stdin if omitted)'")
        .arg_from_usage("[config-file] --config=[FILE] 'Read parameters from configuration file'")
        .arg(
            Arg::from_usage("[config-option] -C --config-option")
                .value_name("OPTION>=<VALUE")
                .help("Specify a single config option, see 'trisat -C help' for a list of options.")
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::from_usage(
                "[procedure] --procedure=[PROCEDURE] 'Decision procedure to use, overrides the configuration.'",
            )
            .possible_values(&["dp", "dpll", "resolution"])
            .case_insensitive(true),
        )
        .get_matches();

    let config_options = values_t!(matches, "config-option", String).unwrap_or_default();

    if config_options.iter().any(|option| option == "help") {
        print!("{}", SolverConfig::help());
        return Ok(0);
    }

    init_logging();
    banner();

    let mut config_update = SolverConfigUpdate::new();

    if let Some(config_path) = matches.value_of("config-file") {
        let mut config_contents = String::new();
        fs::File::open(config_path)?.read_to_string(&mut config_contents)?;

        config_update.merge(toml::from_str(&config_contents)?);
    }

    for config_option in config_options {
        config_update.merge(toml::from_str(&config_option)?);
    }

    if let Some(name) = matches.value_of("procedure") {
        config_update.merge(SolverConfigUpdate {
            procedure: Some(procedure_from_name(&name.to_ascii_lowercase())),
            ..SolverConfigUpdate::new()
        });
    }

    let mut solver = Solver::new();

    solver.config(&config_update);

    let stdin = io::stdin();

    let mut locked_stdin;
    let mut opened_file;

    let file = match matches.value_of("INPUT") {
        Some(path) => {
            info!("Reading file '{}'", path);
            opened_file = fs::File::open(path)?;
            &mut opened_file as &mut dyn io::Read
        }
        None => {
            info!("Reading from stdin");
            locked_stdin = stdin.lock();
            &mut locked_stdin as &mut dyn io::Read
        }
    };

    solver.add_dimacs_cnf(file)?;

    let start = Instant::now();
    let sat = solver.solve()?;
    info!("Solved in {:.3}s", start.elapsed().as_secs_f64());
    info!("{}", solver.stats());

    if sat {
        println!("s SATISFIABLE");
        if let Some(model) = solver.model() {
            print!("v");
            for lit in model {
                print!(" {}", lit);
            }
            println!(" 0");
        }
        Ok(10)
    } else {
        println!("s UNSATISFIABLE");
        Ok(20)
    }
}
