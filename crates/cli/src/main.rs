//! S/360 subset simulator CLI.
//!
//! Reads a hex program image from stdin, runs it to its halt, and prints the
//! execution statistics. It performs:
//! 1. **Argument parsing:** `-v` (or `-V`) selects the verbose listing; any other argument is a usage error.
//! 2. **Logging:** Installs a `tracing` subscriber on stderr, filtered by `RUST_LOG`.
//! 3. **Configuration:** Reads an optional JSON config file named by `S360_SIM_CONFIG`.
//! 4. **Exit status:** 0 on halt and on the out-of-range branch dump; 1 on usage, config, or load errors.

mod trace;

use std::process::ExitCode;
use std::{env, fs, io};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use s360_core::Simulator;
use s360_core::common::{LoadError, MEMORY_SIZE, Trap};
use s360_core::config::Config;
use s360_core::sim::loader;
use s360_core::trace::{NullSink, TraceSink};

use crate::trace::ConsoleTracer;

/// Environment variable naming an optional JSON configuration file.
const CONFIG_ENV: &str = "S360_SIM_CONFIG";

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

const USAGE: &str = "usage: either sim or sim -v with input taken from stdin";

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    about = "Behavioral simulation of an S/360 subset",
    disable_version_flag = true,
    disable_help_flag = true
)]
struct Cli {
    /// List the memory image, each executed instruction, and the registers after it.
    #[arg(short = 'v', short_alias = 'V')]
    verbose: bool,
}

fn main() -> ExitCode {
    let Ok(cli) = Cli::try_parse() else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    init_logging();

    let mut config = match load_config() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    config.general.verbose |= cli.verbose;
    let verbose = config.general.verbose;

    println!("\nbehavioral simulation of S/360 subset");
    if verbose {
        println!("\n(memory is limited to {MEMORY_SIZE} bytes in this simulation)");
        println!("(addresses, register values, and memory values are shown in hexadecimal)\n");
    } else {
        println!();
    }

    let mut sim = match load_program(&config, verbose) {
        Ok(sim) => sim,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if verbose {
        println!("initial pc, condition code, and register values are all zero\n");
        println!("updated pc, condition code, and register values are shown after");
        println!(" each instruction has been executed");
    }

    let mut console = ConsoleTracer;
    let mut quiet = NullSink;
    let sink: &mut dyn TraceSink = if verbose { &mut console } else { &mut quiet };

    if let Err(trap) = sim.run(sink) {
        dump_trap(&sim, &trap);
        return ExitCode::SUCCESS;
    }

    if verbose {
        println!("\nfinal contents of memory arranged by words");
        println!("addr value");
        for (addr, word) in sim.image_words() {
            println!("{addr:03x}: {word:08x}");
        }
        println!();
    }

    print!("{}", sim.stats());
    ExitCode::SUCCESS
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the configuration file named by `S360_SIM_CONFIG`, or the defaults if unset.
fn load_config() -> Result<Config, String> {
    let Ok(path) = env::var(CONFIG_ENV) else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(&path).map_err(|e| format!("could not read {path}: {e}"))?;
    let config = Config::from_json(&text).map_err(|e| format!("{path}: {e}"))?;
    debug!(path, ?config, "configuration loaded");
    Ok(config)
}

/// Loads the program from stdin, listing it byte by byte when verbose.
fn load_program(config: &Config, verbose: bool) -> Result<Simulator, LoadError> {
    if verbose {
        println!("initial contents of memory arranged by bytes");
        println!("addr value");
    }

    let image = loader::read_program(io::stdin().lock())?;
    let sim = Simulator::from_image(&image, config)?;

    if verbose {
        for (addr, byte) in image.iter().enumerate() {
            println!("{addr:03x}: {byte:02x}");
        }
        println!();
    }
    Ok(sim)
}

/// Prints the register dump for a fatal trap followed by its message.
fn dump_trap(sim: &Simulator, trap: &Trap) {
    println!(
        "instruction address = {:06x}, condition code = {}",
        trap.reported_address(),
        sim.cpu.cc
    );
    print!("{}", sim.cpu.regs);
    println!("\n{trap}");
}
