//! Micro-8 runner.
//!
//! Loads a program image from a text file and runs it to completion.
//!
//! # Usage
//! ```text
//! micro8 [--trace] <program>
//! ```
//!
//! # Arguments
//! - `program`: path to the program text (one binary byte per line, `#`
//!   comments)
//!
//! # Options
//! - `--trace`: print one machine-state line per cycle to stderr
//!
//! # Exit status
//! - `0`: the program executed a clean `HLT`
//! - `1`: the program failed to load, or execution hit a fatal fault
//! - `2`: bad command-line arguments

use std::env;
use std::process;

use micro8::{loader, ExecutionError, State, StdConsole, CPU};

fn main() {
    let mut trace = false;
    let mut program: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("unknown option: {other}");
                print_usage();
                process::exit(2);
            }
            _ => {
                if program.is_some() {
                    print_usage();
                    process::exit(2);
                }
                program = Some(arg);
            }
        }
    }

    let Some(path) = program else {
        print_usage();
        process::exit(2);
    };

    let image = match loader::load_path(&path) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let mut cpu = CPU::new(StdConsole);
    if let Err(err) = cpu.load(&image) {
        eprintln!("{err}");
        process::exit(1);
    }

    let result = if trace {
        run_traced(&mut cpu)
    } else {
        cpu.run()
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run_traced(cpu: &mut CPU<StdConsole>) -> Result<(), ExecutionError> {
    while cpu.state() == State::Running {
        eprintln!("{}", cpu.trace_line());
        cpu.step()?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("usage: micro8 [--trace] <program>");
}
