//! Firing-delay expectation CLI
//!
//! Usage: tpd_average <net-name> [place-index]
//!
//! Reads `<net-name>.grg` and `<net-name>.tpd` and prints the expected
//! firing delay of the given 1-based place, or of every place when no index
//! is given.
//!
//! Example:
//!   tpd_average nets/philosophers
//!   tpd_average nets/philosophers 4

use std::env;
use std::process::ExitCode;
use tpdread::domain::net_header::GrgFormatError;
use tpdread::{AverageError, average_all_places, average_for_place};

struct Args {
    net_name: String,
    place: Option<usize>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <net-name> [place-index]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <net-name>       Base name of the <net-name>.grg/.tpd file pair");
    eprintln!("  [place-index]    1-based place to report (default: all places)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut positional: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            value if !value.starts_with('-') => positional.push(value),
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    match positional.as_slice() {
        [net_name] => Ok(Args {
            net_name: net_name.to_string(),
            place: None,
        }),
        [net_name, place] => {
            let place = place
                .parse()
                .map_err(|_| format!("Invalid place index: {}", place))?;
            Ok(Args {
                net_name: net_name.to_string(),
                place: Some(place),
            })
        }
        [] => Err("Missing net name".to_string()),
        _ => Err(format!("Unexpected argument: {}", positional[2])),
    }
}

fn report(err: &AverageError) {
    match err {
        // legacy consumers grep stdout for the open diagnostic
        AverageError::Open { .. } | AverageError::Header(GrgFormatError::Open { .. }) => {
            println!("{}", err)
        }
        _ => eprintln!("{}", err),
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!();
            print_usage("tpd_average");
            return ExitCode::FAILURE;
        }
    };

    match args.place {
        Some(place) => match average_for_place(&args.net_name, place) {
            Ok(stats) => {
                println!("E[p{}]: {:.6}", stats.place, stats.average);
                ExitCode::SUCCESS
            }
            Err(err) => {
                report(&err);
                ExitCode::FAILURE
            }
        },
        None => match average_all_places(&args.net_name) {
            Ok(all_stats) => {
                for stats in all_stats {
                    println!("E[p{}]: {:.6}", stats.place, stats.average);
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                report(&err);
                ExitCode::FAILURE
            }
        },
    }
}
