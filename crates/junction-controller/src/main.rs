//! Intersection controller harness binary.
//!
//! Drives the controller through a configurable number of second-elapsed
//! pulses and prints one snapshot per pulse, as a text trace or as JSON
//! lines. An emergency episode can be scripted onto the run to observe
//! preemption and resume.

use std::process;

use junction_controller::{Controller, ControllerConfig, Snapshot};

struct CliArgs {
    modulus: u32,
    green: u32,
    yellow: u32,
    walk: u32,
    pulses: u64,
    emergency_at: Option<u64>,
    emergency_clear: Option<u64>,
    json: bool,
}

fn print_usage() {
    eprintln!("usage: junction-controller [options]");
    eprintln!("  --modulus N          ticks per second pulse (default 4)");
    eprintln!("  --green N            green dwell in seconds (default 10)");
    eprintln!("  --yellow N           yellow dwell in seconds (default 3)");
    eprintln!("  --walk N             pedestrian scramble dwell in seconds (default 10)");
    eprintln!("  --pulses N           seconds to run (default 70)");
    eprintln!("  --emergency-at N     assert the emergency level before second N");
    eprintln!("  --emergency-clear N  drop the emergency level before second N");
    eprintln!("  --json               print JSON lines instead of the text trace");
}

fn parse_u32(args: &[String], i: usize, flag: &str) -> u32 {
    match args.get(i).map(|s| s.parse()) {
        Some(Ok(n)) => n,
        _ => {
            eprintln!("junction-controller: {flag} needs a number");
            process::exit(2);
        }
    }
}

fn parse_u64(args: &[String], i: usize, flag: &str) -> u64 {
    match args.get(i).map(|s| s.parse()) {
        Some(Ok(n)) => n,
        _ => {
            eprintln!("junction-controller: {flag} needs a number");
            process::exit(2);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        modulus: 4,
        green: 10,
        yellow: 3,
        walk: 10,
        pulses: 70,
        emergency_at: None,
        emergency_clear: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--modulus" => {
                i += 1;
                cli.modulus = parse_u32(&args, i, "--modulus");
            }
            "--green" => {
                i += 1;
                cli.green = parse_u32(&args, i, "--green");
            }
            "--yellow" => {
                i += 1;
                cli.yellow = parse_u32(&args, i, "--yellow");
            }
            "--walk" => {
                i += 1;
                cli.walk = parse_u32(&args, i, "--walk");
            }
            "--pulses" => {
                i += 1;
                cli.pulses = parse_u64(&args, i, "--pulses");
            }
            "--emergency-at" => {
                i += 1;
                cli.emergency_at = Some(parse_u64(&args, i, "--emergency-at"));
            }
            "--emergency-clear" => {
                i += 1;
                cli.emergency_clear = Some(parse_u64(&args, i, "--emergency-clear"));
            }
            "--json" => {
                cli.json = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("junction-controller: unknown option {other}");
                print_usage();
                process::exit(2);
            }
        }
        i += 1;
    }
    cli
}

fn main() {
    let cli = parse_args();

    let config = ControllerConfig {
        divider_modulus: cli.modulus,
        green_secs: cli.green,
        yellow_secs: cli.yellow,
        walk_secs: cli.walk,
    };

    let mut controller = match Controller::new(config) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("junction-controller: {e}");
            process::exit(2);
        }
    };

    for second in 1..=cli.pulses {
        if cli.emergency_at == Some(second) {
            controller.set_emergency(true);
        }
        if cli.emergency_clear == Some(second) {
            controller.set_emergency(false);
        }

        controller.run_second();

        let snapshot = Snapshot::capture(second, &controller);
        if cli.json {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("junction-controller: {e}");
                    process::exit(1);
                }
            }
        } else {
            println!("{snapshot}");
        }
    }
}
