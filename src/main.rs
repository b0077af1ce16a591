use std::env;
use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug)]
struct Inputs {
    speed_mps: f64,
    height_m: f64,
    angle_deg: f64,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_inputs_from_user() -> Result<Inputs, String> {
    Ok(Inputs {
        speed_mps: read_f64("Velocity (m/s): ")?,
        height_m: read_f64("Height (m): ")?,
        angle_deg: read_f64("Angle (degrees): ")?,
    })
}

fn get_inputs_from_args(args: &[String]) -> Result<Inputs, String> {
    if args.len() != 4 {
        return Err(
            "Expected exactly 3 arguments: <velocity_mps> <height_m> <angle_deg>.".to_string(),
        );
    }

    Ok(Inputs {
        speed_mps: parse_f64(&args[1], "velocity")?,
        height_m: parse_f64(&args[2], "height")?,
        angle_deg: parse_f64(&args[3], "angle")?,
    })
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <velocity_mps> <height_m> <angle_deg>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 20 0 45");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let inputs = if args.len() == 1 {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&args)?
    };

    projectile_plot::run(inputs.speed_mps, inputs.height_m, inputs.angle_deg)
        .map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
