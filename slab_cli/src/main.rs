//! # Slab Design CLI
//!
//! Terminal front end for `slab_core`. Prompts for spans, loads and materials,
//! runs the design and prints a short report followed by the JSON result.
//!
//! ## Usage
//!
//! ```text
//! slab_cli                          # interactive prompts
//! slab_cli --settings aci.json      # override code constants
//! slab_cli --json < input.json      # SlabInput JSON in, SlabDesign JSON out
//! ```
//!
//! Set `RUST_LOG=slab_core=debug` to see each design stage.

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use slab_core::calculations::moment_coefficients::SpanMoments;
use slab_core::calculations::reinforcement::SpanReinforcement;
use slab_core::{calculate, CalcError, DesignSettings, LoadSet, MaterialSet, RebarSize, SlabDesign, SlabInput};

struct Args {
    settings_path: Option<String>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        json: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--settings" => {
                args.settings_path = Some(iter.next().ok_or("--settings needs a file path")?);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(args)
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load_settings(path: Option<&str>) -> Result<DesignSettings, String> {
    let Some(path) = path else {
        return Ok(DesignSettings::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))?;
    DesignSettings::from_json(&text).map_err(|e| e.to_string())
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

/// Parse a prompt answer. Blank keeps the default, anything unparseable is
/// an error carrying the rejected text.
fn parse_or_default<T: std::str::FromStr>(answer: &str, default: T) -> Result<T, String> {
    if answer.is_empty() {
        return Ok(default);
    }
    answer.parse().map_err(|_| answer.to_string())
}

/// Match a bar answer such as `5` or `#5` against the slab bar sizes.
fn parse_bar(answer: &str) -> Result<RebarSize, String> {
    let number: u8 = parse_or_default(answer.trim_start_matches('#'), RebarSize::default().number())?;
    RebarSize::SLAB_SIZES
        .iter()
        .copied()
        .find(|b| b.number() == number)
        .ok_or_else(|| answer.to_string())
}

/// Ask until the answer parses. End of input falls back to the default.
fn prompt_until<T>(prompt: &str, default: T, parse: impl Fn(&str) -> Result<T, String>) -> T {
    loop {
        let Some(answer) = prompt_line(prompt) else {
            return default;
        };
        match parse(&answer) {
            Ok(value) => return value,
            Err(rejected) => println!("    '{}' is not a valid answer, try again", rejected),
        }
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_until(prompt, default, |s| parse_or_default(s, default))
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    prompt_until(prompt, default, |s| parse_or_default(s, default))
}

fn prompt_input() -> SlabInput {
    println!("Loads & Materials");
    let dead_psf = prompt_f64("  Dead load, excluding self-weight (psf) [20.0]: ", 20.0);
    let live_psf = prompt_f64("  Live load (psf) [40.0]: ", 40.0);
    let fc_ksi = prompt_f64("  Concrete strength f'c (ksi) [4.0]: ", 4.0);
    let fy_ksi = prompt_f64("  Steel yield strength fy (ksi) [60.0]: ", 60.0);

    let sizes: Vec<String> = RebarSize::SLAB_SIZES.iter().map(|b| b.to_string()).collect();
    let bar = prompt_until(
        &format!("  Main bar size ({}) [4]: ", sizes.join(", ")),
        RebarSize::default(),
        parse_bar,
    );

    println!();
    println!("Spans");
    let count = prompt_usize("  Number of spans (minimum 2) [3]: ", 3);
    let spans_ft = (1..=count)
        .map(|i| prompt_f64(&format!("  Clear span {} (ft) [15.0]: ", i), 15.0))
        .collect();

    SlabInput {
        label: "CLI".to_string(),
        spans_ft,
        loads: LoadSet::new(dead_psf, live_psf),
        materials: MaterialSet::new(fc_ksi, fy_ksi, bar),
    }
}

fn print_report(input: &SlabInput, design: &SlabDesign) {
    let t = &design.thickness;
    println!("═══════════════════════════════════════");
    println!("  ONE-WAY SLAB DESIGN ({})", design.code);
    println!("═══════════════════════════════════════");
    println!();
    println!("1. Slab Thickness & Loads");
    println!("  Thickness t:        {} in (min {:.2} in from {} ft span)", t.thickness_in, t.minimum_thickness_in, t.governing_span_ft);
    println!("  Self-weight:        {} psf", t.self_weight_psf);
    println!("  Total dead load:    {:.2} psf", t.total_dead_psf);
    println!("  Wu ({}): {:.3} ksf", t.combination, t.wu_ksf);
    println!();
    println!("2. Design Moments (kip-ft / ft)");
    for span in &design.moments {
        print_span_moments(span);
    }
    println!();
    println!("3. Reinforcement ({} main bars)", input.materials.bar);
    for span in &design.reinforcement {
        print_span_reinforcement(span);
    }
    println!();
}

fn print_span_moments(span: &SpanMoments) {
    let values: Vec<String> = span
        .moments
        .iter()
        .map(|(location, m)| format!("{} = {}", location, m))
        .collect();
    println!("  Span {} (L = {} ft, {}): {}", span.span, span.span_ft, span.role, values.join(", "));
}

fn print_span_reinforcement(span: &SpanReinforcement) {
    println!("  Span {}:", span.span);
    for loc in &span.locations {
        println!(
            "    {}: Mu={} Ru={} ρ={} As={} As,min={} As,final={} in²/ft  {} {} {}  shrinkage {}",
            loc.location,
            loc.moment_kipft,
            loc.ru_ksi,
            loc.rho,
            loc.as_required_in2,
            loc.as_min_in2,
            loc.as_final_in2,
            loc.bar_designation,
            loc.main_callout,
            loc.main_spacing.note.as_deref().unwrap_or(""),
            loc.shrinkage_callout,
        );
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run_json(settings: &DesignSettings) -> ExitCode {
    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        eprintln!("Error: cannot read stdin: {}", e);
        return ExitCode::FAILURE;
    }
    let input: SlabInput = match serde_json::from_str(&text) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: invalid input JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match calculate(&input, settings) {
        Ok(design) => match serde_json::to_string_pretty(&design) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: slab_cli [--settings <file.json>] [--json]");
            return ExitCode::FAILURE;
        }
    };
    let settings = match load_settings(args.settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        return run_json(&settings);
    }

    println!("One-Way Continuous Slab Design ({})", settings.code);
    println!("================================================");
    println!();

    let input = prompt_input();
    println!();

    match calculate(&input, &settings) {
        Ok(design) => {
            print_report(&input, &design);
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&design) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
