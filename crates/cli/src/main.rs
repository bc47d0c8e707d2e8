use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, info, warn};
use serde::Serialize;
use ulpdiff::utils::{parse_f32, read_raw, read_vecs};
use ulpdiff::{compare_slices, diff_ulp, within_ulp, UlpReport};

mod args;

use args::{Args, CheckArgs, Command, PairArgs};

#[derive(Debug, Serialize)]
struct PairOutput {
    a: f32,
    b: f32,
    a_bits: String,
    b_bits: String,
    ulp: u32,
    tolerance: Option<u32>,
    passed: bool,
}

fn pair(args: &PairArgs) -> Result<PairOutput> {
    let a = parse_f32(&args.a)?;
    let b = parse_f32(&args.b)?;
    if a.is_nan() || b.is_nan() {
        warn!("NaN input, distance is reported as u32::MAX");
    }
    let ulp = diff_ulp(a, b);
    Ok(PairOutput {
        a,
        b,
        a_bits: format!("{:#010x}", a.to_bits()),
        b_bits: format!("{:#010x}", b.to_bits()),
        ulp,
        tolerance: args.tolerance,
        passed: args.tolerance.map_or(true, |t| within_ulp(a, b, t)),
    })
}

fn load_values(path: &Path, raw: bool) -> Result<Vec<f32>> {
    let values = if raw {
        read_raw::<f32>(path)
    } else {
        read_vecs::<f32>(path).map(|vecs| vecs.into_iter().flatten().collect())
    }
    .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

fn check(args: &CheckArgs) -> Result<UlpReport> {
    let expected = load_values(Path::new(&args.expected), args.raw)?;
    let actual = load_values(Path::new(&args.actual), args.raw)?;
    let report = compare_slices(&expected, &actual, args.tolerance)?;
    info!(
        "compared {} values, max distance {} ULP, {} beyond tolerance",
        report.compared,
        report.max_ulp,
        report.mismatches.len()
    );
    Ok(report)
}

fn print_report(report: &UlpReport) {
    for m in report.mismatches.iter() {
        println!(
            "[{}] expected {:e} ({:#010x}) got {:e} ({:#010x}): {} ULP",
            m.index,
            m.expected,
            m.expected.to_bits(),
            m.actual,
            m.actual.to_bits(),
            m.ulp
        );
    }
    println!(
        "{}: {} values, max {} ULP, tolerance {}",
        if report.passed() { "PASS" } else { "FAIL" },
        report.compared,
        report.max_ulp,
        report.tolerance
    );
}

fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::Pair(args) => {
            let out = pair(&args)?;
            if args.json {
                println!("{}", serde_json::to_string(&out)?);
            } else {
                println!("{}", out.ulp);
            }
            Ok(out.passed)
        }
        Command::Check(args) => {
            let report = check(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(report.passed())
        }
    }
}

fn main() -> Result<ExitCode> {
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args: Args = argh::from_env();
    debug!("{:?}", args);
    if run(args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
