// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use unit_registry::config::{load_and_validate_manifest, UnitSetBuilder};
use unit_registry::registry::{self, UnitRegistry};

const USAGE: &str = "Usage: unit-registry --list
       unit-registry --manifest <units.yaml> [--input v1,v2,...]
Example: unit-registry --manifest configs/units.yaml --input -2,0.25,4";

/// Parsed command line
enum Command {
    List,
    Run {
        manifest: String,
        input: Option<Vec<f32>>,
    },
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut manifest = None;
    let mut input = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => return Ok(Command::List),
            "--manifest" => {
                let path = iter.next().context("--manifest requires a file path")?;
                manifest = Some(path.clone());
            }
            "--input" => {
                let values = iter.next().context("--input requires comma-separated values")?;
                input = Some(parse_values(values)?);
            }
            other => bail!("Unrecognized argument '{}'\n{}", other, USAGE),
        }
    }

    match manifest {
        Some(manifest) => Ok(Command::Run { manifest, input }),
        None => bail!("{}", USAGE),
    }
}

fn parse_values(raw: &str) -> Result<Vec<f32>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|v| {
            v.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid input value '{}'", v))
        })
        .collect()
}

/// Zero-filled input of `len` values, failing instead of aborting when `len` cannot be allocated.
fn zeroed(len: usize) -> Result<Vec<f32>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .with_context(|| format!("Cannot allocate a {}-value input buffer", len))?;
    values.resize(len, 0.0);
    Ok(values)
}

fn list_units(registry: &UnitRegistry) -> Result<()> {
    for name in registry.names() {
        let unit = registry.create(&name)?;
        println!(
            "{}",
            json!({
                "unit": name,
                "input_count": unit.input_count(),
                "output_count": unit.output_count(),
            })
        );
    }
    Ok(())
}

/// Feed `input` (or zeros of the right width) through every configured instance.
fn run_manifest(registry: &UnitRegistry, manifest_path: &str, input: Option<&[f32]>) -> Result<()> {
    let manifest = load_and_validate_manifest(manifest_path, registry)
        .with_context(|| format!("Failed to load manifest {}", manifest_path))?;
    let units = UnitSetBuilder::build(&manifest, registry)?;

    for instance in units.iter() {
        let zeros;
        let values = match input {
            Some(values) => values,
            None => {
                zeros = zeroed(instance.unit().input_count())?;
                zeros.as_slice()
            }
        };

        let started = Instant::now();
        let line = match instance.run(values) {
            Ok(output) => json!({
                "id": instance.id(),
                "unit": instance.unit().name(),
                "output": output,
                "duration_us": started.elapsed().as_micros() as u64,
            }),
            Err(e) => json!({
                "id": instance.id(),
                "unit": instance.unit().name(),
                "error": e.to_string(),
            }),
        };
        println!("{}", line);
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let command = parse_args(&args)?;

    let registry = registry::initialize(&[]).context("Unit registry initialization failed")?;

    match command {
        Command::List => list_units(registry),
        Command::Run { manifest, input } => run_manifest(registry, &manifest, input.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("unit-registry")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("1, 2.5,-3").unwrap(), vec![1.0, 2.5, -3.0]);
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values("1,x").is_err());
    }

    #[test]
    fn test_zeroed() {
        assert_eq!(zeroed(3).unwrap(), vec![0.0; 3]);
        assert!(zeroed(0).unwrap().is_empty());
        assert!(zeroed(usize::MAX).is_err());
    }

    #[test]
    fn test_parse_args() {
        assert!(matches!(parse_args(&args(&["--list"])).unwrap(), Command::List));

        match parse_args(&args(&["--manifest", "m.yaml", "--input", "1,2"])).unwrap() {
            Command::Run { manifest, input } => {
                assert_eq!(manifest, "m.yaml");
                assert_eq!(input, Some(vec![1.0, 2.0]));
            }
            Command::List => panic!("Expected Run"),
        }

        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--manifest"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
