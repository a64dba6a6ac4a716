use std::{fs::File, io::{self, BufReader, BufWriter, Read, Write}, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use geoflat::{run_mode, Mode};

pub fn run(cli: &crate::cli::Cli) -> Result<()> {
    let stdin = [PathBuf::from("-")];
    let inputs = if cli.inputs.is_empty() { &stdin[..] } else { &cli.inputs[..] };

    let failed = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let failed = write_all(cli.mode, inputs, &mut io::stdin().lock(), &mut out)?;
            out.flush()?;
            failed
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            let failed = write_all(cli.mode, inputs, &mut io::stdin().lock(), &mut out)?;
            out.flush()?;
            failed
        }
    };

    if failed > 0 {
        bail!("{failed} of {} inputs failed", inputs.len());
    }
    Ok(())
}

/// Extract every input in turn, writing "<x> <y>" lines to `out`; "-" reads `stdin`.
/// A bad input is logged and skipped; returns how many failed.
fn write_all(mode: Mode, inputs: &[PathBuf], stdin: &mut impl Read, out: &mut impl Write) -> Result<usize> {
    let mut failed = 0;
    for path in inputs {
        log::info!("[extract] reading {} as {mode}", display_name(path));
        let pairs = match read_pairs(mode, path, stdin) {
            Ok(pairs) => pairs,
            Err(err) => {
                log::error!("[extract] {}: {err:#}", display_name(path));
                failed += 1;
                continue;
            }
        };
        log::info!("[extract] {} pairs from {}", pairs.len(), display_name(path));
        for (x, y) in pairs {
            writeln!(out, "{x} {y}")?;
        }
    }
    Ok(failed)
}

fn read_pairs(mode: Mode, path: &Path, stdin: &mut impl Read) -> Result<Vec<(f64, f64)>> {
    if path == Path::new("-") {
        return Ok(run_mode(mode, stdin)?);
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(run_mode(mode, BufReader::new(file))?)
}

fn display_name(path: &Path) -> String {
    if path == Path::new("-") { "<stdin>".to_string() } else { path.display().to_string() }
}
