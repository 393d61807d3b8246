//! Narrated TESSERA run over a record file
//!
//! Reads (id, timestamp) records from the file named by the first
//! argument (default `input1.txt`), then drives one request round per
//! node with console narration.

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use tessera_arbiter::Registry;
use tessera_core::TesseraResult;
use tessera_runtime::{init_tracing, parse_records, stdout_narrator, Driver};

fn main() -> ExitCode {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input1.txt".to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error reading the input file: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> TesseraResult<()> {
    let file = File::open(path)?;
    let records = parse_records(BufReader::new(file))?;
    let mut registry = Registry::load(records)?;

    let mut narrator = stdout_narrator();
    Driver::new().run(&mut registry, &mut narrator)?;
    Ok(())
}
