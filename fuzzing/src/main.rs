//! Replays fuzzer inputs outside of libFuzzer, e.g. a crash artifact or a whole corpus.

use std::env::args_os;
use std::fs;
use std::path::{Path, PathBuf};

use fuzz::{DisplayTargets, TARGETS};

fn main() -> Result<(), Error> {
    let mut args = args_os();
    let exe = args.next().map(PathBuf::from);
    let name = args.next().and_then(|s| s.into_string().ok());
    let paths: Vec<PathBuf> = args.map(PathBuf::from).collect();

    let (Some(name), false) = (name, paths.is_empty()) else {
        return Err(Error::Usage(exe));
    };

    let scenario_builder = TARGETS
        .iter()
        .find_map(|&(scenario, func)| (scenario == name).then_some(func))
        .ok_or(Error::Target(name))?;

    let mut inputs = Vec::new();
    for path in paths {
        collect_inputs(path, &mut inputs)?;
    }

    let mut failures = 0;
    for path in &inputs {
        let data = fs::read(path).map_err(|err| Error::Read(err, path.clone()))?;
        let scenario = match scenario_builder(&data) {
            Ok(scenario) => scenario,
            // libFuzzer skips these as well
            Err(_) => continue,
        };
        if let Err(err) = scenario.run() {
            eprintln!("{}: {err}\n{scenario:#?}", path.display());
            failures += 1;
        }
    }

    match failures {
        0 => {
            println!("Success, {} input(s).", inputs.len());
            Ok(())
        }
        n => Err(Error::Failed(n)),
    }
}

fn collect_inputs(path: PathBuf, inputs: &mut Vec<PathBuf>) -> Result<(), Error> {
    if !path.is_dir() {
        inputs.push(path);
        return Ok(());
    }
    let entries = fs::read_dir(&path).map_err(|err| Error::Read(err, path.clone()))?;
    for entry in entries {
        let entry = entry.map_err(|err| Error::Read(err, path.clone()))?;
        inputs.push(entry.path());
    }
    inputs.sort();
    Ok(())
}

#[derive(thiserror::Error, pretty_error_debug::Debug)]
enum Error {
    #[error(
        "wrong arguments supplied\nUsage: {} <{DisplayTargets}> <path>...",
        .0.as_deref().unwrap_or(Path::new("filtrate_fuzzing")).display(),
    )]
    Usage(Option<PathBuf>),
    #[error("unknown fuzzing target {:?}\nImplemented targets: {DisplayTargets}", .0)]
    Target(String),
    #[error("could not read {}", .1.display())]
    Read(#[source] std::io::Error, PathBuf),
    #[error("{0} input(s) failed")]
    Failed(usize),
}
