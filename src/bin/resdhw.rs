// Copyright (c) 2019-2022  resdhw contributors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use serde_derive::Deserialize;

use resdhw::*;

// Input file: home configuration plus mains temperature normals
#[derive(Debug, Deserialize)]
struct InputFile {
    home: HomeConfig,
    mains_monthly: Option<Vec<f32>>,
    mains_daily: Option<Vec<f32>>,
}

// Helper functions ---------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("File {} not found", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Could not read file")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let mut file = match File::create(&path) {
        Err(err) => {
            eprintln!("ERROR: could not create \"{}\": {}", path.display(), err);
            exit(exitcode::CANTCREAT);
        }
        Ok(file) => file,
    };
    if let Err(err) = file.write_all(content) {
        eprintln!("ERROR: could not write to {}: {}", path.display(), err);
        exit(exitcode::IOERR);
    }
}

// Mains normals resolution: daily series wins over monthly; absence is fatal
fn get_mains(input: &InputFile, verbosity: u64) -> MainsNormals {
    let normals = if let Some(daily) = &input.mains_daily {
        MainsNormals::from_daily(daily.clone())
    } else if let Some(monthly) = &input.mains_monthly {
        if verbosity > 1 {
            println!("Expanding 12 monthly mains normals to a daily series");
        }
        MainsNormals::from_monthly(monthly)
    } else {
        eprintln!("ERROR: no mains temperature normals in the input file");
        exit(exitcode::DATAERR);
    };
    normals.unwrap_or_else(|error| {
        eprintln!("ERROR: invalid mains temperature normals: {}", error);
        exit(exitcode::DATAERR);
    })
}

// Check the optional setpoint override from the CLI
fn validate_setpoint(matches: &clap::ArgMatches<'_>, verbosity: u64) -> Option<f32> {
    if !matches.is_present("setpoint") {
        return None;
    }
    let setpoint = value_t!(matches, "setpoint", f32).unwrap_or_else(|error| {
        eprintln!("ERROR: the hot water setpoint is not a valid number");
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    });
    if setpoint <= 105.0 {
        eprintln!(
            "ERROR: the hot water setpoint must exceed 105 F and is {:.1}",
            setpoint
        );
        exit(exitcode::DATAERR);
    }
    Some(setpoint)
}

fn main() {
    let matches = App::new("resdhw")
        .setting(AppSettings::DisableHelpSubcommand)
        .version(env!("CARGO_PKG_VERSION"))
        .about("ResDHW - residential hot water and appliance end uses (ANSI/RESNET/ICC 301)")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("HOME_JSON")
                .required(true)
                .help("JSON file with the home configuration and mains normals")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("setpoint")
                .long("setpoint")
                .value_name("TEMP_F")
                .help("Override the water heater setpoint [F]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the computed setup as JSON"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUT_JSON")
                .help("Write the computed setup as JSON to a file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Verbosity level (-v, -vv, -vvv)"),
        )
        .get_matches();

    let verbosity = matches.occurrences_of("verbosity");

    let path = Path::new(matches.value_of("config").unwrap());
    if verbosity > 0 {
        println!("Home configuration: {}", path.display());
    }
    let contents = readfile(path).unwrap_or_else(|error| {
        eprintln!("ERROR: {}", error);
        exit(exitcode::IOERR);
    });
    let mut input: InputFile = serde_json::from_str(&contents).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: invalid home configuration in {}: {}",
            path.display(),
            error
        );
        exit(exitcode::DATAERR);
    });

    if let Some(setpoint) = validate_setpoint(&matches, verbosity) {
        if verbosity > 0 && setpoint != input.home.water_heater.setpoint {
            println!(
                "NOTICE: setpoint override {:.1} F replaces configured {:.1} F",
                setpoint, input.home.water_heater.setpoint
            );
        }
        input.home.water_heater.setpoint = setpoint;
    }

    let mains = get_mains(&input, verbosity);

    let setup = apply(&input.home, &mains).unwrap_or_else(|error| {
        eprintln!("ERROR: setup aborted: {}", error);
        exit(exitcode::DATAERR);
    });

    if matches.is_present("json") {
        let json = serde_json::to_string_pretty(&setup).unwrap_or_else(|error| {
            eprintln!("ERROR: could not serialize results: {}", error);
            exit(exitcode::SOFTWARE);
        });
        println!("{}", json);
    } else {
        println!("{}", setup_to_plain(&setup));
    }

    if matches.is_present("output") {
        let path = Path::new(matches.value_of("output").unwrap());
        if verbosity > 0 {
            println!("Writing results to {}", path.display());
        }
        let json = serde_json::to_string_pretty(&setup).unwrap_or_else(|error| {
            eprintln!("ERROR: could not serialize results: {}", error);
            exit(exitcode::SOFTWARE);
        });
        writefile(path, json.as_bytes());
    }

    exit(exitcode::OK);
}
