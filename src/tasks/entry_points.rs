/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Entry points of the binaries.  Each binary in `src/binary-shims` calls one of these.

use crate::FailResult;

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};
use isrt_structure_io::StructureFileType;
use isrt_tasks_config::Settings;

use crate::cmd;
use crate::ui::cfg_merging::ConfigSources;
use crate::ui::cli_deserialize::CliDeserialize;
use crate::ui::logging::GlobalLogger;
use crate::util::ext_traits::ArgMatchesExt;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        } else {
            error!("(for a backtrace, try again with RUST_BACKTRACE=1)");
        }
        std::process::exit(1);
    });
}

// -------------------------------------------------------------------------------------

/// `-v` and `--log`.  Resolving these installs the global logger.
struct LogArgs;

impl CliDeserialize for LogArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("more log output (-v for debug, -vv for every candidate)"),
            Arg::with_name("log")
                .long("log")
                .takes_value(true)
                .value_name("FILE")
                .help("also write the log to this file"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let mut logger = GlobalLogger::default();
        logger.verbosity(m.occurrences_of("verbose"));
        if let Some(path) = m.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;
        Ok(LogArgs)
    }
}

/// `-o` and `--format`.
struct OutputArgs {
    path: PathBuf,
    file_type: Option<StructureFileType>,
}

impl CliDeserialize for OutputArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .required(true)
                .help("output structure file"),
            Arg::with_name("format")
                .long("format")
                .takes_value(true)
                .value_name("FORMAT")
                .possible_values(StructureFileType::NAMES)
                .help("output file format [default: guessed from the file name, else poscar]"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        Ok(OutputArgs {
            path: m.expect_value_of("output").into(),
            file_type: match m.value_of("format") {
                Some(s) => Some(s.parse()?),
                None => None,
            },
        })
    }
}

/// `-c/--config` and `--seed`.
struct SettingsArgs(Settings);

impl CliDeserialize for SettingsArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("CONFIG")
                .multiple(true)
                .number_of_values(1)
                .help("\
                    config yaml, provided as either a filepath, or as an embedded literal \
                    (via syntax described below). \
                    When provided multiple times, the configs are merged, \
                    with preference to the values supplied in later arguments. \
                    \n\n\
                    Literals are written as '--config [NESTED_KEY]:VALID_YAML', \
                    where NESTED_KEY is an optional '.'-separated sequence of string keys, \
                    and the ':' is a literal colon. When provided, NESTED_KEY constructs a nested \
                    mapping (so `--config insert.count:3` is equivalent to \
                    `--config :{insert: {count: 3}}`).\
                "),
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("N")
                .help("random seed (overrides insert.seed)"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let sources = ConfigSources::resolve_from_args(m.values_or_empty("config"))?;
        for path in sources.files() {
            debug!("Reading config from {}", path.display());
        }
        let mut settings: Settings = sources.into_settings()?;

        if let Some(seed) = m.value_of("seed") {
            let seed = seed.parse::<u64>()
                .map_err(|e| format_err!("invalid --seed {:?}: {}", seed, e))?;
            settings.insert.seed = Some(seed);
        }
        Ok(SettingsArgs(settings))
    }
}

// -------------------------------------------------------------------------------------

pub fn insert() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            App::new("isrt-insert")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Randomly insert atoms between a slab and the layer above it.")
                .args(&[
                    Arg::with_name("input")
                        .required(true)
                        .value_name("INPUT")
                        .help("input POSCAR"),
                    Arg::with_name("summary")
                        .long("summary")
                        .takes_value(true)
                        .value_name("FILE")
                        .help("write a JSON summary of the insertion to this file"),
                ])
        });
        let matches = app.get_matches();
        let (LogArgs, output, SettingsArgs(settings)): (_, OutputArgs, _) = de.resolve_args(&matches)?;

        let input = PathBuf::from(matches.expect_value_of("input"));
        let summary = matches.value_of("summary").map(PathBuf::from);

        cmd::run_insert(
            &settings,
            &input,
            &output.path,
            output.file_type,
            summary.as_ref().map(|p| p.as_path()),
        )?;
        Ok(())
    });
}

pub fn convert() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            App::new("isrt-convert")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Convert a POSCAR to another structure format.")
                .args(&[
                    Arg::with_name("input")
                        .required(true)
                        .value_name("INPUT")
                        .help("input POSCAR"),
                    Arg::with_name("append")
                        .long("append")
                        .help("append a frame to an existing xyz or extxyz file"),
                ])
        });
        let matches = app.get_matches();
        let (LogArgs, output): (_, OutputArgs) = de.resolve_args(&matches)?;

        let input = PathBuf::from(matches.expect_value_of("input"));
        cmd::run_convert(&input, &output.path, output.file_type, matches.is_present("append"))
    });
}
