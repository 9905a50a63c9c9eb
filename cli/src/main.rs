mod commands;
mod evaluate;
mod output;
mod sample;

use anyhow::{bail, Context};
use cadence::geom::{CubicBezierCurve, RootSelection, SolverOptions};
use cadence::timing::{TimingCurve, DEFAULT_MAX_FPS};
use clap::*;
use commands::*;
use commands::Format;

use std::fs::File;
use std::io::{self, stdout};

fn app() -> App<'static, 'static> {
    let curve_arg = || {
        Arg::with_name("CURVE")
            .help("A timing function, for example \"ease-in\" or \"cubic-bezier(0.25, 0.1, 0.25, 1)\"")
            .value_name("CURVE")
            .required(true)
            .index(1)
    };
    let times_arg = || {
        Arg::with_name("TIMES")
            .help("Values between 0 and 1")
            .value_name("T")
            .required(true)
            .multiple(true)
            .index(2)
    };

    App::new("Cadence command-line interface")
        .version("0.1")
        .about("Evaluates easing curves and timing functions")
        .subcommand(SubCommand::with_name("eval")
            .about("Evaluates a cubic bézier curve at the given parameters")
            .arg(curve_arg())
            .arg(times_arg())
        )
        .subcommand(SubCommand::with_name("inverse")
            .about("Finds the progress of a cubic bézier easing curve at the given times")
            .arg(curve_arg())
            .arg(times_arg())
            .arg(Arg::with_name("STRICT")
                .short("s")
                .long("strict")
                .help("Fails when the curve has no point at the requested time")
            )
            .arg(Arg::with_name("FIRST")
                .long("first")
                .help("Keeps the first root in [0, 1] instead of the last one (requires --strict)")
                .requires("STRICT")
            )
            .arg(Arg::with_name("TOLERANCE")
                .short("t")
                .long("tolerance")
                .help("Largest imaginary part of a root considered real, 0 by default (requires --strict)")
                .value_name("TOLERANCE")
                .takes_value(true)
                .requires("STRICT")
            )
        )
        .subcommand(SubCommand::with_name("sample")
            .about("Samples a timing function once per frame")
            .arg(curve_arg())
            .arg(Arg::with_name("DURATION")
                .short("d")
                .long("duration")
                .help("Duration of the animation in seconds (1 by default)")
                .value_name("SECONDS")
                .takes_value(true)
            )
            .arg(Arg::with_name("FPS")
                .long("fps")
                .help("Maximum number of frames per second (60 by default)")
                .value_name("FPS")
                .takes_value(true)
            )
        )
        .arg(Arg::with_name("JSON")
            .long("json")
            .help("Prints the points as JSON")
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = app().get_matches();

    let format = if matches.is_present("JSON") { Format::Json } else { Format::Text };

    let output: Box<dyn io::Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(
            File::create(output_file).with_context(|| format!("Cannot create file {}", output_file))?,
        ),
        None => Box::new(stdout()),
    };

    if let Some(eval_matches) = matches.subcommand_matches("eval") {
        let cmd = EvaluateCmd {
            curve: get_cubic_bezier(eval_matches)?,
            times: get_times(eval_matches)?,
            format,
            output,
        };

        evaluate::evaluate(cmd)?;
    } else if let Some(inverse_matches) = matches.subcommand_matches("inverse") {
        let mut options = SolverOptions::DEFAULT;
        if inverse_matches.is_present("FIRST") {
            options = options.with_selection(RootSelection::First);
        }
        if let Some(tolerance) = inverse_matches.value_of("TOLERANCE") {
            let tolerance = tolerance
                .parse::<f64>()
                .with_context(|| format!("Invalid tolerance {:?}", tolerance))?;
            options = options.with_imaginary_tolerance(tolerance);
        }
        log::debug!("solver options: {:?}", options);

        let cmd = InverseCmd {
            curve: get_cubic_bezier(inverse_matches)?,
            times: get_times(inverse_matches)?,
            options,
            strict: inverse_matches.is_present("STRICT"),
            format,
            output,
        };

        evaluate::inverse(cmd)?;
    } else if let Some(sample_matches) = matches.subcommand_matches("sample") {
        let cmd = SampleCmd {
            curve: get_timing_curve(sample_matches)?,
            duration: get_number(sample_matches, "DURATION", 1.0)?,
            max_fps: get_number(sample_matches, "FPS", DEFAULT_MAX_FPS)?,
            format,
            output,
        };

        sample::sample(cmd)?;
    } else {
        bail!("Expected a subcommand, see --help");
    }

    Ok(())
}

fn get_timing_curve(matches: &ArgMatches) -> anyhow::Result<TimingCurve> {
    let src = matches.value_of("CURVE").unwrap_or("default");
    let curve: TimingCurve = src.parse()?;
    log::debug!("parsed {:?} as {:?}", src, curve);

    Ok(curve)
}

fn get_cubic_bezier(matches: &ArgMatches) -> anyhow::Result<CubicBezierCurve> {
    get_timing_curve(matches)?
        .cubic_bezier()
        .context("Expected a cubic bézier curve, not a spring")
}

fn get_times(matches: &ArgMatches) -> anyhow::Result<Vec<f64>> {
    matches
        .values_of("TIMES")
        .into_iter()
        .flatten()
        .map(|t| t.parse::<f64>().with_context(|| format!("Invalid time {:?}", t)))
        .collect()
}

fn get_number(matches: &ArgMatches, name: &str, default: f64) -> anyhow::Result<f64> {
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid value {:?} for {}", value, name.to_lowercase())),
        None => Ok(default),
    }
}

#[test]
fn solver_flags_need_strict_mode() {
    let parse = |args: &[&str]| app().get_matches_from_safe(args.iter().copied());

    assert!(parse(&["cadence", "inverse", "ease", "0.5", "--first"]).is_err());
    assert!(parse(&["cadence", "inverse", "ease", "0.5", "--tolerance", "1e-9"]).is_err());

    let matches = parse(&["cadence", "inverse", "--strict", "--first", "--tolerance", "1e-9", "ease", "0.5"])
        .unwrap();
    let inverse = matches.subcommand_matches("inverse").unwrap();
    assert!(inverse.is_present("STRICT"));
    assert!(inverse.is_present("FIRST"));
    assert_eq!(inverse.value_of("TOLERANCE"), Some("1e-9"));
    assert_eq!(inverse.values_of("TIMES").unwrap().collect::<Vec<_>>(), vec!["0.5"]);
}
