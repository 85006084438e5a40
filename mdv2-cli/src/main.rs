// Command-line interface for mdv2
//
// This binary converts Markdown-flavoured text into escaped MarkdownV2 and carries the small
// tools that grew around the converter: an example runner, a timing harness and a setup check.
//
// All conversion logic lives in mdv2-core; this crate only deals with files, flags and output.
//
// Usage:
//  mdv2 <input> [-o <file>]                 - Convert a file (default command)
//  mdv2 convert [<input>|-] [-o <file>]     - Same as above; reads stdin without an input
//  mdv2 inspect [<input>] [<transform>]     - Show the parsed node tree ("ir-treeviz" by default)
//  mdv2 examples                            - Print input/output pairs for built-in samples
//  mdv2 bench [--iterations N] [--multiplier M]...
//  mdv2 verify                              - Check fixed cases, exit 1 on any mismatch
//
// Configuration:
//
// Defaults are embedded (see mdv2-config). An mdv2.toml in the working directory is layered on
// top, then the file given with --config, then command-line flags.

use mdv2_cli::{bench, samples, transforms};

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdv2_config::{Loader, Mdv2Config};
use mdv2_core::{ConvertOptions, Converter};
use std::fs;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "examples", "bench", "verify", "help"];

fn build_cli() -> Command {
    Command::new("mdv2")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown-flavoured text into escaped MarkdownV2")
        .long_about(
            "mdv2 converts free-form Markdown into the MarkdownV2 dialect, escaping every\n\
            reserved character that is not part of a recognized construct.\n\n\
            Recognized: **bold**, *italic*, ***bold italic***, ~~strike~~, __underline__,\n\
            ||spoiler||, [links](url), `inline code` and ```fenced code```.\n\n\
            Examples:\n  \
            mdv2 message.md                      # Convert to stdout\n  \
            echo '**hi**' | mdv2 convert         # Convert stdin\n  \
            mdv2 inspect message.md ir-json      # Show the parsed nodes as JSON\n  \
            mdv2 verify                          # Check the converter works",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdv2.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr (otherwise RUST_LOG applies)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert text to MarkdownV2 (default command)")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_name("N")
                        .help("Maximum recursive entity depth")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("code-escape")
                        .long("code-escape")
                        .help("How code spans are escaped")
                        .value_parser(["minimal", "strict"]),
                )
                .arg(
                    Arg::new("strict-depth")
                        .long("strict-depth")
                        .help("Fail instead of keeping over-nested markup as text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show intermediate results of a conversion")
                .long_about(
                    "Transforms:\n  \
                    - ir-treeviz: parsed nodes as a tree (default)\n  \
                    - ir-json:    parsed nodes as JSON\n  \
                    - output:     converted text",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'ir-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("examples").about("Print conversions of built-in samples"))
        .subcommand(
            Command::new("bench")
                .about("Time conversions of an inflated sample document")
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .short('n')
                        .value_name("N")
                        .help("Timed conversions per size")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("multiplier")
                        .long("multiplier")
                        .short('m')
                        .value_name("M")
                        .help("Repeat the sample M times (may be given more than once)")
                        .action(ArgAction::Append)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("verify").about("Check the converter against fixed cases"),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path ('-' or omitted reads stdin)")
        .required(false)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means "convert"
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let config = load_cli_config(config_path, &convert_overrides(sub_matches));
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let config = load_cli_config(config_path, &[]);
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("ir-treeviz");
            handle_inspect_command(input, transform, &config);
        }
        Some(("examples", _)) => {
            let config = load_cli_config(config_path, &[]);
            handle_examples_command(&config);
        }
        Some(("bench", sub_matches)) => {
            let config = load_cli_config(config_path, &[]);
            let iterations = sub_matches.get_one::<usize>("iterations").copied();
            let multipliers: Vec<usize> = sub_matches
                .get_many::<usize>("multiplier")
                .map(|values| values.copied().collect())
                .unwrap_or_default();
            handle_bench_command(&config, iterations, &multipliers);
        }
        Some(("verify", _)) => {
            std::process::exit(handle_verify_command());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    // --verbose forces debug, otherwise RUST_LOG decides (silent by default)
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Collect config overrides from convert flags
fn convert_overrides(matches: &ArgMatches) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();
    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        overrides.push(("convert.max_depth", depth.to_string()));
    }
    if let Some(mode) = matches.get_one::<String>("code-escape") {
        overrides.push(("convert.code_escape", mode.clone()));
    }
    if matches.get_flag("strict-depth") {
        overrides.push(("convert.on_depth_exceeded", "error".to_string()));
    }
    overrides
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &[(&str, String)]) -> Mdv2Config {
    let loader = Loader::new().with_optional_file("mdv2.toml");
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for (key, value) in overrides {
        loader = loader
            .set_override(key, value.as_str())
            .unwrap_or_else(|err| {
                eprintln!("Invalid setting '{key}': {err}");
                std::process::exit(1);
            });
    }

    let config = loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });
    debug!(?config, "loaded configuration");
    config
}

fn converter_from_config(config: &Mdv2Config) -> Converter {
    let options = ConvertOptions::from(&config.convert);
    debug!(?options, "converter options");
    Converter::new(options)
}

fn read_input(input: Option<&str>) -> String {
    match input {
        None | Some("-") => io::read_to_string(io::stdin()).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }),
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        }),
    }
}

/// Handle the convert command
fn handle_convert_command(input: Option<&str>, output: Option<&str>, config: &Mdv2Config) {
    let source = read_input(input);
    let converter = converter_from_config(config);

    let converted = converter.try_convert(&source).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, converted).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{converted}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: Option<&str>, transform: &str, config: &Mdv2Config) {
    let source = read_input(input);
    let converter = converter_from_config(config);

    let output =
        transforms::execute_transform(&source, transform, &converter).unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the examples command
fn handle_examples_command(config: &Mdv2Config) {
    let converter = converter_from_config(config);

    println!("mdv2 - Examples");
    println!("{}", "=".repeat(40));

    for (i, example) in samples::EXAMPLES.iter().enumerate() {
        println!("\nExample {}:", i + 1);
        println!("Input:  {example:?}");
        println!("Output: {:?}", converter.convert(example));
    }
}

/// Handle the bench command
fn handle_bench_command(config: &Mdv2Config, iterations: Option<usize>, multipliers: &[usize]) {
    let converter = converter_from_config(config);
    let iterations = iterations.unwrap_or(config.bench.iterations);
    let multipliers = if multipliers.is_empty() {
        config.bench.multipliers.as_slice()
    } else {
        multipliers
    };

    println!("Performance Test Results:");
    println!("{}", "=".repeat(50));

    for &multiplier in multipliers {
        let text = samples::bench_text(multiplier);
        let result = bench::run(&converter, &text, iterations);
        println!("{}", result.report_line());
    }
}

/// Handle the verify command, returning the process exit code
fn handle_verify_command() -> i32 {
    println!("mdv2 - Setup Verification");
    println!("{}", "=".repeat(50));
    println!("\nTesting basic functionality:");

    // Checks the built-in defaults, independent of any configuration file
    let converter = Converter::default();
    let mut all_passed = true;
    for (input, expected) in samples::VERIFY_CASES {
        let result = converter.convert(input);
        if result == *expected {
            println!("✅ '{input}' -> '{result}'");
        } else {
            println!("❌ '{input}' -> '{result}' (expected '{expected}')");
            all_passed = false;
        }
    }

    if all_passed {
        println!("\n✅ All checks passed! mdv2 is ready to use.");
        0
    } else {
        println!("\n❌ Some checks failed.");
        1
    }
}
