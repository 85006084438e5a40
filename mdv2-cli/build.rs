use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of src/transforms.rs; build scripts can't reach src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["ir-treeviz", "ir-json", "output"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path ('-' or omitted reads stdin)")
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdv2")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown-flavoured text into escaped MarkdownV2")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("max-depth").long("max-depth"))
                .arg(
                    Arg::new("code-escape")
                        .long("code-escape")
                        .value_parser(["minimal", "strict"]),
                )
                .arg(
                    Arg::new("strict-depth")
                        .long("strict-depth")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect").arg(input_arg()).arg(
                Arg::new("transform")
                    .value_parser(clap::builder::PossibleValuesParser::new(
                        AVAILABLE_TRANSFORMS,
                    ))
                    .index(2)
                    .value_hint(ValueHint::Other),
            ),
        )
        .subcommand(Command::new("examples"))
        .subcommand(
            Command::new("bench")
                .arg(Arg::new("iterations").long("iterations").short('n'))
                .arg(
                    Arg::new("multiplier")
                        .long("multiplier")
                        .short('m')
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("verify"));

    generate_to(Bash, &mut cmd, "mdv2", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdv2", &outdir)?;
    generate_to(Fish, &mut cmd, "mdv2", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
