use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the built-in formats and transports from chatfmt-babel
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_FORMATS: &[&str] = &["answer", "latex", "markdown"];
const AVAILABLE_TRANSPORTS: &[&str] = &["whatsapp-cloud", "twilio"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let to_arg = || {
        Arg::new("to")
            .long("to")
            .help("Format to render with")
            .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
            .value_hint(ValueHint::Other)
    };
    let input_arg = || {
        Arg::new("input")
            .help("Input file path, or - for stdin")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("chatfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format model answers for chat transports")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chatfmt.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .about("Render an answer as chat-ready text (default command)")
                .arg(input_arg())
                .arg(to_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Render an answer and split it into transport-sized parts")
                .arg(input_arg())
                .arg(to_arg())
                .arg(
                    Arg::new("transport")
                        .long("transport")
                        .help("Transport whose length limit applies")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSPORTS,
                        )),
                )
                .arg(
                    Arg::new("max-len")
                        .long("max-len")
                        .help("Characters per part (overrides the transport limit)"),
                )
                .arg(
                    Arg::new("no-format")
                        .long("no-format")
                        .help("Split the input as-is")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print parts as JSON")
                        .action(ArgAction::SetTrue),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "chatfmt", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "chatfmt", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "chatfmt", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
