// Command-line interface for chatfmt
//
// This binary renders model answers (Markdown with LaTeX math) as plain text that chat
// transports can display, and splits long answers into parts that fit a transport's limit.
// The rendering itself lives in the chatfmt-babel crate; this binary wires it to files,
// configuration and the terminal.
//
// Usage:
//  chatfmt <input> [--to <format>] [--output <file>]          - Render an answer (default)
//  chatfmt convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  chatfmt split <input> [--transport <name>] [--max-len <n>] [--json]
//  chatfmt --list-formats                                     - List available formats
//
// An input of "-" reads from stdin.
//
// Extra Parameters:
//
// Configuration values can be overridden with --extra-<name> <value> or --extra-<name>=<value>.
// Recognised names: heading-rule, subheading-marker, bullet-marker, transport, format, and the
// boolean plain-bullets.
// Example:
//  chatfmt answer.md --extra-heading-rule "=====" --extra-plain-bullets

use chatfmt_babel::{split, FormatRegistry, ReformatRules, Transport};
use chatfmt_cli::output;
use chatfmt_config::{ChatfmtConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "split", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>=<value>` (explicit value, may start with '-')
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            if let Some((key, value)) = key.split_once('=') {
                extra_params.insert(key.to_string(), value.to_string());
                i += 1;
                continue;
            }

            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Whether a failed parse should be retried with "convert" injected before `first`.
fn should_inject_convert(first: &str) -> bool {
    (first == "-" || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn to_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .help("Format to render with (defaults to convert.format from config)")
        .long_help(
            "Format to render with.\n\n\
            Available formats: answer, markdown, latex\n\
            Defaults to the convert.format configuration value (\"answer\").",
        )
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("chatfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format model answers for chat transports")
        .long_about(
            "chatfmt turns model answers written in Markdown with LaTeX math into plain text\n\
            that WhatsApp-style chat transports display well.\n\n\
            Commands:\n  \
            - convert: Render an answer (default command)\n  \
            - split:   Render an answer and split it into transport-sized parts\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration values.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            chatfmt answer.md                          # Render to stdout\n  \
            chatfmt answer.md --to latex               # Only rewrite math\n  \
            chatfmt split answer.md --transport twilio # Parts for Twilio\n  \
            cat answer.md | chatfmt - -o out.txt       # Read stdin, write a file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transports")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chatfmt.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render an answer as chat-ready text (default command)")
                .long_about(
                    "Render an answer as chat-ready text.\n\n\
                    Formats:\n  \
                    - answer:   Markdown and math, plus spacing cleanup (default)\n  \
                    - markdown: Markdown structure and math\n  \
                    - latex:    Math only\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    chatfmt convert answer.md                 # Render to stdout\n  \
                    chatfmt convert answer.md -o message.txt  # Render to a file\n  \
                    chatfmt answer.md                         # 'convert' is optional",
                )
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
                .long_about(
                    "Render an answer, then cut it into consecutive parts no longer than the\n\
                    transport's limit. Boundaries ignore structure and may fall mid-word.\n\n\
                    Transports:\n  \
                    - whatsapp-cloud: 4000 characters per part (default)\n  \
                    - twilio:         1500 characters per part\n\n\
                    Limits can be changed under [transport.limits] in chatfmt.toml.\n\n\
                    Examples:\n  \
                    chatfmt split answer.md                       # WhatsApp Cloud parts\n  \
                    chatfmt split answer.md --transport twilio    # Twilio parts\n  \
                    chatfmt split answer.md --max-len 100 --json  # JSON output",
                )
                .arg(input_arg())
                .arg(to_arg())
                .arg(
                    Arg::new("transport")
                        .long("transport")
                        .help("Transport whose length limit applies (whatsapp-cloud, twilio)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("max-len")
                        .long("max-len")
                        .help("Characters per part (overrides the transport limit)")
                        .value_parser(clap::value_parser!(NonZeroUsize)),
                )
                .arg(
                    Arg::new("no-format")
                        .long("no-format")
                        .help("Split the input as-is, without rendering")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print parts as a JSON array")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1 && should_inject_convert(&cleaned_args[1]) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .unwrap_or(&config.convert.format);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &config);
        }
        Some(("split", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .unwrap_or(&config.convert.format);
            let transport = match sub_matches.get_one::<String>("transport") {
                Some(name) => parse_transport(name),
                None => config.transport.default,
            };
            let max_len = sub_matches
                .get_one::<NonZeroUsize>("max-len")
                .copied()
                .unwrap_or_else(|| config.transport.max_len(transport));
            let options = SplitOptions {
                to,
                transport,
                max_len,
                no_format: sub_matches.get_flag("no-format"),
                json: sub_matches.get_flag("json"),
            };
            handle_split_command(input, &options, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

struct SplitOptions<'a> {
    to: &'a str,
    transport: Transport,
    max_len: NonZeroUsize,
    no_format: bool,
    json: bool,
}

/// Handle the convert command
fn handle_convert_command(input: &str, to: &str, output: Option<&str>, config: &ChatfmtConfig) {
    let registry = registry_from_config(config);

    // Validate format exists
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);
    let text = render(&registry, &source, to);

    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{text}"),
    }
}

/// Handle the split command
fn handle_split_command(input: &str, options: &SplitOptions<'_>, config: &ChatfmtConfig) {
    let registry = registry_from_config(config);

    if !options.no_format {
        if let Err(e) = registry.get(options.to) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    if options.max_len.get() > options.transport.hard_limit() {
        warn!(
            max_len = options.max_len.get(),
            hard_limit = options.transport.hard_limit(),
            transport = %options.transport,
            "parts will exceed the transport's hard limit"
        );
    }

    let source = read_input(input);
    let text = if options.no_format {
        source
    } else {
        render(&registry, &source, options.to)
    };

    let chunks = split(&text, options.max_len);
    debug!(transport = %options.transport, parts = chunks.len(), "split answer");
    let parts = output::parts(&chunks);

    if options.json {
        match output::render_json(&parts) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error encoding parts: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", output::render_text(&parts));
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &ChatfmtConfig) {
    let registry = registry_from_config(config);

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {name:<10} {description}");
    }

    println!("\nTransports:\n");
    for transport in Transport::ALL {
        println!(
            "  {:<16} {} chars per part (hard limit {})",
            transport.name(),
            config.transport.max_len(transport),
            transport.hard_limit()
        );
    }
}

fn render(registry: &FormatRegistry, source: &str, format: &str) -> String {
    registry.render(source, format).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn read_input(input: &str) -> String {
    let result = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(input)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn registry_from_config(config: &ChatfmtConfig) -> FormatRegistry {
    FormatRegistry::with_rules(ReformatRules::from(&config.formatting.rules))
}

fn parse_transport(name: &str) -> Transport {
    name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> ChatfmtConfig {
    let loader = Loader::new().with_optional_file("chatfmt.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut ChatfmtConfig, extra_params: &mut HashMap<String, String>) {
    let rules = &mut config.formatting.rules;
    if let Some(raw) = take_override(extra_params, &["heading-rule"]) {
        rules.heading_rule = raw;
    }
    if let Some(raw) = take_override(extra_params, &["subheading-marker", "subheading"]) {
        rules.subheading_marker = raw;
    }
    if let Some(raw) = take_override(extra_params, &["bullet-marker", "bullet"]) {
        rules.bullet_marker = raw;
    }
    if let Some(raw) = extra_params.remove("plain-bullets") {
        if parse_bool_arg("plain-bullets", &raw) {
            rules.bullet_marker = "-".to_string();
        }
    }

    if let Some(raw) = take_override(extra_params, &["transport"]) {
        config.transport.default = parse_transport(&raw);
    }
    if let Some(raw) = take_override(extra_params, &["format", "to"]) {
        config.convert.format = raw;
    }

    for key in extra_params.keys() {
        warn!(key = %key, "ignoring unknown --extra parameter");
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
