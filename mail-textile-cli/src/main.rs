// Command-line interface for mail-textile
//
// Converts the body of an email into Textile. HTML bodies go through the conversion
// pipeline; plain-text bodies (--plain) are only cut at the configured reply delimiters.
//
// Usage:
//  mail-textile <input> [--cid-map <file>] [--output <file>]   - Convert an HTML body
//  mail-textile <input> --plain [--cid-map <file>]             - Clean up a text/plain body
//  mail-textile -                                              - Read the body from stdin
//
// Configuration is read from mail-textile.toml in the working directory when present, then
// from --config. Flags win over both.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mail_textile::{body::cleanup_plain_body, ContentIdMap, ConvertOptions, Converter};
use mail_textile_config::{Loader, MailTextileConfig};
use std::fs;
use std::io::{self, Read};
use tracing::Level;

fn build_cli() -> Command {
    Command::new("mail-textile")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML email bodies to Textile markup")
        .long_about(
            "mail-textile turns the HTML part of an email into Textile, ready to be posted\n\
            to an issue tracker.\n\n\
            Inline images (cid: references) are replaced by attachment file names when a\n\
            content-id map is given. The map is a JSON object keyed by Content-ID header:\n\n  \
            {\"<ii_1477855169c39137>\": \"image1.png\"}\n\n\
            Examples:\n  \
            mail-textile body.html                          # Textile on stdout\n  \
            mail-textile body.html --cid-map cids.json      # Resolve inline images\n  \
            mail-textile body.txt --plain                   # Cut a plain body at reply delimiters\n  \
            mail-textile body.html -o body.textile          # Write to a file",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("HTML (or, with --plain, text) body to convert; - reads stdin")
                .required(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("cid-map")
                .long("cid-map")
                .value_name("PATH")
                .help("JSON file mapping Content-IDs to attachment file names")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write the result to a file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mail-textile.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Treat the input as a text/plain body")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-scope")
                .long("list-scope")
                .value_name("SCOPE")
                .help("Which root lists to convert")
                .value_parser(["until-nested", "all-roots"]),
        )
        .arg(
            Arg::new("div-passes")
                .long("div-passes")
                .value_name("N")
                .help("Number of div flattening passes")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log each conversion pass to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(&matches);
    init_logging(&config, matches.get_flag("verbose"));

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading input '{input}': {e}");
        std::process::exit(1);
    });

    let content_ids = matches
        .get_one::<String>("cid-map")
        .map(|path| load_content_ids(path));

    let result = if matches.get_flag("plain") {
        let text = cleanup_plain_body(&source, config.plain.delimiters.as_slice());
        match &content_ids {
            Some(map) => map.rewrite_cid_references(&text),
            None => text,
        }
    } else {
        let options = ConvertOptions::from(&config.convert);
        Converter::with_options(&source, content_ids, options)
            .to_textile()
            .unwrap_or_else(|e| {
                eprintln!("Conversion error: {e}");
                std::process::exit(1);
            })
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(e) = fs::write(path, &result) {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            }
        }
        None => print!("{result}"),
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn load_content_ids(path: &str) -> ContentIdMap {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading content-id map '{path}': {e}");
        std::process::exit(1);
    });
    ContentIdMap::from_json(&json).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(matches: &ArgMatches) -> MailTextileConfig {
    let loader = Loader::new().with_optional_file("mail-textile.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    let loader = apply_flag_overrides(loader, matches).unwrap_or_else(|err| {
        eprintln!("Invalid override: {err}");
        std::process::exit(1);
    });

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_flag_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, mail_textile_config::ConfigError> {
    if let Some(scope) = matches.get_one::<String>("list-scope") {
        loader = loader.set_override("convert.list_scope", scope.as_str())?;
    }
    if let Some(passes) = matches.get_one::<u32>("div-passes") {
        loader = loader.set_override("convert.div_passes", u64::from(*passes))?;
    }
    Ok(loader)
}

fn init_logging(config: &MailTextileConfig, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.log.level.parse().unwrap_or_else(|_| {
            eprintln!(
                "Unknown log level '{}', falling back to warn",
                config.log.level
            );
            Level::WARN
        })
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
