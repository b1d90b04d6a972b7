// Command-line interface for mdpp
//
// The converter never parses AsciiDoc itself: a host parser dumps the resolved document
// tree as JSON and this binary renders it with a registered backend (only `mdpp` today).
// The second command prepares raw AsciiDoc for that parser by swapping include directives
// for placeholders, so included files are published separately instead of inlined.
//
// Usage:
//  mdpp <tree.json> [--backend <name>] [--output <file>]          - Convert a tree (default)
//  mdpp convert <tree.json> [--backend <name>] [--output <file>]  - Same as above (explicit)
//  mdpp rewrite-includes <source.adoc> [--suffix .md] [--output <file>]
//  mdpp --list-backends                                           - List available backends
//
// Configuration comes from the embedded defaults, ./mdpp.toml and --config, in that order.
// Single keys can be overridden with --extra-<key> <value>, e.g.
//  mdpp tree.json --extra-idprefix sec- --extra-multiline false

use clap::{Arg, ArgAction, Command, ValueHint};
use mdpp_config::{Loader, MdppConfig, PROJECT_CONFIG_FILE};
use mdpp_convert::{Backend, BackendRegistry, ConvertOptions, Document, IncludeRewriter};
use std::collections::HashMap;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_BACKEND: &str = "mdpp";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));
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

fn build_cli() -> Command {
    Command::new("mdpp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render AsciiDoc document trees as Markdown++")
        .long_about(
            "mdpp renders a resolved AsciiDoc document tree (JSON) as Markdown++:\n\
            Markdown plus HTML comments for ids, styles and multiline tables.\n\n\
            Commands:\n  \
            - convert:          Render a JSON document tree (default command)\n  \
            - rewrite-includes: Replace include:: directives with placeholders\n\n\
            Extra Parameters:\n  \
            Use --extra-<key> [value] to override one configuration key:\n  \
            idprefix, outfilesuffix, multiline, video-width, video-height.\n\n\
            Examples:\n  \
            mdpp guide.json                          # Render to stdout\n  \
            mdpp guide.json -o guide.md              # Render to a file\n  \
            mdpp guide.json --extra-multiline false  # Plain cell layout for all tables\n  \
            mdpp rewrite-includes book.adoc          # Placeholders for include:: lines",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-backends")
                .long("list-backends")
                .help("List available output backends")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdpp.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a JSON document tree (default command)")
                .long_about(
                    "Render a resolved document tree with an output backend.\n\n\
                    The backend defaults to 'mdpp'. When only --output is given the\n\
                    backend is detected from the output file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdpp convert guide.json                 # Markdown++ on stdout\n  \
                    mdpp convert guide.json -o guide.md     # Write a file\n  \
                    mdpp guide.json                         # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the JSON document tree")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("backend")
                        .long("backend")
                        .short('b')
                        .help("Output backend (see --list-backends)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("rewrite-includes")
                .about("Replace include:: directives with placeholders")
                .long_about(
                    "Replace every `include::target[...]` line of an AsciiDoc source with\n\
                    `<!--include:target-->`, the target's extension swapped for the output\n\
                    suffix (convert.outfilesuffix, '.md' by default).\n\n\
                    Examples:\n  \
                    mdpp rewrite-includes book.adoc                 # To stdout\n  \
                    mdpp rewrite-includes book.adoc --suffix .mdpp  # Custom suffix",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the AsciiDoc source")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .help("Suffix include targets are rewritten to")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is given, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "rewrite-includes"
                && cleaned_args[1] != "help"
            {
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
    if let Some(key) = extra_params.keys().next() {
        eprintln!("Unknown parameter --extra-{key}");
        std::process::exit(1);
    }

    init_logging(&config, matches.get_count("verbose"));

    if matches.get_flag("list-backends") {
        handle_list_backends_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let backend = select_backend(
                sub_matches.get_one::<String>("backend").map(|s| s.as_str()),
                output,
            );
            handle_convert_command(input, &backend, output, &config);
        }
        Some(("rewrite-includes", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let suffix = sub_matches
                .get_one::<String>("suffix")
                .cloned()
                .unwrap_or_else(|| config.convert.outfilesuffix.clone());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_rewrite_includes_command(input, &suffix, output);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Filter directive for the log subscriber: `-v`/`-vv` first, then RUST_LOG,
/// then the configured level.
fn log_directive(verbose: u8, env: Option<&str>, configured: &str) -> String {
    match verbose {
        0 => match env {
            Some(env) if !env.trim().is_empty() => env.to_string(),
            _ => configured.to_string(),
        },
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn init_logging(config: &MdppConfig, verbose: u8) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = log_directive(verbose, env.as_deref(), &config.logging.level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Invalid log level '{directive}': {err}");
        std::process::exit(1);
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit backend, else detected from the output file name, else mdpp.
fn select_backend(explicit: Option<&str>, output: Option<&str>) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    output
        .and_then(|path| BackendRegistry::default().detect_backend_from_filename(path))
        .unwrap_or_else(|| DEFAULT_BACKEND.to_string())
}

/// Handle the convert command
fn handle_convert_command(input: &str, backend: &str, output: Option<&str>, config: &MdppConfig) {
    let registry = BackendRegistry::default();
    if let Err(e) = registry.get(backend) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let doc = Document::from_path(input).unwrap_or_else(|e| {
        eprintln!("Error in '{input}': {e}");
        std::process::exit(1);
    });
    debug!(nodes = doc.len(), backend, "document tree loaded");

    let options = ConvertOptions::from(&config.convert);
    let rendered = registry
        .convert(&doc, backend, &options)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    write_output(output, &rendered);
}

/// Handle the rewrite-includes command
fn handle_rewrite_includes_command(input: &str, suffix: &str, output: Option<&str>) {
    let rewriter = IncludeRewriter::new(suffix);
    debug!(suffix = rewriter.suffix(), "rewriting include directives");
    let rewritten = rewriter.rewrite_file(input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    write_output(output, &rewritten);
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!(path, "output written");
        }
        None => print!("{text}"),
    }
}

/// Handle the list-backends command
fn handle_list_backends_command() {
    println!("Available backends:\n");
    let registry = BackendRegistry::default();
    for name in registry.list_backends() {
        if let Ok(backend) = registry.get(&name) {
            println!(
                "  {name:<8} {} (*{})",
                backend.description(),
                backend.outfilesuffix()
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdppConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
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

fn apply_config_overrides(config: &mut MdppConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(prefix) = extra_params.remove("idprefix") {
        config.convert.idprefix = prefix;
    }
    if let Some(suffix) = take_override(extra_params, &["outfilesuffix", "suffix"]) {
        config.convert.outfilesuffix = suffix;
    }
    if let Some(raw) = take_override(extra_params, &["multiline", "multiline-tables"]) {
        config.convert.tables.multiline = parse_bool_arg("multiline", &raw);
    }
    if let Some(width) = extra_params.remove("video-width") {
        config.convert.video.width = width;
    }
    if let Some(height) = extra_params.remove("video-height") {
        config.convert.video.height = height;
    }
    if let Some(level) = take_override(extra_params, &["log-level", "log"]) {
        config.logging.level = level;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let (cleaned, extra) = parse_extra_args(&args(&["mdpp", "tree.json"]));
        assert_eq!(cleaned, args(&["mdpp", "tree.json"]));
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_value_and_flag() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "mdpp",
            "tree.json",
            "--extra-idprefix",
            "sec-",
            "--extra-multiline",
            "-o",
            "out.md",
        ]));
        assert_eq!(cleaned, args(&["mdpp", "tree.json", "-o", "out.md"]));
        assert_eq!(extra.get("idprefix"), Some(&"sec-".to_string()));
        assert_eq!(extra.get("multiline"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let (_, extra) = parse_extra_args(&args(&["mdpp", "tree.json", "--extra-multiline"]));
        assert_eq!(extra.get("multiline"), Some(&"true".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("idprefix".to_string(), "sec-".to_string());
        extras.insert("multiline".to_string(), "no".to_string());
        extras.insert("video-width".to_string(), "800".to_string());
        extras.insert("suffix".to_string(), ".mdpp".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.convert.idprefix, "sec-");
        assert!(!config.convert.tables.multiline);
        assert_eq!(config.convert.video.width, "800");
        assert_eq!(config.convert.outfilesuffix, ".mdpp");
        assert!(extras.is_empty());
    }

    #[test]
    fn apply_config_overrides_leaves_unknown_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("theme".to_string(), "dark".to_string());
        apply_config_overrides(&mut config, &mut extras);
        assert!(extras.contains_key("theme"));
    }

    #[test]
    fn log_directive_precedence() {
        assert_eq!(log_directive(0, None, "warn"), "warn");
        assert_eq!(log_directive(0, Some("mdpp_convert=debug"), "warn"), "mdpp_convert=debug");
        assert_eq!(log_directive(0, Some("  "), "error"), "error");
        assert_eq!(log_directive(1, Some("error"), "warn"), "debug");
        assert_eq!(log_directive(3, None, "warn"), "trace");
    }

    #[test]
    fn backend_selection() {
        assert_eq!(select_backend(Some("custom"), Some("out.md")), "custom");
        assert_eq!(select_backend(None, Some("out.md")), "mdpp");
        assert_eq!(select_backend(None, Some("out.unknown")), "mdpp");
        assert_eq!(select_backend(None, None), "mdpp");
    }
}
