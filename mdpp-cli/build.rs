use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs; build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdpp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render AsciiDoc document trees as Markdown++")
        .arg_required_else_help(true)
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
                        .help("Output backend")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdpp", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdpp", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdpp", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
