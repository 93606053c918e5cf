use anyhow::{Context, Result};
use plainmark_config::Config;
use plainmark_engine::{format, io};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::{env, process};

#[derive(Debug, Default, PartialEq, Eq)]
struct Invocation {
    /// Files given on the command line.
    paths: Vec<PathBuf>,
    /// `-` was given: read the document from stdin.
    stdin: bool,
    /// Print HTML instead of writing files next to the inputs.
    to_stdout: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut invocation = Invocation::default();

    for arg in args {
        match arg.as_str() {
            "-" => invocation.stdin = true,
            "--stdout" => invocation.to_stdout = true,
            "-h" | "--help" => invocation.help = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option '{flag}'")),
            path => invocation.paths.push(PathBuf::from(path)),
        }
    }

    if invocation.stdin && !invocation.paths.is_empty() {
        return Err("'-' cannot be combined with file paths".to_string());
    }

    Ok(invocation)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--stdout] [FILE...]\n\
         \n\
         Converts plainmark documents to HTML.\n\
         With no FILE, converts the inputs listed in {} or, if none, reads stdin.\n\
         A FILE of '-' reads stdin. HTML goes to stdout for stdin input or with --stdout.",
        Config::config_path().display()
    )
}

fn convert_stdin() -> Result<()> {
    let mut plain = String::new();
    std::io::stdin()
        .read_to_string(&mut plain)
        .context("Failed to read stdin")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", format(&plain)).context("Failed to write stdout")?;
    Ok(())
}

fn print_file(path: &Path) -> Result<()> {
    let plain = io::read_document(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", format(&plain)).context("Failed to write stdout")?;
    Ok(())
}

fn run(invocation: Invocation) -> Result<()> {
    if invocation.stdin {
        return convert_stdin();
    }

    let config = Config::load()
        .context("Failed to load config file")?
        .unwrap_or_default();

    let inputs = if invocation.paths.is_empty() {
        log::info!("No paths given, using inputs from config");
        config.resolve_inputs().context("Failed to resolve config inputs")?
    } else {
        invocation.paths
    };

    if inputs.is_empty() {
        return convert_stdin();
    }

    for input in &inputs {
        if invocation.to_stdout {
            print_file(input)?;
            continue;
        }

        let output = io::output_path_for(input, config.output_dir.as_deref(), &config.extension);
        io::convert_file(input, &output)
            .with_context(|| format!("Failed to convert '{}'", input.display()))?;
        log::info!("Wrote {}", output.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("plainmark-cli");

    let invocation = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(2);
        }
    };

    if invocation.help {
        println!("{}", usage(program));
        return;
    }

    if let Err(e) = run(invocation) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
