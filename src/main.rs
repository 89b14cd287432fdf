mod debug_report;

use std::io::{self, IsTerminal, Read};

use tartil::{Engine, Options, Tradition};

const LOG_ENV: &str = "TARTIL_LOG";

fn main() {
    init_logging("warn");

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let engine = match Engine::new(config.tradition) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let run = engine.annotate_verbose_with(&config.input, &Options::default());

    match config.mode {
        Mode::Report => println!("{}", run.result.report(config.detailed)),
        Mode::Json => match serde_json::to_string_pretty(&run.result.analysis()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize analysis: {err}");
                std::process::exit(1);
            }
        },
        Mode::Verbose => debug_report::print_run(&config.input, &run, config.color),
    }
}

fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).compact().try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Report,
    Json,
    Verbose,
}

struct CliConfig {
    input: String,
    tradition: Tradition,
    mode: Mode,
    detailed: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut tradition = Tradition::default();
    let mut mode = Mode::Report;
    let mut detailed = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tartil {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-d" | "--detailed" => detailed = true,
            "--json" => mode = Mode::Json,
            "-v" | "--verbose" => mode = Mode::Verbose,
            "--color" => color = true,
            "--no-color" => color = false,
            "--tradition" => {
                let value = args.next().ok_or_else(|| "error: --tradition expects a value".to_string())?;
                tradition = parse_tradition(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(value, &mut input)?;
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(rest, &mut input)?;
                }
                break;
            }
            _ if arg.starts_with("--tradition=") => {
                tradition = parse_tradition(arg.trim_start_matches("--tradition="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(arg.trim_start_matches("--input=").to_string(), &mut input)?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                set_input(rest, &mut input)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, tradition, mode, detailed, color })
}

fn set_input(value: String, input: &mut Option<String>) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn parse_tradition(value: &str) -> Result<Tradition, String> {
    value.parse().map_err(|err| format!("error: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "tartil {version}

Tajweed annotation engine CLI.

Usage:
  tartil [OPTIONS] [--] <text...>
  tartil [OPTIONS] --input <text>

Options:
  -i, --input <text>         Text to annotate. If omitted, reads remaining args
                             or stdin when no args are provided.
  --tradition <tag>          Recitation tradition. Default: {tradition}
  -d, --detailed             Add the per-application table to the report.
  --json                     Print the verse analysis as JSON.
  -v, --verbose              Print the per-position breakdown and run metrics.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                 Log filter (e.g. debug, tartil=trace). Default: warn

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        tradition = Tradition::default(),
        log_env = LOG_ENV,
    )
}
