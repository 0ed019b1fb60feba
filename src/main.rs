use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use std::env;
use std::fs;
use std::io::{self, Write};
use turing_tarpit::Interpreter;
use turing_tarpit::cli_util::print_run_error;

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} "<code>"          # Run program source (args are concatenated)
  {0} --file <PATH>     # Run program source loaded from file

Options:
  --file, -f <PATH>  Read program source from PATH instead of positional "<code>"
  --help, -h         Show this help

Notes:
- Input (`,`) reads a single raw byte; a zero byte means "no input available"
  and leaves the current cell untouched.
- Characters outside of ><+-.,[] are treated as comments and skipped.

Examples:
- Run source from a file:
    {0} --file ./program.tarpit
- Echo the first byte of a file (`,` will consume file input):
    {0} ",." < input.txt
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "tarpit", disable_help_flag = true, disable_help_subcommand = true)]
struct Cli {
    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,

    /// Read program source from PATH instead of positional "<code>"
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Concatenated program source parts
    #[arg(value_name = "code", trailing_var_arg = true)]
    code: Vec<String>,
}

fn run(program: &str, source: &str) -> i32 {
    // `,` wants unbuffered, no-echo, single-byte reads when stdin is a
    // terminal; piped stdin already behaves that way.
    let raw_input = io::stdin().is_tty();
    if raw_input {
        if let Err(e) = enable_raw_mode() {
            eprintln!("{program}: failed to enable raw terminal mode: {e}");
            let _ = io::stderr().flush();
            return 1;
        }
    }

    let mut interpreter = Interpreter::from_source(source);
    let result = interpreter.run();

    if raw_input {
        let _ = disable_raw_mode();
    }

    if let Err(err) = result {
        print_run_error(Some(program), source, &err);
        let _ = io::stderr().flush();
        return 1;
    }

    // For readability, ensure output ends with a newline
    println!();
    let _ = io::stdout().flush();
    0
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("tarpit"));

    let cli = Cli::parse();

    if cli.help {
        usage_and_exit(&program, 0);
    }

    let Cli { file, code, .. } = cli;

    if file.is_none() && code.is_empty() {
        usage_and_exit(&program, 2);
    }

    if file.is_some() && !code.is_empty() {
        eprintln!("{program}: cannot use positional code together with --file");
        usage_and_exit(&program, 2);
    }

    let source = if let Some(path) = file {
        match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{program}: failed to read source file as UTF-8: {e}");
                let _ = io::stderr().flush();
                std::process::exit(1);
            }
        }
    } else {
        code.join("")
    };

    // Restore the terminal before leaving on ctrl+c. While raw mode is active
    // ctrl+c arrives as an input byte instead of a signal, so the handler
    // only fires for piped or non-raw runs.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(130);
    }) {
        eprintln!("{program}: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
    }

    std::process::exit(run(&program, &source));
}
