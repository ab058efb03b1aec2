mod repl;

use std::io::{self, BufRead, IsTerminal};

use clap::Parser;

use repl::Shell;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interactive registration form shell",
    long_about = "Line-oriented shell over the registration form engine: edit fields, \
                  toggle the student/working sections, manage repeated entries, and submit."
)]
struct Cli {
    /// Echo the full form state after every command.
    #[arg(long, alias = "debug")]
    verbose: bool,
    /// Print the accepted payload as JSON after a successful submit.
    #[arg(long)]
    json: bool,
}

fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("regform shell; type 'help' for the command list.");
    }

    let mut shell = Shell::new(cli.verbose, cli.json);
    for line in stdin.lock().lines() {
        if !shell.handle_line(&line?) {
            break;
        }
    }
    Ok(())
}
