use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use country_lookup::{Client, Debouncer, LogNotifier, SearchController};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "country-lookup",
    version,
    about = "Search countries by name and show a detail card or match list"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one search and print the rendered result.
    Lookup(LookupArgs),
    /// Read queries line by line from stdin (debounced). A line like `#2`
    /// selects entry 2 of the current match list; EOF exits.
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// Name fragment to search for (e.g. "fra")
    name: String,
}

#[derive(Args, Debug)]
struct InteractiveArgs {
    /// Quiet period between keystrokes, in milliseconds.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Lookup(args) => cmd_lookup(args),
        Command::Interactive(args) => cmd_interactive(args),
    }
}

fn new_controller(delay_ms: u64) -> SearchController<Client, LogNotifier> {
    let debouncer = Debouncer::new(std::time::Duration::from_millis(delay_ms));
    SearchController::new(Client::default(), LogNotifier, debouncer)
}

fn print_views(controller: &SearchController<Client, LogNotifier>) {
    let renderer = controller.renderer();
    if !renderer.detail_view().is_empty() {
        println!("{}", renderer.detail_view().html());
    } else if !renderer.list_view().is_empty() {
        println!("{}", renderer.list_view().html());
        eprintln!("{} matches; select one with #<index>", renderer.listed_len());
    } else {
        eprintln!("No match.");
    }
}

fn cmd_lookup(args: LookupArgs) -> Result<()> {
    let mut controller = new_controller(0);
    controller.on_query_changed(&args.name);
    print_views(&controller);
    Ok(())
}

fn cmd_interactive(args: InteractiveArgs) -> Result<()> {
    let mut controller = new_controller(args.delay_ms);
    let stdin = io::stdin();
    let mut out = io::stderr();

    writeln!(out, "Type a country name fragment (Ctrl-D to quit):")?;
    for line in stdin.lock().lines() {
        let line = line?;

        // `#N` selects from the current list instead of searching.
        if let Some(rest) = line.trim().strip_prefix('#') {
            match rest.parse::<usize>() {
                Ok(i) if controller.select(i) => print_views(&controller),
                _ => writeln!(out, "No such entry: {rest}")?,
            }
            continue;
        }

        controller.input(&line, Instant::now());
        // stdin lines arrive settled; wait out the quiet period and run.
        thread::sleep(controller.debouncer().delay());
        if controller.tick(Instant::now()) {
            print_views(&controller);
        }
    }
    Ok(())
}
