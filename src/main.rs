use clap::Parser;
use dialect_dispatch::cli::args::Cli;
use dialect_dispatch::cli::dispatch::handle;

fn main() {
    let cli = Cli::parse();
    handle(cli);
}
