use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const REPL_AUTHOR: &str = crate_authors!();
const REPL_VERSION: &str = crate_version!();
const REPL_ABOUT: &str = crate_description!();
const REPL_FLAG_D_SHORT: char = 'd';
const REPL_FLAG_D_HELP: &str = "Enable Debug logging";
const REPL_FLAG_C_SHORT: char = 'c';
const REPL_FLAG_C_HELP: &str = "RON file with limits and display settings";

#[derive(Parser, Debug)]
#[command(author = REPL_AUTHOR, version = REPL_VERSION, about = REPL_ABOUT)]
pub struct Args {
    #[arg(short = REPL_FLAG_D_SHORT, long, help = REPL_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = REPL_FLAG_C_SHORT, long, help = REPL_FLAG_C_HELP)]
    pub config: Option<PathBuf>,
}
