mod cli;
mod command;
mod config;
mod helper;

use cli::Parser;
use colored::Colorize;
use command::Command;
use config::Config;
use helper::ReplHelper;
use rustyline::error::ReadlineError;
use rustyline::highlight::MatchingBracketHighlighter;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::EditMode;
use rustyline::Editor;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::Level;
use tracing_unwrap::OptionExt;
use tracing_unwrap::ResultExt;

#[tracing::instrument]
fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let config = Config::load(args.config.as_deref()).expect_or_log("Could not load config");
    run(&config).expect_or_log("repl: error");
}

fn run(config: &Config) -> rustyline::Result<()> {
    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        highlighter: MatchingBracketHighlighter::new(),
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(rl_config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&config.history_file).is_err() {
        tracing::warn!("no previous history");
    }
    let mut rng = rand::thread_rng();
    let mut count = 1u64;
    loop {
        let prompt = format!("roll: {}> ", count);
        rline.helper_mut().unwrap_or_log().colored = prompt.bold().green().to_string();
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if !line.trim().is_empty() {
                    match Command::parse(&line).and_then(|c| c.execute(config, &mut rng)) {
                        Ok(out) => println!("{}", skin.text(&out, None)),
                        Err(error) => eprintln!("{}", skin.inline(&error).to_string().red()),
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                tracing::info!("signal: CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                tracing::info!("signal: CTRL-D");
                break;
            }
            Err(error) => {
                tracing::error!(?error, "readline failed");
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&config.history_file)
}
