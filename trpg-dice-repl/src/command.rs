use crate::config::Config;
use rand::Rng;
use std::collections::HashSet;
use trpg_dice_lib::check;
use trpg_dice_lib::check::Advantage;
use trpg_dice_lib::dice::Critic;
use trpg_dice_lib::roll;
use trpg_dice_lib::solver::RandomSource;
use trpg_dice_lib::solver::Solver;

const BATCH_SIGIL: char = '#';
const DEFAULT_DIFFICULTY: u64 = 6;
const SPECIALIZATION_FLAG: &str = "s";
const DEFAULT_CONTEST_EXPR: &str = "d20";

pub(crate) const HELP: &str = "\
`<expr>` roll, e.g. `4d6k3`, `2d10+5`, `(2d6+6)x5`, `d20`
`<n>#<expr>` roll `n` times with min, max and average
`adv [expr]` / `dis [expr]` roll twice, keep the higher / lower, `d20` by default
`coc <skill>` percentile skill check
`wod <pool> [difficulty] [s]` d10 success pool, `s` for specialization";

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Roll(String),
    Batch(u64, String),
    Contest(Advantage, String),
    Coc(u64),
    Pool {
        size: u64,
        difficulty: u64,
        specialization: bool,
    },
}

fn number(word: Option<&str>, usage: &str) -> Result<u64, String> {
    word.and_then(|w| w.parse::<u64>().ok())
        .ok_or_else(|| format!("**usage** `{usage}`"))
}

/// A bare `adv` / `dis` rolls a d20
fn contest_expr(rest: &str) -> String {
    if rest.is_empty() {
        DEFAULT_CONTEST_EXPR.to_owned()
    } else {
        rest.to_owned()
    }
}

impl Command {
    pub(crate) fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head.to_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "adv" => Ok(Command::Contest(Advantage::Advantage, contest_expr(rest))),
            "dis" => Ok(Command::Contest(Advantage::Disadvantage, contest_expr(rest))),
            "coc" => Ok(Command::Coc(number(Some(rest), "coc <skill>")?)),
            "wod" => {
                let usage = "wod <pool> [difficulty] [s]";
                let mut words = rest.split_whitespace();
                let size = number(words.next(), usage)?;
                let mut difficulty = DEFAULT_DIFFICULTY;
                let mut specialization = false;
                for word in words {
                    if word.eq_ignore_ascii_case(SPECIALIZATION_FLAG) {
                        specialization = true;
                    } else {
                        difficulty = number(Some(word), usage)?;
                    }
                }
                Ok(Command::Pool {
                    size,
                    difficulty,
                    specialization,
                })
            }
            _ => match line.split_once(BATCH_SIGIL) {
                Some((n, expr)) => Ok(Command::Batch(
                    number(Some(n.trim()), "<n>#<expr>")?,
                    expr.trim().to_owned(),
                )),
                None => Ok(Command::Roll(line.to_owned())),
            },
        }
    }

    /// Run the command, rendering either the result or the error
    pub(crate) fn execute<R: Rng>(&self, config: &Config, rng: &mut R) -> Result<String, String> {
        let limits = &config.limits;
        let source = &mut RandomSource { generator: rng };
        match self {
            Command::Help => Ok(HELP.to_owned()),
            Command::Roll(expr) => {
                let result = Solver::new(expr, limits)
                    .map_err(format_error)?
                    .solve_with_source(source);
                Ok(with_critics(result.to_string(), critics(&result), config))
            }
            Command::Batch(n, expr) => {
                let result = Solver::new(expr, limits)
                    .and_then(|solver| solver.solve_batch_with_source(*n, source))
                    .map_err(format_error)?;
                Ok(with_critics(result.to_string(), critics(&result), config))
            }
            Command::Contest(mode, expr) => {
                let contest = Solver::new(expr, limits)
                    .map_err(format_error)?
                    .solve_advantage(*mode, source);
                let critics = contest.chosen.critics();
                Ok(with_critics(contest.to_string(), critics, config))
            }
            Command::Coc(skill) => Ok(check::coc(*skill, source).to_string()),
            Command::Pool {
                size,
                difficulty,
                specialization,
            } => check::pool(*size, *difficulty, *specialization, limits, source)
                .map(|pool| pool.to_string())
                .map_err(format_error),
        }
    }
}

fn format_error(error: trpg_dice_lib::Error) -> String {
    format!("**error** *{}*", error)
}

fn critics(result: &roll::Result) -> HashSet<Critic> {
    match result.get_result() {
        roll::Kind::Single(single) => single.critics(),
        roll::Kind::Batch(batch) => batch.iter().flat_map(|r| r.critics()).collect(),
    }
}

fn with_critics(mut text: String, critics: HashSet<Critic>, config: &Config) -> String {
    if config.critical_effects {
        if critics.contains(&Critic::Max) {
            text.push_str("\n*critical success!*");
        }
        if critics.contains(&Critic::Min) {
            text.push_str("\n*critical failure!*");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::Command;
    use crate::config::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use trpg_dice_lib::check::Advantage;

    #[test]
    fn parse_roll_test() {
        assert_eq!(Ok(Command::Roll("4d6k3".to_owned())), Command::parse(" 4d6k3 "));
        assert_eq!(
            Ok(Command::Roll("(2d6 + 6) x 5".to_owned())),
            Command::parse("(2d6 + 6) x 5")
        );
    }

    #[test]
    fn parse_batch_test() {
        assert_eq!(
            Ok(Command::Batch(6, "4d6k3".to_owned())),
            Command::parse("6 # 4d6k3")
        );
        assert!(Command::parse("a#4d6").is_err());
    }

    #[test]
    fn parse_checks_test() {
        assert_eq!(
            Ok(Command::Contest(Advantage::Disadvantage, "d20+2".to_owned())),
            Command::parse("dis d20+2")
        );
        assert_eq!(
            Ok(Command::Contest(Advantage::Advantage, "d20".to_owned())),
            Command::parse("adv")
        );
        assert_eq!(
            Ok(Command::Contest(Advantage::Disadvantage, "d20".to_owned())),
            Command::parse(" dis  ")
        );
        assert_eq!(Ok(Command::Coc(65)), Command::parse("COC 65"));
        assert!(Command::parse("coc").is_err());
        assert_eq!(
            Ok(Command::Pool {
                size: 7,
                difficulty: 8,
                specialization: true
            }),
            Command::parse("wod 7 8 s")
        );
        assert_eq!(
            Ok(Command::Pool {
                size: 3,
                difficulty: 6,
                specialization: false
            }),
            Command::parse("wod 3")
        );
        assert_eq!(Ok(Command::Help), Command::parse("help"));
    }

    #[test]
    fn execute_test() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(3);
        let out = Command::parse("4d6k3")
            .unwrap()
            .execute(&config, &mut rng)
            .unwrap();
        assert!(out.starts_with("`4d6k3` ["));

        let out = Command::parse("3#d20").unwrap().execute(&config, &mut rng).unwrap();
        assert!(out.contains("*average*"));

        let out = Command::parse("adv").unwrap().execute(&config, &mut rng).unwrap();
        assert!(out.starts_with("*advantage*\n`1d20` ["));

        let err = Command::parse("2d6+3d8")
            .unwrap()
            .execute(&config, &mut rng)
            .unwrap_err();
        assert_eq!("**error** *only one dice term is allowed at position 5*", err);

        let err = Command::parse("0#d20")
            .unwrap()
            .execute(&config, &mut rng)
            .unwrap_err();
        assert_eq!("**error** *repeat count 0 is out of range (1..=100)*", err);
    }

    #[test]
    fn critical_effects_test() {
        let mut config = Config::default();
        let mut rng = StdRng::seed_from_u64(1);
        let out = Command::parse("1d1").unwrap().execute(&config, &mut rng).unwrap();
        assert!(out.contains("*critical success!*"));

        config.critical_effects = false;
        let out = Command::parse("1d1").unwrap().execute(&config, &mut rng).unwrap();
        assert!(!out.contains("critical"));
    }
}
