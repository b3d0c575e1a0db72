use crate::dice::RollSpec;
use crate::error::Error;
use crate::error::Field;
use crate::error::Result;
use crate::evaluator;
use crate::limits::Limits;
use crate::roll;
use crate::roll::RollResult;
use itertools::Itertools;

/// Roll twice and keep the better or the worse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    Advantage,
    Disadvantage,
}

/// Two rolls of the same [`RollSpec`], one of which was chosen
#[derive(Debug, Clone)]
pub struct Contest {
    pub mode: Advantage,
    pub chosen: RollResult,
    pub other: RollResult,
}

/// Ties keep the first roll
pub fn contest<S: roll::Source>(spec: &RollSpec, mode: Advantage, source: &mut S) -> Contest {
    let first = evaluator::evaluate(spec, source);
    let second = evaluator::evaluate(spec, source);
    let first_wins = match mode {
        Advantage::Advantage => first.get_total() >= second.get_total(),
        Advantage::Disadvantage => first.get_total() <= second.get_total(),
    };
    let (chosen, other) = if first_wins {
        (first, second)
    } else {
        (second, first)
    };
    Contest {
        mode,
        chosen,
        other,
    }
}

impl std::fmt::Display for Contest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.mode {
            Advantage::Advantage => "advantage",
            Advantage::Disadvantage => "disadvantage",
        };
        writeln!(f, "*{mode}*")?;
        writeln!(f, "{}", self.chosen)?;
        write!(f, "~~{}~~", self.other.get_total())
    }
}

/// Degree of success of a percentile skill check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Critical,
    Extreme,
    Hard,
    Regular,
    Failure,
    Fumble,
}

impl Level {
    pub fn is_success(&self) -> bool {
        !matches!(self, Level::Failure | Level::Fumble)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Critical => "critical success",
            Level::Extreme => "extreme success",
            Level::Hard => "hard success",
            Level::Regular => "success",
            Level::Failure => "failure",
            Level::Fumble => "fumble",
        };
        write!(f, "{name}")
    }
}

/// Outcome of a percentile skill check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCheck {
    pub roll: u64,
    pub skill: u64,
    pub level: Level,
}

/// Call of Cthulhu style d100 check against `skill`
pub fn coc<S: roll::Source>(skill: u64, source: &mut S) -> SkillCheck {
    let roll = source.throw(100);
    let level = match roll {
        1 => Level::Critical,
        100 => Level::Fumble,
        r if r >= 96 && skill < 50 => Level::Fumble,
        r if r <= skill / 5 => Level::Extreme,
        r if r <= skill / 2 => Level::Hard,
        r if r <= skill => Level::Regular,
        _ => Level::Failure,
    };
    SkillCheck { roll, skill, level }
}

impl std::fmt::Display for SkillCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`1d100` [{}] against **{}** = *{}*",
            self.roll, self.skill, self.level
        )
    }
}

/// Outcome of a success counting dice pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCheck {
    pub rolls: Vec<u64>,
    pub difficulty: u64,
    pub successes: u64,
    pub ones: u64,
    pub botch: bool,
}

const POOL_SIDES: u64 = 10;

/// World of Darkness style pool of d10 against `difficulty`
///
/// With `specialization` a ten scores twice. No success and at least one
/// one is a botch, and so is an empty pool.
pub fn pool<S: roll::Source>(
    size: u64,
    difficulty: u64,
    specialization: bool,
    limits: &Limits,
    source: &mut S,
) -> Result<PoolCheck> {
    if size > limits.max_dice_count {
        return Err(Error::range(Field::Count, size, limits.max_dice_count));
    }
    if difficulty == 0 || difficulty > POOL_SIDES {
        return Err(Error::range(Field::Difficulty, difficulty, POOL_SIDES));
    }
    let rolls: Vec<u64> = evaluator::roll(size, POOL_SIDES, source)
        .into_iter()
        .map(|r| r.value)
        .collect();
    let (successes, ones) = rolls.iter().fold((0, 0), |(successes, ones), &r| {
        if r >= difficulty {
            let score = if specialization && r == POOL_SIDES { 2 } else { 1 };
            (successes + score, ones)
        } else if r == 1 {
            (successes, ones + 1)
        } else {
            (successes, ones)
        }
    });
    let botch = size == 0 || (successes == 0 && ones > 0);
    Ok(PoolCheck {
        rolls,
        difficulty,
        successes,
        ones,
        botch,
    })
}

impl std::fmt::Display for PoolCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}d10` [{}] difficulty **{}** = **{}** successes",
            self.rolls.len(),
            self.rolls.iter().format(", "),
            self.difficulty,
            self.successes
        )?;
        if self.botch {
            write!(f, " *botch*")?;
        }
        Ok(())
    }
}
