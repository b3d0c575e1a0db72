use crate::check;
use crate::check::Advantage;
use crate::dice::RollSpec;
use crate::error::Result;
use crate::evaluator;
use crate::limits::Limits;
use crate::parser;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Either raw text or an already built spec
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Text(&'a str),
    Spec(RollSpec),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(value)
    }
}

impl From<RollSpec> for Input<'_> {
    fn from(value: RollSpec) -> Self {
        Input::Spec(value)
    }
}

/// Roll `input` once, or `batch` times, with the thread local generator
pub fn roll<'a, I: Into<Input<'a>>>(
    input: I,
    batch: Option<u64>,
    limits: &Limits,
) -> Result<roll::Result> {
    roll_with_source(
        input,
        batch,
        limits,
        &mut RandomSource {
            generator: &mut rand::thread_rng(),
        },
    )
}

/// Roll `input` once, or `batch` times, using the provided source
pub fn roll_with_source<'a, I: Into<Input<'a>>, S: roll::Source>(
    input: I,
    batch: Option<u64>,
    limits: &Limits,
    source: &mut S,
) -> Result<roll::Result> {
    let solver = Solver::from_input(input.into(), limits)?;
    match batch {
        Some(n) => solver.solve_batch_with_source(n, source),
        None => Ok(solver.solve_with_source(source)),
    }
}

/// Represent a solver and holds the validated roll spec
#[derive(Clone, Debug)]
pub struct Solver {
    spec: RollSpec,
    limits: Limits,
}

impl Solver {
    /// Parse `input` against `limits`
    pub fn new(input: &str, limits: &Limits) -> Result<Self> {
        Ok(Solver {
            spec: parser::parse_expression(input, limits)?,
            limits: *limits,
        })
    }

    /// Wrap a spec built elsewhere, checking it against `limits`
    pub fn with_spec(spec: RollSpec, limits: &Limits) -> Result<Self> {
        spec.validate(limits)?;
        Ok(Solver {
            spec,
            limits: *limits,
        })
    }

    fn from_input(input: Input, limits: &Limits) -> Result<Self> {
        match input {
            Input::Text(text) => Self::new(text, limits),
            Input::Spec(spec) => Self::with_spec(spec, limits),
        }
    }

    /// Solve the roll expression using the default Rng source
    pub fn solve(&self) -> roll::Result {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<G: Rng>(&self, generator: &mut G) -> roll::Result {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> roll::Result {
        roll::Result::new_single(evaluator::evaluate(&self.spec, source))
    }

    /// Solve the roll expression `n` times using the default Rng source
    pub fn solve_batch(&self, n: u64) -> Result<roll::Result> {
        self.solve_batch_with_source(
            n,
            &mut RandomSource {
                generator: &mut rand::thread_rng(),
            },
        )
    }

    /// Solve the roll expression `n` times using the provided source
    pub fn solve_batch_with_source<S: roll::Source>(
        &self,
        n: u64,
        source: &mut S,
    ) -> Result<roll::Result> {
        evaluator::evaluate_batch(&self.spec, n, &self.limits, source).map(roll::Result::new_batch)
    }

    /// Roll twice keeping the higher or lower total
    pub fn solve_advantage<S: roll::Source>(&self, mode: Advantage, source: &mut S) -> check::Contest {
        check::contest(&self.spec, mode, source)
    }

    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}
