//! Benchmark cases and their argument variants.

use std::fmt;

use crate::constants::{FLOAT_ARG_PRECISION, INT_ARG_WIDTH};
use crate::trial::{TimingMode, Trial};

/// Argument passed to a benchmark body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
    /// The case is not parameterized.
    None,
    Int(i64),
    Float(f64),
}

impl Arg {
    /// Rendering used as the display-name suffix, if any.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Int(v) => Some(format!("{v:0width$}", width = INT_ARG_WIDTH)),
            Self::Float(v) => Some(format!("{v:.prec$}", prec = FLOAT_ARG_PRECISION)),
        }
    }

    /// The integer value, if this is an integer argument.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The floating-point value, if this is a floating-point argument.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// A benchmark body: performs `trial.iterations()` units of work.
pub type BenchFn = Box<dyn Fn(&mut Trial<'_>, Arg)>;

/// A named, optionally parameterized benchmark.
pub struct BenchmarkCase {
    name: String,
    args: Vec<Arg>,
    mode: TimingMode,
    body: BenchFn,
}

impl BenchmarkCase {
    /// Create an unparameterized case.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Trial<'_>, Arg) + 'static,
    {
        Self {
            name: name.into(),
            args: vec![Arg::None],
            mode: TimingMode::default(),
            body: Box::new(body),
        }
    }

    /// Run the case once per integer argument.
    #[must_use]
    pub fn with_int_args(mut self, args: impl IntoIterator<Item = i64>) -> Self {
        self.args = args.into_iter().map(Arg::Int).collect();
        self
    }

    /// Run the case once per floating-point argument.
    #[must_use]
    pub fn with_float_args(mut self, args: impl IntoIterator<Item = f64>) -> Self {
        self.args = args.into_iter().map(Arg::Float).collect();
        self
    }

    /// Select how trials of this case accumulate time.
    #[must_use]
    pub fn with_mode(mut self, mode: TimingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Base name, without any argument suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments to run with, in registration order.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[must_use]
    pub fn mode(&self) -> TimingMode {
        self.mode
    }

    /// Display name of this case with `arg`: `name` or `name/arg`.
    #[must_use]
    pub fn display_name(&self, arg: Arg) -> String {
        match arg.render() {
            Some(suffix) => format!("{}/{suffix}", self.name),
            None => self.name.clone(),
        }
    }

    /// Widest display name over all arguments, in characters.
    #[must_use]
    pub fn name_column_width(&self) -> usize {
        self.args
            .iter()
            .map(|&arg| self.display_name(arg).chars().count())
            .max()
            .unwrap_or_else(|| self.name.chars().count())
    }

    /// Invoke the body for one trial.
    pub fn run(&self, trial: &mut Trial<'_>, arg: Arg) {
        (self.body)(trial, arg);
    }
}

impl fmt::Debug for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
