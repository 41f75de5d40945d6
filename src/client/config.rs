use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;
use crate::PList;

/// Time given to a solver to exit on its own once its input is closed.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(500);

/// How to start a solver process.
#[derive(Clone, Debug)]
pub struct Config {
	/// Solver executable, looked up in `PATH` if relative.
	pub program: PathBuf,

	/// Command line arguments. The solver must read SMT-LIB 2 commands on
	/// its standard input.
	pub args: Vec<String>,

	/// Delay after which a solver still running on close is killed.
	pub grace_period: Duration
}

impl Config {
	pub fn new<P: Into<PathBuf>>(program: P) -> Config {
		Config {
			program: program.into(),
			args: Vec::new(),
			grace_period: DEFAULT_GRACE_PERIOD
		}
	}

	/// Z3, reading from its standard input.
	pub fn z3() -> Config {
		Config::new("z3").args(&["-in", "-smt2"])
	}

	/// CVC4 in incremental mode, with models enabled.
	pub fn cvc4() -> Config {
		Config::new("cvc4").args(&["--lang", "smt2", "--incremental", "--produce-models"])
	}

	pub fn arg<S: ToString>(mut self, arg: S) -> Config {
		self.args.push(arg.to_string());
		self
	}

	pub fn args<S: ToString>(mut self, args: &[S]) -> Config {
		self.args.extend(args.iter().map(ToString::to_string));
		self
	}

	pub fn grace_period(mut self, grace_period: Duration) -> Config {
		self.grace_period = grace_period;
		self
	}

	/// Process builder with standard input and output piped, and standard
	/// error discarded.
	pub fn command(&self) -> Command {
		let mut cmd = Command::new(&self.program);
		cmd.args(&self.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::null());
		cmd
	}
}

impl fmt::Display for Config {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.args.is_empty() {
			write!(f, "{}", self.program.display())
		} else {
			write!(f, "{} {}", self.program.display(), PList(&self.args))
		}
	}
}
