use std::io::{self, Read, Write, BufReader};
use std::process::{Child, ChildStdin, ChildStdout};
use std::thread;
use std::time::{Duration, Instant};
use crate::{Identifier, Sort, Term, Satisfiable, Sexp, ident_to_sexp, sort_to_sexp, term_to_sexp};
use crate::syntax::{Parser, ReaderSource};

pub mod error;
pub mod config;
pub mod model;

pub use error::{Error, Result};
pub use config::Config;
pub use model::Model;

/// Delay between two checks of a closing solver process.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// SMT-LIB 2 solver session.
///
/// Every request gets exactly one reply, read from the same stream in the
/// order the requests were sent. The solver is expected to run with
/// `:print-success` enabled, so that commands that return nothing still
/// reply `success`.
///
/// Only `command` and `close` are transport specific, the other methods are
/// derived from them.
pub trait Solver {
	/// Send a command and return the reply as is.
	fn command(&mut self, command: &Sexp) -> Result<Sexp>;

	/// Release the solver. Calling it twice has no effect, and every
	/// command sent after it fails with `Error::Closed`.
	fn close(&mut self);

	fn declare_const(&mut self, id: &Identifier, sort: &Sort) -> Result<()> {
		execute(self, Sexp::list(vec![
			Sexp::symbol("declare-const"),
			ident_to_sexp(id),
			sort_to_sexp(sort)
		]))
	}

	fn declare_fun(&mut self, id: &Identifier, args: &[Sort], result: &Sort) -> Result<()> {
		execute(self, Sexp::list(vec![
			Sexp::symbol("declare-fun"),
			ident_to_sexp(id),
			Sexp::List(args.iter().map(sort_to_sexp).collect()),
			sort_to_sexp(result)
		]))
	}

	fn assert(&mut self, term: &Term) -> Result<()> {
		execute(self, Sexp::list(vec![Sexp::symbol("assert"), term_to_sexp(term)]))
	}

	fn check_sat(&mut self) -> Result<Satisfiable> {
		let command = Sexp::list(vec![Sexp::symbol("check-sat")]);
		let reply = query(self, &command)?;
		match reply.as_symbol().and_then(Satisfiable::from_symbol) {
			Some(sat) => Ok(sat),
			None => Err(Error::protocol(&command, reply))
		}
	}

	/// Values of the constants in the last satisfiable context.
	///
	/// Entries that are not constant definitions with a literal value are
	/// skipped with a warning.
	fn get_model(&mut self) -> Result<Model> {
		let command = Sexp::list(vec![Sexp::symbol("get-model")]);
		let reply = query(self, &command)?;
		match model::decode(&reply) {
			Some(model) => Ok(model),
			None => Err(Error::protocol(&command, reply))
		}
	}

	/// Open a new assertion scope.
	///
	/// # Panics
	///
	/// Panics if the solver does not acknowledge the new scope: the
	/// assertions made afterward would end up in the wrong scope. Use
	/// `try_push` to handle the failure instead.
	fn push(&mut self) {
		if let Err(e) = self.try_push() {
			panic!("unable to push an assertion scope: {}", e)
		}
	}

	fn try_push(&mut self) -> Result<()> {
		execute(self, Sexp::list(vec![Sexp::symbol("push")]))
	}

	fn pop(&mut self) -> Result<()> {
		execute(self, Sexp::list(vec![Sexp::symbol("pop")]))
	}

	fn set_logic(&mut self, logic: &str) -> Result<()> {
		execute(self, Sexp::list(vec![Sexp::symbol("set-logic"), Sexp::symbol(logic)]))
	}

	/// Set the option `:name`.
	fn set_option(&mut self, name: &str, value: Sexp) -> Result<()> {
		execute(self, Sexp::list(vec![Sexp::symbol("set-option"), Sexp::keyword(name), value]))
	}

	/// Ask the solver to exit, then close.
	fn exit(&mut self) -> Result<()> {
		let result = match execute(self, Sexp::list(vec![Sexp::symbol("exit")])) {
			// Some solvers leave without a word.
			Err(Error::Closed) => Ok(()),
			result => result
		};

		self.close();
		result
	}
}

/// Message of an `(error "...")` reply.
fn server_error(reply: &Sexp) -> Option<&str> {
	match reply.as_list() {
		Some([head, Sexp::Str(message)]) if head.is_symbol("error") => Some(message),
		_ => None
	}
}

/// Send a query, and fail if the solver replies with an error.
fn query<S: Solver + ?Sized>(solver: &mut S, command: &Sexp) -> Result<Sexp> {
	let reply = solver.command(command)?;
	match server_error(&reply) {
		Some(message) => Err(Error::Server(message.to_string())),
		None => Ok(reply)
	}
}

/// Send a command that must be acknowledged with `success`.
fn execute<S: Solver + ?Sized>(solver: &mut S, command: Sexp) -> Result<()> {
	let reply = query(solver, &command)?;
	if reply.is_symbol("success") {
		Ok(())
	} else {
		Err(Error::protocol(&command, reply))
	}
}

/// Solver speaking through a pair of byte streams, usually the standard
/// input and output of a solver process.
pub struct Client<W: Write = ChildStdin, R: Read = BufReader<ChildStdout>> {
	input: Option<W>,
	output: Option<Parser<ReaderSource<R>>>,
	process: Option<Child>,
	grace_period: Duration
}

impl<W: Write, R: Read> Client<W, R> {
	/// Start a session over the given streams.
	///
	/// The output is read one byte at a time: buffer it if needed.
	pub fn new(input: W, output: R) -> Result<Client<W, R>> {
		Client {
			input: Some(input),
			output: Some(Parser::from_reader(output)),
			process: None,
			grace_period: config::DEFAULT_GRACE_PERIOD
		}.handshake()
	}

	/// Enable `:print-success`, on which the whole protocol relies.
	fn handshake(mut self) -> Result<Client<W, R>> {
		match self.set_option("print-success", Sexp::symbol("true")) {
			Ok(()) => Ok(self),
			Err(e) => {
				self.close();
				Err(e)
			}
		}
	}

	pub fn is_closed(&self) -> bool {
		self.input.is_none()
	}

	fn send(&mut self, command: &Sexp) -> io::Result<()> {
		match self.input.as_mut() {
			Some(input) => {
				write!(input, "{}\n", command)?;
				input.flush()
			},
			None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "solver input closed"))
		}
	}
}

impl Client {
	/// Start a solver process and open a session with it.
	pub fn spawn(config: &Config) -> Result<Client> {
		let mut child = config.command().spawn().map_err(|e| Error::Spawn {
			program: config.program.display().to_string(),
			source: e
		})?;

		log::info!("started `{}' (pid {})", config, child.id());

		let (input, output) = match (child.stdin.take(), child.stdout.take()) {
			(Some(input), Some(output)) => (input, output),
			_ => {
				reap(&mut child, Duration::from_secs(0));
				return Err(Error::Closed)
			}
		};

		Client {
			input: Some(input),
			output: Some(Parser::from_reader(BufReader::new(output))),
			process: Some(child),
			grace_period: config.grace_period
		}.handshake()
	}
}

impl<W: Write, R: Read> Solver for Client<W, R> {
	fn command(&mut self, command: &Sexp) -> Result<Sexp> {
		if self.is_closed() {
			return Err(Error::Closed)
		}

		log::debug!("> {}", command);
		self.send(command)?;

		let output = self.output.as_mut().ok_or(Error::Closed)?;
		match output.read_next()? {
			Some(reply) => {
				log::debug!("< {}", reply);
				Ok(reply)
			},
			None => Err(Error::Closed)
		}
	}

	/// Close both streams, then give the solver process the grace period to
	/// exit before killing it.
	fn close(&mut self) {
		self.input = None;
		self.output = None;

		if let Some(mut child) = self.process.take() {
			reap(&mut child, self.grace_period);
		}
	}
}

impl<W: Write, R: Read> Drop for Client<W, R> {
	fn drop(&mut self) {
		self.close()
	}
}

/// Wait for the process to exit, and kill it when the grace period is over.
fn reap(child: &mut Child, grace_period: Duration) {
	let pid = child.id();
	let deadline = Instant::now() + grace_period;

	loop {
		match child.try_wait() {
			Ok(Some(status)) => {
				log::info!("solver process {} exited ({})", pid, status);
				return
			},
			Ok(None) if Instant::now() < deadline => thread::sleep(POLL_INTERVAL),
			Ok(None) => break,
			Err(e) => {
				log::warn!("unable to check solver process {}: {}", pid, e);
				break
			}
		}
	}

	log::info!("killing solver process {}", pid);
	if let Err(e) = child.kill() {
		log::warn!("unable to kill solver process {}: {}", pid, e);
	}

	if let Err(e) = child.wait() {
		log::warn!("unable to reap solver process {}: {}", pid, e);
	}
}
