use std::io;
use crate::{syntax, Located, Sexp};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unable to start `{program}': {source}")]
	Spawn {
		program: String,
		source: io::Error
	},

	/// Writing a command or reading a reply failed.
	#[error("io: {0}")]
	Io(#[from] io::Error),

	/// The solver output ended, or the client was closed.
	#[error("solver output closed")]
	Closed,

	#[error("syntax error in the solver response: {0}")]
	Syntax(#[source] Located<syntax::Error>),

	/// The reply does not have the shape the command calls for.
	#[error("unexpected reply `{reply}' to `{command}'")]
	Protocol {
		command: Sexp,
		reply: Sexp
	},

	/// The solver replied `(error "...")`.
	#[error("solver responded with an error: {0}")]
	Server(String)
}

impl Error {
	pub fn protocol(command: &Sexp, reply: Sexp) -> Error {
		Error::Protocol {
			command: command.clone(),
			reply: reply
		}
	}
}

impl From<Located<syntax::Error>> for Error {
	fn from(e: Located<syntax::Error>) -> Error {
		let position = e.position();
		match e.into_inner() {
			syntax::Error::IO(e) => Error::Io(e),
			e => Error::Syntax(e.at(position))
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
