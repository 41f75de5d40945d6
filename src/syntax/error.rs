use std::result;
use std::fmt;
use crate::Located;
use crate::location::Position;
use super::token::{Token, Kind};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("io: {0}")]
	IO(std::io::Error),

	/// The input ended inside a string literal.
	#[error("unexpected end of file in string literal")]
	UnterminatedString,

	#[error("unexpected token `{}'{}", .0, Expected(.1))]
	UnexpectedToken(Token, Vec<Kind>),

	/// An integer literal does not fit in 64 bits.
	#[error("integer literal `{0}' is out of range")]
	IntegerOverflow(String)
}

impl Error {
	pub fn at(self, position: Position) -> Located<Error> {
		Located::new(self, position)
	}

	/// Errors raised by the tokenizer rather than the grammar.
	pub fn is_lexical(&self) -> bool {
		match self {
			Error::IO(_) | Error::UnterminatedString => true,
			_ => false
		}
	}
}

pub type Result<T> = result::Result<T, Located<Error>>;

struct Expected<'a>(&'a [Kind]);

impl<'a> fmt::Display for Expected<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.0.split_first() {
			Some((first, rest)) => {
				write!(f, ", expected {}", first)?;
				for k in rest {
					write!(f, ", {}", k)?;
				}
				Ok(())
			},
			None => Ok(())
		}
	}
}
