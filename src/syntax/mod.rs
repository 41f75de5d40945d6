/**
 * SMT2-lib S-expression syntax.
 */

use std::io;
use utf8_decode::UnsafeDecoder;

pub use crate::location::*;

pub mod error;
pub mod ast;
pub mod token;
pub mod lexer;
pub mod pp;
mod display;

pub use error::*;
pub use ast::*;
pub use token::{Token, Kind};
pub use lexer::Lexer;
pub use pp::PrettyPrinter;

/// Tokens accepted inside a list.
const LIST_ITEM: &[Kind] = &[Kind::Begin, Kind::End, Kind::Int, Kind::String, Kind::Symbol, Kind::Keyword];

/// Tokens accepted between two top-level S-expressions.
const PROGRAM_ITEM: &[Kind] = &[Kind::Begin, Kind::Int, Kind::String, Kind::Symbol, Kind::Keyword, Kind::EndOfFile];

/// Char source of a reader.
pub type ReaderSource<R> = UnsafeDecoder<io::Bytes<R>>;

/// Streaming S-expression parser.
///
/// The input is read lazily: each call to `read_next` pulls exactly the
/// tokens of the next top-level S-expression and nothing after its closing
/// parenthesis, so it can be used on a stream whose end is not yet known,
/// such as the output of a running process.
///
/// The first error, lexical or syntactic, ends the stream.
pub struct Parser<R: Iterator<Item = io::Result<char>>> {
	lexer: Lexer<R>,
	done: bool
}

impl<R: Iterator<Item = io::Result<char>>> Parser<R> {
	pub fn new(source: R) -> Parser<R> {
		Parser {
			lexer: Lexer::new(source, Position::new(0, 0)),
			done: false
		}
	}

	/// Position of the next char to be read.
	pub fn position(&self) -> Position {
		self.lexer.position()
	}

	/// Read the next top-level S-expression.
	///
	/// Returns `Ok(None)` once the input is exhausted, and on every call after
	/// an error.
	pub fn read_next(&mut self) -> Result<Option<Sexp>> {
		if self.done {
			return Ok(None)
		}

		let result = match self.token() {
			Ok(token) => {
				if *token == Token::EndOfFile {
					Ok(None)
				} else {
					self.parse(token, PROGRAM_ITEM).map(Some)
				}
			},
			Err(e) => Err(e)
		};

		match result {
			Ok(Some(_)) => (),
			_ => self.done = true
		}

		result
	}

	fn token(&mut self) -> Result<Located<Token>> {
		match self.lexer.next() {
			Some(token) => token,
			None => Ok(Token::EndOfFile.at(self.lexer.position()))
		}
	}

	/// Parse the S-expression starting with the given token.
	fn parse(&mut self, token: Located<Token>, expected: &[Kind]) -> Result<Sexp> {
		let position = token.position();
		match token.into_inner() {
			Token::Begin => {
				let mut items = Vec::new();
				loop {
					let token = self.token()?;
					if *token == Token::End {
						break
					}

					items.push(self.parse(token, LIST_ITEM)?);
				}

				Ok(Sexp::List(items))
			},
			Token::Int(digits) => {
				match digits.parse::<i64>() {
					Ok(i) => Ok(Sexp::Int(i)),
					Err(_) => Err(Error::IntegerOverflow(digits).at(position))
				}
			},
			Token::String(s) => Ok(Sexp::Str(s)),
			Token::Symbol(s) => Ok(Sexp::Symbol(s)),
			Token::Keyword(k) => Ok(Sexp::Keyword(k)),
			unexpected => Err(Error::UnexpectedToken(unexpected, expected.to_vec()).at(position))
		}
	}
}

impl<R: io::Read> Parser<ReaderSource<R>> {
	/// Parse what comes out of a reader.
	///
	/// Reads are not buffered: wrap the reader in a `BufReader` if needed.
	pub fn from_reader(reader: R) -> Parser<ReaderSource<R>> {
		Parser::new(UnsafeDecoder::new(reader.bytes()))
	}
}

impl<R: Iterator<Item = io::Result<char>>> Iterator for Parser<R> {
	type Item = Result<Sexp>;

	fn next(&mut self) -> Option<Result<Sexp>> {
		self.read_next().transpose()
	}
}

/// Parser over an in-memory string.
pub fn parser(source: &str) -> Parser<impl Iterator<Item = io::Result<char>> + '_> {
	Parser::new(source.chars().map(Ok::<char, io::Error>))
}

/// Parse every S-expression of the given text.
pub fn parse_str(source: &str) -> Result<Vec<Sexp>> {
	parser(source).collect()
}
