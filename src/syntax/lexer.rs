use std::io;
use std::iter::Peekable;
use source_span::{Position, Span};
use crate::Located;
use crate::location::Pos;
use super::{Token, Result, Error};

/// Characters ending a symbol, keyword or integer.
fn is_separator(c: char) -> bool {
	c == '(' || c == ')' || c.is_whitespace()
}

/// Tokenizer over a stream of decoded chars.
///
/// Every call to `next` yields one token. The last token is always
/// `Token::EndOfFile`, after which the iterator is exhausted. A lexical error
/// is also terminal.
pub struct Lexer<R: Iterator<Item=io::Result<char>>> {
	decoder: Peekable<R>,
	location: Span,
	done: bool
}

impl<R: Iterator<Item = io::Result<char>>> Lexer<R> {
	pub fn new(source: R, cursor: Position) -> Lexer<R> {
		Lexer {
			decoder: source.peekable(),
			location: cursor.into(),
			done: false
		}
	}

	/// Position of the next char to be read.
	pub fn position(&self) -> Position {
		self.location.end()
	}

	fn peek_char(&mut self) -> Result<Option<char>> {
		match self.decoder.peek() {
			Some(Ok(c)) => Ok(Some(*c)),
			Some(Err(_)) => self.consume(), // this will always fail.
			None => Ok(None)
		}
	}

	fn consume(&mut self) -> Result<Option<char>> {
		match self.decoder.next() {
			Some(Ok(c)) => {
				self.location.push(c);
				Ok(Some(c))
			},
			Some(Err(e)) => Err(Error::IO(e).at(self.location.end())),
			None => Ok(None)
		}
	}

	fn skip_whitespaces(&mut self) -> Result<()> {
		loop {
			match self.peek_char()? {
				Some(c) if c.is_whitespace() => {
					self.consume()?;
				},
				_ => break
			}
		}

		Ok(())
	}

	/**
	 * Skip all chars until the next line break.
	 */
	fn skip_line(&mut self) -> Result<()> {
		loop {
			match self.peek_char()? {
				Some('\n') | None => break,
				_ => {
					self.consume()?;
				}
			}
		}

		Ok(())
	}

	/// Skip a block comment whose opening delimiter is already consumed.
	/// Block comments do not nest.
	fn skip_block(&mut self, start: Position) -> Result<()> {
		loop {
			match self.consume()? {
				Some('*') => {
					if let Some('/') = self.peek_char()? {
						self.consume()?;
						return Ok(())
					}
				},
				Some(_) => (),
				None => {
					// The rest of the input is the comment.
					log::warn!("unterminated block comment starting at {}", Pos(start));
					return Ok(())
				}
			}
		}
	}

	/// Read chars up to the next separator, after the given prefix.
	fn read_word(&mut self, mut word: String) -> Result<String> {
		loop {
			match self.peek_char()? {
				Some(c) if !is_separator(c) => {
					self.consume()?;
					word.push(c);
				},
				_ => break
			}
		}

		Ok(word)
	}

	fn read_int(&mut self) -> Result<String> {
		let mut digits = String::new();
		loop {
			match self.peek_char()? {
				Some(c) if c.is_ascii_digit() => {
					self.consume()?;
					digits.push(c);
				},
				_ => break
			}
		}

		Ok(digits)
	}

	/// Read a string literal, the opening quote being already consumed.
	/// Escaped chars are kept as they are.
	fn read_string(&mut self, start: Position) -> Result<String> {
		let mut string = String::new();

		let mut escape = false;
		loop {
			match self.consume()? {
				Some(c) if escape => {
					string.push(c);
					escape = false;
				},
				Some('\\') => {
					string.push('\\');
					escape = true;
				},
				Some('"') => break,
				Some(c) => string.push(c),
				None => return Err(Error::UnterminatedString.at(start))
			}
		}

		Ok(string)
	}

	fn read_token(&mut self) -> Result<Located<Token>> {
		loop {
			self.skip_whitespaces()?;
			self.location.clear();
			let start = self.location.start();

			let c = match self.peek_char()? {
				Some(c) => c,
				None => return Ok(Token::EndOfFile.at(start))
			};

			let token = match c {
				'(' => {
					self.consume()?;
					Token::Begin
				},

				')' => {
					self.consume()?;
					Token::End
				},

				'/' => {
					self.consume()?;
					match self.peek_char()? {
						Some('/') => {
							self.skip_line()?;
							continue
						},
						Some('*') => {
							self.consume()?;
							self.skip_block(start)?;
							continue
						},
						_ => Token::Symbol(self.read_word("/".to_string())?)
					}
				},

				':' => {
					self.consume()?;
					Token::Keyword(self.read_word(String::new())?)
				},

				'"' => {
					self.consume()?;
					Token::String(self.read_string(start)?)
				},

				c if c.is_ascii_digit() => Token::Int(self.read_int()?),

				_ => Token::Symbol(self.read_word(String::new())?)
			};

			return Ok(token.at(start))
		}
	}
}

impl<R: Iterator<Item = io::Result<char>>> Iterator for Lexer<R> {
	type Item = Result<Located<Token>>;

	fn next(&mut self) -> Option<Result<Located<Token>>> {
		if self.done {
			return None
		}

		let token = self.read_token();
		match &token {
			Ok(t) if **t != Token::EndOfFile => (),
			_ => self.done = true
		}

		Some(token)
	}
}
