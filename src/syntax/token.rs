use std::fmt;
use crate::Located;
use crate::location::Position;

/**
 * Token
 */
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
	/**
	 * End of file token.
	 */
	EndOfFile,

	/**
	 * Opening parenthesis.
	 */
	Begin,

	/**
	 * Closing parenthesis.
	 */
	End,

	/**
	 * Run of decimal digits.
	 */
	Int(String),

	/**
	 * String literal, without its delimiters.
	 */
	String(String),

	/**
	 * Anything else that is neither whitespace nor a parenthesis.
	 */
	Symbol(String),

	/**
	 * Option name, without its leading `:`.
	 */
	Keyword(String)
}

/// Token kinds, used to report what the parser expected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
	EndOfFile,
	Begin,
	End,
	Int,
	String,
	Symbol,
	Keyword
}

impl Token {
	pub fn at(self, position: Position) -> Located<Token> {
		Located::new(self, position)
	}

	pub fn kind(&self) -> Kind {
		match self {
			Token::EndOfFile => Kind::EndOfFile,
			Token::Begin => Kind::Begin,
			Token::End => Kind::End,
			Token::Int(_) => Kind::Int,
			Token::String(_) => Kind::String,
			Token::Symbol(_) => Kind::Symbol,
			Token::Keyword(_) => Kind::Keyword
		}
	}

	/// Source text of the token.
	pub fn text(&self) -> &str {
		match self {
			Token::EndOfFile => "",
			Token::Begin => "(",
			Token::End => ")",
			Token::Int(t) | Token::String(t) | Token::Symbol(t) | Token::Keyword(t) => t
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Token::EndOfFile => write!(f, "<end of file>"),
			Token::String(s) => write!(f, "\"{}\"", s),
			Token::Keyword(k) => write!(f, ":{}", k),
			t => write!(f, "{}", t.text())
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use self::Kind::*;
		match self {
			EndOfFile => write!(f, "<end of file>"),
			Begin => write!(f, "`('"),
			End => write!(f, "`)'"),
			Int => write!(f, "<integer>"),
			String => write!(f, "<string>"),
			Symbol => write!(f, "<symbol>"),
			Keyword => write!(f, "<keyword>")
		}
	}
}
