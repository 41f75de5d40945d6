use std::fmt;

use crate::Located;
use crate::location::Pos;

/// Display width of a tab.
pub const TAB_WIDTH: usize = 8;

/// Error pointer: the message, the offending source line and a caret under
/// the offending column.
pub struct PrettyPrinter<'a, T> {
	error: &'a Located<T>,
	line: &'a str
}

impl<'a, T> PrettyPrinter<'a, T> {
	/// Point at the error in the given line, which must be the line the
	/// error position refers to.
	pub fn new(error: &'a Located<T>, line: &'a str) -> PrettyPrinter<'a, T> {
		PrettyPrinter {
			error: error,
			line: line.trim_end_matches(|c: char| c == '\n' || c == '\r')
		}
	}

	/// Point at the error in the whole source text.
	pub fn from_source(error: &'a Located<T>, source: &'a str) -> PrettyPrinter<'a, T> {
		let line = source.lines().nth(error.position().line).unwrap_or("");
		Self::new(error, line)
	}
}

impl<'a, T: fmt::Display> fmt::Display for PrettyPrinter<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let column = self.error.position().column;

		let mut margin = 0;
		for c in self.line.chars().take(column) {
			margin += if c == '\t' { TAB_WIDTH } else { 1 };
		}

		write!(f, "{}: error: {}\n", Pos(self.error.position()), self.error.as_ref())?;
		for c in self.line.chars() {
			if c == '\t' {
				write!(f, "{:width$}", "", width = TAB_WIDTH)?;
			} else {
				write!(f, "{}", c)?;
			}
		}
		write!(f, "\n{:width$}^", "", width = margin)
	}
}
