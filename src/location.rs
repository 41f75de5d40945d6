use std::ops::Deref;
use std::fmt;

pub use source_span::Position;

/// Human readable `line:column` (1-based) form of a position.
pub struct Pos(pub Position);

impl fmt::Display for Pos {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.0.line + 1, self.0.column + 1)
	}
}

/**
 * Wrap a value to give it a position.
 */
#[derive(Clone, Debug)]
pub struct Located<T> {
	t: T,
	position: Position
}

impl<T> Located<T> {
	pub fn new(t: T, position: Position) -> Located<T> {
		Located {
			t: t,
			position: position
		}
	}

	/// Position of the first char of the value.
	pub fn position(&self) -> Position {
		self.position
	}

	pub fn into_inner(self) -> T {
		self.t
	}
}

impl<T> Deref for Located<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.t
	}
}

impl<T> AsRef<T> for Located<T> {
	fn as_ref(&self) -> &T {
		&self.t
	}
}

impl<T> AsMut<T> for Located<T> {
	fn as_mut(&mut self) -> &mut T {
		&mut self.t
	}
}

impl<T: fmt::Display> fmt::Display for Located<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}: {}", Pos(self.position), self.t)
	}
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for Located<T> {}
