use std::borrow::Borrow;
use std::fmt;

/// Name of a constant, function or sort.
///
/// Two identifiers are equal when their text is.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Identifier(String);

impl Identifier {
	pub fn new<S: Into<String>>(name: S) -> Identifier {
		Identifier(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Identifier {
	fn from(name: &str) -> Identifier {
		Identifier(name.to_string())
	}
}

impl From<String> for Identifier {
	fn from(name: String) -> Identifier {
		Identifier(name)
	}
}

impl Borrow<str> for Identifier {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Identifier {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for Identifier {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl<'a> PartialEq<&'a str> for Identifier {
	fn eq(&self, other: &&'a str) -> bool {
		self.0 == *other
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}
