/**
 * Generic S-expression, as exchanged with the solver.
 *
 * <s_expr> ::= <numeral> | <string> | <symbol> | <keyword> | ( <s_expr>* )
 */
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sexp {
	List(Vec<Sexp>),
	Symbol(String),
	Str(String),

	/// Option name, without its leading `:`.
	Keyword(String),

	/// Numerals are unsigned in the text: a negative value is written
	/// `(- n)`, which the parser reads back as a list.
	Int(i64),

	/// Fixed width bit-vector value, written `(_ bv<value> <width>)`.
	/// The parser never builds it: the textual form reads back as a list.
	BitVec {
		value: u64,
		width: i64
	}
}

impl Sexp {
	pub fn list(items: Vec<Sexp>) -> Sexp {
		Sexp::List(items)
	}

	pub fn symbol<S: ToString>(name: S) -> Sexp {
		Sexp::Symbol(name.to_string())
	}

	pub fn keyword<S: ToString>(name: S) -> Sexp {
		Sexp::Keyword(name.to_string())
	}

	/// Checks that this is the given symbol.
	pub fn is_symbol(&self, name: &str) -> bool {
		match self {
			Sexp::Symbol(s) => s == name,
			_ => false
		}
	}

	pub fn as_symbol(&self) -> Option<&str> {
		match self {
			Sexp::Symbol(s) => Some(s),
			_ => None
		}
	}

	pub fn as_list(&self) -> Option<&[Sexp]> {
		match self {
			Sexp::List(items) => Some(items),
			_ => None
		}
	}

	/// Head symbol of a non empty list.
	pub fn head(&self) -> Option<&str> {
		self.as_list().and_then(|items| items.first()).and_then(Sexp::as_symbol)
	}
}
