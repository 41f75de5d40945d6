use std::fmt;
use super::Sexp;

/// Canonical writer: list items are separated by exactly one space and no
/// line break is ever emitted.
struct Formatter<'f, 'a> {
	f: &'f mut fmt::Formatter<'a>,
	empty: bool
}

impl<'f, 'a> Formatter<'f, 'a> {
	fn next(&mut self) -> fmt::Result {
		if self.empty {
			self.empty = false;
			Ok(())
		} else {
			write!(self.f, " ")
		}
	}

	fn begin(&mut self) -> fmt::Result {
		self.next()?;
		self.empty = true;
		write!(self.f, "(")
	}

	fn end(&mut self) -> fmt::Result {
		self.empty = false;
		write!(self.f, ")")
	}

	fn atom<T: fmt::Display>(&mut self, t: T) -> fmt::Result {
		self.next()?;
		write!(self.f, "{}", t)
	}

	fn sexp(&mut self, sexp: &Sexp) -> fmt::Result {
		match sexp {
			Sexp::List(items) => {
				self.begin()?;
				for item in items {
					self.sexp(item)?;
				}
				self.end()
			},
			Sexp::Symbol(s) => self.atom(s),
			Sexp::Str(s) => self.atom(format_args!("\"{}\"", s)),
			Sexp::Keyword(k) => self.atom(format_args!(":{}", k)),
			Sexp::Int(i) if *i < 0 => {
				// Numerals are unsigned in SMT-LIB.
				self.begin()?;
				self.atom("-")?;
				self.atom(i.unsigned_abs())?;
				self.end()
			},
			Sexp::Int(i) => self.atom(i),
			Sexp::BitVec { value, width } => self.atom(format_args!("(_ bv{} {})", value, width))
		}
	}
}

/// Canonical text of an S-expression.
///
/// Parsing the text back gives the same value for every S-expression the
/// parser can produce. A negative `Int` and a `BitVec` are written as the
/// lists `(- n)` and `(_ bvN W)`, and read back as such lists.
impl fmt::Display for Sexp {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut ppf = Formatter {
			f: f,
			empty: true
		};

		ppf.sexp(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn canonical_lists() {
		let cmd = Sexp::list(vec![
			Sexp::symbol("set-option"),
			Sexp::keyword("print-success"),
			Sexp::symbol("true")
		]);
		assert_eq!(cmd.to_string(), "(set-option :print-success true)");
		assert_eq!(Sexp::List(Vec::new()).to_string(), "()");
		assert_eq!(Sexp::list(vec![Sexp::List(Vec::new()), Sexp::List(Vec::new())]).to_string(), "(() ())");
	}

	#[test]
	fn literals() {
		assert_eq!(Sexp::Str("a b".to_string()).to_string(), "\"a b\"");
		assert_eq!(Sexp::Int(42).to_string(), "42");
		assert_eq!(Sexp::Int(-7).to_string(), "(- 7)");
		assert_eq!(Sexp::BitVec { value: 5, width: 8 }.to_string(), "(_ bv5 8)");
		assert_eq!(Sexp::list(vec![Sexp::symbol("x"), Sexp::BitVec { value: 0, width: 4 }]).to_string(), "(x (_ bv0 4))");
		assert_eq!(Sexp::BitVec { value: u64::MAX, width: 64 }.to_string(), "(_ bv18446744073709551615 64)");
	}

	#[test]
	fn only_parsed_values_read_back_equal() {
		let parsed = crate::syntax::parse_str("(assert (= x (_ bv3 4) \"s\" :k 12))").unwrap();
		assert_eq!(crate::syntax::parse_str(&parsed[0].to_string()).unwrap(), parsed);

		let negative = crate::syntax::parse_str(&Sexp::Int(-3).to_string()).unwrap();
		assert_eq!(negative, vec![Sexp::list(vec![Sexp::symbol("-"), Sexp::Int(3)])]);
		let bitvec = crate::syntax::parse_str(&Sexp::BitVec { value: 3, width: 4 }.to_string()).unwrap();
		assert_eq!(bitvec, vec![Sexp::list(vec![Sexp::symbol("_"), Sexp::symbol("bv3"), Sexp::Int(4)])]);
	}
}
