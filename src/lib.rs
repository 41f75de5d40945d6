use std::fmt;
use std::convert::TryFrom;

pub mod location;
pub mod error;
pub mod ident;
pub mod ops;
pub mod syntax;
pub mod client;

pub use location::*;
pub use error::ConversionError;
pub use ident::Identifier;
pub use syntax::Sexp;
pub use client::{Client, Config, Solver};

/**
 * Printable list.
 */
pub(crate) struct PList<'a, T: 'a>(&'a [T]);

impl<'a, T: 'a + fmt::Display> fmt::Display for PList<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0.split_first() {
			Some((e, list)) => {
				e.fmt(f)?;
				for e in list.iter() {
					write!(f, " ")?;
					e.fmt(f)?
				}
			},
			None => ()
		}

		Ok(())
	}
}

/// Answer to `check-sat`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Satisfiable {
	Sat,
	Unsat,
	Unknown
}

impl Satisfiable {
	pub fn from_symbol(name: &str) -> Option<Satisfiable> {
		match name {
			"sat" => Some(Satisfiable::Sat),
			"unsat" => Some(Satisfiable::Unsat),
			"unknown" => Some(Satisfiable::Unknown),
			_ => None
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Satisfiable::Sat => "sat",
			Satisfiable::Unsat => "unsat",
			Satisfiable::Unknown => "unknown"
		}
	}
}

impl fmt::Display for Satisfiable {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}

/**
 * Sort.
 */
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sort {
	Name {
		id: Identifier
	},

	/// Parametric sort, such as `(Array Int Bool)`.
	App {
		id: Identifier,
		args: Vec<Sort>
	},

	BitVec {
		width: i64
	}
}

impl Sort {
	pub fn name<I: Into<Identifier>>(id: I) -> Sort {
		Sort::Name { id: id.into() }
	}

	pub fn app<I: Into<Identifier>>(id: I, args: Vec<Sort>) -> Sort {
		Sort::App { id: id.into(), args: args }
	}

	pub fn int() -> Sort {
		Sort::name("Int")
	}

	pub fn bool() -> Sort {
		Sort::name("Bool")
	}

	pub fn bitvec(width: i64) -> Sort {
		Sort::BitVec { width: width }
	}
}

impl fmt::Display for Sort {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		sort_to_sexp(self).fmt(f)
	}
}

/**
 * Term.
 *
 * Terms are built by the caller, usually through the helpers of the `ops`
 * module, and read back from models.
 */
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Term {
	StringLit(String),
	IntLit(i64),
	/// Unsigned value of a fixed width bit-vector.
	BitVecLit {
		value: u64,
		width: i64
	},
	Const {
		id: Identifier
	},
	App {
		id: Identifier,
		args: Vec<Term>
	},

	/// Single binding `(let ((id value)) body)`.
	Let {
		id: Identifier,
		value: Box<Term>,
		body: Box<Term>
	}
}

impl Term {
	pub fn int(i: i64) -> Term {
		Term::IntLit(i)
	}

	/// `true` and `false` are plain constants.
	pub fn bool(b: bool) -> Term {
		Term::constant(if b { "true" } else { "false" })
	}

	pub fn bitvec(value: u64, width: i64) -> Term {
		Term::BitVecLit { value: value, width: width }
	}

	pub fn string<S: Into<String>>(s: S) -> Term {
		Term::StringLit(s.into())
	}

	pub fn constant<I: Into<Identifier>>(id: I) -> Term {
		Term::Const { id: id.into() }
	}

	pub fn app<I: Into<Identifier>>(id: I, args: Vec<Term>) -> Term {
		Term::App { id: id.into(), args: args }
	}

	pub fn let_in<I: Into<Identifier>>(id: I, value: Term, body: Term) -> Term {
		Term::Let {
			id: id.into(),
			value: Box::new(value),
			body: Box::new(body)
		}
	}
}

impl fmt::Display for Term {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		term_to_sexp(self).fmt(f)
	}
}

pub fn ident_to_sexp(id: &Identifier) -> Sexp {
	Sexp::Symbol(id.as_str().to_string())
}

/// Encode a term. Always succeeds.
pub fn term_to_sexp(term: &Term) -> Sexp {
	match term {
		Term::StringLit(s) => Sexp::Str(s.clone()),
		Term::IntLit(i) => Sexp::Int(*i),
		Term::BitVecLit { value, width } => Sexp::BitVec { value: *value, width: *width },
		Term::Const { id } => ident_to_sexp(id),
		Term::App { id, args } => {
			let mut items = Vec::with_capacity(args.len() + 1);
			items.push(ident_to_sexp(id));
			items.extend(args.iter().map(term_to_sexp));
			Sexp::List(items)
		},
		Term::Let { id, value, body } => Sexp::List(vec![
			Sexp::symbol("let"),
			Sexp::List(vec![Sexp::List(vec![ident_to_sexp(id), term_to_sexp(value)])]),
			term_to_sexp(body)
		])
	}
}

/// Decode a literal or a constant.
///
/// Lists and keywords are rejected: applications are never read back.
pub fn sexp_to_term(sexp: Sexp) -> Result<Term, ConversionError> {
	match sexp {
		Sexp::Str(s) => Ok(Term::StringLit(s)),
		Sexp::Int(i) => Ok(Term::IntLit(i)),
		Sexp::BitVec { value, width } => Ok(Term::BitVecLit { value: value, width: width }),
		Sexp::Symbol(s) => Ok(Term::Const { id: Identifier::from(s) }),
		sexp => Err(ConversionError::Unparsable(sexp))
	}
}

pub fn sort_to_sexp(sort: &Sort) -> Sexp {
	match sort {
		Sort::Name { id } => ident_to_sexp(id),
		Sort::App { id, args } => {
			let mut items = Vec::with_capacity(args.len() + 1);
			items.push(ident_to_sexp(id));
			items.extend(args.iter().map(sort_to_sexp));
			Sexp::List(items)
		},
		Sort::BitVec { width } => Sexp::List(vec![
			Sexp::symbol("_"),
			Sexp::symbol("BitVec"),
			Sexp::Int(*width)
		])
	}
}

impl<'a> From<&'a Term> for Sexp {
	fn from(term: &'a Term) -> Sexp {
		term_to_sexp(term)
	}
}

impl From<Term> for Sexp {
	fn from(term: Term) -> Sexp {
		term_to_sexp(&term)
	}
}

impl<'a> From<&'a Sort> for Sexp {
	fn from(sort: &'a Sort) -> Sexp {
		sort_to_sexp(sort)
	}
}

impl TryFrom<Sexp> for Term {
	type Error = ConversionError;

	fn try_from(sexp: Sexp) -> Result<Term, ConversionError> {
		sexp_to_term(sexp)
	}
}
