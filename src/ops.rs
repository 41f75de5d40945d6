/**
 * Term builders for the usual core, arithmetic and bit-vector functions.
 *
 * Each builder is a plain application of the function to its arguments,
 * except `and` and `or` which keep chains flat.
 */
use crate::Term;

fn app(op: &str, args: Vec<Term>) -> Term {
	Term::app(op, args)
}

/// Arguments of `term` if it is an application of `op`.
fn take_args(op: &str, term: Term) -> Result<Vec<Term>, Term> {
	match term {
		Term::App { id, args } if id == op => Ok(args),
		term => Err(term)
	}
}

/// Associative application: operands that are themselves applications of
/// `op` are spliced in place, left to right.
fn associative(op: &str, a: Term, b: Term) -> Term {
	let args = match (take_args(op, a), take_args(op, b)) {
		(Ok(mut args_a), Ok(args_b)) => {
			args_a.extend(args_b);
			args_a
		},
		(Ok(mut args_a), Err(b)) => {
			args_a.push(b);
			args_a
		},
		(Err(a), Ok(args_b)) => {
			let mut args = Vec::with_capacity(args_b.len() + 1);
			args.push(a);
			args.extend(args_b);
			args
		},
		(Err(a), Err(b)) => vec![a, b]
	};

	app(op, args)
}

pub fn equals(a: Term, b: Term) -> Term {
	app("=", vec![a, b])
}

pub fn distinct(args: Vec<Term>) -> Term {
	app("distinct", args)
}

pub fn and(a: Term, b: Term) -> Term {
	associative("and", a, b)
}

pub fn or(a: Term, b: Term) -> Term {
	associative("or", a, b)
}

pub fn not(a: Term) -> Term {
	app("not", vec![a])
}

pub fn ite(condition: Term, then: Term, otherwise: Term) -> Term {
	app("ite", vec![condition, then, otherwise])
}

pub fn implies(a: Term, b: Term) -> Term {
	app("=>", vec![a, b])
}

pub fn add(a: Term, b: Term) -> Term {
	app("+", vec![a, b])
}

pub fn sub(a: Term, b: Term) -> Term {
	app("-", vec![a, b])
}

pub fn mul(a: Term, b: Term) -> Term {
	app("*", vec![a, b])
}

pub fn lt(a: Term, b: Term) -> Term {
	app("<", vec![a, b])
}

pub fn gt(a: Term, b: Term) -> Term {
	app(">", vec![a, b])
}

pub fn lte(a: Term, b: Term) -> Term {
	app("<=", vec![a, b])
}

pub fn gte(a: Term, b: Term) -> Term {
	app(">=", vec![a, b])
}

macro_rules! bitvec_binary {
	($($name:ident => $op:expr),*) => {
		$(
			pub fn $name(a: Term, b: Term) -> Term {
				app($op, vec![a, b])
			}
		)*
	};
}

bitvec_binary! {
	bvadd => "bvadd",
	bvsub => "bvsub",
	bvmul => "bvmul",
	bvurem => "bvurem",
	bvsrem => "bvsrem",
	bvsmod => "bvsmod",
	bvshl => "bvshl",
	bvlshr => "bvlshr",
	bvashr => "bvashr",
	bvor => "bvor",
	bvand => "bvand",
	bvnand => "bvnand",
	bvnor => "bvnor",
	bvxnor => "bvxnor",
	bvudiv => "bvudiv",
	bvsdiv => "bvsdiv"
}

pub fn bvneg(a: Term) -> Term {
	app("bvneg", vec![a])
}

pub fn bvnot(a: Term) -> Term {
	app("bvnot", vec![a])
}
