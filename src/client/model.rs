/**
 * Decoding of `get-model` replies.
 *
 * Only nullary definitions are kept. An entry that cannot be read is
 * skipped with a warning so that the rest of the model is not lost.
 */
use std::collections::HashMap;
use crate::{Identifier, Term, Sexp, ConversionError, sexp_to_term};

/// Value of each constant in a model.
pub type Model = HashMap<Identifier, Term>;

/// Entries of a model reply, which is either `(model <def>*)` or, since
/// SMT-LIB 2.6, just `(<def>*)`.
fn entries(reply: &Sexp) -> Option<&[Sexp]> {
	let items = reply.as_list()?;
	match items.first() {
		Some(head) if head.is_symbol("model") => Some(&items[1..]),
		Some(Sexp::List(_)) | None => Some(items),
		_ => None
	}
}

/// Decode a whole model reply.
///
/// Returns `None` if the reply is not a model at all.
pub fn decode(reply: &Sexp) -> Option<Model> {
	let mut model = HashMap::new();

	for entry in entries(reply)? {
		if let Some((id, value)) = decode_entry(entry) {
			model.insert(id, value);
		}
	}

	Some(model)
}

/// Decode `(define-fun <name> () <sort> <value>)`.
fn decode_entry(entry: &Sexp) -> Option<(Identifier, Term)> {
	let items = match entry.as_list() {
		Some(items) if items.len() >= 5 => items,
		_ => {
			log::warn!("skipping malformed model entry `{}'", entry);
			return None
		}
	};

	if !items[0].is_symbol("define-fun") {
		log::warn!("skipping model entry `{}': not a definition", entry);
		return None
	}

	let name = match items[1].as_symbol() {
		Some(name) => name,
		None => {
			log::warn!("skipping model entry `{}': name is not a symbol", entry);
			return None
		}
	};

	match items[2].as_list() {
		Some(params) if params.is_empty() => (),
		_ => {
			log::warn!("skipping model entry `{}': function with parameters", entry);
			return None
		}
	}

	match normalize(&items[4]).and_then(sexp_to_term) {
		Ok(value) => Some((Identifier::from(name), value)),
		Err(e) => {
			log::warn!("skipping model entry `{}': {}", entry, e);
			None
		}
	}
}

/// Rewrite the literal forms solvers print in models into atoms:
/// `(- n)`, `(_ bvN W)`, `#x..` and `#b..`.
///
/// A bit-vector literal whose value does not fit in 64 bits is unparsable.
fn normalize(value: &Sexp) -> Result<Sexp, ConversionError> {
	match value {
		Sexp::List(items) => match items.as_slice() {
			[minus, Sexp::Int(n)] if minus.is_symbol("-") => Ok(Sexp::Int(-*n)),
			[underscore, Sexp::Symbol(bv), Sexp::Int(width)] if underscore.is_symbol("_") && bv.starts_with("bv") => {
				match bv[2..].parse::<u64>() {
					Ok(n) => Ok(Sexp::BitVec { value: n, width: *width }),
					Err(_) => Err(ConversionError::Unparsable(value.clone()))
				}
			},
			_ => Ok(value.clone())
		},
		Sexp::Symbol(s) => match bitvec_literal(s) {
			Some(Some((n, width))) => Ok(Sexp::BitVec { value: n, width: width }),
			Some(None) => Err(ConversionError::Unparsable(value.clone())),
			None => Ok(value.clone())
		},
		_ => Ok(value.clone())
	}
}

/// Value and width of an hexadecimal `#x..` or binary `#b..` literal.
///
/// Returns `None` if `s` is not such a literal, and `Some(None)` if its value
/// does not fit in a `u64`.
fn bitvec_literal(s: &str) -> Option<Option<(u64, i64)>> {
	let (radix, bits, digits) = if s.starts_with("#x") {
		(16, 4, &s[2..])
	} else if s.starts_with("#b") {
		(2, 1, &s[2..])
	} else {
		return None
	};

	if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
		return None
	}

	let value = u64::from_str_radix(digits, radix).ok();
	Some(value.map(|n| (n, bits * digits.len() as i64)))
}
