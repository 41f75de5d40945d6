use crate::syntax::Sexp;

/// Failure to read a term back from an S-expression.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
	/// Only literals and symbols can be read back.
	#[error("unparsable sexp `{0}'")]
	Unparsable(Sexp)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_shows_the_sexp() {
		let e = ConversionError::Unparsable(Sexp::list(vec![Sexp::symbol("f"), Sexp::Int(1)]));
		assert_eq!(e.to_string(), "unparsable sexp `(f 1)'");
	}
}
