use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use smt2_pipe::{Client, Identifier, Satisfiable, Sexp, Solver, Sort, Term};
use smt2_pipe::client::Error;
use smt2_pipe::ops;

/// Solver input, shared with the test to check what was sent.
#[derive(Clone, Default)]
struct Sent(Rc<RefCell<Vec<u8>>>);

impl Sent {
	fn lines(&self) -> Vec<String> {
		String::from_utf8(self.0.borrow().clone()).unwrap().lines().map(str::to_string).collect()
	}
}

impl Write for Sent {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.borrow_mut().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Client whose solver answers with the given text, handshake included.
fn session(replies: &'static str) -> (Client<Sent, &'static [u8]>, Sent) {
	let sent = Sent::default();
	let client = Client::new(sent.clone(), replies.as_bytes()).unwrap();
	(client, sent)
}

fn id(name: &str) -> Identifier {
	Identifier::from(name)
}

#[test]
fn handshake_enables_print_success() {
	let (_, sent) = session("success\n");
	assert_eq!(sent.lines(), vec!["(set-option :print-success true)"]);
}

#[test]
fn handshake_rejected() {
	match Client::new(Sent::default(), "unsupported\n".as_bytes()) {
		Err(Error::Protocol { reply, .. }) => assert_eq!(reply, Sexp::symbol("unsupported")),
		Err(e) => panic!("unexpected error {}", e),
		Ok(_) => panic!("handshake accepted")
	}
}

#[test]
fn handshake_without_reply() {
	match Client::new(Sent::default(), "".as_bytes()) {
		Err(Error::Closed) => (),
		Err(e) => panic!("unexpected error {}", e),
		Ok(_) => panic!("handshake accepted")
	}
}

#[test]
fn declare_const() {
	let (mut client, sent) = session("success\nsuccess\n");
	client.declare_const(&id("x"), &Sort::bitvec(8)).unwrap();
	assert_eq!(sent.lines()[1], "(declare-const x (_ BitVec 8))");
}

#[test]
fn declare_const_unsupported() {
	let (mut client, _) = session("success\nunsupported\n");
	match client.declare_const(&id("a"), &Sort::int()) {
		Err(Error::Protocol { command, reply }) => {
			assert_eq!(command.to_string(), "(declare-const a Int)");
			assert_eq!(reply, Sexp::symbol("unsupported"));
		},
		other => panic!("unexpected result {:?}", other.err())
	}
}

#[test]
fn declare_fun() {
	let (mut client, sent) = session("success\nsuccess\n");
	client.declare_fun(&id("f"), &[Sort::int(), Sort::bool()], &Sort::int()).unwrap();
	assert_eq!(sent.lines()[1], "(declare-fun f (Int Bool) Int)");
}

#[test]
fn assert_formula() {
	let (mut client, sent) = session("success\nsuccess\n");
	let a = Term::constant("a");
	let f = ops::and(
		ops::and(ops::gt(a.clone(), Term::int(0)), ops::lt(a.clone(), Term::int(10))),
		ops::distinct(vec![a, Term::int(5)])
	);
	client.assert(&f).unwrap();
	assert_eq!(sent.lines()[1], "(assert (and (> a 0) (< a 10) (distinct a 5)))");
}

#[test]
fn check_sat_answers() {
	let (mut client, sent) = session("success\nsat\nunsat\nunknown\n");
	assert_eq!(client.check_sat().unwrap(), Satisfiable::Sat);
	assert_eq!(client.check_sat().unwrap(), Satisfiable::Unsat);
	assert_eq!(client.check_sat().unwrap(), Satisfiable::Unknown);
	assert_eq!(sent.lines()[1..], ["(check-sat)", "(check-sat)", "(check-sat)"]);
}

#[test]
fn check_sat_unexpected_answer() {
	let (mut client, _) = session("success\nsuccess\n");
	match client.check_sat() {
		Err(Error::Protocol { reply, .. }) => assert_eq!(reply, Sexp::symbol("success")),
		other => panic!("unexpected result {:?}", other.ok())
	}
}

#[test]
fn solver_errors() {
	let (mut client, _) = session("success\n(error \"no logic set\")\n");
	match client.check_sat() {
		Err(Error::Server(message)) => assert_eq!(message, "no logic set"),
		other => panic!("unexpected result {:?}", other.ok())
	}
}

#[test]
fn get_model() {
	let (mut client, sent) = session("success\n(model (define-fun a () Int 3) (define-fun b () Int 5))\n");
	let model = client.get_model().unwrap();
	assert_eq!(model.len(), 2);
	assert_eq!(model["a"], Term::IntLit(3));
	assert_eq!(model["b"], Term::IntLit(5));
	assert_eq!(sent.lines()[1], "(get-model)");
}

#[test]
fn get_model_skips_malformed_entries() {
	let (mut client, _) = session(
		"success\n(\n  (define-fun b () Int 5)\n  (define-fun f ((x Int)) Int x)\n  (define-fun c () Int (- 2))\n  oops\n)\n"
	);
	let model = client.get_model().unwrap();
	assert_eq!(model.len(), 2);
	assert_eq!(model["b"], Term::int(5));
	assert_eq!(model["c"], Term::int(-2));
}

#[test]
fn get_model_not_a_model() {
	let (mut client, _) = session("success\nunsat\n");
	match client.get_model() {
		Err(Error::Protocol { command, .. }) => assert_eq!(command.to_string(), "(get-model)"),
		other => panic!("unexpected result {:?}", other.ok())
	}
}

#[test]
fn push_and_pop() {
	let (mut client, sent) = session("success\nsuccess\nsuccess\n");
	client.push();
	client.pop().unwrap();
	assert_eq!(sent.lines()[1..], ["(push)", "(pop)"]);
}

#[test]
fn pop_failure_is_recoverable() {
	let (mut client, _) = session("success\n(error \"not enough scopes\")\nsat\n");
	match client.pop() {
		Err(Error::Server(message)) => assert_eq!(message, "not enough scopes"),
		other => panic!("unexpected result {:?}", other)
	}
	assert_eq!(client.check_sat().unwrap(), Satisfiable::Sat);
}

#[test]
#[should_panic(expected = "unable to push an assertion scope")]
fn push_failure_is_fatal() {
	let (mut client, _) = session("success\nunsupported\n");
	client.push();
}

#[test]
fn try_push_failure() {
	let (mut client, _) = session("success\nunsupported\n");
	assert!(client.try_push().is_err());
}

#[test]
fn raw_commands() {
	let (mut client, sent) = session("success\n(error \"unknown command\")\n(:name \"Z3\")\n");
	let reply = client.command(&Sexp::list(vec![Sexp::symbol("frobnicate")])).unwrap();
	assert_eq!(reply.to_string(), "(error \"unknown command\")");
	let reply = client.command(&Sexp::list(vec![Sexp::symbol("get-info"), Sexp::keyword("name")])).unwrap();
	assert_eq!(reply, Sexp::list(vec![Sexp::keyword("name"), Sexp::Str("Z3".to_string())]));
	assert_eq!(sent.lines()[1..], ["(frobnicate)", "(get-info :name)"]);
}

#[test]
fn set_logic_and_options() {
	let (mut client, sent) = session("success\nsuccess\nsuccess\n");
	client.set_logic("QF_BV").unwrap();
	client.set_option("produce-models", Sexp::symbol("true")).unwrap();
	assert_eq!(sent.lines()[1..], ["(set-logic QF_BV)", "(set-option :produce-models true)"]);
}

#[test]
fn output_closed() {
	let (mut client, _) = session("success\n");
	match client.check_sat() {
		Err(Error::Closed) => (),
		other => panic!("unexpected result {:?}", other.ok())
	}
}

#[test]
fn malformed_reply() {
	let (mut client, _) = session("success\n\"sat");
	match client.check_sat() {
		Err(Error::Syntax(e)) => assert!(e.is_lexical()),
		other => panic!("unexpected result {:?}", other.ok())
	}
}

#[test]
fn close_is_idempotent() {
	let (mut client, _) = session("success\nsat\n");
	client.close();
	assert!(client.is_closed());
	client.close();
	match client.check_sat() {
		Err(Error::Closed) => (),
		other => panic!("unexpected result {:?}", other.ok())
	}
}

#[test]
fn exit_closes() {
	let (mut client, sent) = session("success\nsuccess\n");
	client.exit().unwrap();
	assert!(client.is_closed());
	assert_eq!(sent.lines()[1], "(exit)");

	let (mut client, _) = session("success\n");
	client.exit().unwrap();
	assert!(client.is_closed());
}

#[cfg(unix)]
mod process {
	use std::time::{Duration, Instant};
	use smt2_pipe::{Client, Config, Solver};
	use smt2_pipe::client::Error;

	#[test]
	fn solver_ignoring_end_of_input_is_killed() {
		let config = Config::new("sh")
			.args(&["-c", "read l; echo success; exec sleep 100"])
			.grace_period(Duration::from_millis(50));
		let mut client = Client::spawn(&config).unwrap();

		let start = Instant::now();
		client.close();
		assert!(client.is_closed());
		assert!(start.elapsed() < Duration::from_secs(5));
	}

	#[test]
	fn solver_exiting_on_end_of_input() {
		let config = Config::new("sh").args(&["-c", "read l; echo success; cat > /dev/null"]);
		let mut client = Client::spawn(&config).unwrap();

		let start = Instant::now();
		client.close();
		assert!(client.is_closed());
		assert!(start.elapsed() < Duration::from_secs(5));
	}

	#[test]
	fn echoing_process_fails_the_handshake() {
		match Client::spawn(&Config::new("cat")) {
			Err(Error::Protocol { command, reply }) => {
				assert_eq!(command.to_string(), "(set-option :print-success true)");
				assert_eq!(reply, command);
			},
			Err(e) => panic!("unexpected error {}", e),
			Ok(_) => panic!("handshake accepted")
		}
	}
}
