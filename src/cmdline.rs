/*!
# Argot: Command Line.
*/

use crate::{
	ArgotError,
	DEFAULT_USAGE,
	Opt,
	Opts,
};
use std::{
	borrow::Cow,
	ops::Deref,
};
use tracing::debug;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Command Line.
///
/// `CmdLine` holds a fixed list of raw command-line tokens and answers
/// questions about the options within them. It has no idea what options your
/// program supports; structure is discovered purely from token shape:
///
/// * Any token starting with one or more dashes is an option;
/// * The non-dashed tokens following an option are its parameters;
/// * Parameters containing an `=` are key/value pairs; the rest are arguments.
///
/// The tokens cannot be changed once collected, so any number of queries
/// (from any number of threads) will always see the same thing.
///
/// ## Examples
///
/// ```
/// use argot::CmdLine;
///
/// let cli = CmdLine::new(["-zxvf", "foo.tar.gz", "--max-depth=1"]);
///
/// // Everything.
/// let values: Vec<&str> = cli.options().map(|o| o.value()).collect();
/// assert_eq!(values, ["zxvf", "1"]);
///
/// // Something specific.
/// let depth = cli.find_first_option("max-depth").unwrap();
/// assert_eq!(depth.value(), "1");
///
/// // Something missing.
/// assert!(cli.find_first_option("help").is_err());
/// ```
pub struct CmdLine {
	/// # Tokens.
	args: Box<[String]>,

	/// # Usage Message.
	///
	/// This is the payload of the error returned by
	/// [`CmdLine::find_first_option`] when nothing turns up.
	usage: Cow<'static, str>,
}

impl Default for CmdLine {
	#[inline]
	fn default() -> Self {
		Self {
			args: Box::default(),
			usage: Cow::Borrowed(DEFAULT_USAGE),
		}
	}
}

impl Deref for CmdLine {
	type Target = [String];
	#[inline]
	fn deref(&self) -> &Self::Target { &self.args }
}

impl From<Vec<String>> for CmdLine {
	#[inline]
	fn from(src: Vec<String>) -> Self {
		Self {
			args: src.into_boxed_slice(),
			usage: Cow::Borrowed(DEFAULT_USAGE),
		}
	}
}

impl<S: Into<String>> FromIterator<S> for CmdLine {
	#[inline]
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		Self::from(src.into_iter().map(Into::into).collect::<Vec<String>>())
	}
}

/// ## Instantiation.
impl CmdLine {
	#[inline]
	#[must_use]
	/// # New.
	///
	/// Create a new instance from any collection of string-like tokens.
	///
	/// To parse the environment's arguments, use [`args`](crate::args)
	/// instead.
	pub fn new<I, S>(src: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		src.into_iter().collect()
	}

	#[must_use]
	/// # With Usage.
	///
	/// Replace the message carried by the error [`CmdLine::find_first_option`]
	/// returns when it comes up empty, e.g. with your program's help screen.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::CmdLine;
	///
	/// let cli = CmdLine::new(["-x"])
	///     .with_usage("Usage: foo -o <FILE>");
	///
	/// let err = cli.find_first_option("o").unwrap_err();
	/// assert_eq!(err.to_string(), "Usage: foo -o <FILE>");
	/// ```
	pub fn with_usage<S>(mut self, usage: S) -> Self
	where S: Into<Cow<'static, str>> {
		self.usage = usage.into();
		self
	}

	#[inline]
	#[must_use]
	/// # Usage.
	///
	/// Return the lookup failure message.
	pub fn usage(&self) -> &str { &self.usage }
}

/// ## Queries.
impl CmdLine {
	#[inline]
	#[must_use]
	/// # Find Option.
	///
	/// Return an iterator over every option beginning with `name`, in order.
	///
	/// A token matches if, once some number of its leading dashes are
	/// stripped, what remains starts with `name`. The main part of the
	/// resulting [`Opt`] is whatever comes after that.
	///
	/// Matching is by prefix, so `ver` will find `-ver=4.2` and `-verbose`
	/// alike. `name` is always taken literally; characters like `=` or `*`
	/// have no special meaning. An empty `name` matches every option.
	///
	/// An option's parameters run from the token after it up to, but not
	/// including, the next dashed token of _any_ name.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::CmdLine;
	///
	/// let cli = CmdLine::new([
	///     "-Djava.awt.headless=true",
	///     "-Djava.net.useSystemProxies=true",
	/// ]);
	///
	/// let keys: Vec<String> = cli.find_option("D")
	///     .map(|o| o.key().into_owned())
	///     .collect();
	///
	/// assert_eq!(keys, ["java.awt.headless", "java.net.useSystemProxies"]);
	/// ```
	pub fn find_option<'a, 'n>(&'a self, name: &'n str) -> Opts<'a, 'n> {
		Opts::new(&self.args, name)
	}

	/// # Find First Option.
	///
	/// Return the first option [`CmdLine::find_option`] would produce.
	///
	/// ## Errors
	///
	/// If there are no matches, an [`ArgotError::LookupFailed`] is returned
	/// carrying this instance's [usage](CmdLine::with_usage) message.
	pub fn find_first_option<'a>(&'a self, name: &str)
	-> Result<Opt<'a>, ArgotError> {
		self.find_option(name).next().ok_or_else(|| {
			debug!(query = name, "no matching option");
			ArgotError::LookupFailed(self.usage.clone())
		})
	}

	#[inline]
	#[must_use]
	/// # Options.
	///
	/// Return an iterator over every option, in order. This is equivalent to
	/// calling [`CmdLine::find_option`] with an empty name.
	pub fn options(&self) -> Opts<'_, 'static> { self.find_option("") }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_options_none() {
		assert_eq!(CmdLine::default().options().count(), 0);
		assert_eq!(CmdLine::new(["foo", "bar"]).options().count(), 0);
	}

	#[test]
	fn t_options_all() {
		let cli = CmdLine::new([
			"-x",
			"-fvx",
			"--help",
			"--max-depth=3",
			"-f",
			"file.txt",
			"-D",
			"par=10",
		]);

		let values: Vec<&str> = cli.options().map(|o| o.value()).collect();
		assert_eq!(values, ["x", "fvx", "help", "3", "f", "10"]);

		let file = cli.options().nth(4).expect("Missing -f.");
		assert_eq!(file.arguments().collect::<Vec<_>>(), ["file.txt"]);

		let d = cli.options().nth(5).expect("Missing -D.");
		assert_eq!(d.key(), "Dpar");
		assert_eq!(d.arguments().count(), 0);

		// The empty query is the same thing.
		assert!(cli.options().eq(cli.find_option("")));

		// And the same thing twice.
		let a: Vec<Opt> = cli.options().collect();
		let b: Vec<Opt> = cli.options().collect();
		assert_eq!(a, b);
	}

	#[test]
	fn t_options_count() {
		// One option per dashed token, however weird.
		for raw in [
			&["-", "--", "---"][..],
			&["a", "-b", "c", "-d=e", "f=g", "--"][..],
			&["-x", "-x", "-x"][..],
			&["x", "y", "z"][..],
		] {
			let expected = raw.iter().filter(|t| t.starts_with('-')).count();
			assert_eq!(CmdLine::new(raw.iter().copied()).options().count(), expected);
		}
	}

	#[test]
	fn t_posix() {
		let cli = CmdLine::new(["-zxvf", "foo.tar.gz"]);
		let mut opts = cli.options();
		let opt = opts.next().expect("Missing -zxvf.");
		assert_eq!(opt.value(), "zxvf");
		assert_eq!(opt.arguments().collect::<Vec<_>>(), ["foo.tar.gz"]);
		assert!(opts.next().is_none());
	}

	#[test]
	fn t_gnu() {
		let cli = CmdLine::new(["--human-readable", "--max-depth=1"]);
		assert!(cli.find_option("human-readable").next().is_some());
		assert_eq!(
			cli.find_option("max-depth").next().map(|o| o.value()),
			Some("1"),
		);
	}

	#[test]
	fn t_java() {
		let cli = CmdLine::new([
			"-Djava.awt.headless=true",
			"-Djava.net.useSystemProxies=true",
		]);
		let mut opts = cli.find_option("D");

		let opt = opts.next().expect("Missing first -D.");
		assert_eq!(opt.key(), "java.awt.headless");
		assert_eq!(opt.value(), "true");

		let opt = opts.next().expect("Missing second -D.");
		assert_eq!(opt.key(), "java.net.useSystemProxies");
		assert_eq!(opt.value(), "true");

		assert!(opts.next().is_none());
	}

	#[test]
	fn t_short_with_value() {
		let cli = CmdLine::new(["-O2"]);
		assert_eq!(cli.find_option("O").next().map(|o| o.value()), Some("2"));
		assert_eq!(cli.options().next().map(|o| o.value()), Some("O2"));
	}

	#[test]
	fn t_partial() {
		let cli = CmdLine::new(["-ver=4.2"]);
		let opt = cli.find_option("ver").next().expect("Missing -ver.");
		assert_eq!(opt.key(), "");
		assert_eq!(opt.value(), "4.2");
	}

	#[test]
	fn t_literal_names() {
		let cli = CmdLine::new(["--process=do"]);

		let opt = cli.find_option("-").next().expect("Missing --process.");
		assert_eq!(opt.key(), "process");
		assert_eq!(opt.value(), "do");

		assert!(cli.find_option("=").next().is_none());
		assert!(cli.find_option(".*").next().is_none());
		assert!(cli.find_option("p.*").next().is_none());
		assert!(cli.find_option("[p]").next().is_none());
	}

	#[test]
	fn t_boundary() {
		// Parameters stop at the next option, even an unrelated one.
		let cli = CmdLine::new(["-D", "par=10", "-x", "foo", "-D", "a", "b"]);
		let runs: Vec<&[String]> = cli.find_option("D")
			.map(|o| o.parameters())
			.collect();
		assert_eq!(runs.len(), 2);
		assert_eq!(runs[0], ["par=10"]);
		assert_eq!(runs[1], ["a", "b"]);

		// Leading strays belong to nobody.
		let cli = CmdLine::new(["stray", "-a"]);
		let opt = cli.options().next().expect("Missing -a.");
		assert!(opt.parameters().is_empty());
	}

	#[test]
	fn t_find_first() {
		let cli = CmdLine::new(["--dupl=1", "--duplA=2"]);
		let dupl = cli.find_first_option("dupl").expect("Missing --dupl.");
		assert_eq!(dupl.value(), "1");

		let cli = CmdLine::new(["--du=1", "--duA=2"]);
		assert_eq!(
			cli.find_first_option("duplic"),
			Err(ArgotError::LookupFailed(Cow::Borrowed(DEFAULT_USAGE))),
		);

		let cli = cli.with_usage(String::from("Try --help."));
		assert_eq!(cli.usage(), "Try --help.");
		let err = cli.find_first_option("duplic").expect_err("Found --duplic?!");
		assert_eq!(err.as_str(), "Try --help.");
	}

	#[test]
	fn t_runtime_name() {
		let cli = CmdLine::new(["-Dpar=10", "-x", "file.txt"]);

		// Options only borrow the tokens, not the name used to find them.
		let opt = {
			let name = String::from("D");
			cli.find_first_option(&name).expect("Missing -D.")
		};
		assert_eq!(opt.key(), "par");
		assert_eq!(opt.value(), "10");

		let found: Vec<Opt> = {
			let name = "x".to_owned();
			cli.find_option(&name).collect()
		};
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].arguments().collect::<Vec<_>>(), ["file.txt"]);
	}

	#[test]
	fn t_threads() {
		let cli = CmdLine::new(["-a", "1", "--b=2", "-c", "x", "k=v"]);
		let expected: Vec<Opt> = cli.options().collect();

		let cli = &cli;
		std::thread::scope(|s| {
			let handles: Vec<_> = (0..4)
				.map(|_| s.spawn(move || cli.options().collect::<Vec<Opt>>()))
				.collect();
			for h in handles {
				assert_eq!(h.join().expect("Thread panicked."), expected);
			}
		});
	}
}
