/*!
# Argot

This crate provides a tiny, shape-driven CLI option finder called [`CmdLine`].

There are no declarations, types, or validation rules; [`CmdLine`] simply
looks at the tokens it was given and works out the structure from how they
look:

* Anything starting with one or more dashes is an option (an [`Opt`]);
* The non-dashed tokens following an option are its parameters;
* Anything containing an `=`, in the option itself or one of its parameters, is a key/value pair;
* Every other parameter is a positional argument.

Options are found by name prefix and decoded on demand. What you do with them
afterwards is _entirely up to you_.



## Example

```
use argot::CmdLine;

// Most of the time you'll want the environment's arguments, which the
// `argot::args` helper collects, but any list of strings will do.
let cli = CmdLine::new([
    "-x",
    "--max-depth=3",
    "-f",
    "file.txt",
    "-D",
    "par=10",
])
    .with_usage("Usage: foo [-x] [--max-depth=N] -f <FILE>");

// Every option, in order.
let values: Vec<&str> = cli.options().map(|o| o.value()).collect();
assert_eq!(values, ["x", "3", "f", "10"]);

// A specific option, or bust.
let file = match cli.find_first_option("f") {
    Ok(opt) => opt,
    Err(e) => {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    },
};
assert_eq!(file.arguments().next(), Some("file.txt"));

// Keys and values can live in the option or its parameters.
let depth = cli.find_first_option("max-depth").unwrap();
assert_eq!(depth.value(), "3");

let prop = cli.find_first_option("D").unwrap();
assert_eq!(prop.key(), "par");
assert_eq!(prop.value(), "10");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::str_to_string,
	clippy::todo,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]



mod cmdline;
mod error;
mod iter;
mod opt;
mod token;

pub use cmdline::CmdLine;
pub use error::{
	ArgotError,
	DEFAULT_USAGE,
};
pub use iter::Opts;
pub use opt::{
	Arguments,
	Opt,
};
use std::ffi::OsString;
use tracing::debug;



#[must_use]
/// # CLI Arguments.
///
/// Return a [`CmdLine`] seeded with [`std::env::args_os`], skipping the first
/// (command path) entry.
///
/// Arguments that aren't valid UTF-8 are converted lossily rather than
/// causing a panic.
pub fn args() -> CmdLine {
	let out = from_os(std::env::args_os());
	debug!(count = out.len(), "collected CLI arguments");
	out
}

/// # From `OsString`s.
///
/// Build a [`CmdLine`] from raw `argv`-style values, skipping the first
/// (command path) entry and converting invalid UTF-8 lossily.
fn from_os<I>(src: I) -> CmdLine
where I: IntoIterator<Item=OsString> {
	src.into_iter()
		.skip(1)
		.map(|a| a.into_string().unwrap_or_else(|a| a.to_string_lossy().into_owned()))
		.collect()
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_os() {
		let cli = from_os([
			OsString::from("/usr/bin/foo"),
			OsString::from("-f"),
			OsString::from("file.txt"),
		]);
		assert_eq!(&*cli, ["-f", "file.txt"]);

		// Nothing at all, or just the command path.
		assert!(from_os(Vec::<OsString>::new()).is_empty());
		assert!(from_os([OsString::from("/usr/bin/foo")]).is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn t_from_os_lossy() {
		use std::{
			ffi::OsStr,
			os::unix::ffi::OsStrExt,
		};

		let cli = from_os([
			OsString::from("foo"),
			OsString::from("-D"),
			OsStr::from_bytes(b"k=\xff").to_owned(),
		]);
		assert_eq!(cli.len(), 2);
		assert_eq!(cli[1], "k=\u{fffd}");

		let opt = cli.find_first_option("D").expect("Missing -D.");
		assert_eq!(opt.key(), "k");
		assert_eq!(opt.value(), "\u{fffd}");
	}
}
