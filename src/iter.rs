/*!
# Argot: Option Iterator
*/

use crate::{
	Opt,
	token,
};
use std::iter::FusedIterator;
use tracing::trace;



#[derive(Debug, Clone)]
/// # Option Iterator.
///
/// This iterates through the options of a [`CmdLine`](crate::CmdLine)
/// matching a given name, in order. See
/// [`CmdLine::find_option`](crate::CmdLine::find_option) for the matching
/// rules.
///
/// Nothing is precomputed; each option is worked out as it is reached. Clone
/// the iterator (or rerun the query) to start over.
pub struct Opts<'a, 'n> {
	/// # Tokens.
	inner: &'a [String],

	/// # Query Name.
	name: &'n str,

	/// # Next Index.
	pos: usize,
}

impl<'a> Iterator for Opts<'a, '_> {
	type Item = Opt<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(raw) = self.inner.get(self.pos) {
			self.pos += 1;
			if let Some(main) = token::strip_name(raw, self.name) {
				let rest = self.inner.get(self.pos..).unwrap_or_default();
				let end = token::boundary(rest, token::is_option);

				// Nothing in the run is dashed, so nothing in it can match;
				// jump straight to the boundary.
				self.pos += end;

				trace!(query = self.name, main, params = end, "option found");
				return Some(Opt::new(main, &rest[..end]));
			}
		}

		None
	}

	/// # Size Hint.
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.inner.len().saturating_sub(self.pos)))
	}
}

impl FusedIterator for Opts<'_, '_> {}

impl<'a, 'n> Opts<'a, 'n> {
	#[inline]
	/// # New.
	pub(crate) const fn new(inner: &'a [String], name: &'n str) -> Self {
		Self {
			inner,
			name,
			pos: 0,
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_opts() {
		let raw: Vec<String> = ["stray", "-a", "x", "y=1", "-b", "--a", "-c", "z"]
			.into_iter()
			.map(String::from)
			.collect();

		let mut opts = Opts::new(&raw, "a");
		let next = opts.next().expect("Missing -a.");
		assert_eq!(next.main(), "");
		assert_eq!(next.parameters(), ["x", "y=1"]);

		// The second -a stops at the unrelated -c.
		let next = opts.next().expect("Missing --a.");
		assert_eq!(next.main(), "");
		assert!(next.parameters().is_empty());

		assert!(opts.next().is_none());
		assert!(opts.next().is_none());

		// Everything.
		let all: Vec<&str> = Opts::new(&raw, "").map(|o| o.main()).collect();
		assert_eq!(all, ["a", "b", "a", "c"]);

		// Nothing.
		assert_eq!(Opts::new(&raw, "stray").count(), 0);
		assert_eq!(Opts::new(&[], "").count(), 0);
	}
}
