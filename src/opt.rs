/*!
# Argot: Options.
*/

use std::{
	borrow::Cow,
	iter::FusedIterator,
	slice::Iter,
};



/// # Key/Value Separator.
const EQ: char = '=';



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Option.
///
/// This is a single dash-prefixed token (minus its dashes and whatever name
/// it was found by) along with the run of non-dashed tokens immediately
/// following it.
///
/// Nothing is decided upfront; the [`Opt::key`], [`Opt::value`], and
/// [`Opt::arguments`] accessors work it out on demand from those two pieces
/// using a single rule: anything containing an `=` is a key/value pair, and
/// everything else is a positional argument.
///
/// ## Examples
///
/// ```
/// use argot::Opt;
///
/// // As from `-Dpar=10x`, found by name "D".
/// let opt = Opt::new("par=10x", &[]);
/// assert_eq!(opt.key(), "par");
/// assert_eq!(opt.value(), "10x");
///
/// // As from `-D p=10x foo.txt`, found by name "D".
/// let params = vec!["p=10x".to_owned(), "foo.txt".to_owned()];
/// let opt = Opt::new("", &params);
/// assert_eq!(opt.key(), "p");
/// assert_eq!(opt.value(), "10x");
/// assert_eq!(opt.arguments().collect::<Vec<_>>(), ["foo.txt"]);
/// ```
pub struct Opt<'a> {
	/// # Main Part.
	main: &'a str,

	/// # Parameter Run.
	params: &'a [String],
}

impl<'a> Opt<'a> {
	#[inline]
	#[must_use]
	/// # New.
	///
	/// Most options will come from a [`CmdLine`](crate::CmdLine) query, but
	/// they can be built directly too if you've already split things up.
	pub const fn new(main: &'a str, params: &'a [String]) -> Self {
		Self { main, params }
	}

	#[inline]
	#[must_use]
	/// # Main Part.
	///
	/// Return the matched token with its leading dashes and query name
	/// removed.
	pub const fn main(&self) -> &'a str { self.main }

	#[inline]
	#[must_use]
	/// # Parameters.
	///
	/// Return the raw tokens following the option, up to (but not including)
	/// the next dash-prefixed token.
	pub const fn parameters(&self) -> &'a [String] { self.params }
}

impl<'a> Opt<'a> {
	#[inline]
	#[must_use]
	/// # Arguments.
	///
	/// Return an iterator over the parameters that do _not_ contain an `=`.
	/// (Those that do are key/value material, not arguments.)
	///
	/// ## Examples
	///
	/// ```
	/// use argot::Opt;
	///
	/// let params = vec!["pp=xx".to_owned(), "newfile".to_owned()];
	/// let opt = Opt::new("b", &params);
	/// assert_eq!(opt.arguments().collect::<Vec<_>>(), ["newfile"]);
	/// ```
	pub fn arguments(&self) -> Arguments<'a> {
		Arguments { inner: self.params.iter() }
	}

	#[must_use]
	/// # Key.
	///
	/// If the main part contains an `=`, the key is everything before it.
	///
	/// Otherwise the key is the main part joined with the pre-`=` half of the
	/// first parameter containing an `=`, or empty if no parameter does.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::Opt;
	///
	/// assert_eq!(Opt::new("k=xad", &[]).key(), "k");
	/// assert_eq!(Opt::new("kval", &["kk".to_owned()]).key(), "");
	/// assert_eq!(Opt::new("K", &["k=val".to_owned()]).key(), "Kk");
	/// ```
	pub fn key(&self) -> Cow<'a, str> {
		if let Some((k, _)) = self.main.split_once(EQ) { Cow::Borrowed(k) }
		else if let Some((k, _)) = self.pair().and_then(|p| p.split_once(EQ)) {
			if self.main.is_empty() { Cow::Borrowed(k) }
			else {
				let mut out = String::with_capacity(self.main.len() + k.len());
				out.push_str(self.main);
				out.push_str(k);
				Cow::Owned(out)
			}
		}
		else { Cow::Borrowed("") }
	}

	#[must_use]
	/// # Value.
	///
	/// If the main part contains an `=`, the value is everything after it,
	/// provided there is exactly one `=` and something follows it. If not,
	/// the value is empty; `-key=` says "key present, value absent".
	///
	/// Otherwise the value is the main part itself, unless the first
	/// parameter containing an `=` holds a proper `key=value` pair, in which
	/// case it is that pair's value. Either way, only that first `=`
	/// parameter is considered.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::Opt;
	///
	/// assert_eq!(Opt::new("=4.2", &[]).value(), "4.2");
	/// assert_eq!(Opt::new("par1=", &[]).value(), "");
	/// assert_eq!(Opt::new("zxvf", &["foo.tar.gz".to_owned()]).value(), "zxvf");
	/// assert_eq!(Opt::new("", &["par=10".to_owned()]).value(), "10");
	/// ```
	pub fn value(&self) -> &'a str {
		if self.main.contains(EQ) { split_value(self.main).unwrap_or("") }
		else {
			self.pair()
				.and_then(split_value)
				.unwrap_or(self.main)
		}
	}

	/// # First Key/Value Parameter.
	///
	/// Return the first parameter containing an `=`, if any.
	fn pair(&self) -> Option<&'a str> {
		self.params.iter()
			.find(|p| p.contains(EQ))
			.map(String::as_str)
	}
}



#[derive(Debug, Clone)]
/// # Argument Iterator.
///
/// This iterates through the parameters of an [`Opt`] that are positional
/// arguments, i.e. those lacking an `=`. See [`Opt::arguments`].
pub struct Arguments<'a> {
	/// # Parameters.
	inner: Iter<'a, String>,
}

impl<'a> Iterator for Arguments<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.by_ref()
			.find(|p| ! p.contains(EQ))
			.map(String::as_str)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.inner.len()))
	}
}

impl DoubleEndedIterator for Arguments<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.by_ref()
			.rfind(|p| ! p.contains(EQ))
			.map(String::as_str)
	}
}

impl FusedIterator for Arguments<'_> {}



/// # Split Value.
///
/// Return the part after the `=` if `src` is exactly `key=value` with a
/// non-empty value. The key may be empty.
fn split_value(src: &str) -> Option<&str> {
	let (_, v) = src.split_once(EQ)?;
	if v.is_empty() || v.contains(EQ) { None }
	else { Some(v) }
}
