/*!
# Argot: Errors

This is the obligatory error enum. There is only the one way to fail: asking
[`CmdLine::find_first_option`](crate::CmdLine::find_first_option) for
something that isn't there.
*/

use std::borrow::Cow;
use thiserror::Error;



/// # Default Usage Message.
///
/// This is the payload used when a [`CmdLine`](crate::CmdLine) is not given
/// one of its own via [`CmdLine::with_usage`](crate::CmdLine::with_usage).
pub const DEFAULT_USAGE: &str = "Wrong usage of arguments";



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error Struct.
pub enum ArgotError {
	/// # Lookup Failed.
	///
	/// No option matched the query. The payload is whatever usage/help text
	/// the session was configured with, so can be printed as-is.
	#[error("{0}")]
	LookupFailed(Cow<'static, str>),
}

impl AsRef<str> for ArgotError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl ArgotError {
	#[must_use]
	/// # Exit code.
	///
	/// Usage errors always exit `1`.
	pub const fn exit_code(&self) -> i32 {
		match self { Self::LookupFailed(_) => 1 }
	}

	#[must_use]
	/// # As Str.
	///
	/// Return the payload as a string slice.
	pub fn as_str(&self) -> &str {
		match self { Self::LookupFailed(s) => &**s }
	}
}
