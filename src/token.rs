/*!
# Argot: Token Shapes.

These helpers classify individual tokens by shape alone. Nothing here knows
about sessions or options; they just answer "is this dashed?" and "does this
dashed thing start with that name?".
*/



#[inline]
#[must_use]
/// # Is Option?
///
/// Any token with at least one leading dash is option-looking, and marks the
/// end of the previous option's parameter run.
pub(crate) const fn is_option(token: &str) -> bool {
	matches!(token.as_bytes(), [b'-', ..])
}

/// # Leading Dashes.
///
/// Return the number of leading `-` bytes.
const fn dashes(token: &str) -> usize {
	let mut bytes = token.as_bytes();
	let len = bytes.len();
	while let [b'-', rest @ ..] = bytes { bytes = rest; }
	len - bytes.len()
}

#[must_use]
/// # Strip Name.
///
/// If `token` is an option beginning with the literal `name`, return the
/// "main" remainder left after removing the leading dashes and the name.
///
/// When a token has `n` leading dashes, the split is attempted at `n`, then
/// `n - 1`, and so on down to `1`, so a `name` that itself begins with a dash
/// can still claim some of them. For example, `-` matches `--process` with
/// a remainder of `process`.
///
/// `name` is compared as plain text; nothing in it is special.
pub(crate) fn strip_name<'a>(token: &'a str, name: &str) -> Option<&'a str> {
	let n = dashes(token);
	(1..=n).rev().find_map(|idx| token[idx..].strip_prefix(name))
}

/// # Boundary.
///
/// Return the index of the first option-looking token in `tokens`, or its
/// length if there isn't one.
pub(crate) fn boundary<F>(tokens: &[String], cb: F) -> usize
where F: Fn(&str) -> bool {
	tokens.iter().position(|t| cb(t.as_str())).unwrap_or(tokens.len())
}
