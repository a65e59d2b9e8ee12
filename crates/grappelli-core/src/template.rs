//! `[name]` placeholder substitution
//!
//! Value templates, URL templates, and confirm messages all use the same
//! token syntax: `[field]` is replaced by the field's current value.
//! Substitution is a single left-to-right scan; substituted output is
//! never re-scanned, so a value that itself contains bracket tokens cannot
//! trigger a second round of replacement.

/// Replaces every `[token]` for which `lookup` yields a value.
///
/// Tokens the lookup does not recognize are left in place verbatim, which
/// keeps templates composable: a URL template may carry `[offset]` through
/// a first pass that only knows row fields.
///
/// # Examples
///
/// ```
/// use grappelli_core::substitute;
///
/// let full = substitute("[first] [last]", |token| match token {
/// 	"first" => Some("Django".to_string()),
/// 	"last" => Some("Reinhardt".to_string()),
/// 	_ => None,
/// });
/// assert_eq!(full, "Django Reinhardt");
///
/// let partial = substitute("edit?id=[id]&offset=[offset]", |token| {
/// 	(token == "id").then(|| "7".to_string())
/// });
/// assert_eq!(partial, "edit?id=7&offset=[offset]");
/// ```
pub fn substitute(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
	let mut output = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(start) = rest.find('[') {
		output.push_str(&rest[..start]);
		let after = &rest[start + 1..];

		match after.find(['[', ']']) {
			// a complete [token]
			Some(end) if after[end..].starts_with(']') => {
				let token = &after[..end];
				match lookup(token) {
					Some(value) => output.push_str(&value),
					None => {
						output.push('[');
						output.push_str(token);
						output.push(']');
					}
				}
				rest = &after[end + 1..];
			}
			// another opening bracket before any closing one: the first
			// bracket can never close, emit it and rescan from the second
			Some(end) => {
				output.push('[');
				output.push_str(&after[..end]);
				rest = &after[end..];
			}
			// unterminated token at the end of the template
			None => {
				output.push('[');
				output.push_str(after);
				rest = "";
			}
		}
	}

	output.push_str(rest);
	output
}

/// Escapes the HTML-significant characters of `value`.
///
/// Used for confirm messages, which end up inside an `onclick` attribute.
pub fn escape_html(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pair_lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
		move |token| {
			pairs
				.iter()
				.find(|(name, _)| *name == token)
				.map(|(_, value)| value.to_string())
		}
	}

	#[test]
	fn substitutes_known_tokens() {
		let result = substitute("[a]-[b]", pair_lookup(&[("a", "1"), ("b", "2")]));
		assert_eq!(result, "1-2");
	}

	#[test]
	fn leaves_unknown_tokens_verbatim() {
		let result = substitute("[a] [missing]", pair_lookup(&[("a", "1")]));
		assert_eq!(result, "1 [missing]");
	}

	#[test]
	fn substituted_values_are_not_rescanned() {
		// "[b]" arriving through a value must not be replaced again
		let result = substitute("[a] [b]", pair_lookup(&[("a", "[b]"), ("b", "2")]));
		assert_eq!(result, "[b] 2");
	}

	#[test]
	fn handles_stray_brackets() {
		let lookup = pair_lookup(&[("b", "2")]);
		assert_eq!(substitute("a[[b]c", &lookup), "a[2c");
		assert_eq!(substitute("tail[unclosed", &lookup), "tail[unclosed");
		assert_eq!(substitute("no tokens", &lookup), "no tokens");
	}

	#[test]
	fn empty_token_is_left_alone() {
		let result = substitute("x[]y", pair_lookup(&[]));
		assert_eq!(result, "x[]y");
	}

	#[test]
	fn escapes_html_characters() {
		assert_eq!(
			escape_html(r#"Delete "L'album" <now> & forever"#),
			"Delete &quot;L&#039;album&quot; &lt;now&gt; &amp; forever"
		);
	}
}
