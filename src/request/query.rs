//! Declarative URL-parameter encoding.
//!
//! Each option struct lists the fields that belong in the query string, usually through
//! [`url_params!`](crate::url_params). Fields that are not listed (path substitution values,
//! body-only fields) can never leak into the URL.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Maps a request's typed fields onto query-string pairs.
pub trait UrlParams {
	/// Appends this value's query parameters to `query`.
	fn append_query(&self, query: &mut QueryPairs);
}
impl<T> UrlParams for &T
where
	T: ?Sized + UrlParams,
{
	fn append_query(&self, query: &mut QueryPairs) {
		(**self).append_query(query);
	}
}

/// Parameter object for requests without query parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoParams;
impl UrlParams for NoParams {
	fn append_query(&self, _: &mut QueryPairs) {}
}

/// Ordered query-string pairs collected from a [`UrlParams`] value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(String, String)>);
impl QueryPairs {
	/// Collects the pairs produced by `params`.
	pub fn from_params<P>(params: &P) -> Self
	where
		P: ?Sized + UrlParams,
	{
		let mut query = Self::default();

		params.append_query(&mut query);

		query
	}

	/// Appends `name=value` unless `value` is empty.
	pub fn push<V>(&mut self, name: &str, value: &V)
	where
		V: ?Sized + QueryValue,
	{
		if let Some(value) = value.query_value() {
			self.0.push((name.to_owned(), value));
		}
	}

	/// Returns `true` when no pair was collected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns `true` when a pair named `name` was collected.
	pub fn contains(&self, name: &str) -> bool {
		self.0.iter().any(|(key, _)| key == name)
	}

	/// Returns the first value collected for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// Iterates over the collected pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Percent-encodes the pairs as `application/x-www-form-urlencoded`.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}

/// Renders a field for the query string; `None` omits the field.
///
/// Scalars follow `omitempty` rules: zero numbers, `false`, and empty strings are omitted.
/// `Option` values are emitted whenever they are `Some`, including zero values.
pub trait QueryValue {
	/// Returns the rendered value, or `None` to omit the field.
	fn query_value(&self) -> Option<String>;
}
impl<T> QueryValue for &T
where
	T: ?Sized + QueryValue,
{
	fn query_value(&self) -> Option<String> {
		(**self).query_value()
	}
}
impl<T> QueryValue for Option<T>
where
	T: Display,
{
	fn query_value(&self) -> Option<String> {
		self.as_ref().map(ToString::to_string)
	}
}
impl QueryValue for str {
	fn query_value(&self) -> Option<String> {
		(!self.is_empty()).then(|| self.to_owned())
	}
}
impl QueryValue for String {
	fn query_value(&self) -> Option<String> {
		self.as_str().query_value()
	}
}
impl QueryValue for bool {
	fn query_value(&self) -> Option<String> {
		self.then(|| "true".to_owned())
	}
}
macro_rules! impl_numeric_query_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl QueryValue for $ty {
				fn query_value(&self) -> Option<String> {
					(*self != 0).then(|| self.to_string())
				}
			}
		)*
	};
}
impl_numeric_query_value!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Implements [`UrlParams`] for a struct by listing `field => "name"` pairs.
///
/// Only the listed fields reach the query string, in the listed order.
///
/// ```
/// use zoom_client::{request::QueryPairs, url_params};
///
/// struct ListOptions {
/// 	user_id: String,
/// 	page_size: u32,
/// 	next_page_token: Option<String>,
/// }
/// url_params!(ListOptions { page_size => "page_size", next_page_token => "next_page_token" });
///
/// let options = ListOptions { user_id: "me".into(), page_size: 30, next_page_token: None };
///
/// assert_eq!(QueryPairs::from_params(&options).encode(), "page_size=30");
/// ```
#[macro_export]
macro_rules! url_params {
	($ty:ty { $($field:ident => $name:literal),* $(,)? }) => {
		impl $crate::request::UrlParams for $ty {
			#[allow(unused_variables)]
			fn append_query(&self, query: &mut $crate::request::QueryPairs) {
				$(query.push($name, &self.$field);)*
			}
		}
	};
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	struct Listing {
		owner_id: String,
		page_size: u32,
		include_deleted: bool,
		from: Option<String>,
		occurrence: Option<u64>,
	}
	crate::url_params!(Listing {
		page_size => "page_size",
		include_deleted => "include_deleted",
		from => "from",
		occurrence => "occurrence_id",
	});

	#[test]
	fn unlisted_fields_never_reach_query() {
		let listing = Listing {
			owner_id: "KDcuGIm1QgePTO8WbOqwIQ".into(),
			page_size: 30,
			include_deleted: true,
			from: Some("2024-01-01".into()),
			occurrence: None,
		};
		let query = QueryPairs::from_params(&listing);

		assert!(!query.contains("owner_id"));
		assert!(!query.encode().contains(&listing.owner_id));
		assert_eq!(query.encode(), "page_size=30&include_deleted=true&from=2024-01-01");
	}

	#[test]
	fn zero_scalars_are_omitted_but_some_zero_is_kept() {
		let listing = Listing {
			owner_id: String::new(),
			page_size: 0,
			include_deleted: false,
			from: None,
			occurrence: Some(0),
		};
		let query = QueryPairs::from_params(&listing);

		assert_eq!(query.get("occurrence_id"), Some("0"));
		assert!(!query.contains("page_size"));
		assert!(!query.contains("include_deleted"));
	}

	#[test]
	fn values_are_percent_encoded() {
		let mut query = QueryPairs::default();

		query.push("topic", "Daily standup & sync");

		assert_eq!(query.encode(), "topic=Daily+standup+%26+sync");
	}

	#[test]
	fn no_params_is_empty() {
		assert!(QueryPairs::from_params(&NoParams).is_empty());
	}
}
