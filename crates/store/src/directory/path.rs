// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Slash separated path of a namespace, relative to the store root. Empty segments are dropped, so
/// `"/a//b/"` and `"a/b"` name the same namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacePath(Vec<String>);

impl NamespacePath {
	pub fn root() -> Self {
		Self(Vec::new())
	}

	pub fn new<I, S>(components: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(components.into_iter().map(Into::into).collect())
	}

	pub fn parse(path: &str) -> Self {
		Self::new(path.split('/').filter(|segment| !segment.is_empty()))
	}

	pub fn child(&self, name: impl Into<String>) -> Self {
		let mut components = self.0.clone();
		components.push(name.into());
		Self(components)
	}

	/// The parent path and the last component; `None` for the root.
	pub fn split_last(&self) -> Option<(NamespacePath, &str)> {
		let (last, parent) = self.0.split_last()?;
		Some((Self(parent.to_vec()), last.as_str()))
	}

	pub fn components(&self) -> &[String] {
		&self.0
	}

	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for NamespacePath {
	fn from(path: &str) -> Self {
		Self::parse(path)
	}
}

impl Display for NamespacePath {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.0.is_empty() {
			return f.write_str("/");
		}
		for component in &self.0 {
			write!(f, "/{component}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::NamespacePath;

	#[test]
	fn test_parse() {
		assert_eq!(NamespacePath::parse("/a//b/"), NamespacePath::new(["a", "b"]));
		assert!(NamespacePath::parse("").is_root());
		assert!(NamespacePath::parse("///").is_root());
	}

	#[test]
	fn test_display() {
		assert_eq!(NamespacePath::root().to_string(), "/");
		assert_eq!(NamespacePath::from("Manager").child("Users").to_string(), "/Manager/Users");
	}

	#[test]
	fn test_split_last() {
		let path = NamespacePath::new(["Manager", "Users"]);
		let (parent, last) = path.split_last().unwrap();
		assert_eq!(parent, NamespacePath::new(["Manager"]));
		assert_eq!(last, "Users");
		assert!(NamespacePath::root().split_last().is_none());
	}
}
