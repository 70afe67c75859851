use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Names the generated code already uses, plus the C++ keywords.
const RESERVED: &[&str] = &[
    "App", "setup", "loop", "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand",
    "bitor", "bool", "break", "case", "catch", "char", "char16_t", "char32_t", "char8_t", "class",
    "co_await", "co_return", "co_yield", "compl", "concept", "const", "const_cast", "consteval",
    "constexpr", "constinit", "continue", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept",
    "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected", "public",
    "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Name of an object in the generated firmware code.
///
/// Only names that are usable as C++ variables get through parsing: ASCII
/// letters, digits and underscores, not starting with a digit, and not a
/// reserved word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap a name assembled from parts that are already valid identifiers.
    pub(crate) fn trusted(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(check(&name).is_ok(), "invalid identifier '{name}'");
        Identifier(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn check(name: &str) -> Result<(), String> {
    let Some(first) = name.chars().next() else {
        return Err("ID must not be empty".into());
    };
    if name.contains('-') {
        return Err("Dashes are not supported in IDs, please use underscores instead.".into());
    }
    if let Some(c) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!(
            "IDs must only consist of upper/lowercase characters, the underscore \
             character and numbers. The character '{c}' cannot be used"
        ));
    }
    if first.is_ascii_digit() {
        return Err("First character of ID cannot be a digit.".into());
    }
    if RESERVED.contains(&name) {
        return Err(format!("ID '{name}' is reserved internally and cannot be used"));
    }
    Ok(())
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        check(name)?;
        Ok(Identifier(name.to_string()))
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct IdentifierVisitor;

impl<'de> Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ID made of letters, digits and underscores")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IdentifierVisitor)
    }
}
