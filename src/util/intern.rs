//! Interned identifier storage.
//!
//! Target and module names are copied and compared constantly while a
//! registry is populated and queried. A `Symbol` stores each distinct
//! name exactly once for the life of the process, so handles are `Copy`
//! and equality is a pointer comparison.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{LazyLock, Mutex};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Process-wide symbol table.
static SYMBOLS: LazyLock<Mutex<HashSet<&'static str>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

/// An interned name.
///
/// Two `Symbol`s with the same text share one allocation, so equality is a
/// pointer comparison and cloning is a copy. Interned text is never freed;
/// the set of distinct names in a build configuration is small.
#[derive(Clone, Copy)]
pub struct Symbol(&'static str);

impl Symbol {
    /// Intern `text`, returning the canonical handle for it.
    pub fn intern(text: &str) -> Symbol {
        let mut symbols = SYMBOLS.lock().unwrap();
        if let Some(&stored) = symbols.get(text) {
            return Symbol(stored);
        }
        let stored: &'static str = Box::leak(text.to_owned().into_boxed_str());
        symbols.insert(stored);
        Symbol(stored)
    }

    /// Get the underlying string slice.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Check if the symbol is the empty string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Symbol {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for Symbol {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Borrow<str> for Symbol {
    #[inline]
    fn borrow(&self) -> &str {
        self.0
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(other.0)
    }
}

impl Hash for Symbol {
    // Hashes the text, not the pointer, so `Borrow<str>` map lookups by
    // plain `&str` stay consistent.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::intern(&s)
    }
}

impl From<&String> for Symbol {
    fn from(s: &String) -> Self {
        Symbol::intern(s)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interned_equality() {
        let a = Symbol::intern("SGame");
        let b = Symbol::intern("SGame");
        let c = Symbol::intern("SGameEditor");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn test_map_lookup_by_str() {
        use std::collections::HashMap;

        let mut map: HashMap<Symbol, u32> = HashMap::new();
        map.insert(Symbol::intern("Core"), 7);

        // Borrow<str> lets a plain &str index the map.
        assert_eq!(map.get("Core"), Some(&7));
        assert_eq!(map.get("Missing"), None);
    }

    #[test]
    fn test_ordering_is_lexical() {
        let mut names = vec![
            Symbol::intern("Server"),
            Symbol::intern("Client"),
            Symbol::intern("Editor"),
        ];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(Symbol::as_str).collect();
        assert_eq!(sorted, vec!["Client", "Editor", "Server"]);
    }
}
