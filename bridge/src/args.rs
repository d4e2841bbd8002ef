use value::Value;

/// The argument envelope of one call, as the host supplied it.
///
/// Positional values come first, keywords keep their insertion order. No
/// checking happens here; duplicates and unknown names are reported by
/// [`crate::Signature::bind`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`CallArgs::push_positional`].
    pub fn positional(mut self, value: impl Into<Value>) -> Self {
        self.push_positional(value);
        self
    }

    /// Builder form of [`CallArgs::push_keyword`].
    pub fn keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_keyword(name, value);
        self
    }

    pub fn push_positional(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    pub fn push_keyword(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.keywords.push((name.into(), value.into()));
    }

    pub fn positionals(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keywords.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<V: Into<Value>> FromIterator<V> for CallArgs {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }
}
