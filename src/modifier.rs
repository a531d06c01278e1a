use crate::error::ConvertError;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A user-defined keyword with its EDTF encoding.
///
/// In text the modifier is recognised by its keyword; in EDTF by its
/// detection pattern. `apply` adds the encoding to an EDTF string and `strip`
/// removes it again. The same shape describes custom interval separators.
#[derive(Clone)]
pub struct CustomModifier {
    keyword: String,
    pattern: Regex,
    apply:   Transform,
    strip:   Transform,
}

impl CustomModifier {
    /// Builds a modifier from its keyword, a detection pattern and the
    /// add/remove transforms.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidPattern` if `pattern` does not compile.
    pub fn new<A, S>(keyword: &str, pattern: &str, apply: A, strip: S) -> Result<Self, ConvertError>
    where
        A: Fn(&str) -> String + Send + Sync + 'static,
        S: Fn(&str) -> String + Send + Sync + 'static,
    {
        Ok(Self {
            keyword: keyword.to_owned(),
            pattern: Regex::new(pattern)?,
            apply:   Arc::new(apply),
            strip:   Arc::new(strip),
        })
    }

    /// A modifier that wraps the EDTF in `prefix`/`suffix`, e.g. `[..` and `..]`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidPattern` if the derived pattern does not compile.
    pub fn wrapping(keyword: &str, prefix: &str, suffix: &str) -> Result<Self, ConvertError> {
        let pattern = format!(r"^{}.+{}$", regex::escape(prefix), regex::escape(suffix));
        let (add_prefix, add_suffix) = (prefix.to_owned(), suffix.to_owned());
        let (cut_prefix, cut_suffix) = (prefix.to_owned(), suffix.to_owned());
        Self::new(
            keyword,
            &pattern,
            move |edtf| format!("{add_prefix}{edtf}{add_suffix}"),
            move |edtf| {
                let inner = edtf.strip_prefix(cut_prefix.as_str()).unwrap_or(edtf);
                inner.strip_suffix(cut_suffix.as_str()).unwrap_or(inner).to_owned()
            },
        )
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether the EDTF string carries this modifier.
    pub fn detect(&self, edtf: &str) -> bool {
        self.pattern.is_match(edtf)
    }

    /// Removes this modifier's encoding from an EDTF string.
    pub fn strip(&self, edtf: &str) -> String {
        (self.strip)(edtf)
    }

    /// Adds this modifier's encoding to an EDTF string.
    pub fn apply(&self, edtf: &str) -> String {
        (self.apply)(edtf)
    }
}

impl fmt::Debug for CustomModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomModifier")
            .field("keyword", &self.keyword)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl PartialEq for CustomModifier {
    fn eq(&self, other: &Self) -> bool {
        self.keyword == other.keyword && self.pattern.as_str() == other.pattern.as_str()
    }
}
