//! Configuration options for HTML rendering

use indexmap::IndexMap;

/// Class attribute applied to the scoping `<div>` when [`Scoped::Rte`] is
/// selected.
pub const DEFAULT_SCOPED_CLASS: &str = "rte";

/// Scoped wrapper behaviour for document-level rendering.
///
/// When enabled, the rendered body of a `root` document is wrapped in a
/// single `<div>` carrying a class for stylesheet namespacing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scoped {
    /// No wrapper element
    #[default]
    Off,
    /// Wrap in `<div class="rte">`
    Rte,
    /// Wrap in a `<div>` with the given class, verbatim
    Class(String),
}

impl Scoped {
    /// The wrapper class, or `None` when no wrapper should be emitted.
    /// An empty class string counts as off.
    pub fn class(&self) -> Option<&str> {
        match self {
            Scoped::Off => None,
            Scoped::Rte => Some(DEFAULT_SCOPED_CLASS),
            Scoped::Class(class) if class.is_empty() => None,
            Scoped::Class(class) => Some(class),
        }
    }
}

impl From<bool> for Scoped {
    fn from(scoped: bool) -> Self {
        if scoped {
            Scoped::Rte
        } else {
            Scoped::Off
        }
    }
}

impl From<&str> for Scoped {
    fn from(class: &str) -> Self {
        Scoped::Class(class.to_string())
    }
}

impl From<String> for Scoped {
    fn from(class: String) -> Self {
        Scoped::Class(class)
    }
}

/// Class lookup keyed by emitted tag name (`p`, `h1`..`h6`, `ol`, `ul`,
/// `li`, `a`, `strong`, `em`).
pub type ClassMap = IndexMap<String, String>;

/// Options for schema to HTML conversion
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Wrap the rendered document body in a scoping `<div>`
    pub scoped: Scoped,

    /// Convert literal newlines in text values to `<br>`
    pub new_line_to_break: bool,

    /// Per-tag class attribute values
    pub classes: ClassMap,
}

impl Options {
    /// The configured class for a tag, if any. Empty entries count as
    /// absent, so they never emit `class=""`.
    pub fn class_for(&self, tag: &str) -> Option<&str> {
        self.classes
            .get(tag)
            .map(String::as_str)
            .filter(|class| !class.is_empty())
    }
}

// Legacy shorthand: a bare boolean or class name string where structured
// options are expected reads as `scoped`.

impl From<bool> for Options {
    fn from(scoped: bool) -> Self {
        Self {
            scoped: scoped.into(),
            ..Default::default()
        }
    }
}

impl From<&str> for Options {
    fn from(class: &str) -> Self {
        Self {
            scoped: class.into(),
            ..Default::default()
        }
    }
}

impl From<String> for Options {
    fn from(class: String) -> Self {
        Self {
            scoped: class.into(),
            ..Default::default()
        }
    }
}
