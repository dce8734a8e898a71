//! The main entry point for schema to HTML conversion.

use richup_core::{render, Options};

use crate::input::{normalize, SchemaInput};
use crate::Result;

/// The main service for converting rich text schemas to HTML
pub struct RichTextService {
    options: Options,
}

impl RichTextService {
    /// Create a new service with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a service with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert a schema document to HTML.
    ///
    /// Accepts a node tree, a node list, or a JSON string. When the input
    /// is a `root` document and `scoped` is configured, the rendered body
    /// is wrapped in a single scoping `<div>`.
    pub fn convert(&self, schema: impl Into<SchemaInput>) -> Result<String> {
        let normalized = normalize(schema.into())?;
        let body = render(&normalized.nodes, &self.options)?;

        // Scoping applies only to a non-empty document unwrapped from a
        // `root` node; an empty root renders to nothing.
        if normalized.from_root && !normalized.nodes.is_empty() {
            if let Some(class) = self.options.scoped.class() {
                return Ok(format!("<div class=\"{}\">{}</div>", class, body));
            }
        }

        Ok(body)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for RichTextService {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a rich text schema to HTML.
///
/// `options` accepts the structured [`Options`] form as well as the legacy
/// shorthands: a bare `bool` or a class name string, both read as the
/// `scoped` setting.
pub fn convert_schema_to_html(
    schema: impl Into<SchemaInput>,
    options: impl Into<Options>,
) -> Result<String> {
    RichTextService::with_options(options.into()).convert(schema)
}
