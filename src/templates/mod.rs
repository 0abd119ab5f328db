//! Built-in works templates using Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off: plain-text
//! fields go through the `html_escape` filter, while CMS rich text is
//! injected verbatim since the CMS owns that markup.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::error::Result;
use crate::helpers;

/// Template renderer with the embedded works theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all works templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("works/layout.html")),
            ("page.html", include_str!("works/page.html")),
            (
                "partials/works.html",
                include_str!("works/partials/works.html"),
            ),
        ])?;

        tera.register_filter("html_escape", html_escape_filter);
        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render the works `<main>` region only
    pub fn render_fragment(&self, post: &Post, config: &SiteConfig) -> Result<String> {
        self.render("partials/works.html", &build_context(post, config))
    }

    /// Render a complete HTML document
    pub fn render_page(&self, post: &Post, config: &SiteConfig) -> Result<String> {
        self.render("page.html", &build_context(post, config))
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Template-facing subset of the site config
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData<'a> {
    pub title: &'a str,
    pub language: &'a str,
    pub stylesheet: Option<&'a str>,
    pub date_format: &'a str,
    pub job_label: &'a str,
    pub image_width: u32,
    pub image_height: u32,
}

impl<'a> From<&'a SiteConfig> for ConfigData<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.title,
            language: &config.language,
            stylesheet: config.stylesheet.as_deref(),
            date_format: &config.date_format,
            job_label: &config.job_label,
            image_width: config.image_width,
            image_height: config.image_height,
        }
    }
}

fn build_context(post: &Post, config: &SiteConfig) -> Context {
    let mut context = Context::new();
    context.insert("post", post);
    context.insert("config", &ConfigData::from(config));
    context
}

/// Tera filter: escape HTML special characters
fn html_escape_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(tera::Value::String(helpers::html_escape(&s)))
}

/// Tera filter: plain text of rich-text markup
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(helpers::strip_html(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    Ok(tera::Value::String(helpers::truncate(
        &s,
        length,
        Some(&omission),
    )))
}

/// Tera filter: reformat a `YYYY-MM-DD` date with a Moment.js-style format.
/// Anything that is not such a date is returned unchanged; an unusable
/// format is a render error.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    match chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        Ok(date) => match helpers::format_date(&date, &format) {
            Some(formatted) => Ok(tera::Value::String(formatted)),
            None => Err(tera::Error::msg(format!(
                "invalid date_format {:?}",
                format
            ))),
        },
        Err(_) => Ok(tera::Value::String(s)),
    }
}
