//! HTML pages, rendered with Tera. Templates are compiled into the binary and
//! registered under `.html` names, so every interpolated value is autoescaped.
//! The one exception is the model's reply, which is rendered from Markdown and
//! sanitized by `ammonia` before it is marked safe.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;
use tera::{Context, Tera};

use crate::tuner::service::TuneOutcome;

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("unconfigured.html", include_str!("../templates/unconfigured.html")),
];

/// Warning shown when either form field is blank.
pub const EMPTY_INPUT_WARNING: &str = "Please fill out both text fields.";

/// What the form page shows below the inputs after a submission.
#[derive(Debug, Serialize)]
pub struct ResultView {
    pub success: bool,
    /// Plain text, escaped by the template. Used for failures.
    pub text: String,
    /// Sanitized HTML of the reply. Only set on success.
    pub html: Option<String>,
}

impl From<&TuneOutcome> for ResultView {
    fn from(outcome: &TuneOutcome) -> Self {
        let html = match outcome {
            TuneOutcome::Success { text } => Some(markdown_to_safe_html(text)),
            TuneOutcome::Failure { .. } => None,
        };
        Self {
            success: outcome.is_success(),
            text: outcome.display_text(),
            html,
        }
    }
}

/// Markdown → HTML, then stripped down to an allow-list of tags and attributes.
/// Raw HTML in the model's reply (scripts, handlers, iframes) does not survive.
pub fn markdown_to_safe_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut unsafe_html, Parser::new_ext(markdown, options));
    ammonia::clean(&unsafe_html)
}

/// Form page state: echoed inputs plus an optional warning or result.
#[derive(Debug, Default, Serialize)]
pub struct FormPage<'a> {
    pub summary: &'a str,
    pub job_description: &'a str,
    pub warning: Option<&'a str>,
    pub result: Option<ResultView>,
}

#[derive(Clone)]
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn form(&self, page: &FormPage<'_>) -> Result<String, tera::Error> {
        self.tera
            .render("index.html", &Context::from_serialize(page)?)
    }

    pub fn unconfigured(&self, notice: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("notice", notice);
        self.tera.render("unconfigured.html", &context)
    }
}
