//! # Presenter
//!
//! Read-only views over one [`OrderOverview`].
//!
//! The overview is first flattened into an [`OrderPage`] so the percent and
//! count arithmetic happens once, then handed to a [`Render`] implementation:
//! - [`PlainText`]: timestamp, one line per order, did/did not order totals
//! - [`Html`]: the LunchWeb page, with the sheet link and a prefilled mailto link
use std::fmt::Write;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::{
    config::Config,
    error::RenderError,
    matcher::DATE_FORMAT,
    orders::{LineItem, OrderOverview, percent},
    utils::{encode_component, escape_html},
};

pub trait Render {
    fn content_type(&self) -> &'static str;

    fn render(&self, page: &OrderPage) -> Result<String, RenderError>;
}

#[derive(Debug, Clone)]
pub struct OrderPage {
    pub now: String,
    pub today: String,
    pub line_items: Vec<LineItem>,
    pub summary: String,
    pub max_count: usize,
    pub order_percent: f64,
}

impl OrderPage {
    pub fn new(overview: &OrderOverview, now: DateTime<Tz>) -> Self {
        Self {
            now: now.to_rfc2822(),
            today: now.format(DATE_FORMAT).to_string(),
            line_items: overview.line_items(),
            summary: overview.summary(),
            max_count: overview.max_count(),
            order_percent: overview.order_percent(),
        }
    }

    pub fn order_count(&self) -> usize {
        self.line_items.len()
    }

    pub fn missing_count(&self) -> usize {
        self.max_count.saturating_sub(self.order_count())
    }
}

pub struct PlainText;

impl Render for PlainText {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, page: &OrderPage) -> Result<String, RenderError> {
        let mut out = String::new();

        writeln!(out, "Orders as of {}:", page.now)?;
        out.push_str(&page.summary);
        writeln!(out)?;
        writeln!(
            out,
            "{} of {} did not order (~{:.2}%)",
            page.missing_count(),
            page.max_count,
            percent(page.missing_count(), page.max_count)
        )?;
        writeln!(
            out,
            "{} of {} did order (~{:.2}%)",
            page.order_count(),
            page.max_count,
            page.order_percent
        )?;

        Ok(out)
    }
}

pub struct Html<'a> {
    pub config: &'a Config,
}

impl Html<'_> {
    pub fn mailto(&self, page: &OrderPage) -> String {
        let subject = format!("{} ({})", self.config.subject, page.today);

        format!(
            "mailto:{}?subject={}&body={}",
            self.config.email,
            encode_component(&subject),
            encode_component(&page.summary)
        )
    }
}

const HEAD: &str = r#"<html>
	<head>
		<title>LunchWeb</title>
		<style>
			* {
				font-family: monospace;
				margin: 0;
				padding: 0;
				line-height: 1.4;
			}
			body {
				padding: 10px;
			}
			a {
				color: #0af;
				font-weight: bold;
				text-decoration: none;
			}
			a:hover { text-decoration: underline; }
			li { margin-left: 20px; }
		</style>
	</head>
"#;

impl Render for Html<'_> {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, page: &OrderPage) -> Result<String, RenderError> {
        let mut out = String::from(HEAD);

        writeln!(out, "\t<body>")?;
        writeln!(out, "\t\t<h2>LunchWeb</h2>")?;
        writeln!(
            out,
            "\t\t<p><a href=\"{}\">Fill in your order</a>",
            escape_html(&self.config.sheet_url)
        )?;
        writeln!(
            out,
            "\t\tor <a href=\"{}\">send an email</a> with all orders.",
            escape_html(&self.mailto(page))
        )?;
        writeln!(out, "\t\t</p>\n\t\t<br>")?;
        writeln!(out, "\t\t<p>Orders as of {}:</p>\n\t\t<br>", escape_html(&page.now))?;

        for item in &page.line_items {
            writeln!(
                out,
                "\t\t<p>{}: {}</p>",
                escape_html(&item.name),
                escape_html(&item.order)
            )?;
        }

        writeln!(out, "\t\t<br>")?;
        writeln!(
            out,
            "\t\t<p>{} out of {} ordered something (~{:.2}%)</p>",
            page.order_count(),
            page.max_count,
            page.order_percent
        )?;
        writeln!(out, "\t</body>\n</html>")?;

        Ok(out)
    }
}
