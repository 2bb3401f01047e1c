//! Shared HTML building blocks for the server-rendered pages.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

/// The symbol amounts are displayed with.
pub const CURRENCY_SYMBOL: &str = "₹";

/// The ECharts build the dashboard charts are drawn with.
pub const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

pub const FORM_ROW_STYLE: &str = "form-row";
pub const ERROR_TEXT_STYLE: &str = "error-text";
pub const BUTTON_DELETE_STYLE: &str = "button-delete";
pub const CHART_STYLE: &str = "chart";

const PAGE_STYLE: &str = r#"
    body {
        font-family: system-ui, sans-serif;
        padding: 20px;
        max-width: 960px;
        margin: 0 auto;
    }

    .form-row {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        align-items: center;
    }

    .error-text {
        color: red;
    }

    .button-delete {
        margin-left: 0.5rem;
    }

    .chart {
        width: 100%;
        height: 300px;
    }
"#;

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finance Visualizer" }
                style { (PreEscaped(PAGE_STYLE)) }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section
        {
            h1 { (header) }
            p { (description) }
            p { (fix) }
            a href="/" { "Back to the dashboard" }
        }
    );

    base(title, &[], &content)
}

/// Format `number` as an amount of money with two decimal places, e.g.
/// "₹1,234.50" or "-₹12.30".
pub fn format_currency(number: f64) -> String {
    static WHOLE_FMT: OnceLock<Formatter> = OnceLock::new();

    let whole_fmt = WHOLE_FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .expect("currency symbol should be a valid numfmt prefix")
            .precision(Precision::Decimals(0))
    });

    let cents = (number.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    // Zero is hardcoded as "0" without the prefix, so we must specify it ourselves
    let whole = if whole == 0 {
        format!("{CURRENCY_SYMBOL}0")
    } else {
        whole_fmt.fmt_string(whole as f64)
    };

    let sign = if number < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}{whole}.{fraction:02}")
}
