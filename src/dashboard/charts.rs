//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for financial data:
//! - **Monthly Spending Chart**: Bar chart of the transaction total per month
//! - **Category Chart**: Pie chart of the transaction total per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, MonthlyTotal},
    html::{CHART_STYLE, HeadElement},
};

/// The fill colour of the monthly spending bars.
pub(super) const BAR_COLOR: &str = "#8884d8";

/// The pie slice colours, picked by category index.
pub(super) const PIE_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section id="charts"
        {
            @for chart in charts {
                div id=(chart.id) class=(CHART_STYLE) {}
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Each chart is drawn once the page has loaded and is resized with the
/// window.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn monthly_spending_chart(monthly_totals: &[MonthlyTotal]) -> Chart {
    let (labels, values): (Vec<&str>, Vec<f64>) = monthly_totals
        .iter()
        .map(|total| (total.month, total.total))
        .unzip();

    Chart::new()
        .title(Title::new().text("Monthly Spending"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Spent")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(values),
        )
}

pub(super) fn category_chart(category_totals: &[CategoryTotal]) -> Chart {
    // Slices keep the category order so the palette lines up with the category index.
    let data: Vec<(f64, &str)> = category_totals
        .iter()
        .map(|total| (total.total, total.category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .color(PIE_PALETTE.into_iter().map(Color::from).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom(0))
        .series(Pie::new().name("Spent").radius("60%").data(data))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number != null) ? currencyFormatter.format(number) : \"-\";",
    )
}

#[cfg(test)]
mod tests {
    use maud::html;
    use scraper::{Html, Selector};

    use crate::{
        category::Category,
        dashboard::aggregation::{CategoryTotal, MonthlyTotal, category_totals},
        html::HeadElement,
    };

    use super::{
        BAR_COLOR, DashboardChart, PIE_PALETTE, category_chart, charts_script, charts_view,
        monthly_spending_chart,
    };

    #[test]
    fn monthly_chart_uses_month_labels_and_bar_colour() {
        let totals = vec![
            MonthlyTotal {
                month: "Mar",
                total: 15.0,
            },
            MonthlyTotal {
                month: "Jan",
                total: 20.0,
            },
        ];

        let options = monthly_spending_chart(&totals).to_string();

        assert!(options.contains(BAR_COLOR), "{options}");
        let march = options.find("\"Mar\"").expect("missing March label");
        let january = options.find("\"Jan\"").expect("missing January label");
        assert!(march < january, "months should keep their order: {options}");
    }

    #[test]
    fn category_chart_has_a_slice_per_category_and_the_palette() {
        let totals: Vec<CategoryTotal> = category_totals(&[]);

        let options = category_chart(&totals).to_string();

        for category in Category::ALL {
            assert!(
                options.contains(&format!("\"{}\"", category.as_str())),
                "missing {category}: {options}"
            );
        }
        for color in PIE_PALETTE {
            assert!(options.contains(color), "missing {color}: {options}");
        }
    }

    #[test]
    fn currency_formatter_formats_zero_totals() {
        let options = category_chart(&category_totals(&[])).to_string();

        assert!(options.contains("number != null"), "{options}");
        assert!(!options.contains("(number) ?"), "{options}");
    }

    #[test]
    fn script_initialises_each_chart() {
        let charts = [
            DashboardChart {
                id: "first-chart",
                options: "{}".to_owned(),
            },
            DashboardChart {
                id: "second-chart",
                options: "{}".to_owned(),
            },
        ];

        let HeadElement::ScriptSource(script) = charts_script(&charts) else {
            panic!("charts script should be inline source");
        };

        assert!(script.0.contains("document.getElementById(\"first-chart\")"));
        assert!(script.0.contains("document.getElementById(\"second-chart\")"));
    }

    #[test]
    fn view_has_a_container_per_chart() {
        let charts = [DashboardChart {
            id: "monthly-chart",
            options: String::new(),
        }];

        let markup = html!((charts_view(&charts)));
        let document = Html::parse_fragment(&markup.into_string());

        let selector = Selector::parse("#charts > div#monthly-chart").unwrap();
        assert_eq!(document.select(&selector).count(), 1);
    }
}
