// HTML rendering of the dashboard panel
use crate::application::dashboard_service::DashboardView;
use crate::domain::row::DisplayRow;

/// Escape text taken from the feed; icons are markup built by the providers
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn placeholder(message: &str) -> String {
    format!(r#"<div class="dimmed light small">{}</div>"#, message)
}

fn render_row(row: &DisplayRow) -> String {
    match row {
        DisplayRow::Spacer { icon } => format!(
            r#"<tr><td class="icon" colspan="3">{}</td></tr>"#,
            icon
        ),
        DisplayRow::Wide { icon, field } => format!(
            r#"<tr><td class="icon">{}</td><td class="field" colspan="2">{}</td></tr>"#,
            icon,
            escape(field)
        ),
        DisplayRow::Full { icon, field, value } => format!(
            r#"<tr><td class="icon">{}</td><td class="field" colspan="1">{}</td><td class="value">{}</td></tr>"#,
            icon,
            escape(field),
            escape(value)
        ),
    }
}

pub fn render_panel(view: &DashboardView) -> String {
    match view {
        DashboardView::Loading => placeholder("Loading&hellip;"),
        DashboardView::NoApiKey => placeholder("No Tesla Fi <i>apiKey</i> set in config file."),
        DashboardView::Ready { title, rows } => {
            let mut html = String::from(r#"<div class="light small">"#);
            if let Some(title) = title {
                html.push_str(&format!(
                    r#"<h2 class="mqtt-title"><span class="zmdi zmdi-car zmdi-hc-1x icon"></span> {}</h2>"#,
                    escape(title)
                ));
            }
            html.push_str(r#"<table class="small">"#);
            for row in rows {
                html.push_str(&render_row(row));
            }
            html.push_str("</table></div>");
            html
        }
    }
}
