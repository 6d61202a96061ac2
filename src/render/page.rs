//! Standalone tabbed page

use super::escape_html;
use crate::state::{AppState, Tab};

const STYLE: &str = r#"<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #f8f9fa; }
.tab-bar { display: flex; gap: .25rem; padding: .5rem 1rem; background: #212529; }
.tab-bar a { color: #adb5bd; padding: .5rem 1rem; text-decoration: none; border-radius: .25rem; }
.tab-bar a.active { color: #fff; background: #0d6efd; }
.tab-content { display: none; padding: 1rem; }
.tab-content.active { display: block; }
.badge { display: inline-block; padding: .25em .5em; border-radius: .25rem; color: #fff; font-size: .8em; }
.bg-success { background: #198754; } .bg-warning { background: #ffc107; color: #000; }
.bg-danger { background: #dc3545; } .bg-dark { background: #212529; }
.bg-secondary { background: #6c757d; } .bg-info { background: #0dcaf0; color: #000; }
.bg-primary { background: #0d6efd; }
.method-badge { font-weight: bold; padding: .2em .5em; border-radius: .25rem; background: #e9ecef; }
.response-time.fast { color: #198754; } .response-time.medium { color: #fd7e14; } .response-time.slow { color: #dc3545; }
.pattern-badge { display: inline-block; margin: .1rem; padding: .2em .5em; border-radius: 1rem; background: #e9ecef; color: #6c757d; }
.pattern-badge.active { background: #0d6efd; color: #fff; }
.code-block { background: #272822; color: #f8f8f2; padding: 1rem; overflow-x: auto; }
.card { background: #fff; border: 1px solid #dee2e6; border-radius: .25rem; margin-bottom: .5rem; }
.card-header, .card-body { padding: .75rem 1rem; }
.alert { padding: .75rem 1rem; border-radius: .25rem; }
.alert-info { background: #cff4fc; } .alert-warning { background: #fff3cd; } .alert-danger { background: #f8d7da; }
.text-danger { color: #dc3545; } .text-muted { color: #6c757d; } .text-success { color: #198754; }
.stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 1rem; }
.stat-value { font-size: 1.5rem; font-weight: bold; }
</style>"#;

/// Render the whole application as one HTML document.
///
/// Exactly one tab and its panel carry the `active` class. Regions that have
/// never been rendered are left empty.
pub fn render_page(state: &AppState) -> String {
    let active = state.active_tab();

    let tabs: String = Tab::ALL
        .iter()
        .map(|tab| {
            format!(
                r##"<a href="#{id}" class="{class}" data-tab="{id}">{label}</a>"##,
                id = tab.id(),
                class = active_class("tab-link", *tab == active),
                label = tab.label()
            )
        })
        .collect();

    let panels: String = Tab::ALL
        .iter()
        .map(|tab| panel(state, *tab, *tab == active))
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><title>API Reverse Engineering Tool</title>{}</head>"#,
            r#"<body><nav class="tab-bar">{}</nav><main>{}</main></body></html>"#,
            "\n"
        ),
        STYLE, tabs, panels
    )
}

fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

fn panel(state: &AppState, tab: Tab, active: bool) -> String {
    let mut body = String::new();

    if tab == Tab::SingleRequest {
        body.push_str(&format!(
            r#"<form class="mb-3"><label for="api-url">API URL</label> <input type="url" id="api-url" name="url" value="{}"></form>"#,
            escape_html(state.single_request_url())
        ));
    }

    for region in tab.regions() {
        body.push_str(&format!(
            r#"<div id="{}">{}</div>"#,
            region.id(),
            state.view(*region).unwrap_or_default()
        ));
    }

    format!(
        r#"<section id="{}" class="{}"><h2>{}</h2>{}</section>"#,
        tab.id(),
        active_class("tab-content", active),
        tab.label(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Region;

    #[test]
    fn test_one_active_tab() {
        let mut state = AppState::new();
        state.switch_tab(Tab::Discovery);

        let html = render_page(&state);
        assert_eq!(html.matches(r#"class="tab-link active""#).count(), 1);
        assert_eq!(html.matches(r#"class="tab-content active""#).count(), 1);
        assert!(html.contains(r#"<section id="discovery" class="tab-content active">"#));
    }

    #[test]
    fn test_panels_hold_region_fragments() {
        let mut state = AppState::new();
        state.set_view(Region::CapturedList, "<p>captured</p>".to_string());

        let html = render_page(&state);
        assert!(html.contains(r#"<div id="captured-list"><p>captured</p></div>"#));
        assert!(html.contains(r#"<div id="generated-docs"></div>"#));
        for tab in Tab::ALL {
            assert!(html.contains(&format!(r#"<section id="{}""#, tab.id())));
        }
    }

    #[test]
    fn test_url_field_is_escaped() {
        let mut state = AppState::new();
        state.set_single_request_url(r#"https://a/?q="><b>"#);

        let html = render_page(&state);
        assert!(html.contains(r#"value="https://a/?q=&quot;&gt;&lt;b&gt;""#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = AppState::new();
        assert_eq!(render_page(&state), render_page(&state));
    }
}
