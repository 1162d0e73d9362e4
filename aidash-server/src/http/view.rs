//! Server-side HTML rendering of the dashboard
//!
//! Produces the card grid; styling and the test button behaviour live in the
//! embedded `dashboard.css` and `dashboard.js` assets.

use std::fmt::Write;

use aidash_core::{Group, ServiceCard};

/// Status icon shown before a test has run
const IDLE_ICON: &str = r#"<svg class="status idle" viewBox="0 0 20 20"><circle cx="10" cy="10" r="8"/></svg>"#;

/// Render the full dashboard page for `groups`
pub fn render_dashboard(groups: &[Group]) -> String {
    let mut out = String::with_capacity(4096);
    write_page(&mut out, groups).map(|_| out).unwrap_or_default()
}

fn write_page(out: &mut String, groups: &[Group]) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta charset="utf-8">"#)?;
    writeln!(out, "<title>AI Services</title>")?;
    writeln!(out, r#"<link rel="stylesheet" href="/assets/dashboard.css">"#)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"<section class="ai-dashboard">"#)?;

    if groups.is_empty() {
        writeln!(out, r#"<p class="empty">No services configured.</p>"#)?;
    }
    for group in groups {
        write_group(out, group)?;
    }

    writeln!(out, "</section>")?;
    writeln!(out, r#"<script src="/assets/dashboard.js"></script>"#)?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_group(out: &mut String, group: &Group) -> std::fmt::Result {
    writeln!(out, r#"<div class="group">"#)?;
    writeln!(out, r#"<div class="group-header">"#)?;
    writeln!(out, "<h2>{}</h2>", escape_html(&group.name))?;
    writeln!(out, r#"<div class="group-sub">{}</div>"#, escape_html(&group.id))?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div class="grid">"#)?;
    for service in &group.services {
        write_card(out, service)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")
}

fn write_card(out: &mut String, service: &ServiceCard) -> std::fmt::Result {
    let id = escape_html(&service.id);

    writeln!(out, r#"<div class="card" data-service="{id}">"#)?;
    writeln!(out, r#"<div class="header">"#)?;
    writeln!(out, "<strong>{}</strong>", escape_html(&service.name))?;
    writeln!(out, r#"<div class="service-id">{id}</div>"#)?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div class="meta">"#)?;
    writeln!(out, "<div>Endpoint: {}</div>", escape_html(&service.endpoint_short))?;
    writeln!(out, "<div>API Key: {}</div>", escape_html(&service.apikey_short))?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div class="status-line">"#)?;
    writeln!(out, r#"{IDLE_ICON}<span class="status-text">Idle</span>"#)?;
    writeln!(out, "</div>")?;
    if service.has_tester {
        writeln!(
            out,
            r#"<button type="button" class="test-button" data-service="{id}">Test Connection</button>"#
        )?;
    }
    writeln!(out, "</div>")
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
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
