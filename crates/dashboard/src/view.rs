//! Page rendering.
//!
//! [`render`] is a pure function from dashboard content and view state to a complete HTML
//! document. Every request re-runs it in full; there is no incremental patching. All text that
//! originates from fixtures is escaped.

use crate::chart::LineChart;
use crate::RenderError;
use pmp_core::{Dashboard, GenomicFinding, Recommendation};
use std::fmt::Write;

/// Per-request view state. The only event is the "Run AI Analysis" button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// The button was pressed on this request; show the acknowledgment.
    pub analysis_ran: bool,
}

const PAGE_TITLE: &str = "AI Personalized Medicine Prototype";
const HEADING: &str = "🧬 AI Personalized Medicine — Prototype";
const DISCLAIMER: &str = "This is a demo UI. Replace mock inference with real models & ensure \
privacy, security, and clinical validation.";
const ANALYSIS_DONE: &str = "✅ AI analysis completed!";

const PAGE_CSS: &str = r#"
body { margin: 0; padding: 24px 48px; font-family: "Source Sans Pro", system-ui, sans-serif; color: #262730; }
.columns { display: grid; grid-template-columns: 1fr 2fr; gap: 32px; }
.photo { width: 100%; min-height: 120px; background: #f0f2f6; border-radius: 6px; }
.caption { color: #6b6f7b; font-size: 14px; }
.success { background: #dff5e3; color: #17692c; padding: 12px 16px; border-radius: 6px; }
.info { background: #e5effb; color: #0f4c8a; padding: 12px 16px; border-radius: 6px; }
.chart svg { max-width: 100%; height: auto; }
button { padding: 8px 16px; border: 1px solid #d0d3da; border-radius: 6px; background: #fff; cursor: pointer; }
hr { border: none; border-top: 1px solid #e6e8ee; }
"#;

/// Render the full dashboard page.
///
/// # Errors
///
/// Returns `RenderError::Chart` if the vitals chart cannot be drawn.
pub fn render(dashboard: &Dashboard, state: &ViewState) -> Result<String, RenderError> {
    let chart = LineChart::from_series(&dashboard.vitals).render_svg()?;

    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", escape_html(PAGE_TITLE))?;
    writeln!(html, "<style>{PAGE_CSS}</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{}</h1>", escape_html(HEADING))?;
    writeln!(
        html,
        "<p><strong>Note:</strong> {}</p>",
        escape_html(DISCLAIMER)
    )?;
    writeln!(html, "<div class=\"columns\">")?;

    render_patient_pane(&mut html, dashboard, state)?;

    writeln!(html, "<section class=\"right\">")?;
    writeln!(html, "<h3>Patient Vitals &amp; Response</h3>")?;
    writeln!(html, "<figure class=\"chart\">{chart}</figure>")?;
    writeln!(html, "<h3>AI Recommendations</h3>")?;
    for recommendation in &dashboard.recommendations {
        render_recommendation(&mut html, recommendation)?;
    }
    writeln!(
        html,
        "<div class=\"info\">{}</div>",
        escape_html(&dashboard.explainability_note())
    )?;
    writeln!(html, "</section>")?;

    writeln!(html, "</div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

fn render_patient_pane(
    html: &mut String,
    dashboard: &Dashboard,
    state: &ViewState,
) -> Result<(), RenderError> {
    let patient = &dashboard.patient;

    writeln!(html, "<section class=\"left\">")?;
    // A failed fetch leaves the browser's broken-image indicator; the page still renders.
    writeln!(
        html,
        "<img class=\"photo\" src=\"{}\" alt=\"Patient photo\">",
        escape_html(&patient.photo_url)
    )?;
    writeln!(html, "<h3>{}</h3>", escape_html(&patient.name))?;
    writeln!(
        html,
        "<p class=\"caption\">{}</p>",
        escape_html(&patient.caption())
    )?;
    writeln!(html, "<p>{}</p>", escape_html(&patient.summary))?;

    writeln!(html, "<p><strong>Genomic Variants:</strong></p>")?;
    writeln!(html, "<ul>")?;
    for finding in &patient.genomic {
        writeln!(html, "<li>{}</li>", finding_item(finding))?;
    }
    writeln!(html, "</ul>")?;

    writeln!(html, "<form method=\"post\" action=\"/analysis\">")?;
    writeln!(html, "<button type=\"submit\">Run AI Analysis</button>")?;
    writeln!(html, "</form>")?;
    if state.analysis_ran {
        writeln!(
            html,
            "<div class=\"success\">{}</div>",
            escape_html(ANALYSIS_DONE)
        )?;
    }
    writeln!(html, "</section>")?;

    Ok(())
}

/// `<strong>gene</strong> (variant) — significance`
fn finding_item(finding: &GenomicFinding) -> String {
    format!(
        "<strong>{}</strong> ({}) — {}",
        escape_html(&finding.gene),
        escape_html(&finding.variant),
        escape_html(&finding.significance)
    )
}

fn render_recommendation(html: &mut String, rec: &Recommendation) -> Result<(), RenderError> {
    writeln!(
        html,
        "<p><strong>{}</strong> ({} confidence)</p>",
        escape_html(&rec.title),
        rec.confidence
    )?;
    writeln!(html, "<p class=\"caption\">{}</p>", escape_html(&rec.rationale))?;
    writeln!(html, "<hr>")?;
    Ok(())
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
