//! Pulldown-cmark based scorecard renderer.
//!
//! Builds a Markdown report from a [`ScorecardView`] and converts it to a
//! standalone, print-ready HTML page. Text coming from the generation
//! service has both its HTML and its Markdown syntax escaped before it
//! enters the Markdown source, so a reply renders as plain text: no tags,
//! links, images or emphasis of its own.

use pulldown_cmark::{html, Options, Parser};
use std::fmt::Write;

use crate::domain::contract::{ClauseView, ScorecardView};
use crate::ports::ReportRenderer;

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, Default)]
pub struct ScorecardRenderer;

impl ScorecardRenderer {
    pub fn new() -> Self {
        Self
    }

    fn wrap_html(&self, body: String, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="scorecard">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = DEFAULT_CSS,
            body = body
        )
    }

    fn write_header(out: &mut String, view: &ScorecardView) {
        let _ = writeln!(out, "# Risk Scorecard: {}\n", inline(&view.contract_name));
        let _ = writeln!(out, "_Analyzed {}_\n", view.analyzed_at);

        let _ = writeln!(out, "| Fact | Value |");
        let _ = writeln!(out, "|---|---|");
        let facts = [
            ("Contract type", Some(view.contract_type.clone())),
            ("Parties", Some(view.parties.join(", "))),
            ("Jurisdiction", Some(view.jurisdiction.clone())),
            ("Financial amount", view.financial_amount.clone()),
            ("Effective date", view.effective_date.clone()),
            ("Termination date", view.termination_date.clone()),
        ];
        for (label, value) in facts {
            let value = value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string());
            let _ = writeln!(out, "| {} | {} |", label, table_cell(&value));
        }

        let _ = writeln!(
            out,
            "\n**Composite risk score:** {} ({} risk)\n",
            view.risk_score, view.risk_band
        );
        let _ = writeln!(out, "## Summary\n\n{}\n", block(&view.summary));
    }

    fn write_clause(out: &mut String, index: usize, clause: &ClauseView) {
        let marker = if clause.is_unfavorable {
            " (Unfavorable)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "### {}. {}: {} risk{}\n",
            index + 1,
            inline(&clause.category),
            clause.risk_level,
            marker
        );
        for line in clause.original_text.lines() {
            let _ = writeln!(out, "> {}", inline(line));
        }
        let _ = writeln!(out, "\n{}\n", block(&clause.explanation));
        if let Some(suggestion) = &clause.suggestion {
            let _ = writeln!(out, "**Suggested alternative:** {}\n", inline(suggestion));
        }
    }

    fn write_list(out: &mut String, heading: &str, items: &[String], checklist: bool) {
        let _ = writeln!(out, "## {}\n", heading);
        if items.is_empty() {
            let _ = writeln!(out, "_None identified._\n");
            return;
        }
        for item in items {
            if checklist {
                let _ = writeln!(out, "- [ ] {}", inline(item));
            } else {
                let _ = writeln!(out, "- {}", inline(item));
            }
        }
        out.push('\n');
    }
}

impl ReportRenderer for ScorecardRenderer {
    fn to_markdown(&self, view: &ScorecardView) -> String {
        let mut out = String::new();
        Self::write_header(&mut out, view);

        let total = view.counts.high + view.counts.medium + view.counts.low;
        let _ = writeln!(out, "## Clauses ({})\n", view.filter);
        let _ = writeln!(
            out,
            "Showing {} of {} clauses. High: {}, Medium: {}, Low: {}.\n",
            view.clauses.len(),
            total,
            view.counts.high,
            view.counts.medium,
            view.counts.low
        );
        for (index, clause) in view.clauses.iter().enumerate() {
            Self::write_clause(&mut out, index, clause);
        }

        Self::write_list(
            &mut out,
            "Renegotiation Checklist",
            &view.suggested_renegotiation_points,
            true,
        );
        Self::write_list(&mut out, "Missing Crucial Terms", &view.missing_crucial_terms, false);
        out
    }

    fn to_html(&self, view: &ScorecardView) -> String {
        let markdown = self.to_markdown(view);
        let options = Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;

        let parser = Parser::new_ext(&markdown, options);
        let mut html_body = String::new();
        html::push_html(&mut html_body, parser);

        self.wrap_html(html_body, &format!("Risk Scorecard: {}", view.contract_name))
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Backslash-escape the punctuation that starts Markdown inline or block
/// syntax. `&`, `<`, `>` and `"` are left to [`html_escape`].
fn markdown_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '(' | ')' | '{' | '}' | '!' | '#' | '~' | '|'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Untrusted text on a single line.
fn inline(s: &str) -> String {
    html_escape(&markdown_escape(&s.replace(['\r', '\n'], " ")))
}

/// Untrusted text as a paragraph; blank lines are kept as paragraph breaks.
fn block(s: &str) -> String {
    html_escape(&markdown_escape(s.trim()))
}

fn table_cell(s: &str) -> String {
    inline(s)
}

/// Default CSS for the printable page.
const DEFAULT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.6;
    color: #1f2937;
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    border-bottom: 2px solid #2563eb;
    padding-bottom: 0.5rem;
}

h2 {
    border-bottom: 1px solid #e5e7eb;
    padding-bottom: 0.25rem;
    margin-top: 2rem;
}

blockquote {
    margin: 1em 0;
    padding: 0.5em 1em;
    border-left: 4px solid #9ca3af;
    background-color: #f3f4f6;
}

table {
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.4rem 0.8rem;
    text-align: left;
    border: 1px solid #e5e7eb;
}

@media print {
    body {
        padding: 0;
    }

    h2, h3 {
        page-break-after: avoid;
    }

    blockquote {
        page-break-inside: avoid;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{Clause, ContractAnalysis, RiskFilter};
    use crate::domain::foundation::{RiskLevel, RiskScore, Timestamp};
    use crate::ports::ExportFormat;

    fn view(filter: RiskFilter) -> ScorecardView {
        let analysis = ContractAnalysis {
            contract_type: "Employment".to_string(),
            parties: vec!["Acme Pvt Ltd".to_string(), "R. Sharma".to_string()],
            jurisdiction: "Karnataka".to_string(),
            financial_amount: None,
            effective_date: Some("1 April 2024".to_string()),
            termination_date: None,
            composite_risk_score: RiskScore::new(85),
            summary: "Restrictive <b>terms</b>.".to_string(),
            clauses: vec![
                Clause {
                    id: "c1".to_string(),
                    original_text: "Employee shall not compete for 5 years".to_string(),
                    explanation: "Long non-compete.".to_string(),
                    risk_level: RiskLevel::High,
                    category: "Non-Compete".to_string(),
                    suggestion: Some("Limit to 12 months".to_string()),
                    is_unfavorable: true,
                },
                Clause {
                    id: "c2".to_string(),
                    original_text: "Salary paid monthly".to_string(),
                    explanation: "Standard.".to_string(),
                    risk_level: RiskLevel::Low,
                    category: "Payment".to_string(),
                    suggestion: None,
                    is_unfavorable: false,
                },
            ],
            missing_crucial_terms: vec!["Notice period".to_string()],
            suggested_renegotiation_points: vec!["Shorten the non-compete".to_string()],
        };
        ScorecardView::build("Acme Offer", Timestamp::now(), &analysis, filter)
    }

    #[test]
    fn markdown_contains_header_and_score() {
        let md = ScorecardRenderer::new().to_markdown(&view(RiskFilter::All));
        assert!(md.starts_with("# Risk Scorecard: Acme Offer"));
        assert!(md.contains("| Parties | Acme Pvt Ltd, R. Sharma |"));
        assert!(md.contains("| Financial amount | Not specified |"));
        assert!(md.contains("**Composite risk score:** 85/100 (High risk)"));
    }

    #[test]
    fn markdown_lists_filtered_clauses_only() {
        let md = ScorecardRenderer::new().to_markdown(&view(RiskFilter::Only(RiskLevel::High)));
        assert!(md.contains("## Clauses (High)"));
        assert!(md.contains("Showing 1 of 2 clauses"));
        assert!(md.contains("Non-Compete: High risk (Unfavorable)"));
        assert!(!md.contains("Salary paid monthly"));
        assert!(md.contains("**Suggested alternative:** Limit to 12 months"));
    }

    #[test]
    fn markdown_has_checklist_and_missing_terms() {
        let md = ScorecardRenderer::new().to_markdown(&view(RiskFilter::All));
        assert!(md.contains("- [ ] Shorten the non-compete"));
        assert!(md.contains("## Missing Crucial Terms\n\n- Notice period"));
    }

    #[test]
    fn html_is_a_full_page_and_escapes_model_text() {
        let html = ScorecardRenderer::new().to_html(&view(RiskFilter::All));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Risk Scorecard: Acme Offer</title>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("@media print"));
        assert!(!html.contains("<b>terms</b>"));
    }

    #[test]
    fn render_dispatches_on_format() {
        let renderer = ScorecardRenderer::new();
        let v = view(RiskFilter::All);
        assert!(renderer.render(&v, ExportFormat::Markdown).starts_with("# "));
        let html = renderer.render(&v, ExportFormat::Html);
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    const LINK_AND_IMAGE: &str =
        "[Click to verify](javascript:alert(document.cookie)) ![x](https://evil.example/p.png)";

    fn assert_rendered_as_text(html: &str) {
        assert!(!html.contains("<a "), "link emitted: {html}");
        assert!(!html.contains("<img"), "image emitted: {html}");
        assert!(!html.contains("href="), "href emitted: {html}");
        assert!(html.contains("[Click to verify](javascript:alert(document.cookie))"));
        assert!(html.contains("![x](https://evil.example/p.png)"));
    }

    fn render_with(edit: impl FnOnce(&mut ScorecardView)) -> String {
        let mut v = view(RiskFilter::All);
        edit(&mut v);
        ScorecardRenderer::new().to_html(&v)
    }

    #[test]
    fn summary_links_render_as_text() {
        let html = render_with(|v| v.summary = LINK_AND_IMAGE.to_string());
        assert_rendered_as_text(&html);
    }

    #[test]
    fn clause_text_links_render_as_text() {
        let html = render_with(|v| v.clauses[0].original_text = LINK_AND_IMAGE.to_string());
        assert_rendered_as_text(&html);
    }

    #[test]
    fn explanation_links_render_as_text() {
        let html = render_with(|v| v.clauses[0].explanation = LINK_AND_IMAGE.to_string());
        assert_rendered_as_text(&html);
    }

    #[test]
    fn suggestion_links_render_as_text() {
        let html = render_with(|v| v.clauses[0].suggestion = Some(LINK_AND_IMAGE.to_string()));
        assert_rendered_as_text(&html);
    }

    #[test]
    fn category_links_render_as_text() {
        let html = render_with(|v| v.clauses[0].category = LINK_AND_IMAGE.to_string());
        assert_rendered_as_text(&html);
    }

    #[test]
    fn list_item_links_render_as_text() {
        let html = render_with(|v| {
            v.suggested_renegotiation_points = vec![LINK_AND_IMAGE.to_string()];
            v.missing_crucial_terms = vec![LINK_AND_IMAGE.to_string()];
        });
        assert_rendered_as_text(&html);
    }

    #[test]
    fn table_cell_links_render_as_text() {
        let html = render_with(|v| v.jurisdiction = LINK_AND_IMAGE.to_string());
        assert_rendered_as_text(&html);
    }

    #[test]
    fn contract_name_links_render_as_text() {
        let html = render_with(|v| v.contract_name = LINK_AND_IMAGE.to_string());
        assert_rendered_as_text(&html);
    }

    #[test]
    fn emphasis_and_headings_in_model_text_stay_literal() {
        let html = render_with(|v| v.summary = "# Heading\n\n**bold** and `code` | pipe".to_string());
        assert!(!html.contains("<h1>Heading"));
        assert!(!html.contains("<strong>bold</strong>"));
        assert!(!html.contains("<code>"));
        assert!(html.contains("# Heading"));
        assert!(html.contains("**bold** and `code` | pipe"));
    }

    #[test]
    fn markdown_export_escapes_link_syntax() {
        let mut v = view(RiskFilter::All);
        v.summary = "[x](javascript:void(0))".to_string();
        let md = ScorecardRenderer::new().to_markdown(&v);
        assert!(md.contains("\\[x\\]\\(javascript:void\\(0\\)\\)"));
    }
}
