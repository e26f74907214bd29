//! Server-rendered address form.
//!
//! Runs the same lookup as `POST /api/check-address` and renders the derived
//! risk summary, or the error message, below the form.

use crate::handlers::{lookup_address, AppState};
use crate::models::CheckAddressForm;
use crate::risk_summary::{derive_risk_summary, RiskSummary};
use axum::{extract::State, response::Html, Form};
use std::sync::Arc;

/// What to show under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Nothing submitted yet, or the payload carried no known risk fields.
    Empty,
    Summary(RiskSummary),
    Error(String),
}

/// GET /
pub async fn index() -> Html<String> {
    Html(render_page("", &PageOutcome::Empty))
}

/// POST /
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CheckAddressForm>,
) -> Html<String> {
    let outcome = match lookup_address(&state, &form.address).await {
        Ok(payload) => derive_risk_summary(&payload)
            .map(PageOutcome::Summary)
            .unwrap_or(PageOutcome::Empty),
        Err(e) => {
            tracing::warn!("Page lookup failed: {}", e);
            PageOutcome::Error(e.user_message())
        }
    };

    Html(render_page(form.address.trim(), &outcome))
}

/// Escapes text for HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
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

fn render_outcome(outcome: &PageOutcome) -> String {
    match outcome {
        PageOutcome::Empty => String::new(),
        PageOutcome::Summary(summary) => {
            let (class, icon, heading) = if summary.is_high_risk {
                ("risk high", "🚨", "高風險提示")
            } else {
                ("risk caution", "⚠️", "安全提醒")
            };
            format!(
                r#"<div class="{class}"><span class="icon">{icon}</span><div><p class="heading">{heading}</p><p>{message}</p></div></div>"#,
                message = escape_html(&summary.message),
            )
        }
        PageOutcome::Error(message) => {
            format!(r#"<p class="error">{}</p>"#, escape_html(message))
        }
    }
}

/// Renders the full page with `address` prefilled.
pub fn render_page(address: &str, outcome: &PageOutcome) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Wallet Risk Checker</title>
    <style>
        body {{ margin: 0; min-height: 100vh; background: #020617; color: #f8fafc; font-family: system-ui, sans-serif; }}
        main {{ max-width: 42rem; margin: 0 auto; padding: 4rem 1rem; }}
        header {{ text-align: center; }}
        .eyebrow {{ color: #38bdf8; font-size: .875rem; font-weight: 600; letter-spacing: .1em; text-transform: uppercase; }}
        section {{ border: 1px solid rgba(255,255,255,.1); border-radius: 1rem; background: rgba(15,23,42,.5); padding: 1.5rem; }}
        input {{ box-sizing: border-box; width: 100%; padding: .75rem 1rem; border-radius: .5rem; border: 1px solid rgba(255,255,255,.1); background: #020617; color: #fff; }}
        button {{ width: 100%; margin-top: 1rem; padding: .75rem 1rem; border: 0; border-radius: .5rem; background: #0ea5e9; color: #fff; font-weight: 600; }}
        .risk {{ display: flex; gap: 1rem; margin-top: 2rem; padding: 1.5rem; border-radius: 1rem; border: 1px solid; }}
        .risk.high {{ background: linear-gradient(135deg, rgba(239,68,68,.25), rgba(127,29,29,.55)); border-color: rgba(248,113,113,.5); color: #fee2e2; }}
        .risk.caution {{ background: linear-gradient(135deg, rgba(217,119,6,.25), rgba(120,53,15,.55)); border-color: rgba(251,191,36,.4); color: #fef3c7; }}
        .heading {{ font-size: 1.125rem; font-weight: 600; }}
        .error {{ margin-top: 1rem; padding: .75rem 1rem; border-radius: .5rem; border: 1px solid rgba(251,113,133,.4); background: rgba(244,63,94,.1); color: #fecdd3; }}
    </style>
</head>
<body>
<main>
    <header>
        <p class="eyebrow">Wallet Risk Checker</p>
        <h1>檢查錢包地址的安全風險</h1>
        <p>轉帳前，先確認這是不是高風險的詐騙錢包地址</p>
    </header>
    <section>
        <form method="post" action="/">
            <label>錢包地址
                <input type="text" name="address" value="{address}" placeholder="0x...／bc1...／Solana 位址" required>
            </label>
            <button type="submit">立即檢查</button>
        </form>
        {outcome}
    </section>
</main>
</body>
</html>
"#,
        address = escape_html(address),
        outcome = render_outcome(outcome),
    )
}
