//! CSS styles for the UI

use crate::config::Theme;

/// Per-theme variable overrides layered on top of [`CUSTOM_STYLES`]
pub fn theme_css(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => MIDNIGHT_THEME,
        Theme::Daylight => DAYLIGHT_THEME,
    }
}

const MIDNIGHT_THEME: &str = r#"
    :root {
        --bg: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
        --surface: rgba(15, 23, 42, 0.7);
        --surface-raised: rgba(30, 41, 59, 0.9);
        --border: rgba(34, 211, 238, 0.2);
        --text: #e5e7eb;
        --text-dim: #9ca3af;
        --accent: #22d3ee;
        --accent-soft: rgba(34, 211, 238, 0.15);
        --ok: #4ade80;
        --warn: #facc15;
    }
"#;

const DAYLIGHT_THEME: &str = r#"
    :root {
        --bg: linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%);
        --surface: rgba(255, 255, 255, 0.8);
        --surface-raised: #ffffff;
        --border: rgba(14, 116, 144, 0.25);
        --text: #0f172a;
        --text-dim: #475569;
        --accent: #0e7490;
        --accent-soft: rgba(14, 116, 144, 0.12);
        --ok: #15803d;
        --warn: #a16207;
    }
"#;

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: var(--bg);
        color: var(--text);
        height: 100%;
        overflow: hidden;
    }

    /* Scrollbar */
    ::-webkit-scrollbar {
        width: 6px;
        height: 6px;
    }
    ::-webkit-scrollbar-track {
        background: transparent;
    }
    ::-webkit-scrollbar-thumb {
        background: var(--border);
        border-radius: 3px;
    }

    /* Main Container */
    .main-container {
        height: 100vh;
        display: flex;
        flex-direction: column;
        outline: none;
    }

    /* Title Bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 36px;
        background: var(--surface-raised);
        border-bottom: 1px solid var(--border);
        user-select: none;
        flex-shrink: 0;
    }
    .title-bar-drag {
        flex: 1;
        height: 100%;
        display: flex;
        align-items: center;
        padding-left: 12px;
        cursor: move;
    }
    .title-text {
        font-size: 14px;
        font-weight: 500;
        color: var(--accent);
    }
    .title-bar-buttons {
        display: flex;
        height: 100%;
    }
    .title-btn {
        width: 48px;
        height: 100%;
        border: none;
        background: transparent;
        color: var(--text-dim);
        font-size: 12px;
        cursor: pointer;
        transition: all 0.15s;
    }
    .title-btn:hover {
        background: var(--accent-soft);
        color: var(--text);
    }
    .title-btn-close:hover {
        background: #dc2626;
        color: #fff;
    }

    /* Navigation */
    .nav-bar {
        display: flex;
        gap: 4px;
        padding: 8px 12px;
        border-bottom: 1px solid var(--border);
        flex-shrink: 0;
    }
    .nav-link {
        padding: 6px 14px;
        border-radius: 6px;
        font-size: 13px;
        color: var(--text-dim);
        text-decoration: none;
        transition: all 0.15s;
    }
    .nav-link:hover {
        color: var(--text);
        background: var(--accent-soft);
    }
    .nav-active {
        color: var(--accent);
        background: var(--accent-soft);
    }

    /* Content */
    .content-area {
        flex: 1;
        overflow-y: auto;
        padding: 24px;
    }
    .page {
        max-width: 860px;
        margin: 0 auto;
    }
    .page h1 {
        font-size: 26px;
        margin-bottom: 6px;
    }
    .page h2 {
        font-size: 17px;
        margin: 18px 0 10px;
        color: var(--accent);
    }
    .page p {
        line-height: 1.6;
        color: var(--text-dim);
        margin-bottom: 10px;
    }

    /* Hero */
    .hero {
        padding: 40px 0 20px;
        text-align: center;
    }
    .hero-title {
        font-size: 34px;
        color: var(--text);
    }
    .hero-tagline {
        font-size: 16px;
        color: var(--text-dim);
        margin-top: 8px;
    }

    /* Cards */
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
        gap: 14px;
        margin-top: 14px;
    }
    .card {
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 10px;
        padding: 16px;
        transition: border-color 0.15s;
    }
    .card:hover {
        border-color: var(--accent);
    }
    .card-title {
        font-size: 15px;
        font-weight: 600;
        color: var(--text);
        margin-bottom: 6px;
    }
    .card-body {
        font-size: 13px;
        color: var(--text-dim);
        line-height: 1.5;
    }
    .card a {
        color: var(--accent);
        text-decoration: none;
    }
    .tag {
        display: inline-block;
        font-size: 11px;
        color: var(--accent);
        background: var(--accent-soft);
        border-radius: 4px;
        padding: 2px 8px;
        margin: 8px 6px 0 0;
    }

    /* Skill bars */
    .skill-row {
        display: flex;
        align-items: center;
        gap: 10px;
        margin-bottom: 8px;
    }
    .skill-label {
        width: 110px;
        font-size: 13px;
        color: var(--text-dim);
    }
    .skill-bar {
        flex: 1;
        height: 8px;
        background: var(--surface);
        border-radius: 4px;
        overflow: hidden;
    }
    .skill-bar-fill {
        height: 100%;
        background: var(--accent);
        border-radius: 4px;
    }

    /* Forms & buttons */
    .input {
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 6px;
        color: var(--text);
        padding: 7px 10px;
        font-size: 13px;
        outline: none;
        flex: 1;
    }
    .input:focus {
        border-color: var(--accent);
    }
    .btn {
        background: var(--accent-soft);
        border: 1px solid var(--border);
        border-radius: 6px;
        color: var(--accent);
        padding: 7px 14px;
        font-size: 13px;
        cursor: pointer;
        transition: all 0.15s;
    }
    .btn:hover {
        border-color: var(--accent);
    }
    .btn-danger {
        color: #f87171;
    }
    .form-row {
        display: flex;
        gap: 8px;
        margin: 12px 0;
    }
    .status-message {
        font-size: 13px;
        color: var(--ok);
        min-height: 18px;
        margin-top: 6px;
    }

    /* Contact rows */
    .contact-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 8px;
        padding: 12px 16px;
        margin-bottom: 10px;
    }
    .contact-channel {
        font-size: 13px;
        color: var(--text-dim);
    }
    .contact-value {
        font-size: 14px;
        color: var(--text);
    }

    /* Notes */
    .note-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 10px;
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 8px;
        padding: 10px 14px;
        margin-bottom: 8px;
    }
    .note-body {
        font-size: 14px;
        color: var(--text);
    }
    .note-meta {
        font-size: 11px;
        color: var(--text-dim);
    }

    /* Settings */
    .theme-option {
        display: flex;
        align-items: center;
        gap: 10px;
        padding: 8px 0;
        font-size: 14px;
        cursor: pointer;
    }
    .route-table {
        width: 100%;
        border-collapse: collapse;
        font-size: 13px;
    }
    .route-table th, .route-table td {
        text-align: left;
        padding: 6px 10px;
        border-bottom: 1px solid var(--border);
    }
    .route-table th {
        color: var(--accent);
        font-weight: 600;
    }
    .route-table td {
        color: var(--text-dim);
    }

    /* Topology */
    .topo-canvas {
        width: 100%;
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 10px;
        margin-top: 14px;
    }
    .topo-link {
        stroke: var(--border);
        stroke-width: 2;
    }
    .topo-node {
        fill: var(--surface-raised);
        stroke: var(--accent);
        stroke-width: 2;
    }
    .topo-label {
        fill: var(--text);
        font-size: 12px;
        text-anchor: middle;
    }
    .topo-kind {
        fill: var(--text-dim);
        font-size: 10px;
        text-anchor: middle;
    }

    /* Not found */
    .not-found {
        text-align: center;
        padding: 60px 0;
    }
    .not-found-code {
        font-size: 56px;
        color: var(--accent);
    }

    /* Footer */
    .footer-bar {
        display: flex;
        justify-content: space-between;
        padding: 6px 14px;
        border-top: 1px solid var(--border);
        font-size: 11px;
        color: var(--text-dim);
        flex-shrink: 0;
    }
"#;
