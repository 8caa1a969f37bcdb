//! Wrappers that embed a Mermaid diagram in Markdown or a standalone page.

use html_escape::encode_text;

const MERMAID_CDN: &str = "https://cdn.jsdelivr.net/npm/mermaid@10.9.3/dist/mermaid.min.js";

/// Fenced ```mermaid block.
pub fn markdown(diagram: &str) -> String {
    let mut out = String::from("```mermaid\n");
    out.push_str(diagram);
    if !diagram.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

/// Self-contained HTML page with zoom controls around the diagram.
pub fn html(diagram: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{cdn}"></script>
    <style>
        body, html {{ margin: 0; padding: 0; width: 100%; height: 100%; }}
        .zoom-controls {{ position: fixed; top: 10px; right: 10px; z-index: 1000; padding: 5px; border-radius: 5px; }}
        .zoom-controls button {{ padding: 5px 10px; margin-left: 5px; }}
        .scroll-container {{ width: 100%; height: 100%; overflow: auto; display: flex; justify-content: center; align-items: center; }}
        .mermaid-diagram {{ transform-origin: center; }}
    </style>
</head>
<body>
    <div class="zoom-controls">
        <button id="zoomIn">Zoom In</button>
        <button id="zoomOut">Zoom Out</button>
    </div>
    <div class="scroll-container">
        <div class="mermaid-diagram">
            <div class="mermaid">
{diagram}
            </div>
        </div>
    </div>
    <script>
        const diagram = document.querySelector('.mermaid-diagram');
        let scale = 1.0;
        const step = 0.1;
        document.getElementById('zoomIn').addEventListener('click', () => {{
            scale += step;
            diagram.style.transform = `scale(${{scale}})`;
        }});
        document.getElementById('zoomOut').addEventListener('click', () => {{
            scale = Math.max(0.1, scale - step);
            diagram.style.transform = `scale(${{scale}})`;
        }});
        mermaid.initialize({{ startOnLoad: true }});
    </script>
</body>
</html>
"#,
        title = encode_text(title),
        cdn = MERMAID_CDN,
        // Mermaid reads the unescaped textContent, so the diagram survives intact
        diagram = encode_text(diagram.trim_end()),
    )
}
