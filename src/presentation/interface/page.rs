use std::fmt::Write;

use super::{Interface, Widget};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
fieldset { border: 1px solid #ccc; border-radius: 6px; margin-bottom: 1rem; }
label { display: block; margin: 0.6rem 0 0.2rem; font-weight: 600; }
input[type=range] { width: 80%; }
output.value { margin-left: 0.5rem; font-variant-numeric: tabular-nums; }
#status { white-space: pre-wrap; background: #f6f6f6; padding: 0.6rem; border-radius: 4px; min-height: 1.5rem; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('input[type=range]').forEach((input) => {
  const out = document.getElementById(input.name + '_value');
  input.addEventListener('input', () => { out.value = input.value; });
});
const form = document.getElementById('convert-form');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const status = document.getElementById('status');
  const player = document.getElementById('converted_audio');
  status.textContent = 'Converting...';
  player.removeAttribute('src');
  try {
    const response = await fetch(form.action, { method: 'POST', body: new FormData(form) });
    const body = await response.json();
    status.textContent = body.status;
    if (body.audio) {
      player.src = 'data:' + body.audio.content_type + ';base64,' + body.audio.data_base64;
    }
  } catch (err) {
    status.textContent = 'Request failed: ' + err;
  }
});
"#;

/// Renders the declared interface as a standalone HTML form.
pub fn render_page(interface: &Interface) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{}</title>", escape(interface.title)).ok();
    writeln!(html, "<style>{}</style>\n</head>\n<body>", STYLE).ok();
    writeln!(html, "<h1>{}</h1>", escape(interface.title)).ok();
    writeln!(html, "<p>{}</p>", escape(interface.description)).ok();

    writeln!(
        html,
        "<form id=\"convert-form\" action=\"{}\" method=\"{}\" enctype=\"multipart/form-data\">",
        interface.action.path,
        interface.action.method.to_lowercase()
    ).ok();
    html.push_str("<fieldset><legend>Inputs</legend>\n");
    for widget in &interface.inputs {
        render_input(&mut html, widget);
    }
    html.push_str("</fieldset>\n");
    writeln!(
        html,
        "<button type=\"submit\">{}</button>\n</form>",
        escape(interface.action.label)
    ).ok();

    html.push_str("<fieldset><legend>Outputs</legend>\n");
    for widget in &interface.outputs {
        render_output(&mut html, widget);
    }
    html.push_str("</fieldset>\n");

    writeln!(html, "<script>{}</script>\n</body>\n</html>", SCRIPT).ok();
    html
}

fn render_input(html: &mut String, widget: &Widget) {
    writeln!(
        html,
        "<label for=\"{}\">{}</label>",
        widget.name(),
        escape(widget.label())
    ).ok();
    match widget {
        Widget::Audio { name, .. } => {
            writeln!(
                html,
                "<input type=\"file\" id=\"{0}\" name=\"{0}\" accept=\"audio/*\">",
                name
            ).ok();
        }
        Widget::Text {
            name, placeholder, ..
        } => {
            writeln!(
                html,
                "<input type=\"text\" id=\"{0}\" name=\"{0}\" placeholder=\"{1}\">",
                name,
                escape(placeholder)
            ).ok();
        }
        Widget::Slider {
            name,
            min,
            max,
            step,
            default,
            ..
        } => {
            writeln!(
                html,
                "<input type=\"range\" id=\"{0}\" name=\"{0}\" min=\"{1}\" max=\"{2}\" step=\"{3}\" value=\"{4}\"><output class=\"value\" id=\"{0}_value\">{4}</output>",
                name, min, max, step, default
            ).ok();
        }
    }
}

fn render_output(html: &mut String, widget: &Widget) {
    writeln!(html, "<label>{}</label>", escape(widget.label())).ok();
    match widget {
        Widget::Audio { name, .. } => {
            writeln!(html, "<audio id=\"{}\" controls></audio>", name).ok();
        }
        Widget::Text { name, .. } | Widget::Slider { name, .. } => {
            writeln!(html, "<div id=\"{}\"></div>", name).ok();
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
