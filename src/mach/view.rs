use super::Value;

// Port notes: the preview is the long-standing `[n] (…)` shape; the
// sparkline maps -1..1 onto eight braille levels across a fixed width.

const DOTS: [&str; 8] = [" ", "⠂", "⠒", "⠖", "⠶", "⠷", "⠿", "⣿"];
const WIDTH: usize = 64;
const PREVIEW: usize = 10;

/// One-line summary: element count and the first few elements. Nested
/// arrays summarize child lengths; a function prints its source.
pub fn preview(value: &Value) -> String {
    match value {
        Value::Fun(body) => format!("{{{}}}", body),
        Value::Nest(items) => {
            if items.is_empty() {
                return "[0]".to_string();
            }
            let limit = items.len().min(PREVIEW);
            let parts: Vec<String> = items[..limit]
                .iter()
                .map(|item| format!("<{}>", item.len()))
                .collect();
            let more = if items.len() > PREVIEW { " ..." } else { "" };
            format!("[{}] ({}{})", items.len(), parts.join(" "), more)
        }
        Value::Num(v) => {
            if v.is_empty() {
                return "[0]".to_string();
            }
            let limit = v.len().min(PREVIEW);
            let parts: Vec<String> = v[..limit].iter().map(|x| format!("{:.4}", x)).collect();
            let more = if v.len() > PREVIEW { " ..." } else { "" };
            format!("[{}] ({}{})", v.len(), parts.join(" "), more)
        }
    }
}

/// Preview plus sparkline, for the `\v` command.
pub fn render(value: &Value) -> String {
    match value.samples() {
        Some(v) if !v.is_empty() => format!("{}\n   {}", preview(value), sparkline(v)),
        _ => preview(value),
    }
}

fn sparkline(v: &[f64]) -> String {
    let mut line = String::new();
    for i in 0..WIDTH {
        let idx = i * v.len() / WIDTH;
        let level = ((v[idx] + 1.0) * 3.5) as i32;
        let level = level.max(0).min(7) as usize;
        line.push_str(DOTS[level]);
    }
    line
}
