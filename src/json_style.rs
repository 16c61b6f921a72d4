//! Purpose: Pretty-print JSON receipts with optional ANSI colour on keys and scalars.
//! Exports: `render_json`.
//! Role: Backs `--color` for stdout JSON in `check-path`, `check-version`, and `write --json`.
//! Invariants: With colour off the output equals `serde_json::to_string_pretty`.
use serde_json::{Map, Value};

const KEY: &str = "36";
const STRING: &str = "32";
const NUMBER: &str = "33";
const LITERAL: &str = "35";

pub fn render_json(value: &Value, use_color: bool) -> String {
    let mut painter = JsonPainter {
        out: String::new(),
        use_color,
    };
    painter.value(value, 0);
    painter.out
}

struct JsonPainter {
    out: String,
    use_color: bool,
}

impl JsonPainter {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.paint("null", LITERAL),
            Value::Bool(flag) => self.paint(if *flag { "true" } else { "false" }, LITERAL),
            Value::Number(num) => self.paint(&num.to_string(), NUMBER),
            Value::String(text) => self.paint(&quoted(text), STRING),
            Value::Array(items) => {
                self.nested('[', ']', depth, items.iter().map(|item| (None, item)));
            }
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) {
        self.nested(
            '{',
            '}',
            depth,
            map.iter().map(|(key, value)| (Some(key.as_str()), value)),
        );
    }

    fn nested<'a>(
        &mut self,
        open: char,
        close: char,
        depth: usize,
        entries: impl ExactSizeIterator<Item = (Option<&'a str>, &'a Value)>,
    ) {
        self.out.push(open);
        let len = entries.len();
        if len == 0 {
            self.out.push(close);
            return;
        }
        for (idx, (key, value)) in entries.enumerate() {
            self.out.push('\n');
            self.indent(depth + 1);
            if let Some(key) = key {
                self.paint(&quoted(key), KEY);
                self.out.push_str(": ");
            }
            self.value(value, depth + 1);
            if idx + 1 < len {
                self.out.push(',');
            }
        }
        self.out.push('\n');
        self.indent(depth);
        self.out.push(close);
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }

    fn paint(&mut self, text: &str, code: &str) {
        if self.use_color {
            self.out.push_str(&format!("\x1b[{code}m{text}\x1b[0m"));
        } else {
            self.out.push_str(text);
        }
    }
}

fn quoted(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
