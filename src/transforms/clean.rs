/// Most consecutive blank lines kept.
const MAX_BLANK_RUN: usize = 2;

/// Normalizes line endings, strips trailing whitespace, caps runs of
/// blank lines and drops trailing blank lines.
pub fn transform(content: &str) -> String {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    for line in content.split('\n').map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > MAX_BLANK_RUN {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
