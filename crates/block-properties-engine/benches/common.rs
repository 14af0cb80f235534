// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => content.push_str(&format!("## Section {i}\n")),
            1 => content.push_str(&format!(
                "Task {i} needs doing ^task-{i} [status: todo, priority: high, owner: sam]\n"
            )),
            2 => content.push_str("Plain prose with a caret ^ and [brackets] that are not properties.\n"),
            _ => content.push_str(&format!("^n{i} [tag: a; tag: b]\n")),
        }
    }
    content
}

/// Splits `text` into line-aligned ranges of `lines` lines each.
#[allow(dead_code)]
pub fn viewport_ranges(text: &str, lines: usize) -> Vec<(usize, usize)> {
    let mut starts = vec![0];
    starts.extend(text.match_indices('\n').map(|(i, _)| i + 1).step_by(lines));
    starts.dedup();
    starts.windows(2).map(|w| (w[0], w[1])).collect()
}
