// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_plain_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with _some_ **content** & a [link](http://example.com).\nSecond line.\n\n* Bullet point\n* Another item\n\n1. First\n2. Second\n\n    fn example() {\n        println!(\"Hello\");\n    }\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {}\n\n", section));
        for level in 1..=depth {
            let prefix = "> ".repeat(level);
            content.push_str(&format!(
                "{}Quoted at level {} with _emphasis_ and **strong**\n",
                prefix, level
            ));
            content.push_str(&format!("{}\n", prefix));
            content.push_str(&format!("{}* item at level {}\n", prefix, level));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_overlapping_spans(size: usize) -> String {
    "Some _more words **to be_ emphasized** and _nested **strong** text_ here.\n".repeat(size)
}
