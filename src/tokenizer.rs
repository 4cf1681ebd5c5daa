/// Splits one input line on runs of whitespace. No quoting or escaping.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
