use ::regex::Regex;

// "7", "07/16", "3/4"; anything else counts as missing
pub fn parse_position(input: &str) -> (Option<u32>, Option<u32>) {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\s*(\d+)\s*(?:/\s*(\d+)\s*)?$").unwrap();
    }

    match RE.captures(input) {
        None => (None, None),
        Some(c) => (
            c.get(1).and_then(|s| s.as_str().parse().ok()),
            c.get(2).and_then(|s| s.as_str().parse().ok()),
        ),
    }
}
