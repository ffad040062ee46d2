//! Completion parser — splits free-form model output into tone → options.
//!
//! Best-effort: the prompt asks for `Tone: option | option` lines but nothing
//! enforces it. Lines that don't fit are dropped silently; this never fails.

use crate::generation::models::GeneratedOptions;

const LABEL_SEPARATOR: char = ':';
const OPTION_SEPARATOR: char = '|';

pub fn parse_options(completion: &str) -> GeneratedOptions {
    let mut parsed = GeneratedOptions::default();

    for line in completion.trim().lines() {
        let Some((label, rest)) = line.split_once(LABEL_SEPARATOR) else {
            continue;
        };

        let options: Vec<String> = rest
            .split(OPTION_SEPARATOR)
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if !options.is_empty() {
            parsed.insert(label.trim().to_string(), options);
        }
    }

    parsed
}
