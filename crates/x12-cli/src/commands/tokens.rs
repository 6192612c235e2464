use std::fmt::Write;

use x12_lib::{Configuration, Tokenizer};

use super::input::{SourceArgs, exit_with};

pub struct TokensArgs {
    pub source: SourceArgs,
}

pub fn run(args: TokensArgs) {
    let text = args.source.read().unwrap_or_else(|e| exit_with(e));
    let delimiters = args.source.delimiters;

    let config = Configuration::builder()
        .delimiters(delimiters)
        .sub_element_separator(delimiters.sub_element_separator)
        .build()
        .unwrap_or_else(|e| exit_with(e));

    match render_tokens(&text, config, args.source.ignore_line_breaks) {
        Ok(out) => print!("{}", out),
        Err(err) => args.source.exit_with_parse_error(&err, &text),
    }
}

/// One token per line, in debug form.
pub fn render_tokens(
    text: &str,
    config: Configuration,
    ignore_line_breaks: bool,
) -> x12_lib::Result<String> {
    let tokenizer = Tokenizer::new(text.as_bytes(), config).ignore_line_breaks(ignore_line_breaks);

    let mut out = String::new();
    for token in tokenizer {
        writeln!(out, "{:?}", token?).expect("String write never fails");
    }
    Ok(out)
}
