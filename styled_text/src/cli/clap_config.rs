// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "styled")]
#[command(about = "🎨 Print text with ANSI colors and attributes")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  styled [\x1b[32mtext\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(help = "The text to style.")]
    pub text: String,

    #[arg(
        long,
        value_name = "COLOUR",
        help = "Foreground color: a palette name (eg: `red`, `bright-cyan`), an ANSI 256 index (`0` to `255`), a hex color (eg: `#ff8000`), or `none`."
    )]
    pub fg: Option<String>,

    #[arg(
        long,
        value_name = "COLOUR",
        help = "Background color. Same format as --fg."
    )]
    pub bg: Option<String>,

    #[arg(
        long = "attrib",
        short = 'a',
        value_name = "NAME",
        help = "Text attribute, can be repeated: bold, dim, italic, underline, slow-blink, fast-blink, invert, strike."
    )]
    pub attribs: Vec<String>,

    #[arg(
        long,
        short = 'r',
        help = "Print the escaped debug form of the output instead of the styled text."
    )]
    pub raw: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to stderr."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn verify_command() { CLIArg::command().debug_assert(); }

    #[test]
    fn parse_all_options() {
        let it = CLIArg::try_parse_from([
            "styled", "Hello", "--fg", "red", "--bg", "#0a141e", "-a", "bold",
            "--attrib", "strike", "--raw", "--enable-logging",
        ])
        .unwrap();
        assert_eq2!(it.text, "Hello");
        assert_eq2!(it.fg.as_deref(), Some("red"));
        assert_eq2!(it.bg.as_deref(), Some("#0a141e"));
        assert_eq2!(it.attribs, vec!["bold", "strike"]);
        assert!(it.raw);
        assert!(it.global_options.enable_logging);
    }

    #[test]
    fn parse_text_only() {
        let it = CLIArg::try_parse_from(["styled", "Hello"]).unwrap();
        assert_eq2!(it.fg, None);
        assert_eq2!(it.bg, None);
        assert!(it.attribs.is_empty());
        assert!(!it.raw);
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    fn text_is_required() {
        assert!(CLIArg::try_parse_from(["styled"]).is_err());
    }
}
