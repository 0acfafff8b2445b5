//! Output formatting for suffix listings, statistics and matches

use crate::tree::{BuildStats, SuffixTree, TERMINAL};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// `--color` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and the config allows it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the config `color` switch and whether stdout is a
    /// terminal; an explicit mode wins over both
    pub fn choice(self, config_color: bool, is_terminal: bool) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if config_color && is_terminal => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

pub fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(choice)
}

/// One enumerated suffix in JSON-lines output
#[derive(Debug, Serialize)]
struct SuffixRecord<'a> {
    id: usize,
    suffix: &'a str,
}

/// Construction summary in JSON output
#[derive(Debug, Serialize)]
struct StatsRecord<'a> {
    text: &'a str,
    nodes: usize,
    leaves: usize,
    #[serde(flatten)]
    stats: &'a BuildStats,
}

/// Print the augmented text followed by every suffix in lexicographic order
pub fn write_suffixes<W: WriteColor>(out: &mut W, tree: &SuffixTree) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", tree.text())?;
    out.reset()?;

    for (id, suffix) in tree.suffixes() {
        write!(out, "Suffix ID: ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", id)?;
        out.reset()?;
        write!(out, ", ")?;
        write_suffix(out, suffix)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Write a suffix with the terminal highlighted
fn write_suffix<W: WriteColor>(out: &mut W, suffix: &str) -> io::Result<()> {
    let body = suffix.strip_suffix(TERMINAL as char).unwrap_or(suffix);
    write!(out, "{}", body)?;

    if body.len() < suffix.len() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", TERMINAL as char)?;
        out.reset()?;
    }
    Ok(())
}

/// Print every suffix as one JSON object per line
pub fn write_suffixes_json<W: Write>(out: &mut W, tree: &SuffixTree) -> io::Result<()> {
    for (id, suffix) in tree.suffixes() {
        serde_json::to_writer(&mut *out, &SuffixRecord { id, suffix })?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print construction counters
pub fn write_stats<W: WriteColor>(out: &mut W, tree: &SuffixTree) -> io::Result<()> {
    let stats = tree.stats();

    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", tree.text())?;
    out.reset()?;

    let rows = [
        ("Nodes", tree.node_count()),
        ("Leaves", tree.leaf_count()),
        ("Phases", stats.phases),
        ("Nodes created", stats.nodes_created),
        ("Internal nodes", stats.internal_created),
        ("Suffix-link follows", stats.suffix_link_follows),
        ("Skip-count hops", stats.skip_count_hops),
        ("Showstoppers", stats.showstoppers),
    ];

    for (label, value) in rows {
        write!(out, "  {:20}", label)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", value)?;
        out.reset()?;
    }

    Ok(())
}

/// Print construction counters as a single JSON object
pub fn write_stats_json<W: Write>(out: &mut W, tree: &SuffixTree) -> io::Result<()> {
    let record = StatsRecord {
        text: tree.text(),
        nodes: tree.node_count(),
        leaves: tree.leaf_count(),
        stats: tree.stats(),
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}

/// Print occurrence positions of a pattern, ripgrep-style `text:pos:match`
pub fn write_matches<W: WriteColor>(
    out: &mut W,
    tree: &SuffixTree,
    pattern: &str,
    positions: &[usize],
) -> io::Result<()> {
    let input = tree.input();

    for &pos in positions {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", pos)?;
        out.reset()?;
        write!(out, ":")?;

        let end = (pos + pattern.len()).min(input.len());
        write!(out, "{}", &input[..pos])?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &input[pos..end])?;
        out.reset()?;
        writeln!(out, "{}", &input[end..])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn render(f: impl FnOnce(&mut Buffer) -> io::Result<()>) -> String {
        let mut buf = Buffer::no_color();
        f(&mut buf).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_suffix_listing() {
        let tree = SuffixTree::build("aab").unwrap();
        let text = render(|buf| write_suffixes(buf, &tree));

        assert_eq!(
            text,
            "aab$\n\
             Suffix ID: 3, $\n\
             Suffix ID: 0, aab$\n\
             Suffix ID: 1, ab$\n\
             Suffix ID: 2, b$\n"
        );
    }

    #[test]
    fn test_suffix_json_lines() {
        let tree = SuffixTree::build("ab").unwrap();
        let mut out = Vec::new();
        write_suffixes_json(&mut out, &tree).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"id":2,"suffix":"$"}"#,
                r#"{"id":0,"suffix":"ab$"}"#,
                r#"{"id":1,"suffix":"b$"}"#,
            ]
        );
    }

    #[test]
    fn test_stats_json() {
        let tree = SuffixTree::build("aab").unwrap();
        let mut out = Vec::new();
        write_stats_json(&mut out, &tree).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["text"], "aab$");
        assert_eq!(value["nodes"], 6);
        assert_eq!(value["leaves"], 4);
        assert_eq!(value["showstoppers"], 1);
        assert_eq!(value["nodes_created"], 5);
    }

    #[test]
    fn test_stats_listing() {
        let tree = SuffixTree::build("banana").unwrap();
        let text = render(|buf| write_stats(buf, &tree));

        assert!(text.starts_with("banana$\n"));
        assert!(text.contains("Leaves"));
        assert!(text.lines().any(|l| l.starts_with("  Leaves") && l.ends_with(" 7")));
    }

    #[test]
    fn test_color_mode_choice() {
        assert_eq!(ColorMode::Always.choice(false, false), ColorChoice::Always);
        assert_eq!(ColorMode::Never.choice(true, true), ColorChoice::Never);
        assert_eq!(ColorMode::Auto.choice(true, true), ColorChoice::Auto);
        assert_eq!(ColorMode::Auto.choice(true, false), ColorChoice::Never);
        assert_eq!(ColorMode::Auto.choice(false, true), ColorChoice::Never);
    }

    #[test]
    fn test_match_listing() {
        let tree = SuffixTree::build("abracadabra").unwrap();
        let positions = tree.find_all("abra");
        let text = render(|buf| write_matches(buf, &tree, "abra", &positions));

        assert_eq!(text, "0:abracadabra\n7:abracadabra\n");
    }
}
