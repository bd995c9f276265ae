//! # DocSnip Classify Command
//!
//! File: cli/src/commands/classify.rs
//!
//! `docsnip classify` prints the rendering strategy chosen for a snippet. For
//! multi-line shell snippets it also lists every line with its kind, which is
//! handy when a comment line is not showing up the way it should.
//!
//! ```bash
//! $ docsnip classify -l bash -c $'# Build\ngo build ./...'
//! multi-line-shell
//! 1	comment	 Build
//! 2	command	go build ./...
//! ```
//!
use crate::commands::source::SourceArgs;
use crate::core::error::Result;
use crate::snippet::split::split_lines;
use crate::snippet::RenderStrategy;
use clap::Parser;
use tracing::info;

/// Arguments for `docsnip classify`.
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    source: SourceArgs,
}

pub async fn handle_classify(args: ClassifyArgs) -> Result<()> {
    info!("Handling classify command with args: {:?}", args);
    let request = args.source.load()?;
    print!("{}", describe(request.strategy(), &request.code));
    Ok(())
}

fn describe(strategy: RenderStrategy, code: &str) -> String {
    let mut out = format!("{}\n", strategy);
    if strategy == RenderStrategy::MultiLineShell {
        for (index, line) in split_lines(code).iter().enumerate() {
            out.push_str(&format!("{}\t{}\t{}\n", index + 1, line.kind.as_str(), line.text));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_single_line() {
        assert_eq!(
            describe(RenderStrategy::SingleLineShell, "ls -la"),
            "single-line-shell\n"
        );
    }

    #[test]
    fn test_describe_lists_shell_lines() {
        assert_eq!(
            describe(RenderStrategy::MultiLineShell, "# note\nls -la"),
            "multi-line-shell\n1\tcomment\t note\n2\tcommand\tls -la\n"
        );
    }
}
