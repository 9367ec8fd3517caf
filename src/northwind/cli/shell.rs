use super::{dispatch, AppContext};
use crate::args::Cli;
use clap::Parser;
use log::debug;
use northwind::error::{NorthwindError, Result};
use northwind::store::CustomerStore;
use std::io::{self, BufRead, IsTerminal, Write};

/// Read commands from stdin until EOF, `exit` or `quit`. A failing command
/// prints its error and the session carries on.
pub(super) fn run<S: CustomerStore>(ctx: &mut AppContext<S>) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", ctx.config.prompt);
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        if let Err(e) = run_line(ctx, line) {
            eprintln!("Error: {}", e);
        }
    }

    debug!("shell session ended");
    Ok(())
}

fn run_line<S: CustomerStore>(ctx: &mut AppContext<S>, line: &str) -> Result<()> {
    let words = split_line(line)?;
    let cli = match Cli::try_parse_from(std::iter::once("northwind".to_string()).chain(words)) {
        Ok(cli) => cli,
        Err(e) => {
            // Help, version and usage errors are all reported by clap itself.
            e.print()?;
            return Ok(());
        }
    };

    match cli.command {
        Some(command) => dispatch(ctx, command),
        None => Ok(()),
    }
}

/// Split a shell line on whitespace, honouring single and double quotes.
fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(NorthwindError::Cli(format!("unterminated quote in: {}", line)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_line("delete  MANDA").unwrap(), ["delete", "MANDA"]);
    }

    #[test]
    fn keeps_quoted_words_together() {
        assert_eq!(
            split_line(r#"create MANDA "Nish Mandal" 'Sparta Global'"#).unwrap(),
            ["create", "MANDA", "Nish Mandal", "Sparta Global"]
        );
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(split_line(r#"create "" x y"#).unwrap(), ["create", "", "x", "y"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(matches!(
            split_line(r#"create "MANDA"#),
            Err(NorthwindError::Cli(_))
        ));
    }
}
