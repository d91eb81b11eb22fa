use owo_colors::{OwoColorize as _, Stream};

use libdesigndna::{extract_design_tokens, ExtractOptions};

use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The rendered custom-property block
    Css,
    /// The full structured result with statistics
    Json,
}

pub struct ExtractArgs<'a, W: std::io::Write> {
    /// Style text source; `None` reads stdin.
    pub input: Option<PathBuf>,
    pub format: Format,
    /// Write here instead of stdout when set.
    pub out: Option<PathBuf>,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ExtractArgs<W>) -> crate::Result<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = extract_design_tokens(&text, &ExtractOptions::default());

    if result.is_empty() {
        return Err(crate::Error::NoDesignData);
    }

    let rendered = match args.format {
        Format::Css => result.render_tokens(),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&result)?;
            json.push('\n');
            json
        }
    };

    match &args.out {
        Some(path) => {
            fs::write(path, rendered)?;
            writeln!(
                args.stdout,
                "{} Tokens written to {}",
                "✓".if_supports_color(Stream::Stdout, |s| s.green()),
                path.display()
            )?;
        }
        None => {
            write!(args.stdout, "{}", rendered)?;
        }
    }

    Ok(())
}
