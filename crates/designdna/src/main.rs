use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use designdna::commands::extract::{run as extract, ExtractArgs, Format};

#[derive(Parser, Debug, Clone)]
#[command(about = "Designdna, a design-token extractor for CSS", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum OutputFormat {
    Css,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Extract design tokens from a CSS file, or from stdin
    Extract {
        input: Option<PathBuf>,

        /// Output format: a custom-property block or structured JSON
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,

        /// Write the output to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Extract { input, format, out }) => extract(ExtractArgs {
            input,
            format: match format {
                OutputFormat::Css => Format::Css,
                OutputFormat::Json => Format::Json,
            },
            out,
            stdout: &mut stdout,
        }),
        None => {
            Args::command().print_help().unwrap();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
