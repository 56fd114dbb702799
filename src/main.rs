use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use report_pdf::{DEFAULT_LINES_PER_PAGE, DEFAULT_TOC_TITLE, RenderOptions};

#[derive(Parser)]
#[command(name = "report-pdf")]
#[command(version)]
#[command(about = "Render a Markdown report to PDF with a generated table of contents", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(long, env = "REPORT_PDF_INPUT", default_value = "reports/report.md")]
    input: PathBuf,

    /// Output PDF file
    #[arg(long, env = "REPORT_PDF_OUTPUT", default_value = "reports/report.pdf")]
    output: PathBuf,

    /// Lines per page
    #[arg(long, default_value_t = DEFAULT_LINES_PER_PAGE)]
    lines_per_page: usize,

    /// Heading of the table of contents
    #[arg(long, default_value = DEFAULT_TOC_TITLE)]
    toc_title: String,

    /// Skip the table of contents
    #[arg(long)]
    no_toc: bool,

    /// FlateDecode page content streams
    #[arg(long)]
    compress: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let options = RenderOptions {
        lines_per_page: cli.lines_per_page,
        toc_title: cli.toc_title,
        include_toc: !cli.no_toc,
        compress: cli.compress,
        ..RenderOptions::default()
    };

    match report_pdf::convert_markdown_to_pdf_with_options(&cli.input, &cli.output, &options) {
        Ok(()) => {
            println!("Wrote {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
