//! folio CLI: render a resume JSON file to PDF
//! The browser interface is through the WASM bindings.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use folio::render::{render_to_sink, DirectorySink};
    use folio::{render, RenderOptions, Resume};

    #[derive(Parser)]
    #[command(name = "folio")]
    #[command(version)]
    #[command(about = "Render a resume record to a paginated A4 PDF", long_about = None)]
    struct Cli {
        /// Resume JSON file
        #[arg(value_name = "RESUME_JSON")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Render options JSON file (missing fields take defaults)
        #[arg(long, value_name = "OPTIONS_JSON")]
        options: Option<PathBuf>,

        /// Print the laid-out lines instead of writing a PDF
        #[arg(long)]
        dry_run: bool,
    }

    pub fn run() {
        env_logger::init();

        let cli = Cli::parse();
        if let Err(e) = execute(&cli) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    fn execute(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
        let resume = Resume::from_json(&fs::read_to_string(&cli.input)?)?;
        let options = load_options(cli.options.as_deref())?;

        if cli.dry_run {
            let document = render(&resume, &options)?;
            for (page, line) in document.lines() {
                println!("{:>3}  {}", page + 1, line);
            }
            println!("{} page(s) -> {}", document.page_count(), document.file_name);
            return Ok(());
        }

        let mut sink = DirectorySink::new(&cli.output);
        let document = render_to_sink(&resume, &options, &mut sink)?;
        for path in sink.written() {
            println!("{} ({} page(s))", path.display(), document.page_count());
        }
        Ok(())
    }

    fn load_options(path: Option<&Path>) -> Result<RenderOptions, Box<dyn std::error::Error>> {
        match path {
            Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
            None => Ok(RenderOptions::default()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    cli::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
