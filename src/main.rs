//! Preview Sandbox CLI
//!
//! Build mode (print the preview document):
//!   preview-sandbox <source-file>
//!
//! Embed mode (print the sandboxed iframe element):
//!   preview-sandbox --embed <source-file>
//!
//! Demo server (split-pane page: chat, editor, live preview):
//!   preview-sandbox --serve [addr]

use anyhow::{anyhow, Result};
use preview_sandbox::{build, serve, PreviewFrame};
use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn print_usage() {
    eprintln!("Preview Sandbox - isolated live preview for untrusted source");
    eprintln!();
    eprintln!("Build mode (print the preview document):");
    eprintln!("  preview-sandbox <source-file>");
    eprintln!();
    eprintln!("Embed mode (print the sandboxed iframe element):");
    eprintln!("  preview-sandbox --embed <source-file>");
    eprintln!();
    eprintln!("Demo server:");
    eprintln!("  preview-sandbox --serve [addr]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  preview-sandbox component.jsx");
    eprintln!("  preview-sandbox --embed component.jsx");
    eprintln!("  preview-sandbox --serve {DEFAULT_ADDR}");
}

fn load_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read source file '{}': {}", path.display(), e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Err(anyhow!("Missing required arguments"));
    }

    match args[1].as_str() {
        "--serve" => {
            let addr: SocketAddr = args
                .get(2)
                .map(String::as_str)
                .unwrap_or(DEFAULT_ADDR)
                .parse()
                .map_err(|e| anyhow!("Invalid listen address: {}", e))?;

            tracing_subscriber::fmt().with_target(false).init();
            serve(addr).await
        }
        "--embed" => {
            let Some(path) = args.get(2) else {
                print_usage();
                return Err(anyhow!("Embed mode requires a source file"));
            };
            let source = load_source(Path::new(path))?;
            println!("{}", PreviewFrame::new(&source).embed_html());
            Ok(())
        }
        path => {
            let source = load_source(Path::new(path))?;
            println!("{}", build(&source));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "const x = 1;").unwrap();
        assert_eq!(load_source(file.path()).unwrap(), "const x = 1;");
    }

    #[test]
    fn test_load_source_missing_file() {
        let err = load_source(Path::new("/no/such/file.jsx")).unwrap_err();
        assert!(err.to_string().contains("Failed to read source file"));
    }
}
