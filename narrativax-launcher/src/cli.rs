use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Serves the NarrativaX frontend")]
pub struct Cli {
    #[arg(long, env = "NARRATIVAX_PORT", default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "NARRATIVAX_DIST_DIR", default_value = "dist")]
    pub dist_dir: PathBuf,
    /// Also answer /api/generateBook and /api/generateCharacter with canned data
    #[arg(long)]
    pub stub_backend: bool,
    #[arg(long, default_value_t = 3)]
    pub stub_chapters: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["narrativax-launcher"]).unwrap();
        assert_eq!(cli.dist_dir, PathBuf::from("dist"));
        assert!(!cli.stub_backend);
        assert_eq!(cli.stub_chapters, 3);
    }

    #[test]
    fn stub_flags() {
        let cli = Cli::try_parse_from([
            "narrativax-launcher",
            "--port",
            "9000",
            "--stub-backend",
            "--stub-chapters",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.port, 9000);
        assert!(cli.stub_backend);
        assert_eq!(cli.stub_chapters, 5);
    }
}
