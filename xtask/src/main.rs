use clap::Parser;
use std::path::Path;

mod cli;

const BUNDLE_DIR: &str = "NarrativaX";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Launch { port } => {
            trunk_build(false).await?;

            let mut cmd = tokio::process::Command::new("cargo");
            cmd.arg("run")
                .arg("--package")
                .arg("narrativax-launcher")
                .arg("--")
                .arg("--dist-dir")
                .arg("frontend/dist")
                .arg("--port")
                .arg(port.to_string())
                .arg("--stub-backend");
            run(cmd).await?;

            Ok(())
        }
        cli::Command::Dist { target_triple } => {
            let mut cmd = tokio::process::Command::new("cargo");
            cmd.arg("build")
                .arg("--package")
                .arg("narrativax-launcher")
                .arg("--release");
            if let Some(target_triple) = &target_triple {
                cmd.arg("--target").arg(target_triple);
            }
            run(cmd).await?;

            trunk_build(true).await?;

            let release_dir = match &target_triple {
                Some(triple) => format!("target/{triple}/release"),
                None => "target/release".to_string(),
            };
            let bundle_dist = Path::new(BUNDLE_DIR).join("dist");
            tokio::fs::create_dir_all(&bundle_dist).await?;
            tokio::fs::copy(
                Path::new(&release_dir).join("narrativax-launcher"),
                Path::new(BUNDLE_DIR).join("narrativax-launcher"),
            )
            .await?;

            let mut entries = tokio::fs::read_dir("frontend/dist").await?;
            while let Some(file) = entries.next_entry().await? {
                tokio::fs::copy(file.path(), bundle_dist.join(file.file_name())).await?;
            }

            Ok(())
        }
    }
}

async fn trunk_build(release: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new("trunk");
    cmd.current_dir(std::fs::canonicalize("frontend")?);
    cmd.arg("build");
    if release {
        cmd.arg("--release");
    }
    run(cmd).await
}

/// Waits for `cmd` and fails if it did not exit successfully.
async fn run(mut cmd: tokio::process::Command) -> Result<(), Box<dyn std::error::Error>> {
    let status = cmd.spawn()?.wait().await?;
    if !status.success() {
        let program = cmd.as_std().get_program().to_string_lossy().into_owned();
        return Err(format!("`{program}` failed with {status}").into());
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_command_passes() {
        assert!(run(tokio::process::Command::new("true")).await.is_ok());
    }

    #[tokio::test]
    async fn failing_command_is_an_error() {
        let err = run(tokio::process::Command::new("false")).await.unwrap_err();
        assert!(err.to_string().starts_with("`false` failed with"));
    }
}
