//! Build helpers: man pages and shell completions for `textkit`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project automation for textkit")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for textkit and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Shells to generate for (all when omitted)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out, shell } => completions(&out, shell),
    }
}

fn man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = textkit::command();

    let mut page = fs::File::create(out.join("textkit.1"))?;
    clap_mangen::Man::new(cmd.clone()).render(&mut page)?;

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("textkit-{}", sub.get_name());
        let mut page = fs::File::create(out.join(format!("{name}.1")))?;
        clap_mangen::Man::new(sub.clone().name(name)).render(&mut page)?;
    }
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path, shells: Vec<Shell>) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let shells = if shells.is_empty() {
        Shell::value_variants().to_vec()
    } else {
        shells
    };

    let mut cmd = textkit::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "textkit", out)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
