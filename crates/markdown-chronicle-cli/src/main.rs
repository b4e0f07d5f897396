use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use markdown_chronicle_config::Config;
use markdown_chronicle_engine::{
    io, render_str, to_html,
    vcs::{BranchId, CommitId, VersionControl, VersionStore},
};
use relative_path::RelativePath;
use std::path::PathBuf;

/// Local-first markdown authoring with document version history
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Documents directory; overrides the config file
    #[arg(short, long)]
    documents: Option<PathBuf>,

    /// Author recorded on commits; overrides the config file
    #[arg(long)]
    author: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List markdown documents under the documents directory
    List,
    /// Render a document to HTML on stdout
    Preview {
        /// Document path relative to the documents directory
        document: String,
    },
    /// Show where a document's history currently stands
    Status { document: String },
    /// Record the document's current content as a new version
    Commit {
        document: String,
        /// Commit message
        #[arg(short, long)]
        message: String,
    },
    /// Show the version log
    Log { document: String },
    /// List branches
    Branches { document: String },
    /// Create a branch
    Branch {
        document: String,
        name: String,
        /// Version to branch from (id prefix or tag) instead of the current one
        #[arg(long)]
        from: Option<String>,
    },
    /// Switch to a branch and restore its last version into the file
    Switch { document: String, branch: String },
    /// Tag a version
    Tag {
        document: String,
        tag: String,
        /// Version to tag (id prefix or tag); defaults to the current one
        #[arg(long)]
        version: Option<String>,
    },
    /// Merge one branch into another
    Merge {
        document: String,
        /// Source branch (name or id prefix)
        source: String,
        /// Target branch; defaults to the current one
        #[arg(long)]
        into: Option<String>,
        /// Merge commit message
        #[arg(short, long, default_value = "Merge")]
        message: String,
    },
    /// Line diff between two versions
    Diff {
        document: String,
        old: String,
        new: String,
    },
    /// Check out a version's content into the document file
    Checkout { document: String, version: String },
}

struct Workspace {
    documents_path: PathBuf,
    state_dir: PathBuf,
    author: String,
}

impl Workspace {
    fn from_cli(documents: Option<PathBuf>, author: Option<String>) -> Result<Self> {
        let config = match documents {
            Some(documents_path) => Config {
                documents_path,
                state_path: None,
                author,
            },
            None => match Config::load()? {
                Some(mut config) => {
                    if author.is_some() {
                        config.author = author;
                    }
                    config
                }
                None => bail!(
                    "no documents directory given; pass --documents or create {}",
                    Config::config_path().display()
                ),
            },
        };

        io::validate_documents_dir(&config.documents_path)?;
        Ok(Self {
            state_dir: config.state_dir(),
            author: config.author.unwrap_or_else(default_author),
            documents_path: config.documents_path,
        })
    }

    fn read(&self, document: &str) -> Result<String> {
        let content = io::read_document(RelativePath::new(document), &self.documents_path)?;
        Ok(content)
    }

    fn write_back(&self, document: &str, content: &str) -> Result<()> {
        io::write_document(RelativePath::new(document), &self.documents_path, content)?;
        debug!("wrote {document}");
        Ok(())
    }

    /// Opens the document's version history, seeding it from the file on
    /// first use, and syncs the working copy with the file's content.
    fn open(&self, document: &str) -> Result<VersionControl> {
        let content = self.read(document)?;
        let store = VersionStore::new(self.state_dir.clone());
        let mut vc = VersionControl::open(store, document, &content, &self.author)?;
        vc.set_working_text(&content)?;
        Ok(vc)
    }
}

fn default_author() -> String {
    std::env::var("USER").unwrap_or_else(|_| "anonymous".to_string())
}

fn resolve_version(vc: &VersionControl, needle: &str) -> Result<CommitId> {
    vc.resolve_commit(needle)
        .map(|c| c.id)
        .with_context(|| format!("unknown version '{needle}'"))
}

fn resolve_branch(vc: &VersionControl, needle: &str) -> Result<BranchId> {
    vc.resolve_branch(needle)
        .map(|b| b.id)
        .with_context(|| format!("unknown branch '{needle}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let workspace = Workspace::from_cli(cli.documents, cli.author)?;

    match cli.command {
        Command::List => {
            let files = io::scan_markdown_files(&workspace.documents_path)?;
            for file in files {
                let shown = file
                    .strip_prefix(&workspace.documents_path)
                    .unwrap_or(&file);
                println!("{}", shown.display());
            }
        }

        Command::Preview { document } => {
            let content = workspace.read(&document)?;
            let tree = render_str(&content);
            println!("{}", to_html(&tree));
        }

        Command::Status { document } => {
            let vc = workspace.open(&document)?;
            let branch = vc
                .current_branch()
                .map(|b| b.name.clone())
                .unwrap_or_else(|| "(none)".to_string());
            println!("On branch {branch}");
            if let Some(commit) = vc.current_commit() {
                println!("Version {}: {}", commit.id.short(), commit.message);
            }
            if vc.has_uncommitted_changes() {
                println!("working copy has uncommitted changes");
            } else {
                println!("working copy clean");
            }
        }

        Command::Commit { document, message } => {
            let mut vc = workspace.open(&document)?;
            match vc.commit(&message, &workspace.author)? {
                Some(id) => {
                    let changes = vc
                        .state()
                        .commit(id)
                        .map(|c| c.changes.to_string())
                        .unwrap_or_default();
                    println!("committed {} ({changes})", id.short());
                }
                None => println!("nothing to commit"),
            }
        }

        Command::Log { document } => {
            let vc = workspace.open(&document)?;
            let current = vc.state().current_version;
            for commit in vc.state().versions.iter().rev() {
                let marker = if commit.id == current { "*" } else { " " };
                let tags = if commit.tags.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", commit.tags.join(", "))
                };
                println!(
                    "{marker} {}  {}  {}  {}{tags}",
                    commit.id.short(),
                    commit.timestamp.format("%Y-%m-%d %H:%M"),
                    commit.message,
                    commit.changes,
                );
            }
        }

        Command::Branches { document } => {
            let vc = workspace.open(&document)?;
            for branch in &vc.state().branches {
                let marker = if branch.is_active { "*" } else { " " };
                println!(
                    "{marker} {}  {}",
                    branch.name,
                    branch.last_commit.short()
                );
            }
        }

        Command::Branch {
            document,
            name,
            from,
        } => {
            let mut vc = workspace.open(&document)?;
            let base = match from {
                Some(needle) => Some(resolve_version(&vc, &needle)?),
                None => None,
            };
            match vc.create_branch(&name, &workspace.author, base)? {
                Some(_) => println!("created branch {name}"),
                None => bail!("branch '{name}' already exists"),
            }
        }

        Command::Switch { document, branch } => {
            let mut vc = workspace.open(&document)?;
            let id = resolve_branch(&vc, &branch)?;
            match vc.switch_branch(id)? {
                Some(content) => {
                    workspace.write_back(&document, &content)?;
                    println!("switched to {branch}");
                }
                None => bail!("branch '{branch}' has no versions to restore"),
            }
        }

        Command::Tag {
            document,
            tag,
            version,
        } => {
            let mut vc = workspace.open(&document)?;
            let id = match version {
                Some(needle) => resolve_version(&vc, &needle)?,
                None => vc.state().current_version,
            };
            if vc.add_tag(id, &tag)? {
                println!("tagged {} as {tag}", id.short());
            } else {
                bail!("tag cannot be empty");
            }
        }

        Command::Merge {
            document,
            source,
            into,
            message,
        } => {
            let mut vc = workspace.open(&document)?;
            let source_id = resolve_branch(&vc, &source)?;
            let target_id = match &into {
                Some(needle) => resolve_branch(&vc, needle)?,
                None => vc.state().current_branch,
            };
            let Some(merge_id) =
                vc.merge_branch(source_id, target_id, &message, &workspace.author)?
            else {
                bail!("could not merge '{source}'");
            };

            // When the merge lands on the checked-out branch, bring the
            // file up to date with the merge commit.
            if vc.state().current_branch == target_id {
                if let Some(content) = vc.checkout(merge_id)? {
                    workspace.write_back(&document, &content)?;
                }
            }
            println!("merged {source} as {}", merge_id.short());
        }

        Command::Diff { document, old, new } => {
            let vc = workspace.open(&document)?;
            let old_id = resolve_version(&vc, &old)?;
            let new_id = resolve_version(&vc, &new)?;
            let entries = vc
                .compare_versions(old_id, new_id)
                .context("versions disappeared while diffing")?;
            if entries.is_empty() {
                println!("no differences");
            }
            for entry in entries {
                println!("{entry}");
            }
        }

        Command::Checkout { document, version } => {
            let mut vc = workspace.open(&document)?;
            let id = resolve_version(&vc, &version)?;
            match vc.checkout(id)? {
                Some(content) => {
                    workspace.write_back(&document, &content)?;
                    println!("checked out {}", id.short());
                }
                None => bail!("unknown version '{version}'"),
            }
        }
    }

    Ok(())
}
