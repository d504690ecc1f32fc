//! Folio console binary.
//!
//! # Responsibility
//! - Stand in for the admin console and the renderer: collect input, call
//!   the core mutation API, render the merged view.
//! - Enforce the visibility gate at this presentation boundary; the core
//!   mutation API itself carries no lock.
//! - Collect explicit confirmation before the destructive clear.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use folio_core::db::open_db;
use folio_core::{
    base_portfolio, default_log_level, encode_image_file_blocking, init_logging,
    is_image_data_uri, Experience, KvOverrideRepository, PortfolioService, Project, SkillGroup,
    SqliteKeyValueStore,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code used when a console action is blocked by the visibility gate.
const EXIT_RESTRICTED: u8 = 2;

#[derive(Parser)]
#[command(name = "folio", version, about = "Portfolio content console")]
struct Cli {
    /// SQLite file backing the local override store.
    #[arg(long, default_value = "folio.db")]
    db: PathBuf,

    /// Page URL of this session; `?view=hr` makes the session read-only.
    #[arg(long, default_value = "https://folio.example/portfolio")]
    page_url: String,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the merged portfolio.
    Show,
    /// Add a work-experience entry ahead of the bundled ones.
    AddExperience(AddExperienceArgs),
    /// Add a project entry ahead of the bundled ones.
    AddProject(AddProjectArgs),
    /// Add a skill group ahead of the bundled ones.
    AddSkillGroup(AddSkillGroupArgs),
    /// Delete the experience override at the given position (newest first).
    DeleteExperience { index: usize },
    /// Delete the project override at the given position (newest first).
    DeleteProject { index: usize },
    /// Delete the skill-group override at the given position (newest first).
    DeleteSkillGroup { index: usize },
    /// Replace the hero image with the encoded copy of an image file.
    SetHero(SetHeroArgs),
    /// Drop the hero override and fall back to the bundled image.
    ResetHero,
    /// Remove every local override. Asks for confirmation.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Write the merged dataset module for permanent adoption.
    Export {
        /// Target directory for `portfolio_data.rs`.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Print the read-only share link for this page.
    ShareLink,
}

impl Command {
    /// Console actions are unreachable in a restricted session; viewing and
    /// sharing stay available.
    fn is_console_action(&self) -> bool {
        !matches!(self, Self::Show | Self::ShareLink)
    }
}

#[derive(Args)]
struct AddExperienceArgs {
    #[arg(long)]
    role: String,
    #[arg(long)]
    company: String,
    #[arg(long)]
    period: String,
    #[arg(long)]
    location: String,
    /// Employment kind shown next to the company name.
    #[arg(long = "type", default_value = "Professional")]
    kind: String,
    /// Repeatable achievement bullet.
    #[arg(long = "achievement")]
    achievements: Vec<String>,
    /// Company logo image file, encoded into the entry.
    #[arg(long)]
    logo: Option<PathBuf>,
}

#[derive(Args)]
struct AddProjectArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    year: String,
    /// Repeatable technology tag.
    #[arg(long = "tech")]
    stack: Vec<String>,
    #[arg(long)]
    impact: Option<String>,
    /// Cover image file, encoded into the entry.
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Args)]
struct AddSkillGroupArgs {
    #[arg(long)]
    category: String,
    /// Repeatable skill item.
    #[arg(long = "item")]
    items: Vec<String>,
    /// Icon image file, encoded into the group.
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Args)]
struct SetHeroArgs {
    /// Image file to encode into the hero slot.
    #[arg(long, conflicts_with = "uri", required_unless_present = "uri")]
    image: Option<PathBuf>,
    /// Pre-encoded `data:image/...` URI.
    #[arg(long)]
    uri: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        init_logging(default_log_level(), dir).map_err(|message| anyhow!(message))?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open override store at `{}`", cli.db.display()))?;
    let store = SqliteKeyValueStore::try_new(&conn).context("override store is not usable")?;
    let mut service = PortfolioService::open(
        base_portfolio().clone(),
        KvOverrideRepository::new(store),
        &cli.page_url,
    );

    if cli.command.is_console_action() && service.is_restricted() {
        eprintln!("read-only share session: editing controls are disabled");
        return Ok(ExitCode::from(EXIT_RESTRICTED));
    }

    match cli.command {
        Command::Show => render(&service),
        Command::AddExperience(args) => {
            let image = args
                .logo
                .as_deref()
                .map(encode_image_file_blocking)
                .transpose()?;
            let id = service.add_experience(Experience {
                role: args.role,
                company: args.company,
                period: args.period,
                location: args.location,
                kind: args.kind,
                achievements: args.achievements,
                image,
            });
            println!("added experience override {id}");
        }
        Command::AddProject(args) => {
            let image = args
                .image
                .as_deref()
                .map(encode_image_file_blocking)
                .transpose()?;
            let id = service.add_project(Project {
                title: args.title,
                description: args.description,
                year: args.year,
                stack: args.stack,
                impact: args.impact,
                image,
            });
            println!("added project override {id}");
        }
        Command::AddSkillGroup(args) => {
            let image = args
                .image
                .as_deref()
                .map(encode_image_file_blocking)
                .transpose()?;
            let id = service.add_skill_group(SkillGroup {
                category: args.category,
                items: args.items,
                image,
            });
            println!("added skill-group override {id}");
        }
        Command::DeleteExperience { index } => {
            report_delete("experience", index, service.delete_experience(index));
        }
        Command::DeleteProject { index } => {
            report_delete("project", index, service.delete_project(index));
        }
        Command::DeleteSkillGroup { index } => {
            report_delete("skill group", index, service.delete_skill_group(index));
        }
        Command::SetHero(args) => {
            let uri = match (args.image, args.uri) {
                (Some(path), _) => encode_image_file_blocking(&path)?,
                (None, Some(uri)) => {
                    if !is_image_data_uri(&uri) {
                        return Err(anyhow!("`--uri` is not an image data URI"));
                    }
                    uri
                }
                (None, None) => unreachable!("clap enforces one source"),
            };
            service.set_hero_image(uri);
            println!("hero image replaced");
        }
        Command::ResetHero => {
            service.reset_hero_image();
            println!("hero image reset to the bundled default");
        }
        Command::Clear { yes } => {
            if !yes && !confirm_clear()? {
                println!("aborted; nothing was cleared");
                return Ok(ExitCode::SUCCESS);
            }
            service.clear_all();
            println!("local session overrides cleared");
        }
        Command::Export { out } => {
            let artifact = service.export_artifact()?;
            let path = folio_core::write_artifact(&artifact, &out)?;
            println!("wrote {}", path.display());
            println!(
                "replace crates/folio_core/src/data/portfolio_data.rs with it to adopt the edits"
            );
        }
        Command::ShareLink => println!("{}", service.share_link()),
    }

    Ok(ExitCode::SUCCESS)
}

fn confirm_clear() -> Result<bool> {
    print!(
        "This clears every local override for this profile. Export the dataset first \
         if you want to keep the edits. Type `yes` to continue: "
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

fn report_delete(category: &str, index: usize, removed: bool) {
    if removed {
        println!("deleted {category} override at {index}");
    } else {
        println!("no {category} override at {index}; nothing deleted");
    }
}

fn render<R: folio_core::OverrideRepository>(service: &PortfolioService<R>) {
    let base = service.base();
    let view = service.merged_view();
    let overrides = service.override_state();

    println!("{}", base.name);
    println!("{}", base.headline);
    println!("hero: {}", summarize_image(&view.hero_image));
    if service.is_restricted() {
        println!("(read-only share view)");
    }

    println!(
        "\nexperience ({} shown, {} local):",
        view.experience.len(),
        overrides.experience.len()
    );
    for (position, entry) in view.experience.iter().enumerate() {
        let marker = local_marker(position, overrides.experience.len());
        println!(
            " {marker} {} at {} ({}, {})",
            entry.role, entry.company, entry.period, entry.location
        );
        for achievement in &entry.achievements {
            println!("     - {achievement}");
        }
    }

    println!(
        "\nskills ({} shown, {} local):",
        view.skills.len(),
        overrides.skills.len()
    );
    for (position, group) in view.skills.iter().enumerate() {
        let marker = local_marker(position, overrides.skills.len());
        println!(" {marker} {}: {}", group.category, group.items.join(", "));
    }

    println!(
        "\nprojects ({} shown, {} local):",
        view.projects.len(),
        overrides.projects.len()
    );
    for (position, entry) in view.projects.iter().enumerate() {
        let marker = local_marker(position, overrides.projects.len());
        println!(
            " {marker} {} ({}): {}",
            entry.title, entry.year, entry.description
        );
        if let Some(impact) = &entry.impact {
            println!("     impact: {impact}");
        }
    }

    println!(
        "\ncontact: {} | {} | {} | {}",
        base.contact.email, base.contact.phone, base.contact.linkedin, base.contact.location
    );
    println!("(entries marked * are local overrides; delete indexes count them from 0)");
}

fn local_marker(position: usize, local_count: usize) -> &'static str {
    if position < local_count {
        "*"
    } else {
        " "
    }
}

fn summarize_image(value: &str) -> String {
    if value.starts_with("data:") {
        format!("embedded image ({} chars)", value.len())
    } else {
        value.to_string()
    }
}
