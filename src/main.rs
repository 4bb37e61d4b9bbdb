use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use theme_forge::app::domain::page::PageKind;
use theme_forge::app::domain::settings::EditorSettings;
use theme_forge::app::domain::theme::{ScaleName, Shade};
use theme_forge::app::infrastructure::{logging, platform};
use theme_forge::app::services::text_ops::is_valid_slug;
use theme_forge::app::services::{diff, export, renderer};
use theme_forge::{EditorShell, Result, ThemeConfiguration};

#[derive(Parser)]
#[command(name = "ThemeForge", version, about = "Theme editor toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default theme to a new file
    Init { file: PathBuf },
    /// Render a page of a theme to HTML
    Render {
        file: PathBuf,
        /// Page slug to render
        #[arg(long, default_value = "/")]
        page: String,
        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Open the rendered page in the browser
        #[arg(long)]
        open: bool,
    },
    /// List the pages of a theme
    Pages { file: PathBuf },
    /// Report slug and homepage problems
    Check { file: PathBuf },
    /// Show a unified diff between two theme files
    Diff { old: PathBuf, new: PathBuf },
    /// Set one shade of a color scale
    SetColor {
        file: PathBuf,
        /// Scale name (primary, secondary, accent, neutral, success, warning, error, info)
        #[arg(value_parser = parse_scale)]
        scale: ScaleName,
        /// Shade (50, 100, ... 950)
        #[arg(value_parser = parse_shade)]
        shade: Shade,
        value: String,
    },
    /// Add a page to a theme
    AddPage {
        file: PathBuf,
        name: String,
        /// Slug (derived from the name when omitted)
        #[arg(long, default_value = "")]
        slug: String,
        /// Page type (homepage, about, contact, blog, product, landing, custom)
        #[arg(long, default_value = "custom", value_parser = parse_kind)]
        kind: PageKind,
    },
    /// Remove rendered preview files
    Clean,
}

fn parse_scale(s: &str) -> std::result::Result<ScaleName, String> {
    ScaleName::parse(s).ok_or_else(|| format!("unknown color scale '{}'", s))
}

fn parse_shade(s: &str) -> std::result::Result<Shade, String> {
    s.parse::<u16>()
        .ok()
        .and_then(Shade::from_value)
        .ok_or_else(|| format!("unknown shade '{}'", s))
}

fn parse_kind(s: &str) -> std::result::Result<PageKind, String> {
    PageKind::parse(s).ok_or_else(|| format!("unknown page type '{}'", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = EditorSettings::load();
    logging::init(&settings.log_level);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(false) when the command ran but found problems.
fn run(command: Command) -> Result<bool> {
    match command {
        Command::Init { file } => {
            if file.exists() {
                return Err(io::Error::new(
                    ErrorKind::AlreadyExists,
                    format!("{} already exists", file.display()),
                )
                .into());
            }
            export::write_export(&file, &ThemeConfiguration::default())?;
            println!("Created {}", file.display());
        }
        Command::Render {
            file,
            page,
            out,
            open,
        } => {
            let theme = export::read_export(&file)?;
            let html = renderer::render(&theme, &page);
            let written = match out {
                Some(path) => {
                    write_file(&path, &html)?;
                    Some(path)
                }
                None if open => Some(platform::write_preview_file(
                    &platform::preview_dir(),
                    &page,
                    &html,
                )?),
                None => {
                    print!("{}", html);
                    None
                }
            };
            if let Some(path) = written {
                eprintln!("Wrote {}", path.display());
                if open {
                    platform::open_in_browser(&path)?;
                }
            }
        }
        Command::Pages { file } => {
            let theme = export::read_export(&file)?;
            for page in &theme.pages {
                println!(
                    "{:<24} {:<10} {:<20} {}",
                    page.slug,
                    page.kind.as_str(),
                    page.name,
                    page.id
                );
            }
        }
        Command::Check { file } => {
            let theme = export::read_export(&file)?;
            let problems = check_theme(&theme);
            for problem in &problems {
                println!("{}", problem);
            }
            if problems.is_empty() {
                println!("{}: ok", file.display());
            }
            return Ok(problems.is_empty());
        }
        Command::Diff { old, new } => {
            let old = export::read_export(&old)?;
            let new = export::read_export(&new)?;
            print!("{}", diff::theme_diff(&old, &new)?);
        }
        Command::SetColor {
            file,
            scale,
            shade,
            value,
        } => {
            let mut shell = load_shell(&file)?;
            shell.set_color(scale, shade, &value);
            shell.save_to(&file)?;
            println!("{} {} = {}", scale.as_str(), shade.value(), value);
        }
        Command::AddPage {
            file,
            name,
            slug,
            kind,
        } => {
            let mut shell = load_shell(&file)?;
            let Some(id) = shell.add_page(&name, &slug, kind) else {
                eprintln!("page name must not be blank");
                return Ok(false);
            };
            shell.save_to(&file)?;
            if let Some(page) = shell.theme().pages.find_by_id(&id) {
                println!("Added {} at {}", page.name, page.slug);
            }
        }
        Command::Clean => {
            platform::cleanup_preview_files()?;
            println!("Removed {}", platform::preview_dir().display());
        }
    }
    Ok(true)
}

fn load_shell(file: &Path) -> Result<EditorShell> {
    let theme = export::read_export(file)?;
    Ok(EditorShell::new(theme, EditorSettings::default()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn check_theme(theme: &ThemeConfiguration) -> Vec<String> {
    let mut problems = Vec::new();
    match theme.pages.homepage_count() {
        1 => {}
        0 => problems.push("no homepage".to_string()),
        n => problems.push(format!("{} homepages", n)),
    }
    for (slug, ids) in theme.pages.duplicate_slugs() {
        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        problems.push(format!("slug {} used by {}", slug, ids.join(", ")));
    }
    for page in &theme.pages {
        if !is_valid_slug(&page.slug) {
            problems.push(format!("invalid slug {:?} on page {}", page.slug, page.name));
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_forge::app::domain::page::{PageDefinition, PageId};

    #[test]
    fn test_default_theme_passes_check() {
        assert!(check_theme(&ThemeConfiguration::default()).is_empty());
    }

    #[test]
    fn test_check_reports_problems() {
        let mut theme = ThemeConfiguration::default();
        theme.pages.add_page(PageDefinition::new(
            PageId::from("dup"),
            "About again",
            "/about",
            PageKind::About,
        ));
        theme.pages.add_page(PageDefinition::new(
            PageId::from("bad"),
            "Bad",
            "no leading slash",
            PageKind::Custom,
        ));
        let problems = check_theme(&theme);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("/about"));
        assert!(problems[1].contains("Bad"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("theme.json");
        assert!(run(Command::Init { file: file.clone() }).unwrap());
        assert!(run(Command::Init { file }).is_err());
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("theme.json");
        let out = dir.path().join("out").join("about.html");
        run(Command::Init { file: file.clone() }).unwrap();
        run(Command::Render {
            file,
            page: "/about".to_string(),
            out: Some(out.clone()),
            open: false,
        })
        .unwrap();
        assert!(fs::read_to_string(out).unwrap().contains("data-page=\"/about\""));
    }

    #[test]
    fn test_value_parsers() {
        assert_eq!(parse_scale("accent"), Ok(ScaleName::Accent));
        assert!(parse_scale("purple").is_err());
        assert_eq!(parse_shade("950"), Ok(Shade::S950));
        assert!(parse_shade("550").is_err());
        assert!(parse_shade("dark").is_err());
        assert_eq!(parse_kind("Home"), Ok(PageKind::Homepage));
        assert!(parse_kind("gallery").is_err());
    }

    #[test]
    fn test_cli_parses_edit_commands() {
        let cli = Cli::try_parse_from([
            "ThemeForge", "add-page", "theme.json", "Summer Sale", "--kind", "landing",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::AddPage { kind: PageKind::Landing, ref slug, .. } if slug.is_empty()
        ));
        assert!(Cli::try_parse_from(["ThemeForge", "set-color", "t.json", "teal", "500", "#000"]).is_err());
    }

    #[test]
    fn test_edit_commands_update_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("theme.json");
        run(Command::Init { file: file.clone() }).unwrap();
        run(Command::SetColor {
            file: file.clone(),
            scale: ScaleName::Primary,
            shade: Shade::S500,
            value: "#ff0000".to_string(),
        })
        .unwrap();
        run(Command::AddPage {
            file: file.clone(),
            name: "Summer Sale".to_string(),
            slug: String::new(),
            kind: PageKind::Landing,
        })
        .unwrap();
        assert!(!run(Command::AddPage {
            file: file.clone(),
            name: "  ".to_string(),
            slug: String::new(),
            kind: PageKind::Custom,
        })
        .unwrap());

        let theme = export::read_export(&file).unwrap();
        assert_eq!(theme.colors.primary.s500, "#ff0000");
        let page = theme.pages.find_by_slug("/summer-sale").unwrap();
        assert_eq!(page.kind, PageKind::Landing);
        assert_eq!(theme.pages.len(), 4);
    }
}
