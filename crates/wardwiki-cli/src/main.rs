mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use wardwiki_config::Config;
use wardwiki_engine::{
    DirectoryPageSource, OutputNode, PageSource, Renderer, WikiWord, page_title, parse,
};

use view::page_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Html,
    Outline,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    mode: Mode,
    pages_dir: Option<PathBuf>,
    slug: String,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [--html | --outline] [pages-dir] <slug>")
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut mode = Mode::View;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--html" => mode = Mode::Html,
            "--outline" => mode = Mode::Outline,
            flag if flag.starts_with("--") => return Err(format!("Unknown option {flag}")),
            _ => positional.push(arg.clone()),
        }
    }

    let (pages_dir, slug) = match positional.as_slice() {
        [slug] => (None, slug.clone()),
        [dir, slug] => (Some(PathBuf::from(dir)), slug.clone()),
        _ => return Err("Expected a page slug".to_string()),
    };
    Ok(Args {
        mode,
        pages_dir,
        slug,
    })
}

/// Where pages come from, decided from the CLI and the config file.
struct PagesLocation {
    dir: PathBuf,
    mark_missing: bool,
    /// Given on the command line with no config file yet.
    first_run: bool,
}

fn resolve_pages_dir(cli_dir: Option<PathBuf>, program: &str) -> PagesLocation {
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };
    let mark_missing = config.as_ref().is_some_and(|c| c.mark_missing_links);

    match (cli_dir, config) {
        (Some(dir), config) => PagesLocation {
            dir,
            mark_missing,
            first_run: config.is_none(),
        },
        (None, Some(config)) => {
            log::info!("using pages path from {}", config_path.display());
            PagesLocation {
                dir: config.pages_path,
                mark_missing,
                first_run: false,
            }
        }
        (None, None) => {
            eprintln!("Error: No pages directory provided and no config file found");
            eprintln!("{}", usage(program));
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    }
}

/// Saves `dir` as the default pages directory so later runs can omit it.
fn remember_pages_dir(config_path: &Path, dir: &Path) -> Result<()> {
    let config = Config {
        pages_path: std::fs::canonicalize(dir)?,
        mark_missing_links: false,
    };
    config.save_to_path(config_path)
}

/// A fetched page rendered for display.
struct LoadedPage {
    slug: String,
    date: String,
    output: OutputNode,
}

fn load_page(
    source: &DirectoryPageSource,
    slug: &str,
    mark_missing: bool,
) -> anyhow::Result<LoadedPage> {
    let page = source.fetch(slug)?;
    let doc = parse(&page.text);

    let renderer = match page.names {
        Some(names) => Renderer::new().with_known_pages(names),
        None if mark_missing => Renderer::new().with_known_pages(source.page_names()?),
        None => Renderer::new(),
    };

    Ok(LoadedPage {
        slug: slug.to_string(),
        date: page.date,
        output: renderer.render(&doc),
    })
}

struct App {
    source: DirectoryPageSource,
    mark_missing: bool,
    page: LoadedPage,
    history: Vec<LoadedPage>,
    selected_link: Option<usize>,
    scroll: u16,
    viewport_height: u16,
    status: Option<String>,
}

impl App {
    fn new(source: DirectoryPageSource, mark_missing: bool, slug: &str) -> Result<Self> {
        let page = load_page(&source, slug, mark_missing)?;
        Ok(Self {
            source,
            mark_missing,
            page,
            history: Vec::new(),
            selected_link: None,
            scroll: 0,
            viewport_height: 0,
            status: None,
        })
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn next_link(&mut self) {
        let links = page_view(&self.page.output, None).links;
        if links.is_empty() {
            self.selected_link = None;
            return;
        }
        let i = match self.selected_link {
            Some(i) => (i + 1) % links.len(),
            None => 0,
        };
        self.selected_link = Some(i);

        // Keep the selected link on screen
        let line = u16::try_from(links[i].line).unwrap_or(u16::MAX);
        if line < self.scroll || line >= self.scroll.saturating_add(self.viewport_height) {
            self.scroll = line;
        }
    }

    fn follow_selected_link(&mut self) {
        let Some(i) = self.selected_link else {
            return;
        };
        let links = page_view(&self.page.output, None).links;
        let Some(target) = links.get(i) else {
            return;
        };
        if !WikiWord::is_wiki_word(&target.slug) {
            self.status = Some(format!("Not a page name: {}", target.slug));
            return;
        }

        match load_page(&self.source, &target.slug, self.mark_missing) {
            Ok(page) => {
                log::debug!("following link to {}", page.slug);
                let previous = std::mem::replace(&mut self.page, page);
                self.history.push(previous);
                self.selected_link = None;
                self.scroll = 0;
                self.status = None;
            }
            Err(e) => {
                log::warn!("could not open {}: {e}", target.slug);
                self.status = Some(format!("Could not open {}: {e}", target.slug));
            }
        }
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.page = previous;
            self.selected_link = None;
            self.scroll = 0;
            self.status = None;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "wardwiki-cli".to_string());

    let args = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&program));
            process::exit(1);
        }
    };

    let location = resolve_pages_dir(args.pages_dir, &program);
    let mark_missing = location.mark_missing;
    let source = match DirectoryPageSource::new(&location.dir) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "Error: Pages path '{}' is invalid: {e}",
                location.dir.display()
            );
            process::exit(1);
        }
    };

    if location.first_run {
        let config_path = Config::config_path();
        match remember_pages_dir(&config_path, source.root()) {
            Ok(()) => log::info!("saved pages path to {}", config_path.display()),
            Err(e) => log::warn!("could not save config to {}: {e}", config_path.display()),
        }
    }

    match args.mode {
        Mode::Html => {
            let page = load_page(&source, &args.slug, mark_missing)?;
            println!("{}", page.output.to_html());
            return Ok(());
        }
        Mode::Outline => {
            let page = source.fetch(&args.slug)?;
            print!("{}", parse(&page.text).outline());
            return Ok(());
        }
        Mode::View => {}
    }

    // Load before touching the terminal so errors print normally
    let mut app = App::new(source, mark_missing, &args.slug)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Tab => app.next_link(),
                KeyCode::Enter => app.follow_selected_link(),
                KeyCode::Backspace => app.go_back(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Header
    let mut header = vec![Span::styled(
        page_title(&app.page.slug),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !app.page.date.is_empty() {
        header.push(Span::styled(
            format!("  {}", app.page.date),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let header = Paragraph::new(Line::from(header)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Content panel
    let view = page_view(&app.page.output, app.selected_link);
    app.viewport_height = chunks[1].height.saturating_sub(2);
    let content_text = if view.lines.is_empty() {
        vec![Line::from("This page is empty")]
    } else {
        view.lines
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(app.page.slug.as_str()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[1]);

    // Instructions, or the last error
    let footer = match &app.status {
        Some(status) => Line::styled(status.clone(), Style::default().fg(Color::Red)),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Scroll | "),
            Span::raw("Tab: Next link | Enter: Follow | Backspace: Back"),
        ]),
    };
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["WardWiki"], Mode::View, None, "WardWiki")]
    #[case(&["--html", "WardWiki"], Mode::Html, None, "WardWiki")]
    #[case(&["pages", "WardWiki"], Mode::View, Some("pages"), "WardWiki")]
    #[case(&["--outline", "pages", "WardWiki"], Mode::Outline, Some("pages"), "WardWiki")]
    #[case(&["pages", "--html", "WardWiki"], Mode::Html, Some("pages"), "WardWiki")]
    fn parses_valid_args(
        #[case] args: &[&str],
        #[case] mode: Mode,
        #[case] pages_dir: Option<&str>,
        #[case] slug: &str,
    ) {
        assert_eq!(
            parse_args(&strings(args)),
            Ok(Args {
                mode,
                pages_dir: pages_dir.map(PathBuf::from),
                slug: slug.to_string(),
            })
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&["--html"])]
    #[case(&["a", "b", "c"])]
    #[case(&["--verbose", "WardWiki"])]
    fn rejects_invalid_args(#[case] args: &[&str]) {
        assert!(parse_args(&strings(args)).is_err());
    }

    fn pages_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("HomePage.json"),
            r#"{"text": "go to NextPage or GonePage", "date": "2014-01-01"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("NextPage.txt"), "arrived").unwrap();
        dir
    }

    fn app(dir: &TempDir, mark_missing: bool) -> App {
        let source = DirectoryPageSource::new(dir.path()).unwrap();
        App::new(source, mark_missing, "HomePage").unwrap()
    }

    #[test]
    fn load_page_marks_missing_links_when_asked() {
        let dir = pages_dir();
        let source = DirectoryPageSource::new(dir.path()).unwrap();

        let marked = load_page(&source, "HomePage", true).unwrap();
        assert!(marked.output.to_html().contains(r#"class="missing">GonePage"#));

        let plain = load_page(&source, "HomePage", false).unwrap();
        assert!(!plain.output.to_html().contains("missing"));
    }

    #[test]
    fn tab_cycles_through_links() {
        let dir = pages_dir();
        let mut app = app(&dir, false);

        assert_eq!(app.selected_link, None);
        app.next_link();
        assert_eq!(app.selected_link, Some(0));
        app.next_link();
        assert_eq!(app.selected_link, Some(1));
        app.next_link();
        assert_eq!(app.selected_link, Some(0));
    }

    #[test]
    fn follow_and_go_back() {
        let dir = pages_dir();
        let mut app = app(&dir, false);

        app.next_link();
        app.follow_selected_link();
        assert_eq!(app.page.slug, "NextPage");
        assert_eq!(app.page.output.plain_text(), "arrived");
        assert_eq!(app.history.len(), 1);

        app.go_back();
        assert_eq!(app.page.slug, "HomePage");
        assert_eq!(app.page.date, "2014-01-01");
        assert!(app.history.is_empty());
    }

    #[test]
    fn following_a_missing_page_keeps_the_current_one() {
        let dir = pages_dir();
        let mut app = app(&dir, false);

        app.next_link();
        app.next_link();
        app.follow_selected_link();

        assert_eq!(app.page.slug, "HomePage");
        assert!(app.status.as_deref().unwrap().contains("GonePage"));
    }

    #[test]
    fn first_run_remembers_the_pages_dir() {
        let dir = pages_dir();
        let config_dir = TempDir::new().unwrap();
        let config_path = config_dir.path().join("wardwiki").join("config.toml");

        remember_pages_dir(&config_path, dir.path()).unwrap();

        let config = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(config.pages_path, fs::canonicalize(dir.path()).unwrap());
        assert!(!config.mark_missing_links);
    }

    #[test]
    fn missing_pages_dir_is_not_remembered() {
        let config_dir = TempDir::new().unwrap();
        let config_path = config_dir.path().join("config.toml");

        let result = remember_pages_dir(&config_path, &config_dir.path().join("absent"));

        assert!(result.is_err());
        assert!(!config_path.exists());
    }

    #[test]
    fn scroll_stops_at_top() {
        let dir = pages_dir();
        let mut app = app(&dir, false);

        app.scroll_up();
        assert_eq!(app.scroll, 0);
        app.scroll_down();
        app.scroll_down();
        app.scroll_up();
        assert_eq!(app.scroll, 1);
    }
}
