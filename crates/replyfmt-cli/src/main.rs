use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as PanelBlock, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use replyfmt_config::Config;
use replyfmt_engine::{Block, ReplyFile, Segment, format_reply, io};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    replies_path: PathBuf,
    reply_files: Vec<ReplyFile>,
    list_state: ListState,
    current_blocks: Vec<Block>,
}

impl App {
    fn new(replies_path: PathBuf) -> Result<Self> {
        let reply_files = io::scan_reply_files(&replies_path)?;

        let mut app = Self {
            replies_path,
            reply_files,
            list_state: ListState::default(),
            current_blocks: Vec::new(),
        };

        // Select first reply if available
        if !app.reply_files.is_empty() {
            app.list_state.select(Some(0));
            app.update_blocks_for_selection();
        }

        Ok(app)
    }

    fn next_reply(&mut self) {
        if self.reply_files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.reply_files.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_blocks_for_selection();
    }

    fn previous_reply(&mut self) {
        if self.reply_files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.reply_files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_blocks_for_selection();
    }

    fn rescan(&mut self) {
        if let Ok(files) = io::scan_reply_files(&self.replies_path) {
            self.reply_files = files;
            let selected = match self.list_state.selected() {
                Some(i) if i < self.reply_files.len() => Some(i),
                _ if self.reply_files.is_empty() => None,
                _ => Some(0),
            };
            self.list_state.select(selected);
            self.update_blocks_for_selection();
        }
    }

    fn update_blocks_for_selection(&mut self) {
        let Some(file) = self
            .list_state
            .selected()
            .and_then(|i| self.reply_files.get(i))
        else {
            self.current_blocks = Vec::new();
            return;
        };

        self.current_blocks = match io::read_reply(file.relative_path(), &self.replies_path) {
            Ok(raw) => format_reply(&raw),
            Err(e) => vec![Block::PlainText {
                text: format!("Error reading reply: {e}"),
            }],
        };
    }
}

/// Maps each display block onto a styled terminal line.
fn render_blocks(blocks: &[Block]) -> Vec<Line<'static>> {
    blocks
        .iter()
        .map(|block| match block {
            Block::Blank => Line::default(),
            Block::MainHeader { text } => Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Block::SubHeader { text } => Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Block::BoldHeader { text } => Line::from(Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Block::Text { segments } => Line::from(
                segments
                    .iter()
                    .map(|segment| match segment {
                        Segment::Plain(text) => Span::raw(text.clone()),
                        Segment::Emphasized(text) => Span::styled(
                            text.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    })
                    .collect::<Vec<_>>(),
            ),
            Block::Bullet { text } => Line::from(format!("• {text}")),
            Block::NumberedItem { text } => Line::from(text.clone()),
            Block::TableRow { cells } => Line::from(cells.join("  │  ")),
            Block::Divider => Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray),
            )),
            Block::PlainText { text } => Line::from(text.clone()),
        })
        .collect()
}

fn main() -> Result<()> {
    // Determine replies path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let replies_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        replies_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                replies_path = config.replies_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No replies path provided and no config file found");
                eprintln!("Usage: {} <replies-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <replies-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [replies-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate replies directory using engine
    if let Err(e) = io::validate_replies_dir(&replies_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Replies path '{}'{} is invalid: {e}",
            replies_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(replies_path)?;

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_reply(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_reply(),
                KeyCode::Char('r') => app.rescan(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Reply list panel
    let reply_items: Vec<ListItem> = app
        .reply_files
        .iter()
        .map(|file| ListItem::new(Line::from(file.display_name().to_string())))
        .collect();

    let replies_list = List::new(reply_items)
        .block(PanelBlock::default().borders(Borders::ALL).title("Replies"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(replies_list, chunks[0], &mut app.list_state);

    // Formatted reply panel
    let content_lines = if app.current_blocks.is_empty() {
        vec![Line::from("Select a reply to view it")]
    } else {
        render_blocks(&app.current_blocks)
    };

    let content = Paragraph::new(content_lines)
        .block(PanelBlock::default().borders(Borders::ALL).title("Reply"))
        .wrap(Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Previous | ↓/j: Next | r: Rescan",
    ));

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
