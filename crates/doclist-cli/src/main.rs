use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use doclist_config::{Config, ListProperties};
use doclist_engine::models::attributes::{LIST_REVERSED, LIST_START};
use doclist_engine::{
    AttributeValue, Editor, EditorCmd, ListPropertiesOptions, ListReversedCommand,
    ListStartCommand, ListType, Position, Selection, io,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    editor: Editor,
    path: PathBuf,
    config: Config,
    config_path: PathBuf,
    cursor: usize,
    /// Block where a range selection started, if one is being extended
    anchor: Option<usize>,
    list_state: ListState,
    status: String,
}

impl App {
    fn new(editor: Editor, path: PathBuf, config: Config, config_path: PathBuf) -> Self {
        let mut app = Self {
            editor,
            path,
            config,
            config_path,
            cursor: 0,
            anchor: None,
            list_state: ListState::default(),
            status: String::new(),
        };
        app.sync_selection();
        app
    }

    fn block_count(&self) -> usize {
        self.editor.document().len()
    }

    fn move_cursor(&mut self, down: bool, extend: bool) {
        if self.block_count() == 0 {
            return;
        }
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
        self.cursor = if down {
            (self.cursor + 1).min(self.block_count() - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.sync_selection();
    }

    /// Selection covering the blocks between the anchor and the cursor
    fn selection(&self) -> Selection {
        let doc = self.editor.document();

        match self.anchor {
            Some(anchor) if anchor != self.cursor => {
                let (anchor, focus) = if anchor < self.cursor {
                    (Position::new(anchor, 0), self.end_of(self.cursor))
                } else {
                    (self.end_of(anchor), Position::new(self.cursor, 0))
                };
                Selection::range(anchor, focus)
            }
            _ => match doc.block_at(self.cursor) {
                Some(block) if block.is_object() => Selection::Object(self.cursor),
                _ => Selection::caret(self.cursor, 0),
            },
        }
    }

    /// Range end that still selects block `index`
    ///
    /// A range ending at offset 0 leaves that block out, so an empty or object
    /// block is closed off at the start of the block after it.
    fn end_of(&self, index: usize) -> Position {
        let text_len = self
            .editor
            .document()
            .block_at(index)
            .map_or(0, |block| block.text_len());
        if text_len == 0 && index + 1 < self.block_count() {
            Position::new(index + 1, 0)
        } else {
            Position::new(index, text_len)
        }
    }

    fn sync_selection(&mut self) {
        if self.block_count() == 0 {
            self.list_state.select(None);
            return;
        }
        let selection = self.selection();
        if let Err(e) = self.editor.set_selection(selection) {
            log::warn!("Failed to set selection {selection:?}: {e}");
            self.status = format!("Selection error: {e}");
        }
        self.list_state.select(Some(self.cursor));
    }

    fn command_value(&self, name: &str) -> Option<AttributeValue> {
        self.editor
            .command_state(name)
            .filter(|state| state.is_enabled)
            .and_then(|state| state.value)
    }

    fn run(&mut self, cmd: EditorCmd) {
        self.status = match self.editor.execute(cmd) {
            Ok(()) => format!("{} updated", cmd.command_name()),
            Err(e) => e.to_string(),
        };
    }

    fn toggle_reversed(&mut self) {
        let reversed = self
            .command_value(ListReversedCommand::NAME)
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        self.run(EditorCmd::SetListReversed {
            reversed: !reversed,
        });
    }

    fn shift_start(&mut self, delta: i64) {
        let start = self
            .command_value(ListStartCommand::NAME)
            .and_then(|value| value.as_int())
            .unwrap_or(1);
        self.run(EditorCmd::SetListStart {
            start_index: start + delta,
        });
    }

    fn undo(&mut self) {
        self.status = if self.editor.undo() {
            "Undone".to_string()
        } else {
            "Nothing to undo".to_string()
        };
    }

    fn redo(&mut self) {
        self.status = if self.editor.redo() {
            "Redone".to_string()
        } else {
            "Nothing to redo".to_string()
        };
    }

    fn export_html(&mut self) {
        let target = self.path.with_extension("html");
        self.status = match io::write_html(&target, self.editor.document()) {
            Ok(()) => {
                log::info!("Exported HTML to {}", target.display());
                format!("Wrote {}", target.display())
            }
            Err(e) => format!("Export failed: {e}"),
        };
    }

    /// Store the open document as the default `document_path`
    fn remember_document(&mut self) {
        let path = self.path.canonicalize().unwrap_or_else(|_| self.path.clone());
        self.config.document_path = Some(path);
        self.status = match self.config.save_to_path(&self.config_path) {
            Ok(()) => {
                log::info!("Saved config to {}", self.config_path.display());
                format!("Default document saved to {}", self.config_path.display())
            }
            Err(e) => format!("Saving config failed: {e}"),
        };
    }

    fn render_blocks(&self) -> Vec<ListItem<'static>> {
        self.editor
            .document()
            .blocks()
            .iter()
            .map(|block| {
                let indent = "  ".repeat(usize::try_from(block.list_indent().unwrap_or(0)).unwrap_or(0));
                let marker = match block.list_type() {
                    Some(ListType::Numbered) => "1. ",
                    Some(ListType::Bulleted) => "• ",
                    None => "",
                };
                let text = if block.is_object() {
                    "[object]".to_string()
                } else {
                    block.text().to_string()
                };

                let mut spans = vec![Span::raw(format!("{indent}{marker}{text}"))];
                let dim = Style::default().fg(Color::DarkGray);
                if block.attribute(LIST_REVERSED) == Some(&AttributeValue::Bool(true)) {
                    spans.push(Span::styled(" [reversed]", dim));
                }
                if let Some(start) = block.attribute(LIST_START).and_then(AttributeValue::as_int)
                    && start != 1
                {
                    spans.push(Span::styled(format!(" [start {start}]"), dim));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    }

    fn command_summary(&self) -> String {
        let describe = |name: &str| match self.editor.command_state(name) {
            None => format!("{name}: off"),
            Some(state) if !state.is_enabled => format!("{name}: disabled"),
            Some(state) => match state.value {
                Some(value) => format!("{name}: {value}"),
                None => format!("{name}: -"),
            },
        };
        format!(
            "{} | {}",
            describe(ListReversedCommand::NAME),
            describe(ListStartCommand::NAME)
        )
    }
}

fn list_options(properties: ListProperties) -> ListPropertiesOptions {
    ListPropertiesOptions {
        reversed: properties.reversed,
        start_index: properties.start_index,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let path = match (args.len(), config.document_path.clone()) {
        (2, _) => PathBuf::from(&args[1]),
        (1, Some(path)) => path,
        (1, None) => {
            eprintln!("Error: No document provided and no document_path configured");
            eprintln!("Usage: {} <markdown-file>", args[0]);
            eprintln!("Or set document_path in {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [markdown-file]", args[0]);
            process::exit(1);
        }
    };

    let document = match io::read_document(&path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: Cannot open '{}': {e}", path.display());
            process::exit(1);
        }
    };
    let editor = Editor::new(document, list_options(config.list_properties));
    let mut app = App::new(editor, path, config, config_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true, false),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false, false),
                KeyCode::Char('J') => app.move_cursor(true, true),
                KeyCode::Char('K') => app.move_cursor(false, true),
                KeyCode::Char('r') => app.toggle_reversed(),
                KeyCode::Char('+') => app.shift_start(1),
                KeyCode::Char('-') => app.shift_start(-1),
                KeyCode::Char('u') => app.undo(),
                KeyCode::Char('U') => app.redo(),
                KeyCode::Char('e') => app.export_html(),
                KeyCode::Char('s') => app.remember_document(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    let title = format!("{}", app.path.display());
    let blocks = List::new(app.render_blocks())
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(blocks, chunks[0], &mut app.list_state);

    let status = Paragraph::new(vec![
        Line::from(app.command_summary()),
        Line::from(Span::styled(
            app.status.clone(),
            Style::default().fg(Color::Cyan),
        )),
    ])
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | j/k: Move | J/K: Extend | "),
        Span::raw("r: Reversed | +/-: Start | u/U: Undo/Redo | e: Export HTML | s: Set default"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}
