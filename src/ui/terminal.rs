use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, EditMode, Editor};
use std::borrow::Cow;
use std::io::Write;
use std::sync::Arc;

use crate::core::theme::Theme;
use crate::core::{DeferredAction, FolioResult, Navigator, Redraw, Session};
use crate::ui::render;

/// Completes command names, then theme names after `themes set` and targets
/// after `open`.
pub struct FolioCompleter {
    commands: Vec<String>,
    themes: Vec<String>,
    targets: Vec<String>,
}

impl FolioCompleter {
    fn new(session: &Session) -> Self {
        Self {
            commands: session.registry().names().map(String::from).collect(),
            themes: Theme::all().iter().map(|t| t.name.to_string()).collect(),
            targets: session
                .profile()
                .targets
                .iter()
                .map(|t| t.name.clone())
                .collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let word = head.split(char::is_whitespace).last().unwrap_or("");
        let start = pos - word.len();
        let before: Vec<&str> = head[..start].split_whitespace().collect();

        let set = ["set".to_string()];
        let pool: &[String] = match before.as_slice() {
            [] => &self.commands,
            ["open"] => &self.targets,
            ["themes"] => &set,
            ["themes", "set"] => &self.themes,
            _ => return (pos, Vec::new()),
        };
        let matches = pool
            .iter()
            .filter(|c| c.starts_with(word))
            .cloned()
            .collect();
        (start, matches)
    }
}

impl Completer for FolioCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>)
        -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|m| Pair {
                display: m.clone(),
                replacement: m,
            })
            .collect();
        Ok((start, pairs))
    }
}

pub struct FolioHelper {
    completer: FolioCompleter,
    hinter: HistoryHinter,
}

impl rustyline::Helper for FolioHelper {}

impl Completer for FolioHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>)
        -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Validator for FolioHelper {}

impl Highlighter for FolioHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Hinter for FolioHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

pub struct FolioTerminal {
    editor: Editor<FolioHelper, DefaultHistory>,
    session: Session,
    navigator: Option<Arc<dyn Navigator>>,
}

impl FolioTerminal {
    pub fn new(session: Session, navigator: Option<Arc<dyn Navigator>>) -> FolioResult<Self> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(FolioHelper {
            completer: FolioCompleter::new(&session),
            hinter: HistoryHinter {},
        }));
        Ok(Self {
            editor,
            session,
            navigator,
        })
    }

    fn paint(&self) {
        let theme = self.session.theme();
        print!("{}", render::background(theme));
        print!(
            "{}",
            render::scrollback(self.session.scrollback(), &self.session.prompt(), theme)
        );
        std::io::stdout().flush().unwrap_or_default();
    }

    fn repaint(&mut self) {
        self.editor.clear_screen().unwrap_or_default();
        self.paint();
    }

    pub async fn run(&mut self) -> FolioResult<()> {
        self.paint();

        let result = loop {
            match self.process_input() {
                Ok(true) => break Ok(()),
                Ok(false) => continue,
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C pressed. Use 'exit' or 'quit' to leave.".yellow());
                }
                Err(ReadlineError::Eof) => break Ok(()),
                Err(err) => break Err(err.into()),
            }
        };

        print!("{}", render::reset_background());
        println!("{}", "Goodbye!".green());
        result
    }

    /// Reads and handles one line. Returns `true` when the visitor asked to leave.
    fn process_input(&mut self) -> Result<bool, ReadlineError> {
        let prompt = render::prompt(&self.session.prompt(), self.session.theme());
        let line = tokio::task::block_in_place(|| self.editor.readline(&prompt))?;
        let input = line.trim();
        if !input.is_empty() {
            self.editor.add_history_entry(input)?;
        }
        if input == "exit" || input == "quit" {
            return Ok(true);
        }

        self.session.set_input(line.as_str());
        log::debug!("submitting {:?}", self.session.input());
        let outcome = self.session.submit_input();
        match outcome.redraw {
            Redraw::Append => {
                if let Some(entry) = self.session.scrollback().last() {
                    print!("{}", render::output(entry, self.session.theme()));
                }
                std::io::stdout().flush().unwrap_or_default();
            }
            Redraw::Full => self.repaint(),
        }

        if let Some(action) = outcome.deferred {
            self.spawn_deferred(action);
        }
        Ok(false)
    }

    /// Fire and forget: the REPL never waits on these.
    fn spawn_deferred(&self, action: DeferredAction) {
        let DeferredAction::OpenUrl { url, delay } = action;
        let Some(navigator) = self.navigator.clone() else {
            log::warn!("no URL handler available, cannot open {}", url);
            return;
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = navigator.navigate(&url).await {
                log::warn!("{}", e);
            }
        });
    }
}
