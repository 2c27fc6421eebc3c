// Copyright (C) 2020-2026 Andy Kurnia.

// file names complete (for lex, load, source), history gives hints.
#[derive(
    rustyline_derive::Helper,
    rustyline_derive::Completer,
    rustyline_derive::Hinter,
    rustyline_derive::Highlighter,
    rustyline_derive::Validator,
)]
pub struct ShellHelper {
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

pub type ShellEditor = rustyline::Editor<ShellHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<ShellEditor> {
    let mut rl = ShellEditor::new()?;
    rl.set_helper(Some(ShellHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}
