use regform_core::{Field, FormState, SectionKind, Toggle, payload_schema};
use thiserror::Error;

const HELP_TEXT: &str = "\
Commands:
  set <field> <text>              set a scalar field (fullname, username, email,
                                  password, confirmPassword)
  toggle <flag> on|off            flip a checkbox (designation, working)
  add <section>                   append an empty entry (education, company)
  edit <section> <index> <text>   rewrite the entry at a display position
  remove <section> <index>        delete the entry at a display position
  show                            print the current form
  errors                          print the current validation errors
  schema                          print the accepted-payload JSON schema
  submit                          validate and, on success, finalize
  reset                           restore the initial empty form
  help                            this text
  quit                            leave the shell";

/// Failure to understand a command line. The form is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for the command list")]
    UnknownCommand(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    #[error("expected 'on' or 'off', got '{0}'")]
    BadSwitch(String),
    #[error("'{0}' is not a row index")]
    BadIndex(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Toggle(Toggle, bool),
    Add(SectionKind),
    Edit(SectionKind, usize, String),
    Remove(SectionKind, usize),
    Show,
    Errors,
    Schema,
    Submit,
    Reset,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (line, ""),
        };

        match head {
            "set" => {
                let (field, text) = rest
                    .split_once(char::is_whitespace)
                    .map(|(field, text)| (field, text.trim_start()))
                    .ok_or(CommandError::Usage("set <field> <text>"))?;
                let field = Field::from_key(field)
                    .ok_or_else(|| CommandError::UnknownField(field.to_string()))?;
                Ok(Command::Set(field, text.to_string()))
            }
            "toggle" => {
                let (flag, switch) = rest
                    .split_once(char::is_whitespace)
                    .map(|(flag, switch)| (flag, switch.trim()))
                    .ok_or(CommandError::Usage("toggle <flag> on|off"))?;
                let toggle = Toggle::from_key(flag)
                    .ok_or_else(|| CommandError::UnknownFlag(flag.to_string()))?;
                let on = match switch {
                    "on" => true,
                    "off" => false,
                    other => return Err(CommandError::BadSwitch(other.to_string())),
                };
                Ok(Command::Toggle(toggle, on))
            }
            "add" => {
                let kind = parse_section(rest.trim())?;
                Ok(Command::Add(kind))
            }
            "edit" => {
                let (kind, rest) = rest
                    .split_once(char::is_whitespace)
                    .map(|(kind, rest)| (kind, rest.trim_start()))
                    .ok_or(CommandError::Usage("edit <section> <index> <text>"))?;
                let (index, text) = match rest.split_once(char::is_whitespace) {
                    Some((index, text)) => (index, text.trim_start()),
                    None => (rest, ""),
                };
                Ok(Command::Edit(
                    parse_section(kind)?,
                    parse_index(index)?,
                    text.to_string(),
                ))
            }
            "remove" => {
                let (kind, index) = rest
                    .split_once(char::is_whitespace)
                    .map(|(kind, index)| (kind, index.trim()))
                    .ok_or(CommandError::Usage("remove <section> <index>"))?;
                Ok(Command::Remove(parse_section(kind)?, parse_index(index)?))
            }
            "show" => Ok(Command::Show),
            "errors" => Ok(Command::Errors),
            "schema" => Ok(Command::Schema),
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_section(token: &str) -> Result<SectionKind, CommandError> {
    if token.is_empty() {
        return Err(CommandError::Usage("<education|company> expected"));
    }
    SectionKind::from_key(token).ok_or_else(|| CommandError::UnknownSection(token.to_string()))
}

fn parse_index(token: &str) -> Result<usize, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::BadIndex(token.to_string()))
}

/// Owns the form state and renders command feedback.
pub struct Shell {
    state: FormState,
    verbose: bool,
    json: bool,
}

impl Shell {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            state: FormState::new(),
            verbose,
            json,
        }
    }

    /// Handles one input line; returns false once the shell should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }
        match Command::parse(line) {
            Ok(command) => self.apply(command),
            Err(error) => {
                eprintln!("{error}");
                true
            }
        }
    }

    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Set(field, text) => {
                self.state.set_field(field, text);
                println!("{} updated", field.label());
                self.echo_state();
            }
            Command::Toggle(toggle, on) => {
                if self.state.set_toggle(toggle, on) {
                    let switch = if on { "on" } else { "off" };
                    println!("{} is now {switch}", toggle.key());
                } else {
                    println!(
                        "'{}' is disabled while '{}' is set",
                        toggle.key(),
                        toggle.opposite().key()
                    );
                }
                self.echo_state();
            }
            Command::Add(kind) => {
                self.state.append_row(kind);
                let index = self.state.value().section(kind).len() - 1;
                println!("added {} entry #{index}", kind.key());
                self.echo_state();
            }
            Command::Edit(kind, index, text) => {
                let known = index < self.state.value().section(kind).len();
                self.state.update_row(kind, index, text);
                if known {
                    println!("{} entry #{index} updated", kind.key());
                } else {
                    println!("no {} entry #{index}; nothing changed", kind.key());
                }
                self.echo_state();
            }
            Command::Remove(kind, index) => {
                let known = index < self.state.value().section(kind).len();
                self.state.remove_row(kind, index);
                if known {
                    println!("removed {} entry #{index}", kind.key());
                } else {
                    println!("no {} entry #{index}; nothing changed", kind.key());
                }
                self.echo_state();
            }
            Command::Show => self.print_form(),
            Command::Errors => self.print_errors(),
            Command::Schema => match serde_json::to_string_pretty(&payload_schema()) {
                Ok(pretty) => println!("{pretty}"),
                Err(error) => eprintln!("failed to render schema: {error}"),
            },
            Command::Submit => self.submit(),
            Command::Reset => {
                self.state.reset();
                println!("form reset");
            }
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => return false,
        }
        true
    }

    fn submit(&mut self) {
        match self.state.submit() {
            Ok(payload) => {
                println!("Submit Successfully");
                if self.json {
                    match serde_json::to_string_pretty(&payload) {
                        Ok(pretty) => println!("{pretty}"),
                        Err(error) => eprintln!("failed to render payload: {error}"),
                    }
                }
            }
            Err(result) => {
                println!("{} issue(s) remaining", result.error_count());
                for (path, messages) in result.iter() {
                    for message in messages {
                        println!("  {path}: {message}");
                    }
                }
            }
        }
    }

    fn echo_state(&self) {
        if self.verbose {
            self.print_form();
        }
    }

    fn print_form(&self) {
        let value = self.state.value();
        for field in Field::ALL {
            let mut line = format!("{}: {}", field.label(), value.scalar(field));
            if let Some(message) = self.state.validation().first_message(field.key()) {
                line.push_str(&format!("  !! {message}"));
            }
            println!("{line}");
        }

        for toggle in [Toggle::Designation, Toggle::Working] {
            let mark = if value.toggle(toggle) { "x" } else { " " };
            let mut line = format!("[{mark}] {}", toggle.label());
            if self.state.toggle_locked(toggle) {
                line.push_str(" [disabled]");
            }
            println!("{line}");
        }

        for kind in SectionKind::ALL {
            if !self.state.section_visible(kind) {
                continue;
            }
            println!("{}:", kind.label());
            let section = value.section(kind);
            if section.is_empty() {
                println!("  (no entries)");
            }
            for (index, (_, entry)) in section.iter().enumerate() {
                let shown = if entry.name.is_empty() {
                    "<empty>"
                } else {
                    entry.name.as_str()
                };
                let mut line = format!("  {index}. {shown}");
                if let Some(message) = self
                    .state
                    .validation()
                    .first_message(&kind.entry_path(index))
                {
                    line.push_str(&format!("  !! {message}"));
                }
                println!("{line}");
            }
        }

        println!("status: {}", self.state.status().as_str());
    }

    fn print_errors(&self) {
        let result = self.state.validation();
        if result.is_empty() {
            println!("no validation errors");
            return;
        }
        for (path, messages) in result.iter() {
            for message in messages {
                println!("{path}: {message}");
            }
        }
    }
}
