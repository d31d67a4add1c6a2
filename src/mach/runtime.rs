use super::{view, Env, Eval, K};
use crate::lang::{Cursor, Error};

/// What the terminal should do next. The runtime never touches a device
/// or the filesystem itself; playback, file loading, WAV writing and
/// sleeping are all carried out by whoever drains these.
pub enum Event {
    Print(String),
    Errors(Vec<Error>),
    Play { name: char, value: K, stereo: bool },
    Save { name: char, value: K, stereo: bool },
    Load(String),
    Wait(u64),
    Silence,
    Status,
}

/// ## Session runtime
///
/// Owns the environment and the auto-print flag, and turns lines of input
/// into events. One instance per session; instances are independent.
#[derive(Default)]
pub struct Runtime {
    env: Env,
    show: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// A fresh reference to a bound global. Tooling and tests read
    /// results through this.
    pub fn global(&self, letter: char) -> Option<K> {
        self.env.get(letter)
    }

    pub fn bind_global(&mut self, letter: char, value: K) {
        self.env.bind(letter, value);
    }

    pub fn clear_globals(&mut self) {
        self.env.clear();
    }

    /// Handles one line of input: a comment, a backslash command, or a
    /// run of expressions. Commands are recognized before comment
    /// stripping so a loaded path may contain slashes.
    pub fn enter(&mut self, line: &str) -> Vec<Event> {
        if let Some(rest) = line.trim_start().strip_prefix('\\') {
            return self.command(rest);
        }
        let line = strip_comment(line);
        if line.trim_start().is_empty() {
            return vec![];
        }
        self.eval_line(line)
    }

    fn eval_line(&mut self, line: &str) -> Vec<Event> {
        let mut events = vec![];
        let mut cursor = Cursor::new(line);
        let mut eval = Eval::new(&mut self.env);
        let outcome = eval.run(&mut cursor);
        let mut errors = eval.take_notes();
        match outcome {
            Ok(result) => {
                if !errors.is_empty() {
                    events.push(Event::Errors(errors));
                }
                if self.show {
                    if let Some(value) = result {
                        events.push(Event::Print(view::preview(&value)));
                    }
                }
            }
            Err(error) => {
                errors.push(error);
                events.push(Event::Errors(errors));
            }
        }
        events
    }

    fn command(&mut self, rest: &str) -> Vec<Event> {
        let mut chars = rest.chars();
        match chars.next() {
            Some('t') => {
                self.show = !self.show;
                vec![]
            }
            Some('p') => self.voice_command(chars.as_str(), false),
            Some('s') => self.voice_command(chars.as_str(), true),
            Some('l') => {
                let path = chars.as_str().trim();
                if path.is_empty() {
                    vec![]
                } else {
                    vec![Event::Load(path.to_string())]
                }
            }
            Some('w') => match chars.as_str().trim().parse::<u64>() {
                Ok(ms) if ms > 0 => vec![Event::Wait(ms)],
                _ => vec![],
            },
            Some('v') => self.view_command(chars.as_str()),
            Some('x') => vec![Event::Status],
            Some('q') => vec![Event::Silence],
            _ => vec![],
        }
    }

    /// `\p X` plays and `\s X` saves; a doubled `s` selects interleaved
    /// stereo, as in `\ps X` and `\ss X`.
    fn voice_command(&self, arg: &str, save: bool) -> Vec<Event> {
        let mut arg = arg.trim_start();
        let mut stereo = false;
        if let Some(rest) = arg.strip_prefix('s') {
            stereo = true;
            arg = rest;
        }
        let name = match arg.trim_start().chars().next() {
            Some(c) if c.is_ascii_uppercase() => c,
            _ => return vec![],
        };
        match self.env.get(name) {
            Some(value) => {
                if save {
                    vec![Event::Save {
                        name,
                        value,
                        stereo,
                    }]
                } else {
                    vec![Event::Play {
                        name,
                        value,
                        stereo,
                    }]
                }
            }
            None => vec![Event::Print(format!("nothing in {}", name))],
        }
    }

    /// `\v` lists every bound global; `\v X` shows one, sparkline
    /// included.
    fn view_command(&self, arg: &str) -> Vec<Event> {
        let arg = arg.trim();
        let mut events = vec![];
        if arg.is_empty() {
            for letter in b'A'..=b'Z' {
                let letter = letter as char;
                if let Some(value) = self.env.get(letter) {
                    events.push(Event::Print(format!("{} {}", letter, view::render(&value))));
                }
            }
        } else if let Some(name) = arg.chars().next() {
            if name.is_ascii_uppercase() {
                if let Some(value) = self.env.get(name) {
                    events.push(Event::Print(format!("{} {}", name, view::render(&value))));
                }
            }
        }
        events
    }
}

/// A line starting with `/` is a comment; otherwise the first `/` at
/// brace depth zero truncates the line.
fn strip_comment(line: &str) -> &str {
    let mut depth = 0i32;
    for (i, c) in line.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            '/' if depth == 0 => return &line[..i],
            _ => {}
        }
    }
    line
}
