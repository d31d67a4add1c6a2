extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{open_stream, write_wav, Event, Runtime, SharedVoices, VoicePool};
use crate::mach::{MAX_VOICES, SAMPLE_RATE};
use ansi_term::Style;
use chrono::Local;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

const HISTORY_FILE: &str = "history.txt";

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let voices: SharedVoices = Arc::new(Mutex::new(VoicePool::new()));
    let stream = match open_stream(voices.clone()) {
        Ok(stream) => Some(stream),
        Err(error) => {
            eprintln!("audio disabled: {}", error);
            None
        }
    };

    let interface = Interface::new("klang")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);
    load_history(&interface);

    interface.write_fmt(format_args!(
        "klang {}\nexit | \\t print | \\p[s] play | \\s[s] save | \\l load | \\w wait | \\v view | \\x voices | \\q stop\n",
        env!("CARGO_PKG_VERSION")
    ))?;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            voices.lock().unwrap().stop_all();
            interrupted.store(false, Ordering::SeqCst);
        }
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                voices.lock().unwrap().stop_all();
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if line.trim() == "exit" {
            break;
        }
        if !line.trim().is_empty() {
            interface.add_history_unique(line.clone());
        }
        handle_line(&interface, &mut runtime, &voices, &line)?;
    }

    save_history(&interface);
    voices.lock().unwrap().stop_all();
    drop(stream);
    Ok(())
}

fn handle_line<T: Terminal>(
    interface: &Interface<T>,
    runtime: &mut Runtime,
    voices: &SharedVoices,
    line: &str,
) -> std::io::Result<()> {
    for event in runtime.enter(line) {
        match event {
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
            Event::Play {
                name,
                value,
                stereo,
            } => {
                if value.samples().is_none() {
                    interface.write_fmt(format_args!("{} is not a flat array\n", name))?;
                    continue;
                }
                match voices.lock().unwrap().start(value, stereo) {
                    Some(slot) => interface.write_fmt(format_args!(
                        "playing {} in slot {} ({})\n",
                        name,
                        slot,
                        if stereo { "stereo" } else { "mono" }
                    ))?,
                    None => interface.write_fmt(format_args!(
                        "no free voice slots (max {})\n",
                        MAX_VOICES
                    ))?,
                }
            }
            Event::Save {
                name,
                value,
                stereo,
            } => {
                let samples = match value.samples() {
                    Some(samples) => samples,
                    None => {
                        interface.write_fmt(format_args!("{} is not a flat array\n", name))?;
                        continue;
                    }
                };
                let channels = if stereo { 2 } else { 1 };
                let frames = samples.len() / channels as usize;
                let filename = format!("{}-{}.wav", name, Local::now().format("%Y%m%d-%H%M%S"));
                match write_wav(Path::new(&filename), samples, channels, SAMPLE_RATE) {
                    Ok(_) => interface.write_fmt(format_args!(
                        "wrote {} to {} ({}, {} frames)\n",
                        name,
                        filename,
                        if stereo { "stereo" } else { "mono" },
                        frames
                    ))?,
                    Err(error) => interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(format!("write failed: {}", error))
                    ))?,
                }
            }
            Event::Load(path) => match load(interface, runtime, voices, &path) {
                Ok(_) => {}
                Err(error) => interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("{}: {}", path, error))
                ))?,
            },
            Event::Wait(ms) => {
                std::thread::sleep(std::time::Duration::from_millis(ms));
            }
            Event::Silence => {
                voices.lock().unwrap().stop_all();
                interface.write_fmt(format_args!("stopped all voices\n"))?;
            }
            Event::Status => {
                let status = voices.lock().unwrap().status();
                interface.write_fmt(format_args!("active voices:\n"))?;
                for (slot, stereo, idx, len) in status {
                    let pct = idx * 100 / len.max(1);
                    interface.write_fmt(format_args!(
                        "  [{}] {} {}/{} ({}%)\n",
                        slot,
                        if stereo { "stereo" } else { "mono" },
                        idx,
                        len,
                        pct
                    ))?;
                }
            }
        }
    }
    Ok(())
}

/// Evaluates every line of a script file as if it had been typed.
fn load<T: Terminal>(
    interface: &Interface<T>,
    runtime: &mut Runtime,
    voices: &SharedVoices,
    filename: &str,
) -> std::io::Result<()> {
    let reader = BufReader::new(File::open(filename)?);
    for line in reader.lines() {
        handle_line(interface, runtime, voices, &line?)?;
    }
    Ok(())
}

fn load_history<T: Terminal>(interface: &Interface<T>) {
    if let Ok(file) = File::open(HISTORY_FILE) {
        for line in BufReader::new(file).lines().flatten() {
            if !line.is_empty() {
                interface.add_history(line);
            }
        }
    }
}

fn save_history<T: Terminal>(interface: &Interface<T>) {
    if let Ok(mut file) = File::create(HISTORY_FILE) {
        if let Ok(writer) = interface.lock_writer_append() {
            for line in writer.history() {
                let _ = writeln!(file, "{}", line);
            }
        }
    }
}
