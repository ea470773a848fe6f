extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{HostTable, Listing, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const VAR_COUNT: usize = 10;

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
    let command = Interface::new("VEE")?;
    command.set_prompt("] ")?;
    command.write_fmt(format_args!("VEE\nREADY.\n"))?;
    let mut listing = Listing::default();
    let mut runtime = Runtime::new(VAR_COUNT, Box::new(demo_host()));
    loop {
        if interrupted.load(Ordering::SeqCst) {
            interrupted.store(false, Ordering::SeqCst);
            command.write_fmt(format_args!("BREAK\n"))?;
        }
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match enter(&mut listing, &mut runtime, &command, &string)? {
            Entered::Line => command.add_history_unique(string),
            Entered::Command => {}
            Entered::Exit => break,
        }
    }
    Ok(())
}

enum Entered {
    Line,
    Command,
    Exit,
}

fn enter(
    listing: &mut Listing,
    runtime: &mut Runtime,
    command: &Interface<linefeed::DefaultTerminal>,
    string: &str,
) -> std::io::Result<Entered> {
    let mut split = string.trim().splitn(2, ' ');
    let word = split.next().unwrap_or("").to_ascii_uppercase();
    let rest = split.next().unwrap_or("").trim();
    match word.as_str() {
        "" => Ok(Entered::Command),
        "RUN" => {
            runtime.run(listing.lines());
            Ok(Entered::Command)
        }
        "LIST" => {
            for line in listing.source() {
                command.write_fmt(format_args!("{}\n", line))?;
            }
            Ok(Entered::Command)
        }
        "NEW" => {
            listing.clear();
            runtime.clear();
            Ok(Entered::Command)
        }
        "VARS" => {
            for index in 0..runtime.var_count() {
                command.write_fmt(format_args!("V{} = {}\n", index, runtime.var(index)))?;
            }
            Ok(Entered::Command)
        }
        "LOAD" => {
            match load(rest.trim_matches('"')) {
                Ok(loaded) => {
                    *listing = loaded;
                    runtime.clear();
                }
                Err(error) => report(command, &error)?,
            }
            Ok(Entered::Command)
        }
        "SAVE" => {
            if let Err(error) = save(listing, rest.trim_matches('"')) {
                report(command, &error)?;
            }
            Ok(Entered::Command)
        }
        "EXIT" | "QUIT" => Ok(Entered::Exit),
        _ => {
            match listing.load_str(string) {
                Ok(()) => Ok(Entered::Line),
                Err(error) => {
                    report(command, &error)?;
                    Ok(Entered::Command)
                }
            }
        }
    }
}

fn report(command: &Interface<linefeed::DefaultTerminal>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// Stand-in for the sketch host: the reserved constants plus a few
/// callables. Side-effecting calls return `None` and contribute 0.
fn demo_host() -> HostTable {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    HostTable::new()
        .constant("PI", PI)
        .constant("HALF_PI", FRAC_PI_2)
        .constant("QUATER_PI", FRAC_PI_4)
        .constant("QUARTER_PI", FRAC_PI_4)
        .constant("TAU", 2.0 * PI)
        .constant("TWO_PI", 2.0 * PI)
        .constant("width", 480.0)
        .constant("height", 480.0)
        .constant("mouseButton", 0.0)
        .constant("mouseIsPressed", 0.0)
        .bind("sin", |args| Some(args.get(0).copied().unwrap_or(0.0).sin()))
        .bind("cos", |args| Some(args.get(0).copied().unwrap_or(0.0).cos()))
        .bind("sqrt", |args| {
            Some(args.get(0).copied().unwrap_or(0.0).sqrt())
        })
        .bind("print", |args| {
            let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
            println!("{}", rendered.join(" "));
            None
        })
}

/// Read a program file into a fresh listing.
pub fn load(filename: &str) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
            Ok(line) => {
                if let Err(error) = listing.load_str(&line) {
                    return Err(error.in_line(index + 1));
                }
            }
        }
    }
    Ok(listing)
}

/// Write a listing's canonical source to a file.
pub fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
    };
    for line in listing.source() {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(InternalError; error.to_string().as_str()));
        }
    }
    Ok(())
}
