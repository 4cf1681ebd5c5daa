use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::commands;
use crate::session::Session;
use crate::table::TableReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Pwd,
    Cd,
    Mkdir,
    Rmdir,
    Rm,
    Touch,
    Mv,
    Cp,
    Clear,
    Help,
    Exit,
}

impl Verb {
    /// Exact, case-sensitive match.
    pub fn parse(word: &str) -> Option<Verb> {
        let verb = match word {
            "ls" | "fd" => Verb::List,
            "pwd" => Verb::Pwd,
            "cd" => Verb::Cd,
            "mkdir" => Verb::Mkdir,
            "rmdir" => Verb::Rmdir,
            "rm" => Verb::Rm,
            "touch" => Verb::Touch,
            "mv" => Verb::Mv,
            "cp" => Verb::Cp,
            "clear" => Verb::Clear,
            "help" => Verb::Help,
            "exit" => Verb::Exit,
            _ => return None,
        };
        Some(verb)
    }
}

pub const HELP_TEXT: &str = "\
ls, fd [--hidden] [-e] [-p <ext>] [--sort]   list the current directory
pwd                                          print the current directory
cd <dir>                                     change directory
mkdir <dir>                                  create a directory
rmdir <path>                                 remove a directory and its contents
rm <path>                                    remove a file
touch <file>                                 create or truncate a file
mv <from> <to>                               move or rename
cp <from> <to>                               copy a file, overwriting <to>
clear                                        clear the screen
exit                                         leave the shell";

/// What the repl should show after a command. Mutations report `Nothing`.
#[derive(Debug)]
pub enum Outcome {
    Nothing,
    Listing(TableReport),
    WorkingDir(PathBuf),
    Clear,
    Help,
    Exit,
    Unrecognized(String),
}

pub fn dispatch(session: &mut Session, tokens: &[String]) -> Result<Outcome> {
    let Some((word, args)) = tokens.split_first() else {
        return Ok(Outcome::Nothing);
    };
    let Some(verb) = Verb::parse(word) else {
        return Ok(Outcome::Unrecognized(word.clone()));
    };
    debug!(?verb, ?args, "dispatch");

    match verb {
        Verb::List => Ok(Outcome::Listing(commands::cmd_ls(session.cwd(), args)?)),
        Verb::Pwd => Ok(Outcome::WorkingDir(session.cwd().to_path_buf())),
        Verb::Clear => Ok(Outcome::Clear),
        Verb::Help => Ok(Outcome::Help),
        Verb::Exit => Ok(Outcome::Exit),
        Verb::Cd => {
            if let Some(target) = one_arg(verb, args) {
                session.change_dir(target)?;
            }
            Ok(Outcome::Nothing)
        }
        Verb::Mkdir | Verb::Rmdir | Verb::Rm | Verb::Touch => {
            if let Some(target) = one_arg(verb, args) {
                let path = session.resolve(target);
                match verb {
                    Verb::Mkdir => commands::make_dir(&path)?,
                    Verb::Rmdir => commands::remove_tree(&path)?,
                    Verb::Rm => commands::remove_file(&path)?,
                    _ => commands::touch(&path)?,
                }
            }
            Ok(Outcome::Nothing)
        }
        Verb::Mv | Verb::Cp => {
            if let Some((from, to)) = two_args(verb, args) {
                let from = session.resolve(from);
                let to = session.resolve(to);
                if verb == Verb::Mv {
                    commands::move_path(&from, &to)?;
                } else {
                    commands::copy_file(&from, &to)?;
                }
            }
            Ok(Outcome::Nothing)
        }
    }
}

/// Missing arguments make the command a silent no-op. Extras are ignored.
fn one_arg(verb: Verb, args: &[String]) -> Option<&str> {
    let first = args.first().map(String::as_str);
    if first.is_none() {
        debug!(?verb, "missing argument, skipping");
    }
    first
}

/// Two-path verbs run only with exactly two arguments.
fn two_args(verb: Verb, args: &[String]) -> Option<(&str, &str)> {
    match args {
        [from, to] => Some((from.as_str(), to.as_str())),
        _ => {
            debug!(?verb, count = args.len(), "expected two arguments, skipping");
            None
        }
    }
}
