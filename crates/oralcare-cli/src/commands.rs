use std::str::FromStr;

use thiserror::Error;

use oralcare_core::error::CoreError;
use oralcare_core::teeth::{self, ProbingSite};
use oralcare_core::wizard::{Page, Wizard};
use oralcare_instruments::parse::parse_score_or_default;

pub const HELP: &str = "\
Navigation:
  next | prev | goto <0-7> | restart | quit
Patient:
  name <text> | chart <text> | date <text>
Scores:
  plaque <tooth> <level>              teeth 12 16 24 26 32 44
  perio <tooth> <mesial|mid|distal> [depth]
                                      teeth 16 17 26 27 36 37 46 47
  interdental <site> <score>          sites 16-17 26-27 36-37 46-47
  sensitivity <score> | arch <score> | motor <score>
Other:
  show (assessment as JSON) | export (save report, summary page) | help";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    #[error("unknown probing site: {0} (use mesial, mid or distal)")]
    InvalidSite(String),

    #[error("export is available on the summary page (`goto 7`)")]
    NotFinalized,

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(Page),
    Restart,
    Show,
    Export,
    Help,
    Quit,
    Name(String),
    ChartNumber(String),
    Date(String),
    Plaque { tooth: u8, level: i32 },
    Perio { tooth: u8, site: ProbingSite, depth: String },
    Interdental { site: String, score: i32 },
    Sensitivity(i32),
    Arch(i32),
    Motor(i32),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));
        let mut args = rest.split_whitespace();

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Unknown(String::new())),
            "next" | "n" => Command::Next,
            "prev" | "p" | "back" => Command::Prev,
            "goto" => {
                let arg = args.next().ok_or(CommandError::MissingArgument {
                    command: "goto",
                    argument: "page number",
                })?;
                let index: usize = arg
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(arg.to_string()))?;
                Command::Goto(Page::from_index(index)?)
            }
            "restart" => Command::Restart,
            "show" => Command::Show,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "name" => Command::Name(rest.to_string()),
            "chart" => Command::ChartNumber(rest.to_string()),
            "date" => Command::Date(rest.to_string()),
            "plaque" => Command::Plaque {
                tooth: tooth(args.next(), "plaque")?,
                level: number(args.next(), "plaque", "level")?,
            },
            "perio" => {
                let tooth = tooth(args.next(), "perio")?;
                let site = args.next().ok_or(CommandError::MissingArgument {
                    command: "perio",
                    argument: "site",
                })?;
                let site =
                    ProbingSite::parse(site).ok_or_else(|| CommandError::InvalidSite(site.to_string()))?;
                Command::Perio {
                    tooth,
                    site,
                    depth: args.next().unwrap_or_default().to_string(),
                }
            }
            "interdental" => {
                let site = args.next().ok_or(CommandError::MissingArgument {
                    command: "interdental",
                    argument: "site",
                })?;
                let raw = args.next().ok_or(CommandError::MissingArgument {
                    command: "interdental",
                    argument: "score",
                })?;
                Command::Interdental {
                    site: site.to_string(),
                    score: parse_score_or_default(raw),
                }
            }
            "sensitivity" => Command::Sensitivity(number(args.next(), "sensitivity", "score")?),
            "arch" => Command::Arch(number(args.next(), "arch", "score")?),
            "motor" => Command::Motor(number(args.next(), "motor", "score")?),
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn number(arg: Option<&str>, command: &'static str, argument: &'static str) -> Result<i32, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument { command, argument })?;
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

fn tooth(arg: Option<&str>, command: &'static str) -> Result<u8, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        argument: "tooth number",
    })?;
    arg.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

/// Result of applying one command to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The page changed (or was re-entered); show it again.
    Navigated,
    /// A field was updated.
    Updated(String),
    Show,
    Export,
    Help,
    Quit,
}

/// Applies a command. Field updates are accepted on any page; export only
/// from the summary page.
pub fn apply(wizard: &mut Wizard, command: Command) -> Result<Applied, CommandError> {
    let applied = match command {
        Command::Next => {
            wizard.advance();
            Applied::Navigated
        }
        Command::Prev => {
            wizard.retreat();
            Applied::Navigated
        }
        Command::Goto(page) => {
            wizard.jump_to(page);
            Applied::Navigated
        }
        Command::Restart => {
            wizard.restart();
            Applied::Navigated
        }
        Command::Show => Applied::Show,
        Command::Export if !wizard.is_finalized() => return Err(CommandError::NotFinalized),
        Command::Export => Applied::Export,
        Command::Help => Applied::Help,
        Command::Quit => Applied::Quit,
        Command::Name(name) => {
            let message = format!("name = {name}");
            wizard.assessment_mut().set_name(name);
            Applied::Updated(message)
        }
        Command::ChartNumber(chart) => {
            let message = format!("chart number = {chart}");
            wizard.assessment_mut().set_chart_number(chart);
            Applied::Updated(message)
        }
        Command::Date(date) => {
            let message = format!("date = {date}");
            wizard.assessment_mut().set_date(date);
            Applied::Updated(message)
        }
        Command::Plaque { tooth, level } => {
            let index = teeth::plaque_index(tooth)?;
            wizard.assessment_mut().set_plaque(index, level)?;
            Applied::Updated(format!("plaque #{tooth} = {level}"))
        }
        Command::Perio { tooth, site, depth } => {
            let index = teeth::perio_index(tooth, site)?;
            let message = format!("perio #{tooth} {} = {depth:?}", site.name());
            wizard.assessment_mut().set_perio(index, depth)?;
            Applied::Updated(message)
        }
        Command::Interdental { site, score } => {
            let index = teeth::interdental_index(&site)?;
            wizard.assessment_mut().set_interdental(index, score)?;
            Applied::Updated(format!("interdental #{} = {score}", teeth::INTERDENTAL_SITES[index]))
        }
        Command::Sensitivity(score) => {
            wizard.assessment_mut().set_sensitivity(score);
            Applied::Updated(format!("sensitivity = {score}"))
        }
        Command::Arch(score) => {
            wizard.assessment_mut().set_arch(score);
            Applied::Updated(format!("arch = {score}"))
        }
        Command::Motor(score) => {
            wizard.assessment_mut().set_motor(score);
            Applied::Updated(format!("motor = {score}"))
        }
    };
    Ok(applied)
}
