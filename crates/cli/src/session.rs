//! Interactive filtering session.
//!
//! The session owns the mutable criteria. Every change clamps the new value
//! to the dataset bounds, recomputes the whole table and redraws it.

use crate::render;
use dataset::{Dataset, DatasetBounds};
use pipeline::{ExperienceChoice, FilterCriteria, FilterEngine, GenderChoice};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  gender <any|male|female>     filter by gender
  age <n>                      minimum candidate age
  salary <n>                   expected salary (roles paying at least this)
  experience <any|yes|no>      filter by prior experience
  reset                        restore the initial filters
  show                         redraw the table
  ranges                       show the salary and age bounds
  help                         show this message
  quit                         leave the session
";

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Gender(GenderChoice),
    Age(u32),
    Salary(f64),
    Experience(ExperienceChoice),
    Reset,
    Show,
    Ranges,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| "empty command".to_string())?;
        let argument = parts.collect::<Vec<_>>().join(" ");
        let require = |what: &'static str| required(&argument, name, what);

        match name.to_lowercase().as_str() {
            "gender" => Ok(Command::Gender(require("a gender")?.parse()?)),
            "age" => require("an age")?
                .parse()
                .map(Command::Age)
                .map_err(|e| format!("invalid age: {}", e)),
            "salary" => {
                let salary: f64 = require("a salary")?
                    .parse()
                    .map_err(|e| format!("invalid salary: {}", e))?;
                if salary.is_finite() {
                    Ok(Command::Salary(salary))
                } else {
                    Err("invalid salary: not a finite number".to_string())
                }
            }
            "experience" | "exp" => Ok(Command::Experience(require("yes, no or any")?.parse()?)),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "ranges" => Ok(Command::Ranges),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}

fn required<'a>(argument: &'a str, command: &str, what: &str) -> Result<&'a str, String> {
    if argument.is_empty() {
        Err(format!("'{}' needs {}", command, what))
    } else {
        Ok(argument)
    }
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Session<'d> {
    dataset: &'d Dataset,
    bounds: DatasetBounds,
    engine: FilterEngine,
    criteria: FilterCriteria,
    descriptions: bool,
}

impl<'d> Session<'d> {
    /// Start a session with the initial criteria for `dataset`
    ///
    /// Fails with `EmptyDataset` because the filter bounds are undefined.
    pub fn new(dataset: &'d Dataset, descriptions: bool) -> dataset::Result<Self> {
        let bounds = dataset.bounds()?;
        Ok(Self {
            dataset,
            bounds,
            engine: FilterEngine::new(),
            criteria: FilterCriteria::from_bounds(&bounds),
            descriptions,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        let requested = match command {
            Command::Gender(gender) => self.criteria.with_gender(gender),
            Command::Age(age) => self.criteria.with_min_age(age),
            Command::Salary(salary) => self.criteria.with_max_salary(salary),
            Command::Experience(experience) => self.criteria.with_experience(experience),
            Command::Reset => FilterCriteria::from_bounds(&self.bounds),
            Command::Show => return Outcome::Continue(self.view()),
            Command::Ranges => return Outcome::Continue(render::render_bounds(&self.bounds)),
            Command::Help => return Outcome::Continue(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        };

        let clamped = requested.clamped(&self.bounds);
        if clamped != requested {
            warn!(
                "Criteria outside dataset bounds, clamped: {:?} -> {:?}",
                requested, clamped
            );
        }
        self.criteria = clamped;
        debug!("Criteria updated: {:?}", self.criteria);
        Outcome::Continue(self.view())
    }

    /// Current criteria followed by the freshly computed table
    pub fn view(&self) -> String {
        let mut out = render::render_criteria(&self.criteria);
        match self.engine.compute(self.dataset, &self.criteria) {
            Ok(rows) => out.push_str(&render::render_table(&rows, self.descriptions)),
            Err(err) => out.push_str(&render::render_error(&err.to_string())),
        }
        out
    }

    /// Read commands line by line until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{}", self.view())?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => match self.handle(command) {
                    Outcome::Continue(text) => write!(output, "{}", text)?,
                    Outcome::Quit => break,
                },
                Err(message) => write!(output, "{}", render::render_error(&message))?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{CandidateRecord, Experience};
    use std::io::Cursor;

    fn candidate(role: &str, salary: f64, age: u32, gender: &str, experience: Experience) -> CandidateRecord {
        CandidateRecord {
            department: "IT".to_string(),
            department_description: "Information technology".to_string(),
            role: role.to_string(),
            salary,
            age,
            gender: gender.to_string(),
            prior_experience: experience,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            candidate("Dev", 10000.0, 25, "M", Experience::Yes),
            candidate("Dev", 15000.0, 30, "F", Experience::No),
            candidate("QA", 9000.0, 45, "F", Experience::Yes),
        ])
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("gender female".parse::<Command>(), Ok(Command::Gender(GenderChoice::Female)));
        assert_eq!("age 30".parse::<Command>(), Ok(Command::Age(30)));
        assert_eq!("salary 12000.5".parse::<Command>(), Ok(Command::Salary(12000.5)));
        assert_eq!("exp לא".parse::<Command>(), Ok(Command::Experience(ExperienceChoice::No)));
        assert_eq!("QUIT".parse::<Command>(), Ok(Command::Quit));
        assert!("age".parse::<Command>().is_err());
        assert!("age old".parse::<Command>().is_err());
        assert!("salary inf".parse::<Command>().is_err());
        assert!("fly".parse::<Command>().is_err());
    }

    #[test]
    fn test_session_starts_at_bounds() {
        let dataset = dataset();
        let session = Session::new(&dataset, false).unwrap();
        assert_eq!(session.criteria().min_age, 25);
        assert_eq!(session.criteria().max_salary, 9000.0);
    }

    #[test]
    fn test_empty_dataset_cannot_start() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(Session::new(&dataset, false).is_err());
    }

    #[test]
    fn test_changes_are_clamped() {
        let dataset = dataset();
        let mut session = Session::new(&dataset, false).unwrap();

        session.handle(Command::Age(90));
        assert_eq!(session.criteria().min_age, 45);

        session.handle(Command::Salary(100.0));
        assert_eq!(session.criteria().max_salary, 9000.0);

        session.handle(Command::Reset);
        assert_eq!(session.criteria().min_age, 25);
    }

    #[test]
    fn test_each_change_redraws() {
        colored::control::set_override(false);
        let dataset = dataset();
        let mut session = Session::new(&dataset, false).unwrap();

        let Outcome::Continue(initial) = session.handle(Command::Show) else {
            panic!("show should not quit");
        };
        assert!(initial.contains("Dev"));
        assert!(initial.contains("QA"));

        let Outcome::Continue(narrowed) = session.handle(Command::Salary(12000.0)) else {
            panic!("salary should not quit");
        };
        assert!(narrowed.contains("salary selected: 12000"));
        assert!(narrowed.contains("Dev"));
        assert!(!narrowed.contains("QA"));

        assert_eq!(session.handle(Command::Quit), Outcome::Quit);
    }

    #[test]
    fn test_run_reads_until_quit() {
        colored::control::set_override(false);
        let dataset = dataset();
        let mut session = Session::new(&dataset, false).unwrap();
        let input = Cursor::new("gender male\n\nbogus\nquit\ngender female\n");
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("gender: male"));
        assert!(text.contains("unknown command 'bogus'"));
        assert!(!text.contains("gender: female"));
        assert_eq!(session.criteria().gender, GenderChoice::Male);
    }
}
