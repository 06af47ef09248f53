use crate::config::toml_config::TomlConfig;
use crate::core::notification::scan_and_notify;
use crate::core::ranking::RankingEngine;
use crate::core::registry::StudentRegistry;
use crate::core::report;
use crate::domain::ports::Roster;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{parse_credentials, parse_points_line, parse_student_id};
use std::io::{BufRead, Write};

const COURSE_IDS: [i64; 4] = [1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Back,
    AddStudents,
    AddPoints,
    Find,
    List,
    Statistics,
    Notify,
}

impl Command {
    pub fn parse(input: &str) -> Option<Command> {
        let command = match input.trim().to_ascii_lowercase().as_str() {
            "exit" => Command::Exit,
            "back" => Command::Back,
            "add students" => Command::AddStudents,
            "add points" => Command::AddPoints,
            "find" => Command::Find,
            "list" => Command::List,
            "statistics" => Command::Statistics,
            "notify" => Command::Notify,
            _ => return None,
        };
        Some(command)
    }
}

/// Line-oriented command loop over the roster.
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: StudentRegistry,
    title: String,
    notification_subject: String,
    closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &TomlConfig) -> Self {
        Self {
            input,
            output,
            registry: StudentRegistry::new(),
            title: config.title().to_string(),
            notification_subject: config.notification_subject().to_string(),
            closed: false,
        }
    }

    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started");
        let title = self.title.clone();
        self.say(&title)?;

        while !self.closed {
            match self.read_line()? {
                Some(line) => self.process_input(&line)?,
                None => self.process_command(Command::Exit)?,
            }
        }

        tracing::info!(students = self.registry.len(), "Session closed");
        Ok(())
    }

    pub fn process_input(&mut self, input: &str) -> Result<()> {
        if input.is_empty() {
            return self.say("No input.");
        }
        match Command::parse(input) {
            Some(command) => self.process_command(command),
            None => {
                tracing::warn!(input, "Unknown command");
                self.say("Error: unknown command!")
            }
        }
    }

    pub fn process_command(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, "Processing command");
        match command {
            Command::Exit => {
                self.closed = true;
                self.say("Bye!")
            }
            Command::Back => self.say("Enter 'exit' to exit the program."),
            Command::AddStudents => self.add_students(),
            Command::AddPoints => self.add_points(),
            Command::Find => self.find_students(),
            Command::List => self.list_students(),
            Command::Statistics => self.statistics(),
            Command::Notify => self.notify(),
        }
    }

    fn add_students(&mut self) -> Result<()> {
        self.say("Enter student credentials or 'back' to return:")?;
        let mut added = 0;

        while let Some(line) = self.read_sub_command()? {
            let credentials = match parse_credentials(&line) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected credentials");
                    self.say(&e.user_friendly_message())?;
                    continue;
                }
            };

            match self.registry.register(
                &credentials.first_name,
                &credentials.last_name,
                &credentials.email,
            ) {
                Ok(_) => {
                    added += 1;
                    self.say("The student has been added.")?;
                }
                Err(e @ TrackerError::EmailTaken { .. }) => {
                    self.say(&e.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }

        self.say(&format!("Total {} students have been added.", added))
    }

    fn list_students(&mut self) -> Result<()> {
        let listing = report::render_student_list(self.registry.ids());
        self.say(&listing)
    }

    fn add_points(&mut self) -> Result<()> {
        self.say("Enter an id and points or 'back' to return")?;

        while let Some(line) = self.read_sub_command()? {
            let Some(points_line) = parse_points_line(&line) else {
                self.say("Incorrect points format")?;
                continue;
            };

            let Ok(id) = points_line.student_id.parse::<u32>() else {
                self.say(&format!(
                    "No student is found for id={}",
                    points_line.student_id
                ))?;
                continue;
            };

            match self.registry.find_mut(id) {
                Some(profile) => {
                    profile.update_points(&COURSE_IDS, &points_line.points);
                    self.say("Points updated.")?;
                }
                None => {
                    let message = TrackerError::StudentNotFound { id }.user_friendly_message();
                    self.say(&message)?;
                }
            }
        }
        Ok(())
    }

    fn find_students(&mut self) -> Result<()> {
        self.say("Enter an id or 'back' to return")?;

        while let Some(line) = self.read_sub_command()? {
            let Some(id) = parse_student_id(&line) else {
                self.say("Incorrect id format")?;
                continue;
            };

            let message = match self.registry.find(id) {
                Some(profile) => report::render_student_points(profile),
                None => TrackerError::StudentNotFound { id }.user_friendly_message(),
            };
            self.say(&message)?;
        }
        Ok(())
    }

    fn statistics(&mut self) -> Result<()> {
        self.say("Type the name of a course to see details or 'back' to quit:")?;
        let stats = RankingEngine::from_roster(&self.registry).statistics();
        self.say(&report::render_statistics(&stats))?;

        while let Some(line) = self.read_sub_command()? {
            let engine = RankingEngine::from_roster(&self.registry);
            let rendered = match engine.course_leaderboard(&line) {
                Ok(board) => report::render_leaderboard(&board),
                Err(e @ TrackerError::UnknownCourse { .. }) => e.user_friendly_message(),
                Err(e) => return Err(e),
            };
            self.say(&rendered)?;
        }
        Ok(())
    }

    fn notify(&mut self) -> Result<()> {
        let notifications = scan_and_notify(self.registry.profiles_mut());
        let rendered = report::render_notifications(&notifications, &self.notification_subject);
        self.say(&rendered)
    }

    /// Next trimmed line of a sub-menu, or `None` on `back` or end of input.
    fn read_sub_command(&mut self) -> Result<Option<String>> {
        match self.read_line()? {
            Some(line) if Command::parse(&line) == Some(Command::Back) => Ok(None),
            other => Ok(other),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (String, StudentRegistry) {
        let config = TomlConfig::default();
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), &config);
        session.run().unwrap();
        assert!(session.is_closed());
        let registry = session.registry().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (output, registry)
    }

    #[test]
    fn test_command_parsing_is_case_insensitive() {
        assert_eq!(Command::parse("EXIT"), Some(Command::Exit));
        assert_eq!(Command::parse(" Add Students "), Some(Command::AddStudents));
        assert_eq!(Command::parse("add  points"), None);
        assert_eq!(Command::parse("wrong command"), None);
    }

    #[test]
    fn test_top_level_messages() {
        let (output, _) = run_session("\nwrong command\nback\nexit\n");
        assert_eq!(
            output,
            "Learning Progress Tracker\n\
             No input.\n\
             Error: unknown command!\n\
             Enter 'exit' to exit the program.\n\
             Bye!\n"
        );
    }

    #[test]
    fn test_end_of_input_closes_session() {
        let (output, _) = run_session("list\n");
        assert!(output.ends_with("No students found\nBye!\n"));
    }

    #[test]
    fn test_add_points_rejections() {
        let (output, registry) = run_session(
            "add students\nAnn Lee ann@mail.com\nback\n\
             add points\n1 1 2 3\nx 1 1 1 1\n9 1 1 1 1\n1 1 2 3 4\nback\nexit\n",
        );
        assert!(output.contains("Incorrect points format\n"));
        assert!(output.contains("No student is found for id=x\n"));
        assert!(output.contains("No student is found for id=9\n"));
        assert!(output.contains("Points updated.\n"));
        let points: Vec<u64> = registry
            .find(1)
            .unwrap()
            .records()
            .iter()
            .map(|r| r.points())
            .collect();
        assert_eq!(points, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_add_points_echoes_parsed_id() {
        let (output, registry) = run_session(
            "add students\nAnn Lee ann@mail.com\nback\n\
             add points\n007 1 1 1 1\n01 5 0 0 0\nback\nexit\n",
        );
        assert!(output.contains("No student is found for id=7\n"));
        assert!(!output.contains("id=007"));
        assert_eq!(registry.find(1).unwrap().points(crate::domain::model::Course::Java), 5);
    }
}
