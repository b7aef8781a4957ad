pub mod tables {
    use crate::command::{
        self, build_alarm_command, build_chime_command, build_state_command, ZwaveCommand,
    };
    use crate::keypad::{ALARMS, ALARM_STATES, CHIMES};
    use crate::output;

    /// List the alarm state, chime and alarm tables along with the command each entry produces.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        output: output::Args,
        /// Only show entries whose table, name, code or property contains this text.
        filter: Option<String>,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not build the command for table entry {1:?}")]
        Build(#[source] command::Error, &'static str),
        #[error(transparent)]
        Output(#[from] output::Error),
    }

    #[derive(serde::Serialize)]
    pub struct TableEntry {
        pub table: &'static str,
        pub name: &'static str,
        pub code: &'static str,
        pub command: ZwaveCommand,
    }

    impl TableEntry {
        pub fn all_entries() -> Result<Vec<Self>, Error> {
            let states = ALARM_STATES.iter().map(|&(state, code)| {
                let name = <&'static str>::from(state);
                build_state_command(state, None)
                    .map(|command| Self::new("state", name, code.name(), command))
                    .map_err(|e| Error::Build(e, name))
            });
            let chimes = CHIMES.iter().map(|&(name, code)| {
                build_chime_command(name)
                    .map(|command| Self::new("chime", name, code.name(), command))
                    .map_err(|e| Error::Build(e, name))
            });
            let alarms = ALARMS.iter().map(|&(name, message)| {
                build_alarm_command(name)
                    .map(|command| Self::new("alarm", name, message.into(), command))
                    .map_err(|e| Error::Build(e, name))
            });
            states.chain(chimes).chain(alarms).collect()
        }

        fn new(
            table: &'static str,
            name: &'static str,
            code: &'static str,
            command: ZwaveCommand,
        ) -> Self {
            Self {
                table,
                name,
                code,
                command,
            }
        }

        pub fn is_match(&self, pattern: &str) -> bool {
            let pattern = pattern.to_lowercase();
            self.table.contains(&pattern)
                || self.name.contains(&pattern)
                || self.code.contains(&pattern)
                || self.command.property.to_string().contains(&pattern)
        }
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let entries = TableEntry::all_entries()?;
        let mut output = args.output.to_output()?;
        output.table_headers(vec![
            "Table",
            "Name",
            "Code",
            "Property",
            "Property key",
            "Value",
        ])?;
        for entry in entries {
            if let Some(pattern) = &args.filter {
                if !entry.is_match(pattern) {
                    continue;
                }
            }
            output.result(
                || {
                    vec![
                        entry.table.to_string(),
                        entry.name.to_string(),
                        entry.code.to_string(),
                        entry.command.property.to_string(),
                        entry.command.property_key.to_string(),
                        entry.command.value.to_string(),
                    ]
                },
                || &entry,
            )?;
        }
        Ok(output.commit()?)
    }
}

pub mod codes {
    use crate::keypad::{code_values, Delay, Message, NotificationSound};
    use crate::output;

    /// List every message, delay and sound code known for the keypad.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        output: output::Args,
        /// Only show the code with this property number.
        #[arg(long, short = 'p')]
        property: Option<u16>,
    }

    #[derive(serde::Serialize)]
    struct CodeRecord {
        kind: &'static str,
        name: &'static str,
        property: u16,
    }

    pub fn run(args: Args) -> Result<(), output::Error> {
        let messages = code_values::<Message>().map(|(n, p)| ("message", n, p));
        let delays = code_values::<Delay>().map(|(n, p)| ("delay", n, p));
        let sounds = code_values::<NotificationSound>().map(|(n, p)| ("sound", n, p));
        let mut output = args.output.to_output()?;
        output.table_headers(vec!["Kind", "Name", "Property"])?;
        for (kind, name, property) in messages.chain(delays).chain(sounds) {
            if args.property.is_some_and(|p| p != property) {
                continue;
            }
            output.result(
                || vec![kind.to_string(), name.to_string(), property.to_string()],
                || CodeRecord {
                    kind,
                    name,
                    property,
                },
            )?;
        }
        output.commit()
    }
}

pub mod events {
    use crate::keypad::{keypad_event, KEYPAD_EVENTS, EVENT_COMMAND_CLASS};
    use crate::output;

    /// List the events reported by the keypad.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        output: output::Args,
        /// Only show the event with this event code.
        #[arg(long, short = 'c')]
        code: Option<u8>,
        /// Only show events whose name or event type contains this text.
        filter: Option<String>,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("the keypad does not report an event with code {0}")]
        UnknownEvent(u8),
        #[error(transparent)]
        Output(#[from] output::Error),
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let events = match args.code {
            Some(code) => {
                let event = keypad_event(code).ok_or(Error::UnknownEvent(code))?;
                std::slice::from_ref(event)
            }
            None => &KEYPAD_EVENTS[..],
        };
        let mut output = args.output.to_output()?;
        output.table_headers(vec!["Command class", "Code", "Name", "Event type"])?;
        for event in events {
            if let Some(pattern) = &args.filter {
                let pattern = pattern.to_lowercase();
                let event_type = <&'static str>::from(event.event_type);
                if !event.name.contains(&pattern) && !event_type.contains(&pattern) {
                    continue;
                }
            }
            output.result(
                || {
                    vec![
                        EVENT_COMMAND_CLASS.to_string(),
                        event.code.to_string(),
                        event.name.to_string(),
                        event.event_type.to_string(),
                    ]
                },
                || event,
            )?;
        }
        Ok(output.commit()?)
    }
}

/// Subcommands printing a single command for the keypad.
pub mod build {
    use std::time::Duration;

    use crate::command::{self, ZwaveCommand};
    use crate::keypad::AlarmState;
    use crate::output;

    /// Build the command displaying an alarm state on the keypad.
    #[derive(clap::Parser)]
    pub struct StateArgs {
        #[clap(flatten)]
        output: output::Args,
        /// The alarm control panel state, e.g. `armed_away` or `pending`.
        state: AlarmState,
        /// Countdown shown for `arming` and `pending`, e.g. `45s` or `1m30s`.
        #[arg(long, short = 'd', value_parser = humantime::parse_duration)]
        delay: Option<Duration>,
    }

    /// Build the command sounding an alarm.
    #[derive(clap::Parser)]
    pub struct AlarmArgs {
        #[clap(flatten)]
        output: output::Args,
        /// One of `generic`, `burglar`, `smoke`, `co2` or `medical`.
        alarm: String,
    }

    /// Build the command playing a chime.
    #[derive(clap::Parser)]
    pub struct ChimeArgs {
        #[clap(flatten)]
        output: output::Args,
        /// A chime name such as `doorbell` or `invalid_code`.
        chime: String,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not build the keypad command")]
        Build(#[from] command::Error),
        #[error(transparent)]
        Output(#[from] output::Error),
    }

    pub fn run_state(args: StateArgs) -> Result<(), Error> {
        let delay = args.delay.map(|d| d.as_secs());
        let command = command::build_state_command(args.state, delay).inspect_err(|e| {
            tracing::warn!(state = %args.state, error = %e, "state has no keypad command")
        })?;
        print_command(args.output, &command)
    }

    pub fn run_alarm(args: AlarmArgs) -> Result<(), Error> {
        let command = command::build_alarm_command(&args.alarm).inspect_err(|e| {
            tracing::warn!(alarm = %args.alarm, error = %e, "alarm has no keypad command")
        })?;
        print_command(args.output, &command)
    }

    pub fn run_chime(args: ChimeArgs) -> Result<(), Error> {
        let command = command::build_chime_command(&args.chime).inspect_err(|e| {
            tracing::warn!(chime = %args.chime, error = %e, "chime has no keypad command")
        })?;
        print_command(args.output, &command)
    }

    fn print_command(args: output::Args, command: &ZwaveCommand) -> Result<(), Error> {
        let mut output = args.to_output()?;
        output.table_headers(vec![
            "Command class",
            "Endpoint",
            "Property",
            "Property key",
            "Value",
        ])?;
        output.result(
            || {
                vec![
                    command.command_class.to_string(),
                    command.endpoint.to_string(),
                    command.property.to_string(),
                    command.property_key.to_string(),
                    command.value.to_string(),
                ]
            },
            || command,
        )?;
        Ok(output.commit()?)
    }
}
