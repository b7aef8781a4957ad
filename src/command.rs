//! Assembly of the Indicator command class writes sent to the keypad.
//!
//! Each builder looks an identifier up in one of the tables in [`crate::keypad`] and shapes the
//! result into a [`ZwaveCommand`], which a Z-Wave transport can send verbatim as a "set value"
//! request.

use crate::keypad::{
    self, AlarmState, Code, COMMAND_CLASS, DEFAULT_DELAY, DELAY_PROPERTY_KEY, ENDPOINT, MAX_VALUE,
    MODE_PROPERTY_KEY, NOTIFICATION_SOUND_PROPERTY_KEY,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid alarm state command: {0}")]
    UnknownState(AlarmState),
    #[error("invalid alarm command: {0:?}")]
    UnknownAlarm(String),
    #[error("invalid chime command: {0:?}")]
    UnknownChime(String),
}

/// Selects which aspect of an indicator is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Mode,
    /// The countdown of an entry or exit delay. Sent by name rather than by number.
    Timeout,
    NotificationSound,
}

impl PropertyKey {
    /// The numeric property key as defined by the Indicator command class.
    pub const fn number(self) -> u8 {
        match self {
            PropertyKey::Mode => MODE_PROPERTY_KEY,
            PropertyKey::Timeout => DELAY_PROPERTY_KEY,
            PropertyKey::NotificationSound => NOTIFICATION_SOUND_PROPERTY_KEY,
        }
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKey::Timeout => f.write_str("timeout"),
            key => f.write_fmt(format_args!("{}", key.number())),
        }
    }
}

impl serde::Serialize for PropertyKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyKey::Timeout => serializer.serialize_str("timeout"),
            key => serializer.serialize_u8(key.number()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum CommandValue {
    Level(u8),
    /// A countdown as produced by [`format_delay`].
    Duration(String),
}

impl std::fmt::Display for CommandValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValue::Level(n) => f.write_fmt(format_args!("{}", n)),
            CommandValue::Duration(d) => f.write_str(d),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ZwaveCommand {
    pub command_class: &'static str,
    pub endpoint: u8,
    pub property: u16,
    pub property_key: PropertyKey,
    pub value: CommandValue,
}

impl ZwaveCommand {
    fn new(code: Code, property_key: PropertyKey, value: CommandValue) -> Self {
        let command = Self {
            command_class: COMMAND_CLASS,
            endpoint: ENDPOINT,
            property: code.property(),
            property_key,
            value,
        };
        tracing::debug!(
            code = code.name(),
            property = command.property,
            property_key = %command.property_key,
            value = %command.value,
            "built keypad command"
        );
        command
    }
}

/// Render a number of seconds the way the keypad expects countdowns, e.g. `1m30s`.
pub fn format_delay(seconds: u64) -> String {
    format!("{}m{}s", seconds / 60, seconds % 60)
}

/// Command updating the keypad to display an alarm state.
///
/// Entry and exit delays show a countdown of `delay` seconds, or [`DEFAULT_DELAY`] if not given.
pub fn build_state_command(state: AlarmState, delay: Option<u64>) -> Result<ZwaveCommand, Error> {
    let code = keypad::state_code(state).ok_or(Error::UnknownState(state))?;
    let (property_key, value) = match code {
        Code::Delay(_) => (
            PropertyKey::Timeout,
            CommandValue::Duration(format_delay(delay.unwrap_or(DEFAULT_DELAY))),
        ),
        _ if state == AlarmState::Triggered => {
            (PropertyKey::NotificationSound, CommandValue::Level(MAX_VALUE))
        }
        _ => (PropertyKey::Mode, CommandValue::Level(MAX_VALUE)),
    };
    Ok(ZwaveCommand::new(code, property_key, value))
}

/// Command sounding one of the keypad's alarms (`generic`, `burglar`, `smoke`, `co2`, `medical`).
pub fn build_alarm_command(alarm: &str) -> Result<ZwaveCommand, Error> {
    let message = keypad::alarm_code(alarm).ok_or_else(|| Error::UnknownAlarm(alarm.into()))?;
    Ok(ZwaveCommand::new(
        Code::Message(message),
        PropertyKey::NotificationSound,
        CommandValue::Level(MAX_VALUE),
    ))
}

pub fn build_chime_command(chime: &str) -> Result<ZwaveCommand, Error> {
    let code = keypad::chime_code(chime).ok_or_else(|| Error::UnknownChime(chime.into()))?;
    let property_key = match code {
        Code::Sound(_) => PropertyKey::NotificationSound,
        Code::Message(_) | Code::Delay(_) => PropertyKey::Mode,
    };
    Ok(ZwaveCommand::new(code, property_key, CommandValue::Level(MAX_VALUE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::{Delay, Message, NotificationSound, ALARM_STATES};

    #[test]
    fn delay_formatting() {
        assert_eq!(format_delay(0), "0m0s");
        assert_eq!(format_delay(5), "0m5s");
        assert_eq!(format_delay(65), "1m5s");
        assert_eq!(format_delay(90), "1m30s");
        assert_eq!(format_delay(3600), "60m0s");
    }

    #[test]
    fn mode_states() {
        for (state, message) in [
            (AlarmState::ArmedAway, Message::ArmedAway),
            (AlarmState::ArmedHome, Message::ArmedHome),
            (AlarmState::Disarmed, Message::Disarmed),
        ] {
            let command = build_state_command(state, None).unwrap();
            assert_eq!(command.property, message as u16);
            assert_eq!(command.property_key, PropertyKey::Mode);
            assert_eq!(command.value, CommandValue::Level(MAX_VALUE));
        }
    }

    #[test]
    fn triggered_sounds_the_burglar_alarm() {
        let command = build_state_command(AlarmState::Triggered, Some(10)).unwrap();
        assert_eq!(command.property, Message::BurglarAlarm as u16);
        assert_eq!(command.property_key, PropertyKey::NotificationSound);
        assert_eq!(command.value, CommandValue::Level(100));
    }

    #[test]
    fn delay_states() {
        let command = build_state_command(AlarmState::Pending, None).unwrap();
        assert_eq!(command.property, Delay::EntryDelay as u16);
        assert_eq!(command.property_key, PropertyKey::Timeout);
        assert_eq!(command.value, CommandValue::Duration(format_delay(DEFAULT_DELAY)));

        let command = build_state_command(AlarmState::Arming, Some(90)).unwrap();
        assert_eq!(command.property, Delay::ExitDelay as u16);
        assert_eq!(command.value, CommandValue::Duration("1m30s".into()));
    }

    #[test]
    fn zero_delay_is_not_the_default() {
        let command = build_state_command(AlarmState::Arming, Some(0)).unwrap();
        assert_eq!(command.value, CommandValue::Duration("0m0s".into()));
    }

    #[test]
    fn every_table_state_builds() {
        for &(state, code) in &ALARM_STATES {
            let command = build_state_command(state, None).unwrap();
            assert_eq!(command.property, code.property());
            assert_eq!(command.command_class, COMMAND_CLASS);
            assert_eq!(command.endpoint, ENDPOINT);
        }
    }

    #[test]
    fn unknown_state() {
        assert_eq!(
            build_state_command(AlarmState::ArmedNight, None),
            Err(Error::UnknownState(AlarmState::ArmedNight))
        );
        assert_eq!(
            build_state_command(AlarmState::Disarming, Some(5))
                .unwrap_err()
                .to_string(),
            "invalid alarm state command: disarming"
        );
    }

    #[test]
    fn alarms() {
        let command = build_alarm_command("medical").unwrap();
        assert_eq!(command.property, Message::MedicalAlarm as u16);
        assert_eq!(command.property_key, PropertyKey::NotificationSound);
        assert_eq!(command.value, CommandValue::Level(MAX_VALUE));
        assert_eq!(
            build_alarm_command("unknown"),
            Err(Error::UnknownAlarm("unknown".into()))
        );
    }

    #[test]
    fn chimes() {
        let command = build_chime_command("doorbell").unwrap();
        assert_eq!(command.property, NotificationSound::Doorbell as u16);
        assert_eq!(command.property_key, PropertyKey::NotificationSound);

        let command = build_chime_command("invalid_code").unwrap();
        assert_eq!(command.property, Message::InvalidCode as u16);
        assert_eq!(command.property_key, PropertyKey::Mode);
        assert_eq!(command.value, CommandValue::Level(MAX_VALUE));

        assert_eq!(
            build_chime_command("siren"),
            Err(Error::UnknownChime("siren".into()))
        );
    }

    #[test]
    fn property_key_rendering() {
        assert_eq!(PropertyKey::Mode.to_string(), "1");
        assert_eq!(PropertyKey::Timeout.to_string(), "timeout");
        assert_eq!(PropertyKey::NotificationSound.to_string(), "9");
        assert_eq!(PropertyKey::Timeout.number(), 7);
    }
}
