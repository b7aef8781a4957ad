//! Protocol constants and lookup tables for the Ring Keypad v2.
//!
//! The keypad exposes its LEDs, announcements and sounds through the Z-Wave Indicator command
//! class. Each indicator is addressed by a property number (a "message" in the keypad's parlance)
//! and a property key that selects which aspect of the indicator is being written: the mode, the
//! countdown timeout, or the notification sound. Key presses are reported back through the Entry
//! Control command class.
//!
//! Much of this was reverse engineered by the community, see
//! <https://github.com/ImSorryButWho/HomeAssistantNotes/blob/main/RingKeypadV2.md>.

/// Indicator command class, used for every command sent to the keypad.
pub const COMMAND_CLASS: &str = "135";
/// Entry Control command class, used by the keypad for events.
pub const EVENT_COMMAND_CLASS: &str = "111";
pub const ENDPOINT: u8 = 0;
pub const MODE_PROPERTY_KEY: u8 = 1;
pub const DELAY_PROPERTY_KEY: u8 = 7;
pub const NOTIFICATION_SOUND_PROPERTY_KEY: u8 = 9;
/// Full brightness and volume.
pub const MAX_VALUE: u8 = 100;
/// Seconds of countdown shown when an entry or exit delay is requested without a duration.
pub const DEFAULT_DELAY: u64 = 30;

/// Messages written with the mode property key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::FromRepr,
    strum::IntoStaticStr,
    strum::VariantArray,
    num_derive::ToPrimitive,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u16)]
pub enum Message {
    InvalidCode = 9,
    NeedBypass = 16,
    Disarmed = 2,
    ArmedAway = 11,
    ArmedHome = 10,
    GenericAlarm = 12,
    BurglarAlarm = 13,
    SmokeAlarm = 14,
    Co2Alarm = 15,
    MedicalAlarm = 19,
}

/// Countdowns, written with the timeout property key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::FromRepr,
    strum::IntoStaticStr,
    strum::VariantArray,
    num_derive::ToPrimitive,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u16)]
pub enum Delay {
    EntryDelay = 17,
    ExitDelay = 18,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::FromRepr,
    strum::IntoStaticStr,
    strum::VariantArray,
    num_derive::ToPrimitive,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u16)]
pub enum NotificationSound {
    DoubleBeep = 96,
    GuitarRiff = 97,
    WindChime = 98,
    BingBong = 99,
    Doorbell = 100,
}

/// A table value. The variant decides which property key a command is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Message(Message),
    Delay(Delay),
    Sound(NotificationSound),
}

impl Code {
    /// Find the code with the given property number.
    ///
    /// Property numbers are unique across all three kinds of codes.
    pub fn from_property(property: u16) -> Option<Self> {
        Message::from_repr(property)
            .map(Self::Message)
            .or_else(|| Delay::from_repr(property).map(Self::Delay))
            .or_else(|| NotificationSound::from_repr(property).map(Self::Sound))
    }

    pub const fn property(self) -> u16 {
        match self {
            Code::Message(m) => m as u16,
            Code::Delay(d) => d as u16,
            Code::Sound(s) => s as u16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Code::Message(m) => m.into(),
            Code::Delay(d) => d.into(),
            Code::Sound(s) => s.into(),
        }
    }

    pub const fn kind(self) -> &'static str {
        match self {
            Code::Message(_) => "message",
            Code::Delay(_) => "delay",
            Code::Sound(_) => "sound",
        }
    }
}

/// Every variant of a code enumeration together with its property number.
pub fn code_values<T>() -> impl Iterator<Item = (&'static str, u16)>
where
    T: strum::VariantArray + num_traits::ToPrimitive + Copy + Into<&'static str>,
{
    T::VARIANTS
        .iter()
        .filter_map(|v| Some(((*v).into(), v.to_u16()?)))
}

/// States of an alarm control panel entity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "snake_case")]
pub enum AlarmState {
    Disarmed,
    ArmedHome,
    ArmedAway,
    ArmedNight,
    ArmedVacation,
    ArmedCustomBypass,
    Pending,
    Arming,
    Disarming,
    Triggered,
}

/// Alarm states the keypad can display. The remaining states have no counterpart on the device.
pub static ALARM_STATES: [(AlarmState, Code); 6] = [
    (AlarmState::ArmedAway, Code::Message(Message::ArmedAway)),
    (AlarmState::ArmedHome, Code::Message(Message::ArmedHome)),
    (AlarmState::Arming, Code::Delay(Delay::ExitDelay)),
    (AlarmState::Disarmed, Code::Message(Message::Disarmed)),
    (AlarmState::Pending, Code::Delay(Delay::EntryDelay)),
    (AlarmState::Triggered, Code::Message(Message::BurglarAlarm)),
];

pub static CHIMES: [(&str, Code); 7] = [
    ("invalid_code", Code::Message(Message::InvalidCode)),
    ("need_bypass", Code::Message(Message::NeedBypass)),
    ("double_beep", Code::Sound(NotificationSound::DoubleBeep)),
    ("guitar_riff", Code::Sound(NotificationSound::GuitarRiff)),
    ("wind_chime", Code::Sound(NotificationSound::WindChime)),
    ("bing_bong", Code::Sound(NotificationSound::BingBong)),
    ("doorbell", Code::Sound(NotificationSound::Doorbell)),
];

pub static ALARMS: [(&str, Message); 5] = [
    ("generic", Message::GenericAlarm),
    ("burglar", Message::BurglarAlarm),
    ("smoke", Message::SmokeAlarm),
    ("co2", Message::Co2Alarm),
    ("medical", Message::MedicalAlarm),
];

pub fn state_code(state: AlarmState) -> Option<Code> {
    ALARM_STATES
        .iter()
        .find(|(s, _)| *s == state)
        .map(|&(_, code)| code)
}

pub fn chime_code(chime: &str) -> Option<Code> {
    CHIMES
        .iter()
        .find(|(name, _)| *name == chime)
        .map(|&(_, code)| code)
}

pub fn alarm_code(alarm: &str) -> Option<Message> {
    ALARMS
        .iter()
        .find(|(name, _)| *name == alarm)
        .map(|&(_, message)| message)
}

/// What an event entity should report for a keypad event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, serde::Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Pressed,
    AlarmDisarm,
    AlarmArmAway,
    AlarmArmHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct KeypadEvent {
    pub name: &'static str,
    pub code: u8,
    pub event_type: EventType,
}

const fn event(name: &'static str, code: u8, event_type: EventType) -> KeypadEvent {
    KeypadEvent {
        name,
        code,
        event_type,
    }
}

/// Events the keypad reports through the Entry Control command class.
pub static KEYPAD_EVENTS: [KeypadEvent; 10] = [
    event("code_started", 0, EventType::Pressed),
    event("code_timeout", 1, EventType::Pressed),
    event("code_cancel", 25, EventType::Pressed),
    event("code_entered", 2, EventType::AlarmDisarm),
    event("disarm", 3, EventType::AlarmDisarm),
    event("arm_away", 5, EventType::AlarmArmAway),
    event("arm_stay", 6, EventType::AlarmArmHome),
    event("fire", 16, EventType::Pressed),
    event("police", 17, EventType::Pressed),
    event("medical", 19, EventType::Pressed),
];

pub fn keypad_event(code: u8) -> Option<&'static KeypadEvent> {
    KEYPAD_EVENTS.iter().find(|e| e.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::VariantArray as _;

    #[test]
    fn property_numbers_are_unique() {
        let all = code_values::<Message>()
            .chain(code_values::<Delay>())
            .chain(code_values::<NotificationSound>())
            .collect::<Vec<_>>();
        let unique = all.iter().map(|(_, p)| *p).collect::<HashSet<_>>();
        assert_eq!(all.len(), unique.len());
        assert!(!unique.contains(&0));
    }

    #[test]
    fn from_property_finds_every_code() {
        let codes = ALARM_STATES.iter().map(|(_, c)| *c);
        for code in codes.chain(CHIMES.iter().map(|(_, c)| *c)) {
            assert_eq!(Code::from_property(code.property()), Some(code));
        }
        for &(_, message) in &ALARMS {
            assert_eq!(
                Code::from_property(message as u16),
                Some(Code::Message(message))
            );
        }
        assert_eq!(Code::from_property(0), None);
        assert_eq!(Code::from_property(101), None);
    }

    #[test]
    fn code_names() {
        assert_eq!(Code::Message(Message::InvalidCode).name(), "invalid_code");
        assert_eq!(Code::Delay(Delay::ExitDelay).name(), "exit_delay");
        assert_eq!(Code::Sound(NotificationSound::BingBong).name(), "bing_bong");
        assert_eq!(Code::Sound(NotificationSound::BingBong).kind(), "sound");
    }

    #[test]
    fn alarm_states_parse_from_snake_case() {
        assert_eq!("armed_away".parse::<AlarmState>(), Ok(AlarmState::ArmedAway));
        assert_eq!(
            "armed_custom_bypass".parse::<AlarmState>(),
            Ok(AlarmState::ArmedCustomBypass)
        );
        assert!("ArmedAway".parse::<AlarmState>().is_err());
        assert_eq!(AlarmState::Triggered.to_string(), "triggered");
    }

    #[test]
    fn unsupported_states_are_missing() {
        let missing = AlarmState::VARIANTS
            .iter()
            .copied()
            .filter(|s| state_code(*s).is_none())
            .collect::<Vec<_>>();
        assert_eq!(
            missing,
            [
                AlarmState::ArmedNight,
                AlarmState::ArmedVacation,
                AlarmState::ArmedCustomBypass,
                AlarmState::Disarming,
            ]
        );
    }

    #[test]
    fn table_lookups() {
        assert_eq!(
            state_code(AlarmState::Pending),
            Some(Code::Delay(Delay::EntryDelay))
        );
        assert_eq!(
            chime_code("doorbell"),
            Some(Code::Sound(NotificationSound::Doorbell))
        );
        assert_eq!(chime_code("Doorbell"), None);
        assert_eq!(alarm_code("co2"), Some(Message::Co2Alarm));
        assert_eq!(alarm_code(""), None);
    }

    #[test]
    fn keypad_events() {
        assert_eq!(keypad_event(5).map(|e| e.name), Some("arm_away"));
        assert_eq!(
            keypad_event(2).map(|e| e.event_type),
            Some(EventType::AlarmDisarm)
        );
        assert_eq!(keypad_event(0).map(|e| e.name), Some("code_started"));
        assert!(keypad_event(4).is_none());
        let codes = KEYPAD_EVENTS.iter().map(|e| e.code).collect::<HashSet<_>>();
        assert_eq!(codes.len(), KEYPAD_EVENTS.len());
    }
}
