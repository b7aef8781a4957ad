//! Translation of alarm control panel states, alarms and chimes into the Z-Wave commands
//! understood by the Ring Keypad v2.
//!
//! ```
//! use ring_keypad_tools::{build_state_command, AlarmState};
//!
//! let command = build_state_command(AlarmState::Arming, Some(90)).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&command).unwrap(),
//!     r#"{"command_class":"135","endpoint":0,"property":18,"property_key":"timeout","value":"1m30s"}"#
//! );
//! ```

pub mod command;
pub mod commands;
pub mod keypad;
pub mod output;

pub use command::{
    build_alarm_command, build_chime_command, build_state_command, format_delay, CommandValue,
    Error, PropertyKey, ZwaveCommand,
};
pub use keypad::{AlarmState, Code, Delay, Message, NotificationSound};
